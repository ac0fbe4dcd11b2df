use super::ExportArgs;
use crate::analytics::FetchOptions;
use chrono::DateTime;

/// Environment variable holding the API token
pub const API_TOKEN_VAR: &str = "CF_API_TOKEN";

/// Environment variable holding the zone identifier
pub const ZONE_ID_VAR: &str = "CF_ZONE_ID";

/// Problems with the supplied configuration, detected before any network activity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("end of the time window ({end}) is before its start ({start})")]
    InvertedWindow { start: String, end: String },

    #[error("invalid request options: {0}")]
    InvalidOptions(String),
}

/// Fully resolved configuration for one export run
#[derive(Debug, Clone)]
pub struct Settings {
    api_token: String,
    endpoint: String,
    options: FetchOptions,
}

impl Settings {
    /// Resolve settings from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the token or zone is absent or empty,
    /// [`ConfigError::InvertedWindow`] if both timestamps are RFC 3339 and the end precedes the start,
    /// and [`ConfigError::InvalidOptions`] if the request options are otherwise rejected
    pub fn resolve(args: &ExportArgs) -> Result<Self, ConfigError> {
        let api_token = required(args.api_token.as_deref(), API_TOKEN_VAR)?;
        let zone_id = required(args.zone_id.as_deref(), ZONE_ID_VAR)?;

        check_window(&args.start, &args.end)?;

        let options = FetchOptions::new(zone_id, args.start.as_str(), args.end.as_str(), args.limit)
            .map_err(|e| ConfigError::InvalidOptions(e.to_string()))?;

        Ok(Self {
            api_token: api_token.to_string(),
            endpoint: args.endpoint.clone(),
            options,
        })
    }

    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub const fn options(&self) -> &FetchOptions {
        &self.options
    }
}

fn required<'a>(value: Option<&'a str>, var: &'static str) -> Result<&'a str, ConfigError> {
    value.filter(|v| !v.is_empty()).ok_or(ConfigError::Missing(var))
}

/// Timestamps that don't parse are left for the API to judge.
fn check_window(start: &str, end: &str) -> Result<(), ConfigError> {
    if let (Ok(s), Ok(e)) = (DateTime::parse_from_rfc3339(start), DateTime::parse_from_rfc3339(end))
        && e < s
    {
        return Err(ConfigError::InvertedWindow {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

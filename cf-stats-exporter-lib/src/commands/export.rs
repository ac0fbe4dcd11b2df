use super::logging::{LogLevel, init_logging};
use super::settings::{API_TOKEN_VAR, ZONE_ID_VAR};
use super::{Host, Settings};
use crate::Result;
use crate::analytics::{Client, DEFAULT_ENDPOINT, StatusMetric, request_body};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use core::num::NonZeroU32;
use ohno::IntoAppError;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Start of the default time window
pub const DEFAULT_START: &str = "2025-12-17T15:00:00Z";

/// End of the default time window
pub const DEFAULT_END: &str = "2025-12-18T15:00:00Z";

/// Exit code used when the fetch itself fails
const FETCH_FAILURE_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "cf-stats-exporter", author, version, long_about = None)]
#[command(about = "Export the HTTP status-code distribution of a Cloudflare zone as JSON")]
#[command(styles = CLAP_STYLES)]
pub struct ExportArgs {
    /// Cloudflare API token
    #[arg(long, value_name = "TOKEN", env = API_TOKEN_VAR, hide_env_values = true)]
    pub api_token: Option<String>,

    /// Identifier of the zone to query
    #[arg(long, value_name = "ZONE", env = ZONE_ID_VAR)]
    pub zone_id: Option<String>,

    /// Inclusive start of the time window (ISO-8601)
    #[arg(long, value_name = "TIMESTAMP", default_value = DEFAULT_START)]
    pub start: String,

    /// Inclusive end of the time window (ISO-8601)
    #[arg(long, value_name = "TIMESTAMP", default_value = DEFAULT_END)]
    pub end: String,

    /// Maximum number of status codes to report
    #[arg(long, value_name = "N", default_value = "10")]
    pub limit: NonZeroU32,

    /// GraphQL endpoint to query
    #[arg(long, value_name = "URL", env = "CF_GRAPHQL_ENDPOINT", default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// Print indented JSON instead of a single line
    #[arg(long)]
    pub pretty: bool,

    /// Print the request body that would be sent, without contacting the API
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Fetch the status-code distribution described by `args` and print it as JSON
///
/// Configuration problems exit with status 1 before anything is sent; a failed fetch
/// exits with status 2 and prints nothing to the output stream.
pub async fn export<H: Host>(host: &mut H, args: &ExportArgs) -> Result<()> {
    init_logging(args.log_level);

    let settings = match Settings::resolve(args) {
        Ok(settings) => settings,
        Err(e) => {
            let _ = writeln!(host.error(), "{e}");
            host.exit(1);
            return Err(e).into_app_err("resolving configuration");
        }
    };

    if args.dry_run {
        let body = request_body(settings.options())?;
        writeln!(host.output(), "{body}").into_app_err("writing request body")?;
        return Ok(());
    }

    let client = Client::new(settings.api_token(), settings.endpoint())?;

    match client.fetch_metrics(settings.options()).await {
        Ok(metrics) => {
            let json = render(&metrics, args.pretty)?;
            writeln!(host.output(), "{json}").into_app_err("writing metrics")?;
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "Failed to fetch metrics: {e}");
            host.exit(FETCH_FAILURE_EXIT_CODE);
            Err(e).into_app_err("fetching status metrics")
        }
    }
}

fn render(metrics: &[StatusMetric], pretty: bool) -> Result<String> {
    if pretty {
        return serde_json::to_string_pretty(metrics).into_app_err("serializing status metrics");
    }

    let mut buf = Vec::new();
    metrics
        .serialize(&mut serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter))
        .into_app_err("serializing status metrics")?;

    String::from_utf8(buf).into_app_err("serializing status metrics")
}

/// Single-line JSON with a space after every `:` and `,`
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

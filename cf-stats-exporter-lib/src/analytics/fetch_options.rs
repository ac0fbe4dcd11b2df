use crate::Result;
use core::num::NonZeroU32;
use ohno::bail;

/// Parameters for a single status-code query.
///
/// The timestamps are opaque: they are forwarded to the API exactly as given and any
/// rejection of their format is reported by the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    zone_id: String,
    start: String,
    end: String,
    limit: NonZeroU32,
}

impl FetchOptions {
    /// Create a new set of fetch options
    ///
    /// # Errors
    ///
    /// Returns an error if the zone identifier is empty
    pub fn new(zone_id: impl Into<String>, start: impl Into<String>, end: impl Into<String>, limit: NonZeroU32) -> Result<Self> {
        let zone_id = zone_id.into();
        if zone_id.is_empty() {
            bail!("zone identifier must not be empty");
        }

        Ok(Self {
            zone_id,
            start: start.into(),
            end: end.into(),
            limit,
        })
    }

    #[must_use]
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Inclusive start of the time window
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Inclusive end of the time window
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Maximum number of status groups to return
    #[must_use]
    pub const fn limit(&self) -> NonZeroU32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_new_keeps_values_verbatim() {
        let options = FetchOptions::new("z1", "2025-01-01T00:00:00Z", "2025-01-02T00:00:00Z", limit(5)).unwrap();
        assert_eq!(options.zone_id(), "z1");
        assert_eq!(options.start(), "2025-01-01T00:00:00Z");
        assert_eq!(options.end(), "2025-01-02T00:00:00Z");
        assert_eq!(options.limit().get(), 5);
    }

    #[test]
    fn test_new_rejects_empty_zone() {
        let result = FetchOptions::new("", "2025-01-01T00:00:00Z", "2025-01-02T00:00:00Z", limit(5));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_does_not_validate_timestamps() {
        let options = FetchOptions::new("z1", "yesterday", "not a date", limit(1)).unwrap();
        assert_eq!(options.start(), "yesterday");
        assert_eq!(options.end(), "not a date");
    }
}

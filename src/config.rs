//! Configuration management and validation.
//!
//! Provides the configuration for station loading and the kiosk rule
//! applied by station operations.

use crate::constants::NO_KIOSK_MARKER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Station processing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Substring marking a station name as having no kiosk (case-sensitive)
    pub no_kiosk_marker: String,

    /// Whether the first line of a station file is a header to discard
    pub has_header: bool,

    /// Skip rows that fail validation instead of aborting the load
    pub skip_invalid_rows: bool,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            no_kiosk_marker: NO_KIOSK_MARKER.to_string(),
            has_header: true,
            skip_invalid_rows: true,
        }
    }
}

impl StationConfig {
    /// Create configuration with a custom no-kiosk marker
    pub fn with_no_kiosk_marker(mut self, marker: impl Into<String>) -> Self {
        self.no_kiosk_marker = marker.into();
        self
    }

    /// Treat the first line of the file as data rather than a header
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Abort loading on the first invalid row
    pub fn with_strict_rows(mut self) -> Self {
        self.skip_invalid_rows = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.no_kiosk_marker.is_empty() {
            return Err(Error::configuration(
                "No-kiosk marker cannot be empty (every station would lack a kiosk)",
            ));
        }

        debug!(
            "Station configuration validated: marker='{}', header={}, skip_invalid={}",
            self.no_kiosk_marker, self.has_header, self.skip_invalid_rows
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StationConfig::default();
        assert_eq!(config.no_kiosk_marker, "SMART");
        assert!(config.has_header);
        assert!(config.skip_invalid_rows);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = StationConfig::default()
            .with_no_kiosk_marker("VIRTUAL")
            .without_header()
            .with_strict_rows();

        assert_eq!(config.no_kiosk_marker, "VIRTUAL");
        assert!(!config.has_header);
        assert!(!config.skip_invalid_rows);
    }

    #[test]
    fn test_empty_marker_rejected() {
        let config = StationConfig::default().with_no_kiosk_marker("");
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = StationConfig::default().with_no_kiosk_marker("VIRTUAL");
        let json = serde_json::to_string(&config).unwrap();
        let restored: StationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}

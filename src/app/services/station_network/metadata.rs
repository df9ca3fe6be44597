//! Station loading statistics
//!
//! This module defines the counters collected while a station file is read
//! into a network.

/// Statistics about loading a station file
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of data rows read (header excluded)
    pub rows_read: usize,

    /// Number of stations added to the network
    pub stations_loaded: usize,

    /// Number of rows rejected by validation
    pub rows_rejected: usize,

    /// Number of stations whose id was already present
    pub duplicate_ids: usize,

    /// Time taken to load the file
    pub load_duration: std::time::Duration,

    /// Validation messages for rejected rows
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the rejection rate as a percentage
    pub fn rejection_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_rejected as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if any rows were rejected
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Read {} rows, loaded {} stations ({:.1}% rejected, {} duplicate ids) in {:.3}s",
            self.rows_read,
            self.stations_loaded,
            self.rejection_rate(),
            self.duplicate_ids,
            self.load_duration.as_secs_f64()
        )
    }
}

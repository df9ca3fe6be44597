//! Application constants for bike-share station processing
//!
//! This module contains the default values and column layout used
//! throughout the station operations and the CSV loader.

// =============================================================================
// Station Naming
// =============================================================================

/// Substring in a station name marking a station without a physical kiosk
pub const NO_KIOSK_MARKER: &str = "SMART";

// =============================================================================
// Geographic Constants
// =============================================================================

/// Mean Earth radius in kilometres used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Decimal places kept in distances (kilometres), i.e. nearest metre
pub const DISTANCE_DECIMALS: i32 = 3;

/// Valid latitude range in decimal degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in decimal degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

// =============================================================================
// Station CSV Layout
// =============================================================================

/// Column positions in a station row
pub mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const LATITUDE: usize = 2;
    pub const LONGITUDE: usize = 3;
    pub const CAPACITY: usize = 4;
    pub const BIKES_AVAILABLE: usize = 5;
    pub const DOCKS_AVAILABLE: usize = 6;
}

/// Number of columns a station row must provide
pub const STATION_COLUMN_COUNT: usize = 7;

/// Column names in file order, as expected in a station file header
pub const STATION_COLUMNS: &[&str] = &[
    "id",
    "name",
    "latitude",
    "longitude",
    "capacity",
    "bikes_available",
    "docks_available",
];

// =============================================================================
// Logging
// =============================================================================

/// Log target used when building the default `EnvFilter`
pub const LOG_TARGET: &str = "bikeshare_stations";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_layout_is_consistent() {
        assert_eq!(STATION_COLUMNS.len(), STATION_COLUMN_COUNT);
        assert_eq!(STATION_COLUMNS[columns::ID], "id");
        assert_eq!(STATION_COLUMNS[columns::NAME], "name");
        assert_eq!(STATION_COLUMNS[columns::DOCKS_AVAILABLE], "docks_available");
    }
}

//! Station network loading from comma-separated station files
//!
//! Station files hold one station per line in the column order
//! `id,name,latitude,longitude,capacity,bikes_available,docks_available`,
//! normally preceded by a header line that is discarded. Cells are read as
//! text, coerced with the cell parser (all columns but the name), then
//! validated into stations. Rows that are not valid UTF-8 count as invalid
//! rows; a read error from the underlying reader aborts the load.

use super::StationNetwork;
use super::metadata::LoadStats;
use crate::app::models::{Cell, Station};
use crate::app::services::cell_parser::clean_data;
use crate::config::StationConfig;
use crate::constants::{STATION_COLUMN_COUNT, STATION_COLUMNS, columns};
use crate::{Error, Result};
use csv::ByteRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One data row of a station file
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Line in the source file where the row starts (1-based)
    pub line: u64,
    /// Text cells, or why the row could not be decoded
    pub cells: std::result::Result<Vec<Cell>, String>,
}

/// Read every data row of a station file as raw text cells
///
/// The first line is skipped when `has_header` is set, with a warning if it
/// does not name the station columns. Rows may have different lengths; no
/// numeric coercion is applied. A row that is not valid UTF-8 is returned
/// with a decoding error so the caller can reject just that row.
///
/// # Errors
/// * Returns `Error::CsvParsing` when the underlying reader fails
pub fn read_rows<R: Read>(reader: R, source: &str, has_header: bool) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    if has_header {
        let header = csv_reader
            .byte_headers()
            .map_err(|e| Error::csv_parsing(source, "Failed to read header", Some(e)))?;
        check_header(header, source);
    }

    let first_line = if has_header { 2 } else { 1 };
    let mut rows = Vec::new();
    for (index, record) in csv_reader.byte_records().enumerate() {
        let record = record.map_err(|e| {
            Error::csv_parsing(source, format!("Failed to read row {}", index + 1), Some(e))
        })?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + first_line);

        rows.push(RawRow {
            line,
            cells: decode_record(&record),
        });
    }

    debug!("Read {} rows from {}", rows.len(), source);
    Ok(rows)
}

fn decode_record(record: &ByteRecord) -> std::result::Result<Vec<Cell>, String> {
    record
        .iter()
        .enumerate()
        .map(|(column, field)| {
            std::str::from_utf8(field)
                .map(Cell::from)
                .map_err(|e| format!("Column {} is not valid UTF-8: {}", column + 1, e))
        })
        .collect()
}

fn check_header(header: &ByteRecord, source: &str) {
    let names: Vec<String> = header
        .iter()
        .map(|field| String::from_utf8_lossy(field).trim().to_ascii_lowercase())
        .collect();

    let matches = names.len() >= STATION_COLUMN_COUNT
        && names
            .iter()
            .map(String::as_str)
            .zip(STATION_COLUMNS.iter().copied())
            .all(|(found, expected)| found == expected);

    if !names.is_empty() && !matches {
        warn!(
            "Unexpected header in {}: expected {}, found {}",
            source,
            STATION_COLUMNS.join(","),
            names.join(",")
        );
    }
}

/// Coerce the numeric columns of one row, leaving the name as written
fn clean_station_row(cells: &mut Vec<Cell>) {
    let name = cells.get(columns::NAME).cloned();
    clean_data(std::slice::from_mut(cells));
    if let (Some(name), Some(cell)) = (name, cells.get_mut(columns::NAME)) {
        *cell = name;
    }
}

impl StationNetwork {
    /// Load a station network from a station file on disk
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the file doesn't exist
    /// * Returns `Error::Io` if the file cannot be opened
    /// * Returns `Error::CsvParsing` for malformed CSV
    /// * Returns `Error::DataValidation` for an invalid row when
    ///   `skip_invalid_rows` is disabled
    pub fn load_from_csv(path: &Path, config: &StationConfig) -> Result<(Self, LoadStats)> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        info!("Loading stations from {}", path.display());

        let file = File::open(path).map_err(|e| {
            Error::io(format!("Failed to open station file {}", path.display()), e)
        })?;

        Self::from_csv_reader(file, &path.display().to_string(), config)
    }

    /// Load a station network from any reader producing station CSV
    pub fn from_csv_reader<R: Read>(
        reader: R,
        source: &str,
        config: &StationConfig,
    ) -> Result<(Self, LoadStats)> {
        config.validate()?;

        let start_time = Instant::now();
        let mut stats = LoadStats::new();

        let rows = read_rows(reader, source, config.has_header)?;

        let mut stations = Vec::with_capacity(rows.len());
        let mut seen_ids = HashSet::new();

        for row in rows {
            stats.rows_read += 1;
            let line = row.line;

            let parsed = row.cells.map_err(Error::data_validation).and_then(|mut cells| {
                clean_station_row(&mut cells);
                Station::from_cells(&cells)
            });

            match parsed {
                Ok(station) => {
                    if !seen_ids.insert(station.id) {
                        // Kept in place: lookups by id resolve to the first occurrence
                        warn!(
                            "Duplicate station id {} on line {} of {}",
                            station.id, line, source
                        );
                        stats.duplicate_ids += 1;
                    }
                    stations.push(station);
                    stats.stations_loaded += 1;
                }
                Err(e) if config.skip_invalid_rows => {
                    warn!("Skipping line {} of {}: {}", line, source, e);
                    stats.rows_rejected += 1;
                    stats.errors.push(format!("line {}: {}", line, e));
                }
                Err(e) => {
                    return Err(Error::data_validation(format!(
                        "Invalid station on line {} of {}: {}",
                        line, source, e
                    )));
                }
            }
        }

        stats.load_duration = start_time.elapsed();
        info!("Loaded {}: {}", source, stats.summary());

        Ok((Self::with_config(stations, config), stats))
    }
}

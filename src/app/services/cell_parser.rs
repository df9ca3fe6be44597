//! Numeric coercion for raw station table cells
//!
//! Station files arrive as rows of text. This module decides which cells are
//! decimal numerals and converts them: whole numbers become `Cell::Int`,
//! everything else numeric becomes `Cell::Float`, and anything that is not a
//! numeral is left untouched as `Cell::Text`.

use crate::app::models::Cell;
use tracing::trace;

/// Check whether `value` represents a decimal number
///
/// Surrounding whitespace is ignored, a single leading `+` or `-` is allowed,
/// and at most one decimal point may appear. At least one digit is required.
///
/// # Examples
/// ```
/// # use bikeshare_stations::app::services::cell_parser::is_number;
/// assert!(!is_number("csc108"));
/// assert!(is_number("  108 "));
/// assert!(is_number("+3.14159"));
/// ```
pub fn is_number(value: &str) -> bool {
    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(trimmed);

    let mut seen_point = false;
    let mut digits = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    digits > 0
}

/// Coerce a single raw cell
///
/// Numerals with no fractional remainder become `Cell::Int` (`"3.0"` -> 3,
/// `"+4"` -> 4), other numerals become `Cell::Float`. Non-numerals are kept
/// as text exactly as given.
pub fn parse_cell(raw: &str) -> Cell {
    if !is_number(raw) {
        return Cell::Text(raw.to_string());
    }

    let trimmed = raw.trim();

    // Integers parse directly so large ids keep full precision
    if !trimmed.contains('.') {
        if let Ok(value) = trimmed.parse::<i64>() {
            return Cell::Int(value);
        }
    }

    match trimmed.parse::<f64>() {
        Ok(value) if is_whole(value) => Cell::Int(value as i64),
        Ok(value) => Cell::Float(value),
        Err(_) => Cell::Text(raw.to_string()),
    }
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}

/// Coerce every text cell of a table in place
///
/// Cells that are already numeric, and text cells that are not numerals,
/// are left unchanged.
pub fn clean_data(data: &mut [Vec<Cell>]) {
    let mut converted = 0usize;

    for row in data.iter_mut() {
        for cell in row.iter_mut() {
            if let Cell::Text(raw) = cell {
                let parsed = parse_cell(raw);
                if !parsed.is_text() {
                    *cell = parsed;
                    converted += 1;
                }
            }
        }
    }

    trace!("Coerced {} numeric cells across {} rows", converted, data.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_rows(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|row| row.iter().map(|&s| Cell::from(s)).collect())
            .collect()
    }

    #[test]
    fn test_is_number() {
        assert!(!is_number("csc108"));
        assert!(is_number("  108 "));
        assert!(is_number("+3.14159"));
        assert!(is_number("-123"));
        assert!(is_number("5."));
        assert!(is_number(".5"));

        assert!(!is_number(""));
        assert!(!is_number("."));
        assert!(!is_number("-"));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("--5"));
        assert!(!is_number("1e5"));
        assert!(!is_number("ab2"));
    }

    #[test]
    fn test_parse_cell_integers() {
        assert_eq!(parse_cell("123"), Cell::Int(123));
        assert_eq!(parse_cell("-123"), Cell::Int(-123));
        assert_eq!(parse_cell("+4"), Cell::Int(4));
        assert_eq!(parse_cell("  108 "), Cell::Int(108));
        assert_eq!(parse_cell("3.0"), Cell::Int(3));
        assert_eq!(parse_cell("-5.0"), Cell::Int(-5));
        assert_eq!(parse_cell("5."), Cell::Int(5));
    }

    #[test]
    fn test_parse_cell_floats() {
        assert_eq!(parse_cell("45.6"), Cell::Float(45.6));
        assert_eq!(parse_cell("3.2"), Cell::Float(3.2));
        assert_eq!(parse_cell("-79.329455"), Cell::Float(-79.329455));
        assert_eq!(parse_cell(".5"), Cell::Float(0.5));
    }

    #[test]
    fn test_parse_cell_keeps_text() {
        assert_eq!(parse_cell("abc"), Cell::Text("abc".to_string()));
        assert_eq!(parse_cell("ab2"), Cell::Text("ab2".to_string()));
        assert_eq!(parse_cell(" Bike "), Cell::Text(" Bike ".to_string()));
        assert_eq!(parse_cell("7,5"), Cell::Text("7,5".to_string()));
    }

    #[test]
    fn test_clean_data_single_row() {
        let mut data = text_rows(&[&["abc", "123", "45.6", "car", "Bike"]]);
        clean_data(&mut data);

        assert_eq!(
            data,
            vec![vec![
                Cell::Text("abc".to_string()),
                Cell::Int(123),
                Cell::Float(45.6),
                Cell::Text("car".to_string()),
                Cell::Text("Bike".to_string()),
            ]]
        );
    }

    #[test]
    fn test_clean_data_ragged_rows() {
        let mut data = text_rows(&[&["ab2"], &["-123"], &["BIKES", "3.2"], &["3.0", "+4", "-5.0"]]);
        clean_data(&mut data);

        assert_eq!(
            data,
            vec![
                vec![Cell::Text("ab2".to_string())],
                vec![Cell::Int(-123)],
                vec![Cell::Text("BIKES".to_string()), Cell::Float(3.2)],
                vec![Cell::Int(3), Cell::Int(4), Cell::Int(-5)],
            ]
        );
    }

    #[test]
    fn test_clean_data_leaves_numeric_cells() {
        let mut data = vec![vec![Cell::Float(2.0), Cell::Int(7)]];
        clean_data(&mut data);
        assert_eq!(data, vec![vec![Cell::Float(2.0), Cell::Int(7)]]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Strings containing a letter are never coerced
            #[test]
            fn letters_stay_text(s in "[0-9.+-]{0,4}[a-zA-Z][0-9a-zA-Z.]{0,4}") {
                prop_assert_eq!(parse_cell(&s), Cell::Text(s.clone()));
            }

            /// Plain integers round-trip through coercion
            #[test]
            fn integers_parse(n in -1_000_000i64..1_000_000) {
                prop_assert_eq!(parse_cell(&n.to_string()), Cell::Int(n));
            }
        }
    }
}

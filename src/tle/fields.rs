//! Fixed-column layout of the two TLE lines and the numeric reconstruction helpers.
//!
//! Column ranges are 0-indexed, half-open byte ranges. The parser only slices lines that
//! passed the length and ASCII checks, so every range below is in bounds.
use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
    ops::Range,
};

use thiserror::Error;

use super::ParseTleError;

/// Number of columns of a TLE line, checksum digit included.
pub const TLE_LINE_LENGTH: usize = 69;

/// Column of the modulo-10 checksum digit.
pub const CHECKSUM_COLUMN: usize = 68;

/// Numeric fields of a TLE, in parsing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TleField {
    CatalogNumber,
    EpochYear,
    EpochDay,
    MeanMotionDot,
    MeanMotionDdot,
    Bstar,
    Inclination,
    RightAscension,
    Eccentricity,
    ArgumentOfPerigee,
    MeanAnomaly,
    MeanMotion,
}

impl TleField {
    /// Line number (1 or 2) holding the field.
    pub fn line(&self) -> u8 {
        match self {
            TleField::CatalogNumber
            | TleField::EpochYear
            | TleField::EpochDay
            | TleField::MeanMotionDot
            | TleField::MeanMotionDdot
            | TleField::Bstar => 1,
            _ => 2,
        }
    }

    /// Columns covered by the field.
    ///
    /// For the compact exponential fields (`MeanMotionDdot`, `Bstar`) the range spans the
    /// sign, mantissa and exponent sub-fields.
    pub fn columns(&self) -> Range<usize> {
        match self {
            TleField::CatalogNumber => 2..7,
            TleField::EpochYear => 18..20,
            TleField::EpochDay => 20..32,
            TleField::MeanMotionDot => 33..43,
            TleField::MeanMotionDdot => 44..52,
            TleField::Bstar => 53..61,
            TleField::Inclination => 8..16,
            TleField::RightAscension => 17..25,
            TleField::Eccentricity => 26..33,
            TleField::ArgumentOfPerigee => 34..42,
            TleField::MeanAnomaly => 43..51,
            TleField::MeanMotion => 52..63,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TleField::CatalogNumber => "catalog number",
            TleField::EpochYear => "epoch year",
            TleField::EpochDay => "epoch day",
            TleField::MeanMotionDot => "first derivative of mean motion",
            TleField::MeanMotionDdot => "second derivative of mean motion",
            TleField::Bstar => "bstar drag term",
            TleField::Inclination => "inclination",
            TleField::RightAscension => "right ascension of the ascending node",
            TleField::Eccentricity => "eccentricity",
            TleField::ArgumentOfPerigee => "argument of perigee",
            TleField::MeanAnomaly => "mean anomaly",
            TleField::MeanMotion => "mean motion",
        }
    }
}

impl fmt::Display for TleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns();
        write!(
            f,
            "{} (line{}[{}:{}])",
            self.name(),
            self.line(),
            columns.start,
            columns.end
        )
    }
}

/// Underlying numeric failure of a TLE field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

fn invalid(field: TleField, text: String, source: impl Into<NumericError>) -> ParseTleError {
    ParseTleError::InvalidField {
        field,
        text,
        source: source.into(),
    }
}

fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

/// Integer field, surrounding whitespace trimmed.
pub(super) fn parse_int_field<T>(line: &str, field: TleField) -> Result<T, ParseTleError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let text = line[field.columns()].trim();
    text.parse::<T>()
        .map_err(|e| invalid(field, text.to_string(), e))
}

/// Decimal field with embedded spaces removed before parsing.
pub(super) fn parse_float_field(line: &str, field: TleField) -> Result<f64, ParseTleError> {
    parse_float_text(field, strip_spaces(&line[field.columns()]))
}

/// Eccentricity: the TLE stores only the decimals, `0.` is implied.
pub(super) fn parse_implied_decimal(line: &str, field: TleField) -> Result<f64, ParseTleError> {
    parse_float_text(field, format!("0.{}", &line[field.columns()]))
}

/// Compact exponential notation `±MMMMM±E`, read as `±.MMMMMe±E`.
///
/// The sign column, the five mantissa digits and the two exponent columns are
/// concatenated around a literal decimal point and `e`, then spaces are removed.
pub(super) fn parse_compact_exponent(line: &str, field: TleField) -> Result<f64, ParseTleError> {
    let start = field.columns().start;
    let text = format!(
        "{}.{}e{}",
        &line[start..start + 1],
        &line[start + 1..start + 6],
        &line[start + 6..start + 8]
    );
    parse_float_text(field, strip_spaces(&text))
}

fn parse_float_text(field: TleField, text: String) -> Result<f64, ParseTleError> {
    match text.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(e) => Err(invalid(field, text, e)),
    }
}

/// Modulo-10 checksum of the first 68 columns: digits count for their value and each
/// minus sign counts for one.
pub fn checksum(line: &str) -> u32 {
    line.bytes()
        .take(CHECKSUM_COLUMN)
        .map(|b| match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'-' => 1,
            _ => 0,
        })
        .sum::<u32>()
        % 10
}

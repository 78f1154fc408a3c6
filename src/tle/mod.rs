//! # Two-Line Element reader
//!
//! Utilities to parse a **NORAD two-line element set** into [`OrbitalElements`] usable by
//! an SGP4-family propagator.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - A line-level error type [`ParseTleError`] describing TLE parsing failures.
//! - [`parse_tle`], the entry point selecting the gravity model by name.
//! - [`parse_tle_with`], the same parser driven by a [`TleOptions`] configuration
//!   (gravity model, two-digit year pivot, checksum verification).
//!
//! ## Field layout
//! -----------------
//! Columns are 0-indexed half-open byte ranges.
//!
//! | Line | Columns  | Field                               | Encoding                     |
//! |------|----------|-------------------------------------|------------------------------|
//! | 1    | `2..7`   | catalog number                      | integer                      |
//! | 1    | `7`      | classification                      | character                    |
//! | 1    | `9..17`  | international designator            | text                         |
//! | 1    | `18..20` | epoch year                          | two digits                   |
//! | 1    | `20..32` | epoch day of year                   | decimal                      |
//! | 1    | `33..43` | ṅ/2 (rev/day²)                      | decimal, signed              |
//! | 1    | `44..52` | n̈/6 (rev/day³)                      | `±MMMMM±E` = `±.MMMMMe±E`    |
//! | 1    | `53..61` | bstar                               | `±MMMMM±E` = `±.MMMMMe±E`    |
//! | 2    | `8..16`  | inclination (deg)                   | decimal                      |
//! | 2    | `17..25` | right ascension of the node (deg)   | decimal                      |
//! | 2    | `26..33` | eccentricity                        | implied leading `0.`         |
//! | 2    | `34..42` | argument of perigee (deg)           | decimal                      |
//! | 2    | `43..51` | mean anomaly (deg)                  | decimal                      |
//! | 2    | `52..63` | mean motion (rev/day)               | decimal                      |
//!
//! ## Units & Conventions
//! -----------------
//! - Angles are converted from degrees to **radians**.
//! - Mean motion is converted from rev/day to **rad/min** (`/ XPDOTP`), its first and second
//!   derivatives to rad/min² and rad/min³.
//! - Epoch years `yy < 57` are read as `20yy`, the others as `19yy` (configurable through
//!   [`TleOptions::century_pivot`]).
//!
//! ## Error Handling
//! -----------------
//! Parsing stops at the first failure. Structural problems (line length, non-ASCII text,
//! checksum) are reported before any field is read, then fields are read in column order
//! and the first one that does not parse is reported with its columns and the underlying
//! `ParseIntError`/`ParseFloatError`.
//!
//! ## Example
//! -----------------
//! ```rust
//! use sattrack::tle::parse_tle;
//!
//! let line1 = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
//! let line2 = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";
//!
//! let elements = parse_tle(line1, line2, "wgs72").unwrap();
//! assert_eq!(elements.catalog_number, 25544);
//! assert_eq!(elements.epoch_year, 2008);
//! ```
mod fields;
mod orbital_elements;
mod tle_options;

use log::debug;
use thiserror::Error;

use crate::{
    constants::{DEG2RAD, MINUTES_PER_DAY, XPDOTP},
    earth_gravity::GravityModel,
    sattrack_errors::SatTrackError,
    time::{days_in_year, days_to_mdhms, JulianDate},
};

pub use fields::{checksum, NumericError, TleField, CHECKSUM_COLUMN, TLE_LINE_LENGTH};
pub use orbital_elements::OrbitalElements;
pub use tle_options::{TleOptions, DEFAULT_CENTURY_PIVOT};

use fields::{parse_compact_exponent, parse_float_field, parse_implied_decimal, parse_int_field};

/// Line-level parsing errors for two-line element sets.
///
/// Variants
/// -----------------
/// * `InvalidLineLength` – A line is not exactly 69 bytes long.
/// * `NonAsciiLine` – A line holds non-ASCII bytes, so its columns are not characters.
/// * `ChecksumMismatch` – The modulo-10 checksum does not match column 68 (only when enabled).
/// * `InvalidField` – A numeric field failed to parse; carries the field, the text handed
///   to the number parser and the underlying cause.
/// * `EpochDayOutOfRange` – The epoch day of year is outside the epoch year.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseTleError {
    #[error("Line{line} length should be 69 but was {length}")]
    InvalidLineLength { line: u8, length: usize },

    #[error("Line{line} contains non-ASCII characters")]
    NonAsciiLine { line: u8 },

    #[error("Line{line} checksum is {computed} but column 68 holds {found:?}")]
    ChecksumMismatch { line: u8, computed: u32, found: char },

    #[error("Error on parsing {field}: {text:?}: {source}")]
    InvalidField {
        field: TleField,
        text: String,
        #[source]
        source: NumericError,
    },

    #[error("Epoch day {day} is outside year {year}")]
    EpochDayOutOfRange { year: i32, day: f64 },
}

/// Parse a two-line element set with the gravity model selected by name.
///
/// Arguments
/// -----------------
/// * `line1`, `line2` – The two 69-column TLE lines, without line terminators.
/// * `gravity_model` – One of `"wgs72old"`, `"wgs72"` or `"wgs84"`.
///
/// Return
/// ----------
/// * The [`OrbitalElements`] in propagator units, or the first error met.
///
/// Line lengths are checked before the gravity model name is resolved. Every other
/// option keeps its [`TleOptions::default`] value.
pub fn parse_tle(
    line1: &str,
    line2: &str,
    gravity_model: &str,
) -> Result<OrbitalElements, SatTrackError> {
    check_length(1, line1)?;
    check_length(2, line2)?;

    let model: GravityModel = gravity_model.parse()?;
    parse_tle_with(line1, line2, &TleOptions::new(model))
}

/// Parse a two-line element set with an explicit [`TleOptions`] configuration.
///
/// See the [module documentation](crate::tle) for the field layout and unit conversions.
pub fn parse_tle_with(
    line1: &str,
    line2: &str,
    options: &TleOptions,
) -> Result<OrbitalElements, SatTrackError> {
    for (number, line) in [(1, line1), (2, line2)] {
        check_length(number, line)?;
        if !line.is_ascii() {
            return Err(ParseTleError::NonAsciiLine { line: number }.into());
        }
    }

    if options.verify_checksum {
        check_checksum(1, line1)?;
        check_checksum(2, line2)?;
    }

    let gravity = options.gravity_model.constants();

    // line 1
    let catalog_number: u32 = parse_int_field(line1, TleField::CatalogNumber)?;
    let epoch_yy: u32 = parse_int_field(line1, TleField::EpochYear)?;
    let epoch_days = parse_float_field(line1, TleField::EpochDay)?;
    let ndot = parse_float_field(line1, TleField::MeanMotionDot)?;
    let nddot = parse_compact_exponent(line1, TleField::MeanMotionDdot)?;
    let bstar = parse_compact_exponent(line1, TleField::Bstar)?;

    // line 2
    let inclination = parse_float_field(line2, TleField::Inclination)?;
    let right_ascension = parse_float_field(line2, TleField::RightAscension)?;
    let eccentricity = parse_implied_decimal(line2, TleField::Eccentricity)?;
    let argument_of_perigee = parse_float_field(line2, TleField::ArgumentOfPerigee)?;
    let mean_anomaly = parse_float_field(line2, TleField::MeanAnomaly)?;
    let mean_motion = parse_float_field(line2, TleField::MeanMotion)?;

    let epoch_year = resolve_epoch_year(epoch_yy, options.century_pivot);
    if !(1.0..(days_in_year(epoch_year) + 1) as f64).contains(&epoch_days) {
        return Err(ParseTleError::EpochDayOutOfRange {
            year: epoch_year,
            day: epoch_days,
        }
        .into());
    }
    let cal = days_to_mdhms(epoch_year, epoch_days);
    let jd_epoch = JulianDate::from_calendar(
        epoch_year,
        cal.month,
        cal.day,
        cal.hour,
        cal.minute,
        cal.second,
    );

    debug!(
        "parsed TLE {catalog_number} epoch {epoch_year}/{epoch_days} with {} constants",
        options.gravity_model
    );

    Ok(OrbitalElements {
        line1: line1.to_string(),
        line2: line2.to_string(),
        catalog_number,
        classification: line1.as_bytes()[7] as char,
        international_designator: line1[9..17].trim().to_string(),
        gravity_model: options.gravity_model,
        gravity,
        epoch_year,
        epoch_days,
        jd_epoch,
        ndot: ndot / (XPDOTP * MINUTES_PER_DAY),
        nddot: nddot / (XPDOTP * MINUTES_PER_DAY * MINUTES_PER_DAY),
        bstar,
        inclination: inclination * DEG2RAD,
        right_ascension: right_ascension * DEG2RAD,
        eccentricity,
        argument_of_perigee: argument_of_perigee * DEG2RAD,
        mean_anomaly: mean_anomaly * DEG2RAD,
        mean_motion: mean_motion / XPDOTP,
    })
}

/// Expand a two-digit TLE epoch year into a four-digit year.
///
/// Years below `pivot` are placed in the 2000s, the others in the 1900s.
pub fn resolve_epoch_year(two_digit_year: u32, pivot: u32) -> i32 {
    if two_digit_year < pivot {
        two_digit_year as i32 + 2000
    } else {
        two_digit_year as i32 + 1900
    }
}

fn check_length(line: u8, text: &str) -> Result<(), ParseTleError> {
    if text.len() != TLE_LINE_LENGTH {
        return Err(ParseTleError::InvalidLineLength {
            line,
            length: text.len(),
        });
    }
    Ok(())
}

fn check_checksum(line: u8, text: &str) -> Result<(), ParseTleError> {
    let computed = checksum(text);
    let found = text.as_bytes()[CHECKSUM_COLUMN] as char;
    if found.to_digit(10) != Some(computed) {
        return Err(ParseTleError::ChecksumMismatch {
            line,
            computed,
            found,
        });
    }
    Ok(())
}

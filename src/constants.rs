//! # Constants and type definitions for sattrack
//!
//! This module centralizes the **physical constants**, **conversion factors** and
//! **unit type aliases** shared by the TLE parser, the time system and the
//! reference-frame engine.
//!
//! ## Overview
//!
//! - Angular conversions (degrees ↔ radians, revolutions/day ↔ radians/minute)
//! - Day subdivisions (minutes and seconds per day)
//! - Julian reference epochs (J2000.0 and the SGP4 reference epoch)
//! - The WGS84 ellipsoid used by the ECI → geodetic conversion
//!
//! Gravity-model dependent constants (μ, equatorial radius, zonal harmonics, flattening)
//! live in [`crate::earth_gravity`] because they are selected at parse time.

// -------------------------------------------------------------------------------------------------
// Angular and time conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

/// Minutes per day divided by 2π.
///
/// Dividing a mean motion in revolutions/day by this factor yields radians/minute.
pub const XPDOTP: f64 = 1440.0 / (2.0 * std::f64::consts::PI);

/// Number of minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of J2000.0 (2000-01-01 12:00:00)
pub const JD_J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian date of 1950-01-00 0h, the origin of the SGP4 "days since epoch" input
pub const SGP4_JD_REFERENCE: f64 = 2_433_281.5;

/// Ratio of the sidereal day rate to the solar day rate
pub const SIDEREAL_RATE: f64 = 1.00273790934;

// -------------------------------------------------------------------------------------------------
// Ellipsoid used by the ECI → geodetic conversion
// -------------------------------------------------------------------------------------------------

/// WGS84 semi-major axis in kilometers
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6378.137;

/// WGS84 semi-minor axis in kilometers
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6356.7523142;

/// Earth standard gravitational parameter in km³/s², used for the circular speed estimate
pub const EARTH_MU: f64 = 398_600.4418;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Julian date (days)
pub type JD = f64;
/// Elapsed time in minutes
pub type Minutes = f64;

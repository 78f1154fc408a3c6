use serde::{Deserialize, Serialize};

use crate::{
    constants::{Radian, SGP4_JD_REFERENCE},
    earth_gravity::{GravConst, GravityModel},
    time::JulianDate,
};

/// Mean orbital elements of a parsed TLE, in propagator units.
///
/// Units
/// -----
/// * angles (`inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`): radians
/// * `mean_motion`: radians/minute
/// * `ndot`: radians/minute², `nddot`: radians/minute³ (TLE values already carry the
///   1/2 and 1/6 factors)
/// * `bstar`: inverse Earth radii
/// * `epoch_days`: day of year (1-based) with fractional day
///
/// The record is produced by [`parse_tle`](crate::tle::parse_tle) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub line1: String,
    pub line2: String,

    pub catalog_number: u32,
    pub classification: char,
    pub international_designator: String,

    pub gravity_model: GravityModel,
    pub gravity: GravConst,

    /// Four-digit epoch year
    pub epoch_year: i32,
    pub epoch_days: f64,
    pub jd_epoch: JulianDate,

    pub ndot: f64,
    pub nddot: f64,
    pub bstar: f64,

    pub inclination: Radian,
    pub right_ascension: Radian,
    pub eccentricity: f64,
    pub argument_of_perigee: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: f64,
}

impl OrbitalElements {
    /// Epoch as days since Julian date 2433281.5, the epoch input of SGP4 initialization.
    pub fn days_since_sgp4_epoch(&self) -> f64 {
        self.jd_epoch.subtract(SGP4_JD_REFERENCE)
    }

    /// Orbital period in minutes.
    pub fn period_minutes(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion
    }
}

//! # Earth gravity models
//!
//! This module provides the **closed set of gravity models** accepted by the TLE parser and
//! the constant bundle each one selects. The bundle parameterizes both the propagator
//! (μ, zonal harmonics, time unit) and the observer geometry (equatorial radius,
//! flattening).
//!
//! ## Public API
//!
//! ### [`crate::earth_gravity::GravityModel`]
//!
//! - `GravityModel::Wgs72Old` – WGS-72 with the legacy, hard-coded `xke`
//! - `GravityModel::Wgs72` – WGS-72 with `xke` derived from μ and the equatorial radius
//! - `GravityModel::Wgs84` – WGS-84
//!
//! A model is selected from its string key:
//!
//! ```rust
//! use sattrack::earth_gravity::GravityModel;
//!
//! let model: GravityModel = "wgs72".parse().unwrap();
//! let grav = model.constants();
//! assert_eq!(grav.radius_earth_km, 6378.135);
//! ```
//!
//! ### [`crate::earth_gravity::GravConst`]
//!
//! ```text
//! GravConst { mu, radius_earth_km, xke, tumin, j2, j3, j4, j3oj2, f }
//! ```
//!
//! ## Notes
//!
//! `wgs72old` keeps the literal `xke = 0.0743669161` published with the original
//! SGP4 code, while `wgs72` and `wgs84` compute `60 / √(R³/μ)`. The two WGS-72 bundles
//! therefore differ in the 11th significant digit of `xke` and must not be unified.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::sattrack_errors::SatTrackError;

/// Constants that depend on the selected gravity model.
///
/// Units
/// -----
/// * `mu`: km³/s²
/// * `radius_earth_km`: km
/// * `xke`: reciprocal of `tumin`, in (Earth radii)^1.5 / minute
/// * `tumin`: minutes per canonical time unit
/// * `j2`, `j3`, `j4`, `j3oj2`, `f`: dimensionless
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravConst {
    pub mu: f64,
    pub radius_earth_km: f64,
    pub xke: f64,
    pub tumin: f64,
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub j3oj2: f64,
    /// Ellipsoid flattening
    pub f: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravityModel {
    Wgs72Old,
    #[default]
    Wgs72,
    Wgs84,
}

impl GravityModel {
    /// String key of the model, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            GravityModel::Wgs72Old => "wgs72old",
            GravityModel::Wgs72 => "wgs72",
            GravityModel::Wgs84 => "wgs84",
        }
    }

    /// Build the constant bundle of this gravity model.
    ///
    /// Return
    /// ----------
    /// * The [`GravConst`] of the model. `tumin` and `j3oj2` are always derived from
    ///   `xke` and `j3`/`j2`, `xke` itself is literal for `wgs72old` only.
    pub fn constants(&self) -> GravConst {
        match self {
            GravityModel::Wgs72Old => {
                let xke = 0.0743669161;
                with_harmonics(
                    398600.79964,
                    6378.135,
                    xke,
                    (0.001082616, -0.00000253881, -0.00000165597),
                    1.0 / 298.26,
                )
            }
            GravityModel::Wgs72 => {
                let (mu, radius) = (398600.8, 6378.135);
                with_harmonics(
                    mu,
                    radius,
                    derived_xke(mu, radius),
                    (0.001082616, -0.00000253881, -0.00000165597),
                    1.0 / 298.26,
                )
            }
            GravityModel::Wgs84 => {
                let (mu, radius) = (398600.5, 6378.137);
                with_harmonics(
                    mu,
                    radius,
                    derived_xke(mu, radius),
                    (0.00108262998905, -0.00000253215306, -0.00000161098761),
                    1.0 / 298.257223563,
                )
            }
        }
    }
}

fn derived_xke(mu: f64, radius: f64) -> f64 {
    60.0 / (radius * radius * radius / mu).sqrt()
}

fn with_harmonics(
    mu: f64,
    radius: f64,
    xke: f64,
    (j2, j3, j4): (f64, f64, f64),
    f: f64,
) -> GravConst {
    GravConst {
        mu,
        radius_earth_km: radius,
        xke,
        tumin: 1.0 / xke,
        j2,
        j3,
        j4,
        j3oj2: j3 / j2,
        f,
    }
}

impl FromStr for GravityModel {
    type Err = SatTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wgs72old" => Ok(GravityModel::Wgs72Old),
            "wgs72" => Ok(GravityModel::Wgs72),
            "wgs84" => Ok(GravityModel::Wgs84),
            _ => Err(SatTrackError::UnknownGravityModel(s.to_string())),
        }
    }
}

impl fmt::Display for GravityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

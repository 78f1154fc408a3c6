use std::{f64::consts::PI, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Kilometer, Radian, DPI, JD, RAD2DEG},
    earth_gravity::GravConst,
    geodetic::{observer_eci, LatLongAlt},
    ref_system::EciPosition,
    sattrack_errors::SatTrackError,
    time::theta_g_jd,
};

/// Topocentric direction and distance of a satellite seen from a ground site.
///
/// * `azimuth`: radians in [0, 2π], clockwise from north. Exactly 2π is possible when
///   the target is due north and a hair to the west.
/// * `elevation`: radians in [−π/2, π/2] above the local horizon
/// * `range`: slant range in km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAngles {
    pub azimuth: Radian,
    pub elevation: Radian,
    pub range: Kilometer,
}

impl LookAngles {
    /// True when the satellite is above the local horizon.
    pub fn is_visible(&self) -> bool {
        self.elevation > 0.0
    }
}

impl fmt::Display for LookAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "az={:.4}° el={:.4}° range={:.3} km",
            self.azimuth * RAD2DEG,
            self.elevation * RAD2DEG,
            self.range
        )
    }
}

/// Look angles from a ground site to a satellite.
///
/// The range vector `r = sat − site` is projected on the local south, east and zenith
/// axes:
///
/// ```text
/// S = sin φ cos θ rx + sin φ sin θ ry − cos φ rz
/// E = −sin θ rx + cos θ ry
/// Z = cos φ cos θ rx + cos φ sin θ ry + sin φ rz
/// ```
///
/// with `θ = (theta_g_jd(jd) + λ) mod 2π`. The azimuth is `atan(−E/S)`, shifted by π when
/// `S > 0` and then by 2π when still negative. A satellite exactly at the zenith has an
/// azimuth of 0.
///
/// Arguments
/// ---------
/// * `sat`: satellite position in km
/// * `site`: geodetic position of the observer
/// * `jd`: Julian date of the observation
/// * `gravity`: constants bundle giving the observer ellipsoid
///
/// Return
/// ------
/// * the [`LookAngles`], or [`SatTrackError::CoincidentPositions`] when the satellite and
///   the site are at the same point
pub fn eci_to_look_angles(
    sat: &EciPosition,
    site: &LatLongAlt,
    jd: JD,
    gravity: &GravConst,
) -> Result<LookAngles, SatTrackError> {
    let theta = (theta_g_jd(jd) + site.longitude()) % DPI;
    let obs = observer_eci(site, theta, gravity);

    let r = *sat - obs;
    let range = r.norm();
    if range == 0.0 {
        return Err(SatTrackError::CoincidentPositions);
    }

    let (lat_sin, lat_cos) = site.latitude().sin_cos();
    let (theta_sin, theta_cos) = theta.sin_cos();

    let top_s = lat_sin * theta_cos * r.x() + lat_sin * theta_sin * r.y() - lat_cos * r.z();
    let top_e = -theta_sin * r.x() + theta_cos * r.y();
    let top_z = lat_cos * theta_cos * r.x() + lat_cos * theta_sin * r.y() + lat_sin * r.z();

    let mut azimuth = if top_s == 0.0 && top_e == 0.0 {
        0.0
    } else {
        (-top_e / top_s).atan()
    };
    if top_s > 0.0 {
        azimuth += PI;
    }
    if azimuth < 0.0 {
        azimuth += DPI;
    }

    Ok(LookAngles {
        azimuth,
        elevation: (top_z / range).clamp(-1.0, 1.0).asin(),
        range,
    })
}

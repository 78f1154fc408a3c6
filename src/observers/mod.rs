//! # Ground observers
//!
//! A ground site described by its geodetic coordinates, and the topocentric look angles
//! of a satellite seen from it.
//!
//! ## Conventions
//!
//! - Latitude and longitude are given in **degrees** to [`Observer::new`] and stored in
//!   radians.
//! - Altitude is in **km** above the ellipsoid of the gravity model used for the
//!   computation.
//! - The observer is placed in the inertial frame with the sidereal angle of
//!   [`theta_g_jd`](crate::time::theta_g_jd).
//!
//! ## Quick start
//!
//! ```rust
//! use sattrack::earth_gravity::GravityModel;
//! use sattrack::observers::Observer;
//! use sattrack::ref_system::EciPosition;
//!
//! let site = Observer::new(45.0, -75.0, 0.5, Some("Ottawa".into()));
//! let look = site.look_angles(
//!     &EciPosition::new(6524.834, 6862.875, 6448.296),
//!     2454730.01782528,
//!     &GravityModel::Wgs72.constants(),
//! )?;
//! assert!(look.is_visible());
//! # Ok::<(), sattrack::sattrack_errors::SatTrackError>(())
//! ```
//!
//! ## See also
//! ------------
//! * [`eci_to_look_angles`] – Same computation from a bare [`LatLongAlt`].
//! * [`lla_to_eci`](crate::geodetic::lla_to_eci) – Inertial position of the site.
mod look_angles;

pub use look_angles::{eci_to_look_angles, LookAngles};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, Kilometer, JD, RAD2DEG},
    earth_gravity::GravConst,
    geodetic::{lla_to_eci, LatLongAlt},
    ref_system::EciPosition,
    sattrack_errors::SatTrackError,
};

/// A ground site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Optional human-readable site name.
    pub name: Option<String>,

    /// Geodetic position, radians and km.
    pub position: LatLongAlt,
}

impl Observer {
    /// Create an observer from geodetic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geodetic latitude in degrees
    /// * `longitude`: longitude in degrees, east positive
    /// * `altitude`: altitude above the ellipsoid in km
    /// * `name`: optional site name
    pub fn new(
        latitude: Degree,
        longitude: Degree,
        altitude: Kilometer,
        name: Option<String>,
    ) -> Observer {
        Observer {
            name,
            position: LatLongAlt::from_degrees(latitude, longitude, altitude),
        }
    }

    pub fn from_lla(position: LatLongAlt, name: Option<String>) -> Observer {
        Observer { name, position }
    }

    /// Inertial position of the site at the Julian date `jd`.
    pub fn eci_position(&self, jd: JD, gravity: &GravConst) -> EciPosition {
        lla_to_eci(&self.position, jd, gravity)
    }

    /// Look angles toward a satellite, see [`eci_to_look_angles`].
    pub fn look_angles(
        &self,
        sat: &EciPosition,
        jd: JD,
        gravity: &GravConst,
    ) -> Result<LookAngles, SatTrackError> {
        eci_to_look_angles(sat, &self.position, jd, gravity)
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("unnamed site");
        write!(
            f,
            "{name} (lat={:.6}°, lon={:.6}°, alt={:.3} km)",
            self.position.latitude() * RAD2DEG,
            self.position.longitude() * RAD2DEG,
            self.position.altitude_km
        )
    }
}

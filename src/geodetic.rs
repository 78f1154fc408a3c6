//! # Geodetic coordinates
//!
//! Conversions between inertial positions and geodetic latitude, longitude and altitude.
//!
//! - [`eci_to_lla`] inverts the WGS84 ellipsoid with a fixed number of latitude
//!   refinements ([`GEODETIC_ITERATIONS`]).
//! - [`lla_to_eci`] places a ground point on the ellipsoid of a [`GravConst`] bundle and
//!   rotates it by the sidereal angle of [`theta_g_jd`].
//! - [`lat_long_deg`] turns a radian pair into display degrees.
//!
//! The two directions do not share their ellipsoid: the inverse always works on WGS84
//! while the forward direction follows the gravity model in use. Round trips are exact
//! (to rounding) only with [`GravityModel::Wgs84`](crate::earth_gravity::GravityModel::Wgs84).
use std::f64::consts::{FRAC_PI_2, PI};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        Degree, Kilometer, Radian, DEG2RAD, DPI, EARTH_MU, JD, RAD2DEG, WGS84_SEMI_MAJOR_AXIS,
        WGS84_SEMI_MINOR_AXIS,
    },
    earth_gravity::GravConst,
    ref_system::EciPosition,
    sattrack_errors::SatTrackError,
    time::theta_g_jd,
};

/// Number of latitude refinements of [`eci_to_lla`].
pub const GEODETIC_ITERATIONS: usize = 20;

/// Latitude and longitude, radians unless produced by [`lat_long_deg`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

/// A geodetic point: latitude/longitude in radians and altitude above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLongAlt {
    pub lat_long: LatLong,
    pub altitude_km: Kilometer,
}

impl LatLong {
    pub fn new(latitude: Radian, longitude: Radian) -> Self {
        LatLong {
            latitude,
            longitude,
        }
    }
}

impl LatLongAlt {
    pub fn new(latitude: Radian, longitude: Radian, altitude_km: Kilometer) -> Self {
        LatLongAlt {
            lat_long: LatLong::new(latitude, longitude),
            altitude_km,
        }
    }

    /// Build a point from latitude and longitude in degrees.
    pub fn from_degrees(latitude: Degree, longitude: Degree, altitude_km: Kilometer) -> Self {
        LatLongAlt::new(latitude * DEG2RAD, longitude * DEG2RAD, altitude_km)
    }

    pub fn latitude(&self) -> Radian {
        self.lat_long.latitude
    }

    pub fn longitude(&self) -> Radian {
        self.lat_long.longitude
    }
}

/// Result of [`eci_to_lla`].
///
/// `velocity` is the speed of a circular orbit at the computed altitude, √(μ/r), not the
/// speed of the satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticFix {
    pub lat_long: LatLong,
    pub altitude_km: Kilometer,
    pub velocity: f64,
}

/// Convert an inertial position into geodetic coordinates on the WGS84 ellipsoid.
///
/// The latitude starts from the spherical guess `atan2(z, √(x²+y²))` and is refined
/// [`GEODETIC_ITERATIONS`] times with
/// `C = 1/√(1 − e² sin²φ)`, `φ = atan2(z + a·C·e²·sin φ, √(x²+y²))`.
///
/// Arguments
/// ---------
/// * `eci`: position in km
/// * `gmst`: Greenwich sidereal angle in radians
///
/// Return
/// ------
/// * a [`GeodeticFix`]. The longitude is `atan2(y, x) − gmst` and is not wrapped, it can
///   fall anywhere in (−3π, π].
///
/// See also
/// --------
/// * [`lat_long_deg`] – normalized degrees for display.
pub fn eci_to_lla(eci: &EciPosition, gmst: Radian) -> GeodeticFix {
    let a = WGS84_SEMI_MAJOR_AXIS;
    let f = (a - WGS84_SEMI_MINOR_AXIS) / a;
    let e2 = 2.0 * f - f * f;

    let sq = eci.equatorial_norm();
    let longitude = eci.y().atan2(eci.x()) - gmst;
    let mut latitude = eci.z().atan2(sq);

    let mut c = 0.0;
    for _ in 0..GEODETIC_ITERATIONS {
        let sin_lat = latitude.sin();
        c = 1.0 / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        latitude = (eci.z() + a * c * e2 * sin_lat).atan2(sq);
    }

    let altitude_km = sq / latitude.cos() - a * c;
    let velocity = (EARTH_MU / (altitude_km + WGS84_SEMI_MAJOR_AXIS)).sqrt();

    trace!(
        "geodetic fix of {eci}: lat={latitude:.9} lon={longitude:.9} alt={altitude_km:.6} km"
    );

    GeodeticFix {
        lat_long: LatLong::new(latitude, longitude),
        altitude_km,
        velocity,
    }
}

/// Convert a radian latitude/longitude pair to degrees.
///
/// The longitude is reduced modulo 360 then brought into (−180, 180].
///
/// Return
/// ------
/// * the pair in degrees, or [`SatTrackError::LatitudeOutOfBounds`] if the latitude is
///   outside [−π/2, π/2]
pub fn lat_long_deg(rad: &LatLong) -> Result<LatLong, SatTrackError> {
    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&rad.latitude) {
        return Err(SatTrackError::LatitudeOutOfBounds(rad.latitude));
    }

    let mut longitude = (rad.longitude / PI * 180.0) % 360.0;
    if longitude > 180.0 {
        longitude -= 360.0;
    } else if longitude <= -180.0 {
        longitude += 360.0;
    }

    Ok(LatLong::new(rad.latitude * RAD2DEG, longitude))
}

/// Inertial position of a ground point at a given Julian date.
///
/// Arguments
/// ---------
/// * `lla`: geodetic point (radians, km)
/// * `jd`: Julian date, the sidereal angle comes from [`theta_g_jd`]
/// * `gravity`: constants bundle giving the ellipsoid radius and flattening
///
/// Return
/// ------
/// * the ECI position in km
pub fn lla_to_eci(lla: &LatLongAlt, jd: JD, gravity: &GravConst) -> EciPosition {
    let theta = (theta_g_jd(jd) + lla.longitude()) % DPI;
    observer_eci(lla, theta, gravity)
}

/// Position on the ellipsoid once the local sidereal angle `theta` is known.
pub(crate) fn observer_eci(lla: &LatLongAlt, theta: Radian, gravity: &GravConst) -> EciPosition {
    let f = gravity.f;
    let (lat_sin, lat_cos) = lla.latitude().sin_cos();

    let c = 1.0 / (1.0 + f * (f - 2.0) * lat_sin * lat_sin).sqrt();
    let sq = c * (1.0 - f) * (1.0 - f);

    let achcp = (gravity.radius_earth_km * c + lla.altitude_km) * lat_cos;

    EciPosition::new(
        achcp * theta.cos(),
        achcp * theta.sin(),
        (gravity.radius_earth_km * sq + lla.altitude_km) * lat_sin,
    )
}

#[cfg(test)]
mod geodetic_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::earth_gravity::GravityModel;

    #[test]
    fn test_eci_to_lla() {
        let fix = eci_to_lla(
            &EciPosition::new(6524.834, 6862.875, 6448.296),
            3.2494915806279465,
        );
        assert_abs_diff_eq!(fix.lat_long.latitude, 0.5995641466615954, epsilon = 1e-12);
        assert_abs_diff_eq!(fix.lat_long.longitude, -2.438848680723166, epsilon = 1e-12);
        assert_abs_diff_eq!(fix.altitude_km, 5085.21873110598, epsilon = 1e-8);
        assert_abs_diff_eq!(fix.velocity, 5.896753901165627, epsilon = 1e-12);

        let fix = eci_to_lla(&EciPosition::new(-4400.594, 1932.870, 4760.712), 0.0);
        assert_abs_diff_eq!(fix.lat_long.latitude, 0.783786593426598, epsilon = 1e-12);
        assert_abs_diff_eq!(fix.lat_long.longitude, 2.7277316222433576, epsilon = 1e-12);
        assert_abs_diff_eq!(fix.altitude_km, 397.50528363577905, epsilon = 1e-8);
        assert_abs_diff_eq!(fix.velocity, 7.669969784532009, epsilon = 1e-12);
    }

    #[test]
    fn test_eci_to_lla_equator() {
        let fix = eci_to_lla(&EciPosition::new(7000.0, 0.0, 0.0), 0.0);
        assert_eq!(fix.lat_long.latitude, 0.0);
        assert_eq!(fix.lat_long.longitude, 0.0);
        assert_abs_diff_eq!(fix.altitude_km, 7000.0 - 6378.137, epsilon = 1e-9);
    }

    #[test]
    fn test_lat_long_deg() {
        let deg = lat_long_deg(&LatLong::new(FRAC_PI_2 / 2.0, -FRAC_PI_2)).unwrap();
        assert_abs_diff_eq!(deg.latitude, 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(deg.longitude, -90.0, epsilon = 1e-12);

        let deg = lat_long_deg(&LatLong::new(0.0, 3.0 * PI)).unwrap();
        assert_eq!(deg.longitude, 180.0);

        let deg = lat_long_deg(&LatLong::new(0.0, -3.0 * PI)).unwrap();
        assert_eq!(deg.longitude, 180.0);

        let deg = lat_long_deg(&LatLong::new(0.0, 1.5 * PI)).unwrap();
        assert_abs_diff_eq!(deg.longitude, -90.0, epsilon = 1e-12);

        let deg = lat_long_deg(&LatLong::new(0.0, -2.438848680723166)).unwrap();
        assert_abs_diff_eq!(deg.longitude, -139.73573627648622, epsilon = 1e-12);
    }

    #[test]
    fn test_lat_long_deg_out_of_bounds() {
        assert_eq!(
            lat_long_deg(&LatLong::new(2.0, 0.0)),
            Err(SatTrackError::LatitudeOutOfBounds(2.0))
        );
        assert_eq!(
            lat_long_deg(&LatLong::new(-2.0, 0.0)),
            Err(SatTrackError::LatitudeOutOfBounds(-2.0))
        );
        assert!(lat_long_deg(&LatLong::new(FRAC_PI_2, 0.0)).is_ok());
    }

    #[test]
    fn test_lla_to_eci() {
        let site = LatLongAlt::from_degrees(45.0, -75.0, 0.5);
        let eci = lla_to_eci(&site, 2454730.01782528, &GravityModel::Wgs72.constants());
        assert_abs_diff_eq!(eci.x(), -1632.487056376783, epsilon = 1e-8);
        assert_abs_diff_eq!(eci.y(), 4212.69444256769, epsilon = 1e-8);
        assert_abs_diff_eq!(eci.z(), 4487.700766175088, epsilon = 1e-8);
    }

    #[test]
    fn test_lla_round_trip() {
        let jd = 2454730.01782528;
        let gravity = GravityModel::Wgs84.constants();

        for lat in [-80.0, -45.0, -10.0, 0.0, 10.0, 30.0, 45.0, 60.0, 89.0] {
            for lon in [-170.0, -75.0, 0.0, 10.0, 120.0, 179.0] {
                for alt in [0.0, 0.5, 400.0, 20000.0] {
                    let site = LatLongAlt::from_degrees(lat, lon, alt);
                    let fix = eci_to_lla(&lla_to_eci(&site, jd, &gravity), theta_g_jd(jd));

                    let dlon = (fix.lat_long.longitude - site.longitude()).sin();
                    assert_abs_diff_eq!(fix.lat_long.latitude, site.latitude(), epsilon = 1e-9);
                    assert_abs_diff_eq!(dlon, 0.0, epsilon = 1e-9);
                    assert_abs_diff_eq!(fix.altitude_km, alt, epsilon = 1e-6);
                }
            }
        }
    }
}

//! # Satellite and propagator boundary
//!
//! A [`Satellite`] couples parsed [`OrbitalElements`] with a [`Propagator`] implementation.
//! The elements stay read-only after parsing; whatever working state the propagator
//! needs (SGP4 initialization terms, deep-space flags, ...) lives in the propagator
//! itself.
//!
//! ```text
//! TLE lines --parse_tle_with--> OrbitalElements --Propagator::init--> Satellite<P>
//!                                                                      |
//!                  position_at(jd) / look_angles_at(observer, jd) <---+
//! ```
use std::error::Error;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    constants::Minutes,
    earth_gravity::GravityModel,
    geodetic::{eci_to_lla, GeodeticFix},
    observers::{LookAngles, Observer},
    ref_system::{EciPosition, EciVelocity},
    sattrack_errors::SatTrackError,
    time::{gstime, JulianDate},
    tle::{parse_tle_with, OrbitalElements, TleOptions},
};

/// Operating mode of an SGP4-family propagator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpsMode {
    /// AFSPC compatibility mode
    Afspc,
    /// Improved mode
    #[default]
    Improved,
}

impl OpsMode {
    /// Single-character code used by SGP4 implementations.
    pub fn as_char(&self) -> char {
        match self {
            OpsMode::Afspc => 'a',
            OpsMode::Improved => 'i',
        }
    }
}

/// Position and velocity produced by a propagator, km and km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: EciPosition,
    pub velocity: EciVelocity,
}

/// An orbit propagator driven by TLE mean elements.
///
/// Implementations keep their own state: `init` is called once per satellite, then
/// `propagate` any number of times with the same elements.
pub trait Propagator {
    type Error: Error + Send + Sync + 'static;

    /// Prepare the propagation of `elements`.
    ///
    /// Arguments
    /// -----------------
    /// * `mode`: operating mode
    /// * `epoch`: epoch as days since Julian date 2433281.5
    ///   ([`OrbitalElements::days_since_sgp4_epoch`])
    /// * `elements`: the parsed mean elements
    fn init(
        &mut self,
        mode: OpsMode,
        epoch: f64,
        elements: &OrbitalElements,
    ) -> Result<(), Self::Error>;

    /// State at `minutes` after the element epoch.
    fn propagate(
        &mut self,
        elements: &OrbitalElements,
        minutes: Minutes,
    ) -> Result<StateVector, Self::Error>;
}

fn propagator_error<E: Error + Send + Sync + 'static>(err: E) -> SatTrackError {
    SatTrackError::Propagator(Box::new(err))
}

/// A tracked satellite: its mean elements and an initialized propagator.
#[derive(Debug, Clone)]
pub struct Satellite<P: Propagator> {
    elements: OrbitalElements,
    propagator: P,
}

impl<P: Propagator> Satellite<P> {
    /// Parse a TLE with the named gravity model and initialize `propagator` in
    /// [`OpsMode::Improved`].
    pub fn from_tle(
        line1: &str,
        line2: &str,
        gravity_model: &str,
        propagator: P,
    ) -> Result<Self, SatTrackError> {
        let model: GravityModel = gravity_model.parse()?;
        Self::from_tle_with(line1, line2, &TleOptions::new(model), propagator)
    }

    /// Parse a TLE with explicit options and initialize `propagator` with
    /// `options.ops_mode`.
    pub fn from_tle_with(
        line1: &str,
        line2: &str,
        options: &TleOptions,
        propagator: P,
    ) -> Result<Self, SatTrackError> {
        let elements = parse_tle_with(line1, line2, options)?;
        Self::from_elements(elements, options.ops_mode, propagator)
    }

    /// Initialize `propagator` on already parsed elements.
    pub fn from_elements(
        elements: OrbitalElements,
        mode: OpsMode,
        mut propagator: P,
    ) -> Result<Self, SatTrackError> {
        let epoch = elements.days_since_sgp4_epoch();
        propagator
            .init(mode, epoch, &elements)
            .map_err(propagator_error)?;

        debug!(
            "propagator initialized for satellite {} in mode '{}' at epoch {epoch}",
            elements.catalog_number,
            mode.as_char()
        );

        Ok(Satellite {
            elements,
            propagator,
        })
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    /// State `minutes` after the element epoch.
    pub fn propagate(&mut self, minutes: Minutes) -> Result<StateVector, SatTrackError> {
        self.propagator
            .propagate(&self.elements, minutes)
            .map_err(propagator_error)
    }

    /// State at the Julian date `jd`.
    pub fn position_at(&mut self, jd: &JulianDate) -> Result<StateVector, SatTrackError> {
        let minutes = jd.minutes_since(&self.elements.jd_epoch);
        self.propagate(minutes)
    }

    /// Look angles of the satellite from `observer` at `jd`, on the satellite's gravity model.
    pub fn look_angles_at(
        &mut self,
        observer: &Observer,
        jd: &JulianDate,
    ) -> Result<LookAngles, SatTrackError> {
        let state = self.position_at(jd)?;
        observer.look_angles(&state.position, jd.single(), &self.elements.gravity)
    }

    /// Sub-satellite point at `jd`, with the sidereal angle of [`gstime`].
    pub fn geodetic_at(&mut self, jd: &JulianDate) -> Result<GeodeticFix, SatTrackError> {
        let state = self.position_at(jd)?;
        Ok(eci_to_lla(&state.position, gstime(jd.single())))
    }
}

#[cfg(test)]
mod satellite_test {
    use std::fmt;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::constants::SGP4_JD_REFERENCE;

    const LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[derive(Debug)]
    struct Decayed;

    impl fmt::Display for Decayed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "satellite has decayed")
        }
    }

    impl Error for Decayed {}

    /// Records its inputs and returns a fixed position.
    #[derive(Debug, Default)]
    struct Recorder {
        init: Option<(OpsMode, f64)>,
        calls: Vec<Minutes>,
        fail_after: Option<Minutes>,
    }

    impl Propagator for Recorder {
        type Error = Decayed;

        fn init(
            &mut self,
            mode: OpsMode,
            epoch: f64,
            _elements: &OrbitalElements,
        ) -> Result<(), Decayed> {
            self.init = Some((mode, epoch));
            Ok(())
        }

        fn propagate(
            &mut self,
            _elements: &OrbitalElements,
            minutes: Minutes,
        ) -> Result<StateVector, Decayed> {
            if self.fail_after.is_some_and(|limit| minutes > limit) {
                return Err(Decayed);
            }
            self.calls.push(minutes);
            Ok(StateVector {
                position: EciPosition::new(6524.834, 6862.875, 6448.296),
                velocity: EciVelocity::new(4.901327, 5.533756, -1.976341),
            })
        }
    }

    #[test]
    fn test_ops_mode() {
        assert_eq!(OpsMode::default(), OpsMode::Improved);
        assert_eq!(OpsMode::Improved.as_char(), 'i');
        assert_eq!(OpsMode::Afspc.as_char(), 'a');
    }

    #[test]
    fn test_from_tle_initializes_propagator() {
        let sat = Satellite::from_tle(LINE1, LINE2, "wgs72", Recorder::default()).unwrap();

        let (mode, epoch) = sat.propagator().init.unwrap();
        assert_eq!(mode, OpsMode::Improved);
        assert_abs_diff_eq!(
            epoch,
            sat.elements().jd_epoch.single() - SGP4_JD_REFERENCE,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(epoch, 21448.51782528, epsilon = 1e-8);
    }

    #[test]
    fn test_from_tle_with_ops_mode() {
        let options = TleOptions::default().with_ops_mode(OpsMode::Afspc);
        let sat = Satellite::from_tle_with(LINE1, LINE2, &options, Recorder::default()).unwrap();
        assert_eq!(sat.propagator().init.unwrap().0, OpsMode::Afspc);
    }

    #[test]
    fn test_from_tle_errors() {
        assert_eq!(
            Satellite::from_tle(LINE1, LINE2, "wgs80", Recorder::default()).unwrap_err(),
            SatTrackError::UnknownGravityModel("wgs80".into())
        );
        assert!(matches!(
            Satellite::from_tle(&LINE1[..68], LINE2, "wgs72", Recorder::default()),
            Err(SatTrackError::TleParsing(_))
        ));
    }

    #[test]
    fn test_position_at_minutes_since_epoch() {
        let mut sat = Satellite::from_tle(LINE1, LINE2, "wgs72", Recorder::default()).unwrap();
        let epoch = sat.elements().jd_epoch;

        sat.position_at(&JulianDate::new(epoch.day, epoch.fraction + 0.5))
            .unwrap();
        sat.position_at(&JulianDate::new(epoch.day - 1.0, epoch.fraction))
            .unwrap();
        sat.propagate(90.0).unwrap();

        let calls = &sat.propagator().calls;
        assert_abs_diff_eq!(calls[0], 720.0, epsilon = 1e-9);
        assert_abs_diff_eq!(calls[1], -1440.0, epsilon = 1e-9);
        assert_eq!(calls[2], 90.0);
    }

    #[test]
    fn test_propagator_failure() {
        let recorder = Recorder {
            fail_after: Some(100.0),
            ..Default::default()
        };
        let mut sat = Satellite::from_tle(LINE1, LINE2, "wgs72", recorder).unwrap();

        assert!(sat.propagate(50.0).is_ok());
        let err = sat.propagate(150.0).unwrap_err();
        assert!(matches!(err, SatTrackError::Propagator(_)));
        assert_eq!(
            err.to_string(),
            "Propagator failure: satellite has decayed"
        );
    }

    #[test]
    fn test_look_angles_and_geodetic_at() {
        let mut sat = Satellite::from_tle(LINE1, LINE2, "wgs72", Recorder::default()).unwrap();
        let jd = sat.elements().jd_epoch;
        let observer = Observer::new(45.0, -75.0, 0.5, None);

        let look = sat.look_angles_at(&observer, &jd).unwrap();
        assert_abs_diff_eq!(look.azimuth, 4.910958117824201, epsilon = 1e-9);
        assert_abs_diff_eq!(look.elevation, 0.11956846426932255, epsilon = 1e-9);
        assert_abs_diff_eq!(look.range, 8798.25422880569, epsilon = 1e-7);

        let fix = sat.geodetic_at(&jd).unwrap();
        assert_abs_diff_eq!(
            fix.lat_long.latitude,
            0.5995641466615954,
            epsilon = 1e-12
        );
        assert!(fix.altitude_km > 5000.0);
    }
}

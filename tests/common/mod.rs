use approx::assert_relative_eq;
use nalgebra::Vector3;
use sattrack::constants::Minutes;
use sattrack::ref_system::{rotmt, Axis, EciPosition, EciVelocity};
use sattrack::satellite::{OpsMode, Propagator, StateVector};
use sattrack::tle::OrbitalElements;
use thiserror::Error;

pub const ISS_LINE1: &str =
    "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
pub const ISS_LINE2: &str =
    "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

pub const VANGUARD_LINE1: &str =
    "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
pub const VANGUARD_LINE2: &str =
    "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Error, Debug)]
pub enum CircularError {
    #[error("propagate called before init")]
    NotInitialized,
}

/// Two-body circular orbit on the TLE mean motion, eccentricity ignored.
///
/// Good enough to drive the transform chain with a moving, orbit-shaped position.
#[derive(Debug, Default)]
pub struct CircularPropagator {
    pub mode: Option<OpsMode>,
    pub epoch: f64,
    radius_km: f64,
}

impl CircularPropagator {
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Propagator for CircularPropagator {
    type Error = CircularError;

    fn init(
        &mut self,
        mode: OpsMode,
        epoch: f64,
        elements: &OrbitalElements,
    ) -> Result<(), CircularError> {
        let gravity = &elements.gravity;
        let semi_major_axis = (gravity.xke / elements.mean_motion).powf(2.0 / 3.0);

        self.mode = Some(mode);
        self.epoch = epoch;
        self.radius_km = semi_major_axis * gravity.radius_earth_km;
        Ok(())
    }

    fn propagate(
        &mut self,
        elements: &OrbitalElements,
        minutes: Minutes,
    ) -> Result<StateVector, CircularError> {
        if self.mode.is_none() {
            return Err(CircularError::NotInitialized);
        }

        let u = elements.argument_of_perigee
            + elements.mean_anomaly
            + elements.mean_motion * minutes;
        let speed = elements.mean_motion * self.radius_km / 60.0;

        let to_inertial = rotmt(elements.right_ascension, Axis::Z)
            * rotmt(elements.inclination, Axis::X);
        let position = to_inertial * Vector3::new(u.cos(), u.sin(), 0.0) * self.radius_km;
        let velocity = to_inertial * Vector3::new(-u.sin(), u.cos(), 0.0) * speed;

        Ok(StateVector {
            position: EciPosition::from_vector(position),
            velocity: EciVelocity::from_vector(velocity),
        })
    }
}

pub fn assert_position_close(actual: &EciPosition, expected: &EciPosition, epsilon: f64) {
    assert_relative_eq!(actual.x(), expected.x(), epsilon = epsilon);
    assert_relative_eq!(actual.y(), expected.y(), epsilon = epsilon);
    assert_relative_eq!(actual.z(), expected.z(), epsilon = epsilon);
}

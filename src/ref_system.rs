//! # Reference frames
//!
//! Cartesian vectors tagged with the frame they are expressed in, and the sidereal
//! rotation between the inertial and the Earth-fixed frame.
//!
//! ## Frames
//!
//! - [`Eci`] – Earth-Centered Inertial, the output frame of SGP4 (TEME in practice).
//! - [`Ecef`] – Earth-Centered Earth-Fixed, rotating with the Earth.
//!
//! ```text
//! ECI  --(R3(θ), θ = Greenwich sidereal angle)-->  ECEF
//! ECEF --(R3(−θ))-------------------------------->  ECI
//! ```
//!
//! The frame is a zero-sized type parameter of [`Cartesian`], so handing an ECEF vector to
//! a function expecting an ECI position does not compile.
use std::{
    fmt,
    marker::PhantomData,
    ops::{Add, Sub},
};

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Kilometer, Radian};

/// Marker trait of the reference frames.
pub trait Frame: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Earth-Centered Inertial frame marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eci;

/// Earth-Centered Earth-Fixed frame marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ecef;

impl Frame for Eci {
    const NAME: &'static str = "ECI";
}

impl Frame for Ecef {
    const NAME: &'static str = "ECEF";
}

/// A Cartesian vector expressed in the frame `F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian<F: Frame> {
    xyz: Vector3<f64>,
    frame: PhantomData<F>,
}

/// Position in the inertial frame, km
pub type EciPosition = Cartesian<Eci>;
/// Velocity in the inertial frame, km/s
pub type EciVelocity = Cartesian<Eci>;
/// Position in the Earth-fixed frame, km
pub type EcefPosition = Cartesian<Ecef>;

impl<F: Frame> Cartesian<F> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_vector(Vector3::new(x, y, z))
    }

    pub fn from_vector(xyz: Vector3<f64>) -> Self {
        Cartesian {
            xyz,
            frame: PhantomData,
        }
    }

    pub fn x(&self) -> f64 {
        self.xyz.x
    }

    pub fn y(&self) -> f64 {
        self.xyz.y
    }

    pub fn z(&self) -> f64 {
        self.xyz.z
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.xyz
    }

    /// Euclidean norm
    pub fn norm(&self) -> Kilometer {
        self.xyz.norm()
    }

    /// Distance to the rotation axis, √(x² + y²)
    pub fn equatorial_norm(&self) -> Kilometer {
        (self.xyz.x * self.xyz.x + self.xyz.y * self.xyz.y).sqrt()
    }
}

impl<F: Frame> Sub for Cartesian<F> {
    type Output = Cartesian<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        Cartesian::from_vector(self.xyz - rhs.xyz)
    }
}

impl<F: Frame> Add for Cartesian<F> {
    type Output = Cartesian<F>;

    fn add(self, rhs: Self) -> Self::Output {
        Cartesian::from_vector(self.xyz + rhs.xyz)
    }
}

impl<F: Frame> From<[f64; 3]> for Cartesian<F> {
    fn from(value: [f64; 3]) -> Self {
        Cartesian::new(value[0], value[1], value[2])
    }
}

impl<F: Frame> fmt::Display for Cartesian<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:.6}, {:.6}, {:.6})",
            F::NAME,
            self.xyz.x,
            self.xyz.y,
            self.xyz.z
        )
    }
}

/// Axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary rotation matrix of angle `alpha` around `axis`.
///
/// The rotation is applied to the vector in a fixed frame, in the direct sense:
/// `rotmt(α, Axis::Z) · (1, 0, 0) = (cos α, sin α, 0)`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotate an inertial vector into the Earth-fixed frame.
///
/// Arguments
/// ---------
/// * `eci`: position in the inertial frame
/// * `gmst`: Greenwich sidereal angle, radians
///
/// Return
/// ------
/// * `(x cos θ + y sin θ, −x sin θ + y cos θ, z)`
pub fn eci_to_ecef(eci: &EciPosition, gmst: Radian) -> EcefPosition {
    Cartesian::from_vector(rotmt(-gmst, Axis::Z) * eci.xyz)
}

/// Rotate an Earth-fixed vector back into the inertial frame, inverse of [`eci_to_ecef`].
pub fn ecef_to_eci(ecef: &EcefPosition, gmst: Radian) -> EciPosition {
    Cartesian::from_vector(rotmt(gmst, Axis::Z) * ecef.xyz)
}

#[cfg(test)]
mod ref_system_test {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::constants::DPI;

    fn assert_close<F: Frame>(a: &Cartesian<F>, b: &Cartesian<F>, tol: f64) {
        assert_abs_diff_eq!(a.x(), b.x(), epsilon = tol);
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = tol);
        assert_abs_diff_eq!(a.z(), b.z(), epsilon = tol);
    }

    #[test]
    fn test_rotmt_direct_sense() {
        let r = rotmt(FRAC_PI_2, Axis::Z);
        let v = r * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-15);

        let r = rotmt(FRAC_PI_2, Axis::X);
        let v = r * Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(v.z, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_eci_to_ecef_formula() {
        let eci = EciPosition::new(6524.834, 6862.875, 6448.296);
        for gmst in [0.0, 0.3, 1.7, 3.2494915806279465, 5.9] {
            let ecef = eci_to_ecef(&eci, gmst);
            let expected_x = eci.x() * gmst.cos() + eci.y() * gmst.sin();
            let expected_y = eci.x() * -gmst.sin() + eci.y() * gmst.cos();
            assert_abs_diff_eq!(ecef.x(), expected_x, epsilon = 1e-9);
            assert_abs_diff_eq!(ecef.y(), expected_y, epsilon = 1e-9);
            assert_abs_diff_eq!(ecef.z(), eci.z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_eci_to_ecef_quarter_turn() {
        let ecef = eci_to_ecef(&EciPosition::new(7000.0, 0.0, 10.0), FRAC_PI_2);
        assert_close(&ecef, &EcefPosition::new(0.0, -7000.0, 10.0), 1e-9);

        let ecef = eci_to_ecef(&EciPosition::new(0.0, 7000.0, 0.0), PI);
        assert_close(&ecef, &EcefPosition::new(0.0, -7000.0, 0.0), 1e-9);
    }

    #[test]
    fn test_round_trip_all_angles() {
        let eci = EciPosition::new(-4123.5, 5210.25, -1999.75);
        let steps = 360;
        for i in 0..steps {
            let gmst = DPI * i as f64 / steps as f64;
            let back = ecef_to_eci(&eci_to_ecef(&eci, gmst), gmst);
            assert_close(&back, &eci, 1e-9);
            assert_abs_diff_eq!(eci_to_ecef(&eci, gmst).norm(), eci.norm(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cartesian_ops() {
        let a = EciPosition::new(1.0, 2.0, 3.0);
        let b = EciPosition::from([0.5, 0.5, 0.5]);
        assert_eq!(a - b, EciPosition::new(0.5, 1.5, 2.5));
        assert_eq!(a + b, EciPosition::new(1.5, 2.5, 3.5));
        assert_eq!(EciPosition::new(3.0, 4.0, 12.0).norm(), 13.0);
        assert_eq!(EciPosition::new(3.0, 4.0, 12.0).equatorial_norm(), 5.0);
        assert_eq!(
            EcefPosition::new(1.0, 2.0, 3.0).to_string(),
            "ECEF(1.000000, 2.000000, 3.000000)"
        );
    }
}

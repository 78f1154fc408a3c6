pub mod constants;
pub mod earth_gravity;
pub mod geodetic;
pub mod observers;
pub mod ref_system;
pub mod satellite;
pub mod sattrack_errors;
pub mod time;
pub mod tle;

pub use earth_gravity::{GravConst, GravityModel};
pub use observers::{LookAngles, Observer};
pub use sattrack_errors::SatTrackError;
pub use satellite::{OpsMode, Propagator, Satellite, StateVector};
pub use tle::{parse_tle, parse_tle_with, OrbitalElements, TleOptions};

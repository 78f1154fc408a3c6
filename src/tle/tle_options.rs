use serde::{Deserialize, Serialize};

use crate::{earth_gravity::GravityModel, satellite::OpsMode};

/// Two-digit epoch years below this value belong to the 2000s, the others to the 1900s.
pub const DEFAULT_CENTURY_PIVOT: u32 = 57;

/// Parsing configuration of a TLE.
///
/// # Fields
///
/// * `gravity_model` - constants bundle attached to the parsed elements
/// * `century_pivot` - two-digit years `< century_pivot` resolve to `20yy`, the others to `19yy`
/// * `verify_checksum` - reject lines whose modulo-10 checksum digit does not match
/// * `ops_mode` - operating mode handed to the propagator at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TleOptions {
    pub gravity_model: GravityModel,
    pub century_pivot: u32,
    pub verify_checksum: bool,
    pub ops_mode: OpsMode,
}

impl Default for TleOptions {
    fn default() -> Self {
        TleOptions {
            gravity_model: GravityModel::default(),
            century_pivot: DEFAULT_CENTURY_PIVOT,
            verify_checksum: false,
            ops_mode: OpsMode::default(),
        }
    }
}

impl TleOptions {
    pub fn new(gravity_model: GravityModel) -> Self {
        TleOptions {
            gravity_model,
            ..Default::default()
        }
    }

    /// Use another gravity model.
    pub fn with_gravity_model(mut self, gravity_model: GravityModel) -> Self {
        self.gravity_model = gravity_model;
        self
    }

    /// Move the two-digit year pivot.
    pub fn with_century_pivot(mut self, pivot: u32) -> Self {
        self.century_pivot = pivot;
        self
    }

    /// Enable or disable the checksum verification.
    pub fn with_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }

    pub fn with_ops_mode(mut self, ops_mode: OpsMode) -> Self {
        self.ops_mode = ops_mode;
        self
    }
}

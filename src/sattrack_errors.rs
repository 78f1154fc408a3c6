use thiserror::Error;

use crate::tle::ParseTleError;

#[derive(Error, Debug)]
pub enum SatTrackError {
    #[error("{0} is not a valid gravity model")]
    UnknownGravityModel(String),

    #[error("Error during the TLE parsing: {0}")]
    TleParsing(#[from] ParseTleError),

    #[error("Latitude {0} rad not within bounds -pi/2 to +pi/2")]
    LatitudeOutOfBounds(f64),

    #[error("Observer and satellite positions coincide, look angles are undefined")]
    CoincidentPositions,

    #[error("Propagator failure: {0}")]
    Propagator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PartialEq for SatTrackError {
    fn eq(&self, other: &Self) -> bool {
        use SatTrackError::*;
        match (self, other) {
            (UnknownGravityModel(a), UnknownGravityModel(b)) => a == b,
            (TleParsing(a), TleParsing(b)) => a == b,
            (LatitudeOutOfBounds(a), LatitudeOutOfBounds(b)) => a == b,

            // boxed collaborator errors are not comparable: same variant is enough
            (Propagator(_), Propagator(_)) => true,

            (CoincidentPositions, CoincidentPositions) => true,

            _ => false,
        }
    }
}

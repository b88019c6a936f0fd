use std::fmt;

use crate::vehicle::VehicleType;

pub type Result<T> = std::result::Result<T, LotError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotError {
    /// A lot dimension was outside `[1, max]` at construction.
    InvalidDimension {
        axis: &'static str,
        value: usize,
        max: usize,
    },
    /// A coordinate fell outside the lot's bounds.
    OutOfRange {
        floor: usize,
        row: usize,
        column: usize,
    },
    /// A spot id was not three `-` separated integers.
    InvalidSpotId(String),
    /// The spot is free or held by a different vehicle.
    OccupantMismatch { spot_id: String, vehicle_id: String },
    NoAvailableSpot(VehicleType),
    VehicleNotFound(String),
    LockPoisoned(&'static str),
    /// A lot layout could not be decoded.
    Layout(String),
}

impl fmt::Display for LotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotError::InvalidDimension { axis, value, max } => {
                write!(f, "invalid number of {} {} (1-{})", axis, value, max)
            }
            LotError::OutOfRange { floor, row, column } => write!(
                f,
                "spot {}-{}-{} is outside the lot",
                floor, row, column
            ),
            LotError::InvalidSpotId(id) => write!(f, "invalid spot id format: {:?}", id),
            LotError::OccupantMismatch {
                spot_id,
                vehicle_id,
            } => write!(
                f,
                "vehicle {} not found at spot {}",
                vehicle_id, spot_id
            ),
            LotError::NoAvailableSpot(vehicle_type) => {
                write!(f, "no available parking spot for {}", vehicle_type)
            }
            LotError::VehicleNotFound(vehicle_id) => {
                write!(f, "vehicle {} not found", vehicle_id)
            }
            LotError::LockPoisoned(operation) => {
                write!(f, "parking lot lock poisoned during {}", operation)
            }
            LotError::Layout(message) => write!(f, "layout error: {}", message),
        }
    }
}

impl std::error::Error for LotError {}

impl From<serde_json::Error> for LotError {
    fn from(err: serde_json::Error) -> Self {
        LotError::Layout(err.to_string())
    }
}

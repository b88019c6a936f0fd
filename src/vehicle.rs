use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of vehicle a spot accepts.
///
/// `Inactive` spots accept nothing and never match a park or availability
/// query. The textual codes (`B-1`, `M-1`, `A-1`, `0-0`) are what layouts and
/// notification payloads carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "B-1", alias = "Bicycle")]
    Bicycle,
    #[serde(rename = "M-1", alias = "Motorcycle")]
    Motorcycle,
    #[serde(rename = "A-1", alias = "Automobile")]
    Automobile,
    #[default]
    #[serde(rename = "0-0", alias = "Inactive")]
    Inactive,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Bicycle,
        VehicleType::Motorcycle,
        VehicleType::Automobile,
        VehicleType::Inactive,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::Bicycle => "B-1",
            VehicleType::Motorcycle => "M-1",
            VehicleType::Automobile => "A-1",
            VehicleType::Inactive => "0-0",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleType::Bicycle => "Bicycle",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Automobile => "Automobile",
            VehicleType::Inactive => "Inactive",
        }
    }

    /// Whether a spot with this designation can ever hold a vehicle.
    pub fn is_active(&self) -> bool {
        !matches!(self, VehicleType::Inactive)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error when a string names no known vehicle type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVehicleTypeError {
    pub input: String,
}

impl fmt::Display for ParseVehicleTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vehicle type: {:?}", self.input)
    }
}

impl std::error::Error for ParseVehicleTypeError {}

impl FromStr for VehicleType {
    type Err = ParseVehicleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleType::ALL
            .into_iter()
            .find(|t| t.code() == trimmed || t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseVehicleTypeError {
                input: s.to_string(),
            })
    }
}

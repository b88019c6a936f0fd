use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::SpotId;
use crate::vehicle::VehicleType;

/// One addressable parking location.
///
/// The coordinates are fixed when the lot is built; only the designation and
/// the occupancy fields change afterwards. A cloned `Spot` is a point-in-time
/// snapshot, which is what the history ledger stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    floor: usize,
    row: usize,
    column: usize,
    vehicle_type: VehicleType,
    is_occupied: bool,
    occupant: String,
    occupied_at: Option<SystemTime>,
}

impl Spot {
    pub(crate) fn inactive(floor: usize, row: usize, column: usize) -> Self {
        Spot {
            floor,
            row,
            column,
            vehicle_type: VehicleType::Inactive,
            is_occupied: false,
            occupant: String::new(),
            occupied_at: None,
        }
    }

    pub fn id(&self) -> SpotId {
        SpotId::new(self.floor, self.row, self.column)
    }

    pub fn floor(&self) -> usize {
        self.floor
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    /// Plate of the vehicle in the spot, empty when free.
    pub fn occupant(&self) -> &str {
        &self.occupant
    }

    pub fn occupied_at(&self) -> Option<SystemTime> {
        self.occupied_at
    }

    /// Free and designated for `vehicle_type`. Never true for `Inactive`.
    pub fn accepts(&self, vehicle_type: VehicleType) -> bool {
        vehicle_type.is_active() && self.vehicle_type == vehicle_type && !self.is_occupied
    }

    pub fn is_held_by(&self, vehicle_id: &str) -> bool {
        self.is_occupied && self.occupant == vehicle_id
    }

    pub(crate) fn set_vehicle_type(&mut self, vehicle_type: VehicleType) {
        self.vehicle_type = vehicle_type;
    }

    pub(crate) fn occupy(&mut self, vehicle_id: impl Into<String>) {
        self.is_occupied = true;
        self.occupant = vehicle_id.into();
        self.occupied_at = Some(SystemTime::now());
    }

    /// First half of a release: the spot reads as free but still names its
    /// last occupant. History snapshots are taken in this state.
    pub(crate) fn mark_vacant(&mut self) {
        self.is_occupied = false;
    }

    pub(crate) fn clear_occupant(&mut self) {
        self.occupant.clear();
        self.occupied_at = None;
    }
}

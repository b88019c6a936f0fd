use serde::{Deserialize, Serialize};

use super::grid::Dimensions;
use super::lot::ParkingLot;
use crate::error::Result;
use crate::history::{History, InMemoryHistory};
use crate::vehicle::VehicleType;

/// Designation for a single spot in a [`LotLayout`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotAssignment {
    pub floor: usize,
    pub row: usize,
    pub column: usize,
    pub vehicle_type: VehicleType,
}

/// Startup description of a lot: its size plus every non-inactive spot.
///
/// ```json
/// {
///   "floors": 1, "rows": 2, "columns": 10,
///   "spots": [{ "floor": 1, "row": 1, "column": 2, "vehicle_type": "A-1" }]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLayout {
    pub floors: usize,
    pub rows: usize,
    pub columns: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spots: Vec<SpotAssignment>,
}

impl LotLayout {
    pub fn new(floors: usize, rows: usize, columns: usize) -> Self {
        LotLayout {
            floors,
            rows,
            columns,
            spots: Vec::new(),
        }
    }

    pub fn assign(
        mut self,
        floor: usize,
        row: usize,
        column: usize,
        vehicle_type: VehicleType,
    ) -> Self {
        self.spots.push(SpotAssignment {
            floor,
            row,
            column,
            vehicle_type,
        });
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ParkingLot<InMemoryHistory> {
    pub fn from_layout(layout: &LotLayout) -> Result<Self> {
        Self::from_layout_with_history(layout, InMemoryHistory::new())
    }
}

impl<H: History> ParkingLot<H> {
    /// Build a lot and apply the layout's assignments in order. Fails on the
    /// first assignment outside the lot.
    pub fn from_layout_with_history(layout: &LotLayout, history: H) -> Result<Self> {
        let lot = Self::with_history(layout.floors, layout.rows, layout.columns, history)?;
        for spot in &layout.spots {
            lot.set_spot_type(spot.floor, spot.row, spot.column, spot.vehicle_type)?;
        }
        Ok(lot)
    }

    /// Current designations as a layout. Inactive spots are left out.
    pub fn layout(&self) -> Result<LotLayout> {
        let Dimensions {
            floors,
            rows,
            columns,
        } = self.dimensions()?;
        let mut layout = LotLayout::new(floors, rows, columns);
        layout.spots = self
            .spots_where(|spot| spot.vehicle_type().is_active())?
            .into_iter()
            .map(|spot| SpotAssignment {
                floor: spot.floor(),
                row: spot.row(),
                column: spot.column(),
                vehicle_type: spot.vehicle_type(),
            })
            .collect();
        Ok(layout)
    }
}

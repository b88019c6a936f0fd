//! In-memory allocator for a multi-floor parking lot.
//!
//! A [`ParkingLot`] owns a fixed `floors × rows × columns` grid of spots,
//! each designated for one [`VehicleType`]. Vehicles are parked in the first
//! free matching spot in scan order (floor, row, column), released by spot id,
//! and can be looked up by plate, falling back to the occupancy
//! [`History`] when they have already left.
//!
//! ```
//! use parkade::{ParkingLot, VehicleType};
//!
//! let lot = ParkingLot::new(1, 2, 10)?;
//! lot.set_spot_type(1, 1, 2, VehicleType::Automobile)?;
//!
//! let spot = lot.park(VehicleType::Automobile, "B1284SS")?;
//! assert_eq!(spot.to_string(), "1-1-2");
//!
//! lot.unpark("1-1-2", "B1284SS")?;
//! assert_eq!(lot.search("B1284SS")?, spot);
//! # Ok::<(), parkade::LotError>(())
//! ```

mod error;
mod history;
mod lot;
mod spot;
mod vehicle;

pub use error::{LotError, Result};
pub use history::{History, InMemoryHistory};
pub use lot::{
    Dimensions, LotLayout, Occupancy, ParkingLot, SpotAssignment, MAX_COLUMNS, MAX_FLOORS,
    MAX_ROWS, SPOT_OCCUPIED, SPOT_RELEASED,
};
pub use spot::{Spot, SpotId};
pub use vehicle::{ParseVehicleTypeError, VehicleType};


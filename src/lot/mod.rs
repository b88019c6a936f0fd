mod grid;
mod layout;
mod lot;
mod notify;

pub use grid::{Dimensions, MAX_COLUMNS, MAX_FLOORS, MAX_ROWS};
pub use layout::{LotLayout, SpotAssignment};
pub use lot::{Occupancy, ParkingLot};
pub use notify::{SPOT_OCCUPIED, SPOT_RELEASED};

mod spot;
mod spot_id;

pub use spot::Spot;
pub use spot_id::SpotId;

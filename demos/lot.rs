//! Builds the sample lot, parks and releases one car, and prints what happens.
//!
//! Run with `cargo run --example lot`.

use parkade::{LotLayout, ParkingLot, VehicleType};

const LAYOUT: &str = r#"{
    "floors": 1,
    "rows": 2,
    "columns": 10,
    "spots": [
        { "floor": 1, "row": 1, "column": 1, "vehicle_type": "M-1" },
        { "floor": 1, "row": 1, "column": 2, "vehicle_type": "A-1" },
        { "floor": 1, "row": 1, "column": 3, "vehicle_type": "B-1" },
        { "floor": 1, "row": 1, "column": 4, "vehicle_type": "A-1" },
        { "floor": 1, "row": 2, "column": 1, "vehicle_type": "A-1" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lot = ParkingLot::from_layout(&LotLayout::from_json(LAYOUT)?)?;

    let spot_id = lot.park(VehicleType::Automobile, "B1284SS")?;
    println!("Spot parked, occupied at {}", spot_id);

    let available: Vec<String> = lot
        .available_spots(VehicleType::Automobile)?
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Available spots - {:?}", available);

    lot.unpark(&spot_id.to_string(), "B1284SS")?;
    println!("Unparking success: {}", spot_id);

    println!("Last seen B1284SS at {}", lot.search("B1284SS")?);
    Ok(())
}

use parkade::{ParkingLot, SpotId, VehicleType};

use crate::support::demo_lot;

const TYPES: [VehicleType; 3] = [
    VehicleType::Bicycle,
    VehicleType::Motorcycle,
    VehicleType::Automobile,
];

/// Small deterministic generator so the mixed-workload test is repeatable.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn striped_lot() -> ParkingLot {
    let lot = ParkingLot::new(2, 4, 5).unwrap();
    for floor in 1..=2 {
        for row in 1..=4 {
            for column in 1..=5 {
                let vehicle_type = match (floor + row + column) % 4 {
                    0 => VehicleType::Bicycle,
                    1 => VehicleType::Motorcycle,
                    2 => VehicleType::Automobile,
                    _ => VehicleType::Inactive,
                };
                lot.set_spot_type(floor, row, column, vehicle_type).unwrap();
            }
        }
    }
    lot
}

#[test]
fn spot_ids_round_trip_for_every_spot() {
    let lot = ParkingLot::new(2, 3, 4).unwrap();
    let dims = lot.dimensions().unwrap();
    for floor in 1..=dims.floors {
        for row in 1..=dims.rows {
            for column in 1..=dims.columns {
                let id = lot.spot(floor, row, column).unwrap().id();
                let parsed: SpotId = id.to_string().parse().unwrap();
                assert_eq!((parsed.floor, parsed.row, parsed.column), (floor, row, column));
            }
        }
    }
}

#[test]
fn available_spots_is_idempotent() {
    let lot = striped_lot();
    lot.park(VehicleType::Automobile, "A").unwrap();
    for vehicle_type in TYPES {
        let first = lot.available_spots(vehicle_type).unwrap();
        let second = lot.available_spots(vehicle_type).unwrap();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]), "scan order");
    }
}

#[test]
fn park_returns_head_of_availability() {
    let lot = striped_lot();
    for vehicle_type in TYPES {
        let mut n = 0;
        loop {
            let expected = lot.available_spots(vehicle_type).unwrap().first().copied();
            match lot.park(vehicle_type, &format!("{vehicle_type}-{n}")) {
                Ok(id) => assert_eq!(Some(id), expected),
                Err(_) => {
                    assert!(expected.is_none());
                    break;
                }
            }
            n += 1;
        }
    }
}

#[test]
fn park_and_unpark_maintain_availability() {
    let lot = striped_lot();
    let mut rng = Lcg(42);
    let mut parked: Vec<(SpotId, String, VehicleType)> = Vec::new();

    for step in 0..400 {
        if !parked.is_empty() && rng.below(3) == 0 {
            let (id, vehicle, vehicle_type) = parked.swap_remove(rng.below(parked.len()));
            lot.unpark(&id.to_string(), &vehicle).unwrap();

            assert!(lot.available_spots(vehicle_type).unwrap().contains(&id));
            assert!(lot.search_park_vehicle(&vehicle).is_err());
            assert_eq!(lot.search(&vehicle).unwrap(), id);
        } else {
            let vehicle_type = TYPES[rng.below(TYPES.len())];
            let vehicle = format!("V{step}");
            if let Ok(id) = lot.park(vehicle_type, &vehicle) {
                let spot = lot.search_park_vehicle(&vehicle).unwrap();
                assert_eq!(spot.id(), id);
                assert_eq!(spot.vehicle_type(), vehicle_type);
                assert!(!lot.available_spots(vehicle_type).unwrap().contains(&id));
                assert!(parked.iter().all(|(taken, _, _)| *taken != id));
                parked.push((id, vehicle, vehicle_type));
            }
        }

        for vehicle_type in TYPES {
            let occupancy = lot.occupancy(vehicle_type).unwrap();
            assert_eq!(
                occupancy.available(),
                lot.available_spots(vehicle_type).unwrap().len()
            );
        }
    }
}

#[test]
fn inactive_spots_never_listed() {
    let lot = demo_lot();
    assert!(lot.available_spots(VehicleType::Inactive).unwrap().is_empty());
    assert_eq!(lot.occupancy(VehicleType::Inactive).unwrap().total, 15);
}

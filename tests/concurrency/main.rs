//! Many threads against one shared lot.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use parkade::{History, InMemoryHistory, LotError, ParkingLot, SpotId, VehicleType};

fn automobile_lot(floors: usize, rows: usize, columns: usize) -> ParkingLot {
    let lot = ParkingLot::new(floors, rows, columns).unwrap();
    for floor in 1..=floors {
        for row in 1..=rows {
            for column in 1..=columns {
                lot.set_spot_type(floor, row, column, VehicleType::Automobile)
                    .unwrap();
            }
        }
    }
    lot
}

// ============================================================================
// Concurrent parking never hands out a spot twice
// ============================================================================

#[test]
fn concurrent_parkers_get_distinct_spots() {
    let lot = Arc::new(automobile_lot(2, 5, 10));
    let threads = 8;
    let per_thread = 20;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let lot = Arc::clone(&lot);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut taken = Vec::new();
                for i in 0..per_thread {
                    match lot.park(VehicleType::Automobile, &format!("T{t}-{i}")) {
                        Ok(id) => taken.push(id),
                        Err(LotError::NoAvailableSpot(_)) => {}
                        Err(err) => panic!("unexpected error: {err}"),
                    }
                }
                taken
            })
        })
        .collect();

    let mut all: Vec<SpotId> = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }

    // 160 requests against 100 spots.
    assert_eq!(all.len(), 100);
    let unique: HashSet<SpotId> = all.iter().copied().collect();
    assert_eq!(unique.len(), all.len());
    assert!(lot.available_spots(VehicleType::Automobile).unwrap().is_empty());
}

#[test]
fn concurrent_park_unpark_cycles_leave_lot_empty() {
    let lot = Arc::new(automobile_lot(1, 2, 3));
    let threads = 6;
    let cycles = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let lot = Arc::clone(&lot);
            thread::spawn(move || {
                let vehicle = format!("CAR-{t}");
                let mut completed = 0;
                for _ in 0..cycles {
                    if let Ok(id) = lot.park(VehicleType::Automobile, &vehicle) {
                        assert_eq!(lot.search_park_vehicle(&vehicle).unwrap().id(), id);
                        lot.unpark(&id.to_string(), &vehicle).unwrap();
                        completed += 1;
                    }
                }
                completed
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let completed = handle.join().unwrap();
        let history = lot.history(&format!("CAR-{t}")).unwrap().unwrap_or_default();
        assert_eq!(history.len(), completed * 2);
        for pair in history.chunks(2) {
            assert!(pair[0].is_occupied());
            assert!(!pair[1].is_occupied());
            assert_eq!(pair[0].id(), pair[1].id());
        }
    }

    assert_eq!(lot.available_spots(VehicleType::Automobile).unwrap().len(), 6);
}

#[test]
fn readers_run_alongside_writers() {
    let lot = Arc::new(automobile_lot(1, 10, 10));
    let writer = {
        let lot = Arc::clone(&lot);
        thread::spawn(move || {
            for i in 0..100 {
                lot.park(VehicleType::Automobile, &format!("W{i}")).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let lot = Arc::clone(&lot);
            thread::spawn(move || {
                let mut last = usize::MAX;
                for _ in 0..50 {
                    let free = lot.available_spots(VehicleType::Automobile).unwrap().len();
                    // Availability only shrinks while the writer runs.
                    assert!(free <= last);
                    last = free;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(lot.occupancy(VehicleType::Automobile).unwrap().occupied, 100);
}

#[test]
fn shared_history_sees_every_transition() {
    let history = InMemoryHistory::new();
    let lot = Arc::new(
        ParkingLot::with_history(1, 1, 4, history.clone()).unwrap(),
    );
    for column in 1..=4 {
        lot.set_spot_type(1, 1, column, VehicleType::Bicycle).unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let lot = Arc::clone(&lot);
            thread::spawn(move || {
                let rider = format!("R{t}");
                let id = lot.park(VehicleType::Bicycle, &rider).unwrap();
                lot.unpark(&id.to_string(), &rider).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(history.vehicle_count().unwrap(), 4);
    for t in 0..4 {
        assert_eq!(history.get(&format!("R{t}")).unwrap().unwrap().len(), 2);
    }
}

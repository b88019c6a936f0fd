use std::sync::RwLock;

use log::{debug, trace};

use super::grid::{Dimensions, Grid};
use super::notify::{Notifier, SPOT_OCCUPIED, SPOT_RELEASED};
use crate::error::{LotError, Result};
use crate::history::{History, InMemoryHistory};
use crate::spot::{Spot, SpotId};
use crate::vehicle::VehicleType;

/// Spot counts for one designation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub total: usize,
    pub occupied: usize,
}

impl Occupancy {
    pub fn available(&self) -> usize {
        self.total - self.occupied
    }
}

/// A multi-floor parking lot.
///
/// The grid and its dimensions sit behind one `RwLock`: `set_spot_type`,
/// `park` and `unpark` take it exclusively, the queries share it. The history
/// ledger has its own lock and is only ever entered while the grid lock is
/// held (grid outer, history inner), never the other way round.
///
/// All matching walks the grid in scan order (floor, row, column, ascending)
/// and the first hit wins.
pub struct ParkingLot<H: History = InMemoryHistory> {
    grid: RwLock<Grid>,
    history: H,
    notifier: Notifier,
}

impl ParkingLot<InMemoryHistory> {
    /// Build a lot of `floors × rows × columns` inactive spots.
    ///
    /// Floors must be in `1..=8`, rows and columns in `1..=1000`.
    pub fn new(floors: usize, rows: usize, columns: usize) -> Result<Self> {
        Self::with_history(floors, rows, columns, InMemoryHistory::new())
    }
}

impl<H: History> ParkingLot<H> {
    pub fn with_history(floors: usize, rows: usize, columns: usize, history: H) -> Result<Self> {
        let dimensions = Dimensions::new(floors, rows, columns)?;
        debug!("building {}x{}x{} parking lot", floors, rows, columns);
        Ok(ParkingLot {
            grid: RwLock::new(Grid::new(dimensions)),
            history,
            notifier: Notifier::new(),
        })
    }

    pub fn history_ledger(&self) -> &H {
        &self.history
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        let grid = self
            .grid
            .read()
            .map_err(|_| LotError::LockPoisoned("dimensions"))?;
        Ok(grid.dimensions())
    }

    /// Change a spot's designation. Occupancy is left untouched.
    pub fn set_spot_type(
        &self,
        floor: usize,
        row: usize,
        column: usize,
        vehicle_type: VehicleType,
    ) -> Result<()> {
        let mut grid = self
            .grid
            .write()
            .map_err(|_| LotError::LockPoisoned("set_spot_type"))?;
        grid.spot_mut(floor, row, column)?
            .set_vehicle_type(vehicle_type);
        trace!("spot {}-{}-{} set to {}", floor, row, column, vehicle_type);
        Ok(())
    }

    /// Park a vehicle in the first free spot designated for `vehicle_type`.
    ///
    /// The vehicle is not checked against spots it may already hold.
    pub fn park(&self, vehicle_type: VehicleType, vehicle_id: &str) -> Result<SpotId> {
        let mut grid = self
            .grid
            .write()
            .map_err(|_| LotError::LockPoisoned("park"))?;

        let index = grid
            .position(|spot| spot.accepts(vehicle_type))
            .ok_or(LotError::NoAvailableSpot(vehicle_type))?;

        let mut occupied = grid.get(index).clone();
        occupied.occupy(vehicle_id);

        // History first: a failed append must leave the grid untouched.
        self.history.record(vehicle_id, occupied.clone())?;
        let spot_id = occupied.id();
        debug!("parked {} ({}) at {}", vehicle_id, vehicle_type, spot_id);
        self.notifier.notify(SPOT_OCCUPIED, &occupied);
        grid.replace(index, occupied);

        Ok(spot_id)
    }

    /// Release `spot_id` if `vehicle_id` is the vehicle parked there.
    ///
    /// The recorded history snapshot is taken mid-release: it reads as free
    /// but still names the departing vehicle.
    pub fn unpark(&self, spot_id: &str, vehicle_id: &str) -> Result<()> {
        let id = SpotId::parse(spot_id)?;

        let mut grid = self
            .grid
            .write()
            .map_err(|_| LotError::LockPoisoned("unpark"))?;

        let index = grid.index_of(id)?;
        if !grid.get(index).is_held_by(vehicle_id) {
            return Err(LotError::OccupantMismatch {
                spot_id: id.to_string(),
                vehicle_id: vehicle_id.to_string(),
            });
        }

        let mut released = grid.get(index).clone();
        released.mark_vacant();
        self.history.record(vehicle_id, released.clone())?;
        debug!("unparked {} from {}", vehicle_id, id);
        self.notifier.notify(SPOT_RELEASED, &released);

        released.clear_occupant();
        grid.replace(index, released);

        Ok(())
    }

    /// Ids of every free spot designated for `vehicle_type`, in scan order.
    pub fn available_spots(&self, vehicle_type: VehicleType) -> Result<Vec<SpotId>> {
        let grid = self
            .grid
            .read()
            .map_err(|_| LotError::LockPoisoned("available_spots"))?;
        Ok(grid
            .spots()
            .iter()
            .filter(|spot| spot.accepts(vehicle_type))
            .map(Spot::id)
            .collect())
    }

    /// The spot `vehicle_id` currently occupies. History is not consulted.
    pub fn search_park_vehicle(&self, vehicle_id: &str) -> Result<Spot> {
        let grid = self
            .grid
            .read()
            .map_err(|_| LotError::LockPoisoned("search_park_vehicle"))?;
        grid.spots()
            .iter()
            .find(|spot| spot.is_held_by(vehicle_id))
            .cloned()
            .ok_or_else(|| LotError::VehicleNotFound(vehicle_id.to_string()))
    }

    /// Where `vehicle_id` is parked now, or else where it was last seen.
    pub fn search(&self, vehicle_id: &str) -> Result<SpotId> {
        match self.search_park_vehicle(vehicle_id) {
            Ok(spot) => Ok(spot.id()),
            Err(LotError::VehicleNotFound(_)) => self
                .history
                .last(vehicle_id)?
                .map(|snapshot| snapshot.id())
                .ok_or_else(|| LotError::VehicleNotFound(vehicle_id.to_string())),
            Err(err) => Err(err),
        }
    }

    /// Snapshot of a single spot.
    pub fn spot(&self, floor: usize, row: usize, column: usize) -> Result<Spot> {
        let grid = self
            .grid
            .read()
            .map_err(|_| LotError::LockPoisoned("spot"))?;
        grid.spot(floor, row, column).cloned()
    }

    /// Snapshots of every spot matching `predicate`, in scan order.
    pub fn spots_where<F>(&self, predicate: F) -> Result<Vec<Spot>>
    where
        F: Fn(&Spot) -> bool,
    {
        let grid = self
            .grid
            .read()
            .map_err(|_| LotError::LockPoisoned("spots_where"))?;
        Ok(grid
            .spots()
            .iter()
            .filter(|spot| predicate(spot))
            .cloned()
            .collect())
    }

    /// Every snapshot recorded for `vehicle_id`, oldest first.
    pub fn history(&self, vehicle_id: &str) -> Result<Option<Vec<Spot>>> {
        self.history.get(vehicle_id)
    }

    pub fn occupancy(&self, vehicle_type: VehicleType) -> Result<Occupancy> {
        let grid = self
            .grid
            .read()
            .map_err(|_| LotError::LockPoisoned("occupancy"))?;
        Ok(grid
            .spots()
            .iter()
            .filter(|spot| spot.vehicle_type() == vehicle_type)
            .fold(Occupancy::default(), |mut acc, spot| {
                acc.total += 1;
                if spot.is_occupied() {
                    acc.occupied += 1;
                }
                acc
            }))
    }

    /// Register a listener for `SpotOccupied` / `SpotReleased`.
    ///
    /// Listeners run on the emitter's own threads and receive the spot
    /// snapshot as JSON.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F) -> Result<()>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.notifier.on(event, listener)
    }
}

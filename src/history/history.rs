use crate::error::Result;
use crate::spot::Spot;

/// Append-only, per-vehicle log of spot snapshots.
///
/// Snapshots for a vehicle come back in the order they were recorded. The
/// lot calls `record` while holding its own grid lock, so implementations
/// must never call back into the lot.
pub trait History: Send + Sync {
    /// Append a snapshot to the vehicle's sequence, creating it on first use.
    fn record(&self, vehicle_id: &str, snapshot: Spot) -> Result<()>;

    /// Full chronological sequence, or `None` if the vehicle was never recorded.
    fn get(&self, vehicle_id: &str) -> Result<Option<Vec<Spot>>>;

    /// Most recent snapshot for the vehicle.
    fn last(&self, vehicle_id: &str) -> Result<Option<Spot>> {
        Ok(self
            .get(vehicle_id)?
            .and_then(|mut snapshots| snapshots.pop()))
    }
}

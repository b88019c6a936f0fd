//! InMemoryHistory - HashMap-backed occupancy history.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::History;
use crate::error::{LotError, Result};
use crate::spot::Spot;

/// In-memory history ledger guarded by its own `RwLock`.
///
/// Clone-friendly via Arc: clones share the same log.
#[derive(Clone, Default)]
pub struct InMemoryHistory {
    entries: Arc<RwLock<HashMap<String, Vec<Spot>>>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vehicles with at least one recorded snapshot.
    pub fn vehicle_count(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LotError::LockPoisoned("history vehicle_count"))?;
        Ok(entries.len())
    }
}

impl History for InMemoryHistory {
    fn record(&self, vehicle_id: &str, snapshot: Spot) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LotError::LockPoisoned("history record"))?;
        entries
            .entry(vehicle_id.to_string())
            .or_default()
            .push(snapshot);
        Ok(())
    }

    fn get(&self, vehicle_id: &str) -> Result<Option<Vec<Spot>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LotError::LockPoisoned("history get"))?;
        Ok(entries.get(vehicle_id).cloned())
    }

    fn last(&self, vehicle_id: &str) -> Result<Option<Spot>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LotError::LockPoisoned("history last"))?;
        Ok(entries
            .get(vehicle_id)
            .and_then(|snapshots| snapshots.last())
            .cloned())
    }
}

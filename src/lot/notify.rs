//! Occupancy notifications for in-process listeners.

/// Emitted after a vehicle is parked. Payload: the occupied spot as JSON.
pub const SPOT_OCCUPIED: &str = "SpotOccupied";
/// Emitted after a vehicle leaves. Payload: the release snapshot as JSON.
pub const SPOT_RELEASED: &str = "SpotReleased";

#[cfg(feature = "emitter")]
mod emitter {
    use std::sync::Mutex;

    use event_emitter_rs::EventEmitter;
    use log::warn;

    use crate::error::{LotError, Result};
    use crate::spot::Spot;

    pub(crate) struct Notifier {
        emitter: Mutex<EventEmitter>,
    }

    impl Notifier {
        pub(crate) fn new() -> Self {
            Notifier {
                emitter: Mutex::new(EventEmitter::new()),
            }
        }

        pub(crate) fn on<F>(&self, event: &str, listener: F) -> Result<()>
        where
            F: Fn(String) + Send + Sync + 'static,
        {
            let mut emitter = self
                .emitter
                .lock()
                .map_err(|_| LotError::LockPoisoned("emitter on"))?;
            emitter.on(event, listener);
            Ok(())
        }

        /// Fire-and-forget: the transition has already been applied, so a
        /// failed notification never turns into an error for the caller.
        pub(crate) fn notify(&self, event: &str, snapshot: &Spot) {
            let payload = match serde_json::to_string(snapshot) {
                Ok(payload) => payload,
                Err(err) => {
                    warn!("skipping {} notification for {}: {}", event, snapshot.id(), err);
                    return;
                }
            };
            match self.emitter.lock() {
                Ok(mut emitter) => {
                    emitter.emit(event, payload);
                }
                Err(_) => warn!("skipping {} notification: emitter poisoned", event),
            }
        }
    }
}

#[cfg(feature = "emitter")]
pub(crate) use emitter::Notifier;

#[cfg(not(feature = "emitter"))]
pub(crate) struct Notifier;

#[cfg(not(feature = "emitter"))]
impl Notifier {
    pub(crate) fn new() -> Self {
        Notifier
    }

    pub(crate) fn notify(&self, _event: &str, _snapshot: &crate::spot::Spot) {}
}

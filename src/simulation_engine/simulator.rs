// simulator.rs
use crate::global_variables::{
    ETA_JITTER_MIN, MIN_ETA_MIN, MIN_SPEED_KMH, POSITION_JITTER_DEG, SPEED_JITTER_KMH,
};
use crate::shared_data::{current_timestamp, FleetUpdate};
use crate::simulation_engine::vehicles::Bus;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

/// Owns the fleet and applies the random walk. The RNG is injected so a
/// seeded source reproduces a session exactly.
#[derive(Debug)]
pub struct FleetSimulator {
    vehicles: Vec<Bus>,
}

impl FleetSimulator {
    pub fn new(vehicles: Vec<Bus>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Bus] {
        &self.vehicles
    }

    /// One discrete update step. Every bus gets independent uniform offsets on
    /// lat/lng, speed (floored at 0) and ETA (floored at 1). Ids, routes and
    /// the rest of the record never change. Coordinates are allowed to drift
    /// without geographic bounds; the walk is unbounded by design.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for bus in &mut self.vehicles {
            bus.lat += rng.random_range(-POSITION_JITTER_DEG..POSITION_JITTER_DEG);
            bus.lng += rng.random_range(-POSITION_JITTER_DEG..POSITION_JITTER_DEG);
            bus.speed =
                (bus.speed + rng.random_range(-SPEED_JITTER_KMH..SPEED_JITTER_KMH)).max(MIN_SPEED_KMH);
            bus.eta = (bus.eta + rng.random_range(-ETA_JITTER_MIN..ETA_JITTER_MIN)).max(MIN_ETA_MIN);
        }
    }

    pub fn snapshot(&self) -> FleetUpdate {
        FleetUpdate {
            vehicles: self.vehicles.clone(),
            timestamp: current_timestamp(),
        }
    }

    /// Moves the simulator onto a periodic tokio task. A snapshot is published
    /// through the returned handle after every tick; dropping (or stopping)
    /// the handle cancels the task, so no timer outlives the owning view.
    pub fn start<R>(mut self, period: Duration, mut rng: R) -> SimulatorHandle
    where
        R: Rng + Send + 'static,
    {
        let (tx, rx) = watch::channel(self.snapshot());
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            // The first interval tick completes immediately; skip it so the
            // seed state stays untouched for a full period.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.tick(&mut rng);
                if tx.send(self.snapshot()).is_err() {
                    break;
                }
            }
        });
        SimulatorHandle { updates: rx, task }
    }
}

/// Handle to a running simulation loop. The map panel holds one for its
/// lifetime and drops it on unmount.
#[derive(Debug)]
pub struct SimulatorHandle {
    updates: watch::Receiver<FleetUpdate>,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Most recent snapshot without waiting.
    pub fn latest(&self) -> FleetUpdate {
        self.updates.borrow().clone()
    }

    /// Waits for the next tick to publish. Returns `None` once stopped.
    pub async fn changed(&mut self) -> Option<FleetUpdate> {
        match self.updates.changed().await {
            Ok(()) => Some(self.updates.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn stop(self) {
        // Drop does the work.
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

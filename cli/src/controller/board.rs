use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::classify::classify;
use super::poll::{Liveness, PollHandle};
use super::state::{RenderState, StateCell};
use crate::api::{Flight, FlightApi};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub type BoardState = RenderState<Vec<Flight>>;

/// Keeps the flight board fresh by refetching the whole list on a fixed interval.
pub struct BoardController {
    state: StateCell<Vec<Flight>>,
    poller: PollHandle,
}

impl BoardController {
    /// Starts polling right away; the first cycle is not delayed by `interval`.
    pub fn activate(api: Arc<dyn FlightApi>, interval: Duration) -> Self {
        let liveness = Liveness::new();
        let state = StateCell::new(liveness.clone());

        info!(interval_secs = interval.as_secs_f64(), "board controller activated");

        let cycle_state = state.clone();
        let poller = PollHandle::spawn(interval, liveness, move || {
            let api = api.clone();
            let state = cycle_state.clone();
            Box::pin(async move { fetch_cycle(api.as_ref(), &state).await })
        });

        Self { state, poller }
    }

    pub fn state(&self) -> BoardState {
        self.state.get()
    }

    #[cfg(test)]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    #[allow(dead_code)]
    pub fn is_active(&self) -> bool {
        self.poller.is_running()
    }

    pub fn deactivate(&self) {
        if self.state.liveness().is_alive() {
            info!("board controller deactivated");
        }
        self.poller.stop();
    }
}

impl Drop for BoardController {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// One polling cycle: reset to loading, fetch, then publish the list or the
/// classified failure.
pub async fn fetch_cycle(api: &dyn FlightApi, state: &StateCell<Vec<Flight>>) {
    state.set(RenderState::Loading);

    let next = match api.list_flights().await {
        Ok(flights) => {
            debug!(count = flights.len(), "fetched flights");
            RenderState::Ready(flights)
        }
        Err(failure) => {
            let message = classify(&failure);
            warn!(error = %failure, %message, "failed to fetch flights");
            RenderState::Error(message)
        }
    };

    if !state.set(next) {
        debug!("board deactivated before fetch completed; result dropped");
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;

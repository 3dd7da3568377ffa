use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::poll::Liveness;
use super::state::{RenderState, StateCell};
use crate::api::{FetchError, FlightApi, FlightDetail};

pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch flight details";

pub type DetailState = RenderState<FlightDetail>;

/// Loads one flight, once. No polling and no retry.
pub struct DetailController {
    flight_id: String,
    state: StateCell<FlightDetail>,
    task: JoinHandle<()>,
}

impl DetailController {
    pub fn activate(api: Arc<dyn FlightApi>, flight_id: impl Into<String>) -> Self {
        let flight_id = flight_id.into();
        let state = StateCell::new(Liveness::new());

        info!(flight_id = %flight_id, "detail controller activated");

        let task_state = state.clone();
        let id = flight_id.clone();
        let task = tokio::spawn(async move {
            let next = load_detail(api.as_ref(), &id).await;
            if !task_state.set(next) {
                debug!(flight_id = %id, "detail view closed before fetch completed; result dropped");
            }
        });

        Self {
            flight_id,
            state,
            task,
        }
    }

    #[allow(dead_code)]
    pub fn flight_id(&self) -> &str {
        &self.flight_id
    }

    pub fn state(&self) -> DetailState {
        self.state.get()
    }

    #[cfg(test)]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    #[allow(dead_code)]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// The pending fetch is left to finish; its result is discarded.
    pub fn deactivate(&self) {
        self.state.liveness().kill();
    }
}

impl Drop for DetailController {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Fetches a flight and derives the detail render state.
///
/// Unlike the board, an HTTP error status always yields the same fixed message
/// and any other failure surfaces its own message text.
pub async fn load_detail(api: &dyn FlightApi, flight_id: &str) -> DetailState {
    match api.get_flight(flight_id).await {
        Ok(flight) => RenderState::Ready(FlightDetail::from_flight(flight)),
        Err(failure) => {
            warn!(flight_id, error = %failure, "failed to fetch flight details");
            RenderState::Error(detail_message(&failure))
        }
    }
}

pub fn detail_message(failure: &FetchError) -> String {
    match failure {
        FetchError::Status { .. } => DETAIL_FAILED_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;

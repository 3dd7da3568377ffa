use std::sync::Arc;
use tokio::sync::watch;

use super::poll::Liveness;

/// What a view should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> RenderState<T> {
    #[allow(dead_code)]
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RenderState::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        match self {
            RenderState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Render state owned by one controller. Writes are dropped once the owning
/// controller is deactivated.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: Arc<watch::Sender<RenderState<T>>>,
    liveness: Liveness,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            liveness: self.liveness.clone(),
        }
    }
}

impl<T: Clone> StateCell<T> {
    pub fn new(liveness: Liveness) -> Self {
        let (tx, _rx) = watch::channel(RenderState::Loading);
        Self {
            tx: Arc::new(tx),
            liveness,
        }
    }

    /// Returns `false` if the write was discarded.
    pub fn set(&self, state: RenderState<T>) -> bool {
        if !self.liveness.is_alive() {
            return false;
        }
        self.tx.send_replace(state);
        true
    }

    pub fn get(&self) -> RenderState<T> {
        self.tx.borrow().clone()
    }

    #[cfg(test)]
    pub fn subscribe(&self) -> watch::Receiver<RenderState<T>> {
        self.tx.subscribe()
    }

    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }
}

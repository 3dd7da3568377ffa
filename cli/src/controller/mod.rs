pub mod board;
pub mod classify;
pub mod detail;
pub mod poll;
pub mod state;

pub use board::{BoardController, BoardState, DEFAULT_POLL_INTERVAL};
pub use detail::{DetailController, DetailState};

#[cfg(test)]
#[path = "tests/fake_api.rs"]
pub(crate) mod testing;

pub mod board;
pub mod detail;

pub use board::BoardView;
pub use detail::DetailView;

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, FlightApi, DEFAULT_API_URL};
pub use error::FetchError;
pub use models::{Flight, FlightDetail};

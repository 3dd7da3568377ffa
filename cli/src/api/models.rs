use serde::{Deserialize, Deserializer};

use crate::timefmt;

/// One row of the flight board, exactly as the API sent it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String, // ISO-8601 as sent
    pub status: String,
}

/// A single flight prepared for the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightDetail {
    pub id: String,
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    /// Local time of day (`HH:MM`), derived once at fetch time
    pub departure_time: String,
    pub status: String,
}

impl FlightDetail {
    pub fn from_flight(flight: Flight) -> Self {
        Self {
            departure_time: timefmt::format_departure(&flight.departure_time),
            id: flight.id,
            flight_number: flight.flight_number,
            airline: flight.airline,
            origin: flight.origin,
            destination: flight.destination,
            status: flight.status,
        }
    }
}

/// The list endpoint answers with either a bare array or `{ "flights": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FlightsPayload {
    List(Vec<Flight>),
    Wrapped { flights: Vec<Flight> },
}

impl FlightsPayload {
    pub fn into_flights(self) -> Vec<Flight> {
        match self {
            FlightsPayload::List(flights) => flights,
            FlightsPayload::Wrapped { flights } => flights,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

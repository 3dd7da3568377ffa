use anyhow::Result;
use clap::Subcommand;

use crate::api::{Flight, FlightApi, FlightDetail};
use crate::controller::board::{self, BoardState};
use crate::controller::detail::{self, DetailState};
use crate::controller::poll::Liveness;
use crate::controller::state::StateCell;
use crate::ui::board::{EMPTY_TEXT, LOADING_TEXT};
use crate::ui::detail::error_text;

#[derive(Subcommand, Debug)]
pub enum OneShotCommands {
    /// Print the flight board once
    #[command(name = "list")]
    List,

    /// Print details of one flight
    #[command(name = "show")]
    Show {
        /// Flight ID
        flight_id: String,
    },
}

pub async fn handle_command(cmd: OneShotCommands, api: &dyn FlightApi) -> Result<()> {
    match cmd {
        OneShotCommands::List => {
            let state = StateCell::new(Liveness::new());
            board::fetch_cycle(api, &state).await;

            for line in board_text(&state.get()) {
                println!("{}", line);
            }
        }

        OneShotCommands::Show { flight_id } => {
            let state = detail::load_detail(api, &flight_id).await;

            for line in detail_text(&state) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

pub fn board_text(state: &BoardState) -> Vec<String> {
    match state {
        BoardState::Loading => vec![LOADING_TEXT.to_string()],
        BoardState::Error(message) => vec![message.clone()],
        BoardState::Ready(flights) if flights.is_empty() => vec![EMPTY_TEXT.to_string()],
        BoardState::Ready(flights) => {
            let mut lines = vec![format!(
                "{:<14} {:<16} {:<16} {:<26} {:<16} {:<12}",
                "Flight Number", "Airline", "Origin", "Departure Time", "Destination", "Status"
            )];
            lines.extend(flights.iter().map(board_row));
            lines
        }
    }
}

fn board_row(flight: &Flight) -> String {
    format!(
        "{:<14} {:<16} {:<16} {:<26} {:<16} {:<12} /flight/{}",
        flight.flight_number,
        flight.airline,
        flight.origin,
        flight.departure_time,
        flight.destination,
        flight.status,
        flight.id
    )
}

pub fn detail_text(state: &DetailState) -> Vec<String> {
    match state {
        DetailState::Loading => vec![crate::ui::detail::LOADING_TEXT.to_string()],
        DetailState::Error(message) => vec![error_text(message)],
        DetailState::Ready(flight) => detail_lines(flight),
    }
}

fn detail_lines(flight: &FlightDetail) -> Vec<String> {
    vec![
        format!("Flight {}", flight.flight_number),
        format!("  Flight Number: {}", flight.flight_number),
        format!("  Airline:       {}", flight.airline),
        format!("  Origin:        {}", flight.origin),
        format!("  Departure:     {}", flight.departure_time),
        format!("  Destination:   {}", flight.destination),
        format!("  Status:        {}", flight.status),
    ]
}

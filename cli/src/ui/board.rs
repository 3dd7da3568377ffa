use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::Flight;
use crate::controller::BoardState;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No flights available";
pub const DETAILS_LINK: &str = "View Details";

const HEADER: [&str; 7] = [
    "Flight Number",
    "Airline",
    "Origin",
    "Departure Time",
    "Destination",
    "Status",
    "Flight Details",
];

pub struct BoardView {
    pub table_state: TableState,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
        }
    }

    /// Flight under the highlight, if the board currently shows flights.
    pub fn selected_flight<'a>(&self, state: &'a BoardState) -> Option<&'a Flight> {
        let flights = state.ready()?;
        flights.get(self.table_state.selected()?)
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let prev = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        };
        self.table_state.select(Some(prev));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &BoardState) {
        match state {
            BoardState::Loading => render_message(frame, area, LOADING_TEXT, Color::Yellow),
            BoardState::Error(message) => render_message(frame, area, message, Color::Red),
            BoardState::Ready(flights) if flights.is_empty() => {
                render_message(frame, area, EMPTY_TEXT, Color::Gray)
            }
            BoardState::Ready(flights) => {
                // each poll may shrink the list
                if let Some(i) = self.table_state.selected() {
                    if i >= flights.len() {
                        self.table_state.select(Some(flights.len() - 1));
                    }
                }
                self.render_table(frame, area, flights)
            }
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, flights: &[Flight]) {
        let header = Row::new(HEADER)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = flights
            .iter()
            .map(|flight| {
                Row::new(vec![
                    flight.flight_number.clone(),
                    flight.airline.clone(),
                    flight.origin.clone(),
                    flight.departure_time.clone(),
                    flight.destination.clone(),
                    flight.status.clone(),
                    DETAILS_LINK.to_string(),
                ])
                .style(Style::default().fg(status_color(&flight.status)))
                .height(1)
            })
            .collect();

        let widths = [
            Constraint::Length(14), // Flight Number
            Constraint::Length(16), // Airline
            Constraint::Length(16), // Origin
            Constraint::Length(26), // Departure Time (raw)
            Constraint::Length(16), // Destination
            Constraint::Length(12), // Status
            Constraint::Length(14), // Flight Details
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Flight Board "),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Flight Board "))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn status_color(status: &str) -> Color {
    match status.to_ascii_lowercase().as_str() {
        "on time" => Color::Green,
        "delayed" => Color::LightRed,
        "cancelled" | "canceled" => Color::Red,
        "boarding" => Color::Cyan,
        _ => Color::White,
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;

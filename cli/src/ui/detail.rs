use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::FlightDetail;
use crate::controller::DetailState;

pub const LOADING_TEXT: &str = "Loading flight details...";

pub struct DetailView;

impl DetailView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &DetailState) {
        match state {
            DetailState::Loading => self.render_message(frame, area, LOADING_TEXT.to_string(), Color::Yellow),
            DetailState::Error(message) => {
                self.render_message(frame, area, error_text(message), Color::Red)
            }
            DetailState::Ready(flight) => self.render_card(frame, area, flight),
        }
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, text: String, color: Color) {
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL).title(" Flight Details "))
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, flight: &FlightDetail) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Min(0),    // Flight info
                Constraint::Length(3), // Back
            ])
            .split(area);

        let heading = Paragraph::new(Line::from(vec![Span::styled(
            flight.flight_number.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]))
        .block(Block::default().borders(Borders::ALL).title(" Flight Details "))
        .alignment(Alignment::Center);

        frame.render_widget(heading, chunks[0]);

        let info = Paragraph::new(detail_lines(flight)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Flight Info ")
                .border_style(Style::default().fg(Color::Gray)),
        );

        frame.render_widget(info, chunks[1]);

        let back = Paragraph::new(Line::from(vec![
            Span::styled("[b/Esc] ", Style::default().fg(Color::Yellow)),
            Span::raw("Back to Flight Board"),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

        frame.render_widget(back, chunks[2]);
    }
}

pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

fn detail_lines(flight: &FlightDetail) -> Vec<Line<'static>> {
    let label = Style::default().add_modifier(Modifier::BOLD);

    [
        ("Flight Number", &flight.flight_number),
        ("Airline", &flight.airline),
        ("Origin", &flight.origin),
        ("Departure", &flight.departure_time),
        ("Destination", &flight.destination),
        ("Status", &flight.status),
    ]
    .into_iter()
    .map(|(name, value)| {
        Line::from(vec![
            Span::styled(format!("{}: ", name), label),
            Span::raw(value.clone()),
        ])
    })
    .collect()
}

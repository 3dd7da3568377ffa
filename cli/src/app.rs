use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::api::FlightApi;
use crate::controller::{BoardController, DetailController};
use crate::ui::{BoardView, DetailView};

/// Where the user is. Paths follow the web routes the API's clients use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Board,
    Detail(String),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Board);
        }
        match trimmed.strip_prefix("/flight/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Some(Route::Detail(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Board => "/".to_string(),
            Route::Detail(id) => format!("/flight/{}", id),
        }
    }
}

/// The active screen owns its controller; replacing the screen tears it down.
enum Screen {
    Board(BoardController),
    Detail(DetailController),
}

pub struct App {
    api: Arc<dyn FlightApi>,
    poll_interval: Duration,
    route: Route,
    screen: Screen,
    board_view: BoardView,
    detail_view: DetailView,
    should_quit: bool,
    show_help: bool,
}

impl App {
    pub fn new(api: Arc<dyn FlightApi>, poll_interval: Duration, route: Route) -> Self {
        let screen = Self::activate(&api, poll_interval, &route);

        Self {
            api,
            poll_interval,
            route,
            screen,
            board_view: BoardView::new(),
            detail_view: DetailView::new(),
            should_quit: false,
            show_help: false,
        }
    }

    fn activate(api: &Arc<dyn FlightApi>, poll_interval: Duration, route: &Route) -> Screen {
        match route {
            Route::Board => Screen::Board(BoardController::activate(api.clone(), poll_interval)),
            Route::Detail(id) => Screen::Detail(DetailController::activate(api.clone(), id.clone())),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = %self.route.path(), to = %route.path(), "navigate");

        // old controller is dropped (and deactivated) when replaced
        self.screen = Self::activate(&self.api, self.poll_interval, &route);
        if route == Route::Board {
            self.board_view = BoardView::new();
        }
        self.route = route;
    }

    pub async fn run(&mut self, terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard events with short timeout
            let timeout = Duration::from_millis(50);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit() {
                break;
            }

            // let the controllers' tasks make progress between frames
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
                if matches!(self.route, Route::Detail(_)) {
                    self.navigate(Route::Board);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Screen::Board(board) = &self.screen {
                    let len = board.state().ready().map_or(0, Vec::len);
                    self.board_view.select_previous(len);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Screen::Board(board) = &self.screen {
                    let len = board.state().ready().map_or(0, Vec::len);
                    self.board_view.select_next(len);
                }
            }
            KeyCode::Enter => {
                let target = match &self.screen {
                    Screen::Board(board) => {
                        let state = board.state();
                        self.board_view
                            .selected_flight(&state)
                            .map(|flight| Route::Detail(flight.id.clone()))
                    }
                    Screen::Detail(_) => None,
                };
                if let Some(route) = target {
                    self.navigate(route);
                }
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Footer
            ])
            .split(frame.size());

        match &self.screen {
            Screen::Board(board) => {
                let state = board.state();
                self.board_view.render(frame, chunks[0], &state);
            }
            Screen::Detail(detail) => {
                let state = detail.state();
                self.detail_view.render(frame, chunks[0], &state);
            }
        }

        self.render_footer(frame, chunks[1]);

        if self.show_help {
            self.render_help(frame);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = match self.route {
            Route::Board => vec![
                Span::styled("[↑↓] ", Style::default().fg(Color::Yellow)),
                Span::raw("Navigate  "),
                Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
                Span::raw("View Details  "),
            ],
            Route::Detail(_) => vec![
                Span::styled("[b/Esc] ", Style::default().fg(Color::Yellow)),
                Span::raw("Back  "),
            ],
        };
        spans.extend([
            Span::styled("[h/?] ", Style::default().fg(Color::Yellow)),
            Span::raw("Help  "),
            Span::styled("[q] ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ]);

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" FLIGHTBOARD {} ", self.route.path())),
        );

        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let popup_area = centered_rect(frame.size(), 60, 60);

        frame.render_widget(Clear, popup_area);

        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
        let help_text = vec![
            Line::from(vec![Span::styled(
                "KEYBOARD SHORTCUTS",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![key("  [↑↓/jk]  "), Span::raw("Select a flight on the board")]),
            Line::from(vec![key("  [Enter]  "), Span::raw("Open details of the selected flight")]),
            Line::from(vec![key("  [b/Esc]  "), Span::raw("Back to the flight board")]),
            Line::from(vec![key("  [h/?]    "), Span::raw("Toggle this help screen")]),
            Line::from(vec![key("  [q]      "), Span::raw("Quit application")]),
            Line::from(""),
            Line::from(format!(
                "  The board refreshes every {}s; details load once.",
                self.poll_interval.as_secs()
            )),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" HELP "),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}

/// A `percent_x` by `percent_y` slice of `area`, centred in it.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

use super::*;
use crate::controller::classify::NOT_FOUND_MESSAGE;
use crate::controller::testing::sample_flights;
use crate::controller::state::RenderState;
use crate::ui::testing::render_to_lines;

fn draw(view: &mut BoardView, state: &BoardState) -> Vec<String> {
    render_to_lines(140, 12, |frame| {
        let area = frame.size();
        view.render(frame, area, state)
    })
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn renders_header_and_every_flight_column() {
    let mut view = BoardView::new();
    let lines = draw(&mut view, &RenderState::Ready(sample_flights()));

    for column in HEADER {
        assert!(screen_contains(&lines, column), "missing column {column}");
    }
    for text in [
        "101",
        "102",
        "Airline A",
        "Airline B",
        "New York",
        "San Francisco",
        "Los Angeles",
        "Chicago",
        "On Time",
        "Delayed",
        "2025-02-20T10:00:00Z",
    ] {
        assert!(screen_contains(&lines, text), "missing {text}");
    }
    let links = lines.iter().filter(|line| line.contains(DETAILS_LINK)).count();
    assert_eq!(links, 2);
}

#[test]
fn renders_loading_text() {
    let mut view = BoardView::new();
    let lines = draw(&mut view, &RenderState::Loading);
    assert!(screen_contains(&lines, "Loading..."));
}

#[test]
fn renders_classified_error_verbatim() {
    let mut view = BoardView::new();
    let lines = draw(&mut view, &RenderState::Error(NOT_FOUND_MESSAGE.to_string()));
    assert!(screen_contains(
        &lines,
        "Flight details are unavailable (404). Please check the flight ID."
    ));
}

#[test]
fn renders_no_data_message_for_empty_list() {
    let mut view = BoardView::new();
    let lines = draw(&mut view, &RenderState::Ready(Vec::new()));
    assert!(screen_contains(&lines, "No flights available"));
    assert!(!screen_contains(&lines, "Flight Number"));
}

#[test]
fn selection_moves_within_bounds() {
    let mut view = BoardView::new();
    let state = RenderState::Ready(sample_flights());
    assert!(view.selected_flight(&state).is_none());

    view.select_next(2);
    assert_eq!(view.selected_flight(&state).map(|f| f.id.as_str()), Some("1"));
    view.select_next(2);
    view.select_next(2);
    assert_eq!(view.selected_flight(&state).map(|f| f.id.as_str()), Some("2"));
    view.select_previous(2);
    view.select_previous(2);
    assert_eq!(view.selected_flight(&state).map(|f| f.id.as_str()), Some("1"));

    view.select_next(0);
    assert!(view.table_state.selected().is_none());
}

#[test]
fn selection_is_clamped_when_list_shrinks() {
    let mut view = BoardView::new();
    view.table_state.select(Some(1));

    let mut flights = sample_flights();
    flights.truncate(1);
    let state = RenderState::Ready(flights);
    draw(&mut view, &state);

    assert_eq!(view.table_state.selected(), Some(0));
}

#[test]
fn no_selection_outside_ready_state() {
    let mut view = BoardView::new();
    view.table_state.select(Some(0));
    assert!(view.selected_flight(&RenderState::Loading).is_none());
}

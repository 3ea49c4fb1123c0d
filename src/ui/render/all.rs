use super::Frame;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the active view with the footer underneath.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());

    match state.current_view().clone() {
        View::Login => super::login::login(frame, chunks[0], state),
        View::Signup => super::signup::signup(frame, chunks[0], state),
        View::Notes => super::notes::notes(frame, chunks[0], state),
        View::NoteEditor => super::note_editor::note_editor(frame, chunks[0], state),
    }

    super::footer::footer(frame, chunks[1], state);
}

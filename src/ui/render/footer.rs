use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render the footer hint line for the current view.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let hints = match state.current_view() {
        View::Login => " Enter: login | Tab: switch field | Ctrl-R: sign up | Ctrl-C: quit",
        View::Signup => " Enter: create account | Tab: switch field | Esc: back to login | Ctrl-C: quit",
        View::Notes => " j/k: navigate | n: new | e: edit | r: refresh | Ctrl-L: logout | q: quit",
        View::NoteEditor => " Tab: switch field | Ctrl-S: save | Esc: discard | Ctrl-C: quit",
    };

    let theme = state.theme();
    let footer = Paragraph::new(hints).style(styling::muted_text_style(theme));
    frame.render_widget(footer, size);
}

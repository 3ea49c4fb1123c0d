mod all;
mod footer;
mod login;
mod note_editor;
mod notes;
mod signup;

use super::*;
use ratatui::layout::Rect;

pub use all::all as render;

/// Return a rect of at most the given size, centered in the area.
///
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Return a bordered block for a form field, highlighted when focused.
///
fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> ratatui::widgets::Block<'a> {
    let border_style = if focused {
        widgets::styling::active_block_border_style(theme)
    } else {
        widgets::styling::normal_block_border_style(theme)
    };
    ratatui::widgets::Block::default()
        .borders(ratatui::widgets::Borders::ALL)
        .title(title)
        .border_style(border_style)
}

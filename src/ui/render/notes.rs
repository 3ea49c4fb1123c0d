use super::Frame;
use crate::api::Note;
use crate::state::State;
use crate::ui::widgets::styling;
use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the note list.
///
pub fn notes(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Notes")
        .border_style(styling::active_block_border_style(&theme));

    if state.notes().is_empty() {
        let empty = Paragraph::new("No notes yet. Press n to create your first note.")
            .style(styling::muted_text_style(&theme))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, size);
        return;
    }

    let items: Vec<ListItem> = state
        .notes()
        .iter()
        .map(|note| ListItem::new(note_line(note, &theme)))
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::current_list_item_style(&theme))
        .block(block);

    frame.render_stateful_widget(list, size, state.notes_list_state());
}

/// Build the one-line list entry for a note: title, creation date, tags.
///
fn note_line(note: &Note, theme: &crate::ui::Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        note.title.clone(),
        styling::normal_text_style(theme),
    )];

    if let Some(created_on) = &note.created_on {
        spans.push(Span::styled(
            format!("  {}", display_date(created_on)),
            styling::muted_text_style(theme),
        ));
    }

    if !note.tags.is_empty() {
        let tags = note
            .tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");
        spans.push(Span::styled(
            format!("  {}", tags),
            styling::banner_style(theme),
        ));
    }

    Line::from(spans)
}

/// Format an RFC 3339 creation date for display, falling back to the raw
/// string when it does not parse.
///
fn display_date(created_on: &str) -> String {
    DateTime::parse_from_rfc3339(created_on)
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| created_on.to_string())
}

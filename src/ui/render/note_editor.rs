use super::{field_block, Frame};
use crate::state::{EditorField, EditorMode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

/// Render the note editor: title input, multi-line content, tag input, and
/// the error slots for each. The editor stays rendered while a submission
/// is in flight.
///
pub fn note_editor(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let form = match state.note_form_mut() {
        Some(form) => form,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Title error
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Content error
            Constraint::Length(3), // Tags
            Constraint::Length(1), // Tags error
            Constraint::Length(1), // API error
        ])
        .split(size);

    let heading = match form.mode {
        EditorMode::Create => "New Note - Title",
        EditorMode::Edit { .. } => "Edit Note - Title",
    };
    let title = Paragraph::new(form.title.as_str())
        .style(styling::normal_text_style(&theme))
        .block(field_block(
            heading,
            form.focus == EditorField::Title,
            &theme,
        ));
    frame.render_widget(title, chunks[0]);
    if !form.errors.title.is_empty() {
        let error = Paragraph::new(form.errors.title.as_str())
            .style(styling::error_text_style(&theme));
        frame.render_widget(error, chunks[1]);
    }

    let content_block = field_block("Content", form.focus == EditorField::Content, &theme);
    form.content.set_block(content_block);
    form.content
        .set_style(styling::normal_text_style(&theme));
    frame.render_widget(form.content.widget(), chunks[2]);
    if !form.errors.content.is_empty() {
        let error = Paragraph::new(form.errors.content.as_str())
            .style(styling::error_text_style(&theme));
        frame.render_widget(error, chunks[3]);
    }

    let tags = Paragraph::new(form.tags_input.as_str())
        .style(styling::normal_text_style(&theme))
        .block(field_block(
            "Tags (comma separated)",
            form.focus == EditorField::Tags,
            &theme,
        ));
    frame.render_widget(tags, chunks[4]);
    if !form.errors.tags.is_empty() {
        let error = Paragraph::new(form.errors.tags.as_str())
            .style(styling::error_text_style(&theme));
        frame.render_widget(error, chunks[5]);
    }

    if !form.errors.api.is_empty() {
        let error = Paragraph::new(form.errors.api.as_str())
            .style(styling::error_text_style(&theme));
        frame.render_widget(error, chunks[6]);
    }
}

use super::{field_block, Frame};
use crate::state::{LoginField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the login form: email and password inputs with inline errors and
/// a dedicated slot for server failures.
///
pub fn login(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let form = state.login_form();

    let card = super::centered_rect(60, 16, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Login")
        .border_style(styling::active_block_border_style(&theme));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(3), // Password
            Constraint::Length(1), // Password error
            Constraint::Length(1), // API error
            Constraint::Min(0),
        ])
        .split(card);

    let email_focused = form.focus == LoginField::Email;
    let email = Paragraph::new(form.email.as_str())
        .style(styling::normal_text_style(&theme))
        .block(field_block("Email", email_focused, &theme));
    frame.render_widget(email, chunks[0]);
    if !form.errors.email.is_empty() {
        let error = Paragraph::new(form.errors.email.as_str())
            .style(styling::error_text_style(&theme));
        frame.render_widget(error, chunks[1]);
    }

    let masked = "*".repeat(form.password.chars().count());
    let password = Paragraph::new(masked)
        .style(styling::normal_text_style(&theme))
        .block(field_block("Password", !email_focused, &theme));
    frame.render_widget(password, chunks[2]);
    if !form.errors.password.is_empty() {
        let error = Paragraph::new(form.errors.password.as_str())
            .style(styling::error_text_style(&theme));
        frame.render_widget(error, chunks[3]);
    }

    if !form.errors.api.is_empty() {
        let error = Paragraph::new(form.errors.api.as_str())
            .style(styling::error_text_style(&theme))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[4]);
    }
}

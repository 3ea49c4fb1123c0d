use super::{field_block, Frame};
use crate::state::{SignupField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the signup form: name, email, and password inputs. General
/// errors share a single slot; the password check renders inline under its
/// field.
///
pub fn signup(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let form = state.signup_form();

    let card = super::centered_rect(60, 18, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Create Account")
        .border_style(styling::active_block_border_style(&theme));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Password error
            Constraint::Length(1), // General error
            Constraint::Min(0),
        ])
        .split(card);

    let name = Paragraph::new(form.name.as_str())
        .style(styling::normal_text_style(&theme))
        .block(field_block("Name", form.focus == SignupField::Name, &theme));
    frame.render_widget(name, chunks[0]);

    let email = Paragraph::new(form.email.as_str())
        .style(styling::normal_text_style(&theme))
        .block(field_block(
            "Email",
            form.focus == SignupField::Email,
            &theme,
        ));
    frame.render_widget(email, chunks[1]);

    let masked = "*".repeat(form.password.chars().count());
    let password = Paragraph::new(masked)
        .style(styling::normal_text_style(&theme))
        .block(field_block(
            "Password",
            form.focus == SignupField::Password,
            &theme,
        ));
    frame.render_widget(password, chunks[2]);

    if let Some(message) = &form.password_error {
        let error = Paragraph::new(message.as_str())
            .style(styling::error_text_style(&theme))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(error, chunks[3]);
    }

    if let Some(message) = &form.error {
        let error = Paragraph::new(message.as_str())
            .style(styling::error_text_style(&theme))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[4]);
    }
}

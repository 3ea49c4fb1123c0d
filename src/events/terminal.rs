use crate::state::{EditorField, State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};
use tui_textarea::Input;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => {
                if event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                match state.current_view().clone() {
                    View::Login => Self::login_key(event, state),
                    View::Signup => Self::signup_key(event, state),
                    View::Notes => return Ok(Self::notes_key(event, state)),
                    View::NoteEditor => Self::editor_key(event, state),
                }
            }
            Event::Tick => (),
        }
        Ok(true)
    }

    /// Route a key event within the login view.
    ///
    fn login_key(event: KeyEvent, state: &mut State) {
        match event.code {
            KeyCode::Char('r') if event.modifiers == KeyModifiers::CONTROL => state.open_signup(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                state.login_form_mut().focus_next()
            }
            KeyCode::Enter => state.submit_login(),
            KeyCode::Backspace => state.login_form_mut().pop_char(),
            KeyCode::Char(c) if is_text_input(&event) => state.login_form_mut().push_char(c),
            _ => (),
        }
    }

    /// Route a key event within the signup view.
    ///
    fn signup_key(event: KeyEvent, state: &mut State) {
        match event.code {
            KeyCode::Esc => state.back_to_login(),
            KeyCode::Tab | KeyCode::Down => state.signup_form_mut().focus_next(),
            KeyCode::BackTab | KeyCode::Up => state.signup_form_mut().focus_prev(),
            KeyCode::Enter => state.submit_signup(),
            KeyCode::Backspace => state.signup_form_mut().pop_char(),
            KeyCode::Char(c) if is_text_input(&event) => state.signup_form_mut().push_char(c),
            _ => (),
        }
    }

    /// Route a key event within the note list view. Returns false when an
    /// exit was requested.
    ///
    fn notes_key(event: KeyEvent, state: &mut State) -> bool {
        match event.code {
            KeyCode::Char('q') if event.modifiers == KeyModifiers::NONE => {
                debug!("Processing exit terminal event '{:?}'...", event);
                return false;
            }
            KeyCode::Char('l') if event.modifiers == KeyModifiers::CONTROL => state.logout(),
            KeyCode::Char('j') | KeyCode::Down => state.select_next_note(),
            KeyCode::Char('k') | KeyCode::Up => state.select_previous_note(),
            KeyCode::Char('n') => state.open_create_editor(),
            KeyCode::Char('e') | KeyCode::Enter => state.open_edit_editor(),
            KeyCode::Char('r') => state.refresh_notes(),
            _ => (),
        }
        true
    }

    /// Route a key event within the note editor. Characters go to the
    /// focused field; Ctrl-S submits; Esc dismisses without saving.
    ///
    fn editor_key(event: KeyEvent, state: &mut State) {
        match event.code {
            KeyCode::Esc => state.close_editor(),
            KeyCode::Char('s') if event.modifiers == KeyModifiers::CONTROL => state.submit_note(),
            KeyCode::Tab => {
                if let Some(form) = state.note_form_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab => {
                if let Some(form) = state.note_form_mut() {
                    form.focus_prev();
                }
            }
            _ => {
                if let Some(form) = state.note_form_mut() {
                    match form.focus {
                        EditorField::Title => match event.code {
                            KeyCode::Char(c) if is_text_input(&event) => form.title.push(c),
                            KeyCode::Backspace => {
                                form.title.pop();
                            }
                            // Move on to the content field
                            KeyCode::Enter => form.focus_next(),
                            _ => (),
                        },
                        EditorField::Content => {
                            form.content.input(Input::from(event));
                        }
                        EditorField::Tags => match event.code {
                            KeyCode::Char(c) if is_text_input(&event) => form.tags_input.push(c),
                            KeyCode::Backspace => {
                                form.tags_input.pop();
                            }
                            _ => (),
                        },
                    }
                }
            }
        }
    }
}

/// Return true if the key event should be treated as plain text input.
///
fn is_text_input(event: &KeyEvent) -> bool {
    event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT
}

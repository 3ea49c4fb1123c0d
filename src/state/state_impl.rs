use crate::api::Note;
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;

use super::form::{LoginForm, NoteForm, SignupForm};
use super::navigation::{EditorMode, View};

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    view_stack: Vec<View>,
    login_form: LoginForm,
    signup_form: SignupForm,
    note_form: Option<NoteForm>,
    notes: Vec<Note>,
    notes_list_state: ListState,
    theme: Theme,
    authenticated: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            view_stack: vec![View::Login],
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            note_form: None,
            notes: vec![],
            notes_list_state: ListState::default(),
            theme: Theme::default(),
            authenticated: false,
        }
    }
}

impl State {
    /// Return new instance wired to the network event channel. A persisted
    /// session token skips the login view entirely.
    ///
    pub fn new(net_sender: NetworkEventSender, authenticated: bool, theme: Theme) -> State {
        State {
            net_sender: Some(net_sender),
            view_stack: if authenticated {
                vec![View::Notes]
            } else {
                vec![View::Login]
            },
            theme,
            authenticated,
            ..State::default()
        }
    }

    /// Return the currently active view.
    ///
    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::Login)
    }

    /// Return the active theme.
    ///
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Return true if a session token has been persisted.
    ///
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    pub fn signup_form(&self) -> &SignupForm {
        &self.signup_form
    }

    pub fn signup_form_mut(&mut self) -> &mut SignupForm {
        &mut self.signup_form
    }

    pub fn note_form(&self) -> Option<&NoteForm> {
        self.note_form.as_ref()
    }

    pub fn note_form_mut(&mut self) -> Option<&mut NoteForm> {
        self.note_form.as_mut()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Return the list selection state for stateful rendering.
    ///
    pub fn notes_list_state(&mut self) -> &mut ListState {
        &mut self.notes_list_state
    }

    /// Return the note currently selected in the list.
    ///
    pub fn selected_note(&self) -> Option<&Note> {
        self.notes_list_state
            .selected()
            .and_then(|index| self.notes.get(index))
    }

    /// Replace the note list, keeping the selection in bounds.
    ///
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        let selected = match self.notes_list_state.selected() {
            _ if self.notes.is_empty() => None,
            Some(index) => Some(index.min(self.notes.len() - 1)),
            None => Some(0),
        };
        self.notes_list_state.select(selected);
    }

    /// Move the list selection down.
    ///
    pub fn select_next_note(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let next = match self.notes_list_state.selected() {
            Some(index) => (index + 1).min(self.notes.len() - 1),
            None => 0,
        };
        self.notes_list_state.select(Some(next));
    }

    /// Move the list selection up.
    ///
    pub fn select_previous_note(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let previous = match self.notes_list_state.selected() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.notes_list_state.select(Some(previous));
    }

    /// Navigate from the login view to the signup view.
    ///
    pub fn open_signup(&mut self) {
        self.view_stack.push(View::Signup);
    }

    /// Navigate back from the signup view.
    ///
    pub fn back_to_login(&mut self) {
        if *self.current_view() == View::Signup {
            self.view_stack.pop();
        }
    }

    /// Validate the login form and dispatch the login request when it
    /// passes. A failing form never reaches the network.
    ///
    pub fn submit_login(&mut self) {
        if !self.login_form.validate() {
            return;
        }
        self.send(NetworkEvent::Login {
            email: self.login_form.email.clone(),
            password: self.login_form.password.clone(),
        });
    }

    /// Validate the signup form and dispatch the registration request when
    /// it passes.
    ///
    pub fn submit_signup(&mut self) {
        if !self.signup_form.validate() {
            return;
        }
        self.send(NetworkEvent::Register {
            full_name: self.signup_form.name.clone(),
            email: self.signup_form.email.clone(),
            password: self.signup_form.password.clone(),
        });
    }

    /// Open the editor blank for a new note.
    ///
    pub fn open_create_editor(&mut self) {
        self.note_form = Some(NoteForm::create());
        self.view_stack.push(View::NoteEditor);
    }

    /// Open the editor seeded from the selected note.
    ///
    pub fn open_edit_editor(&mut self) {
        match self.selected_note() {
            Some(note) => {
                self.note_form = Some(NoteForm::edit(note));
                self.view_stack.push(View::NoteEditor);
            }
            None => warn!("Skipping edit request with no note selected."),
        }
    }

    /// Validate the note form and dispatch the create or update request
    /// when it passes. Edit mode addresses the request by the note's
    /// existing identifier.
    ///
    pub fn submit_note(&mut self) {
        let event = {
            let form = match self.note_form.as_mut() {
                Some(form) => form,
                None => return,
            };
            if !form.validate() {
                return;
            }
            let title = form.title.clone();
            let content = form.content_text();
            let tags = form.submission_tags();
            match &form.mode {
                EditorMode::Create => NetworkEvent::CreateNote {
                    title,
                    content,
                    tags,
                },
                EditorMode::Edit { id } => NetworkEvent::UpdateNote {
                    id: id.clone(),
                    title,
                    content,
                    tags,
                },
            }
        };
        self.send(event);
    }

    /// Dismiss the editor, discarding its form state.
    ///
    pub fn close_editor(&mut self) {
        self.note_form = None;
        if *self.current_view() == View::NoteEditor {
            self.view_stack.pop();
        }
    }

    /// Request a reload of the note list.
    ///
    pub fn refresh_notes(&mut self) {
        self.send(NetworkEvent::FetchNotes);
    }

    /// Request the session be forgotten.
    ///
    pub fn logout(&mut self) {
        self.send(NetworkEvent::Logout);
    }

    /// Apply a successful login: reset the form, enter the authenticated
    /// area, and load the note list.
    ///
    pub fn complete_login(&mut self) {
        self.authenticated = true;
        self.login_form = LoginForm::default();
        self.view_stack = vec![View::Notes];
        self.refresh_notes();
    }

    /// Apply a successful registration: reset the form and return to the
    /// login view.
    ///
    pub fn complete_signup(&mut self) {
        self.signup_form = SignupForm::default();
        self.view_stack = vec![View::Login];
    }

    /// Apply a logout: drop session-scoped data and return to login.
    ///
    pub fn complete_logout(&mut self) {
        self.authenticated = false;
        self.notes.clear();
        self.notes_list_state = ListState::default();
        self.note_form = None;
        self.view_stack = vec![View::Login];
    }

    /// Queue a network event for the worker thread.
    ///
    fn send(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to queue network event: {}", e);
            }
        }
    }
}

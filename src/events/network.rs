use crate::api::{ApiError, NotesApi};
use crate::session::SessionStore;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Fallback shown for login/signup failures without a server message.
pub const GENERIC_AUTH_ERROR: &str = "Unexpected error occurred. Please try again later.";

/// Fallback shown for note save failures without a server message.
pub const GENERIC_NOTE_ERROR: &str = "Something went wrong.";

/// Shown when a registration succeeds without an access token.
pub const MISSING_TOKEN_ERROR: &str = "No access token received from the server";

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Login {
        email: String,
        password: String,
    },
    Register {
        full_name: String,
        email: String,
        password: String,
    },
    CreateNote {
        title: String,
        content: String,
        tags: Vec<String>,
    },
    UpdateNote {
        id: String,
        title: String,
        content: String,
        tags: Vec<String>,
    },
    FetchNotes,
    Logout,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a mut NotesApi,
    session: &'a mut dyn SessionStore,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        api: &'a mut NotesApi,
        session: &'a mut dyn SessionStore,
    ) -> Self {
        Handler {
            state,
            api,
            session,
        }
    }

    /// Handle network events by type. Request failures are converted into
    /// visible error messages on the owning form; they never propagate.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Login { email, password } => self.login(email, password).await,
            Event::Register {
                full_name,
                email,
                password,
            } => self.register(full_name, email, password).await,
            Event::CreateNote {
                title,
                content,
                tags,
            } => self.create_note(title, content, tags).await,
            Event::UpdateNote {
                id,
                title,
                content,
                tags,
            } => self.update_note(id, title, content, tags).await,
            Event::FetchNotes => self.fetch_notes().await,
            Event::Logout => self.logout().await,
        }
        Ok(())
    }

    /// Exchange credentials for a session token, then enter the
    /// authenticated area.
    ///
    async fn login(&mut self, email: String, password: String) {
        info!("Submitting login for {}...", email);
        match self.api.login(&email, &password).await {
            Ok(token) => {
                self.session.set_token(&token);
                self.api.set_access_token(&token);
                let mut state = self.state.lock().await;
                state.complete_login();
                info!("Login succeeded.");
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                let mut state = self.state.lock().await;
                state.login_form_mut().errors.api = auth_failure_message(&e);
            }
        }
    }

    /// Register a new account. Success persists the issued token and
    /// returns to the login view.
    ///
    async fn register(&mut self, full_name: String, email: String, password: String) {
        info!("Submitting registration for {}...", email);
        match self.api.register(&full_name, &email, &password).await {
            Ok(token) => {
                self.session.set_token(&token);
                let mut state = self.state.lock().await;
                state.complete_signup();
                info!("Registration succeeded.");
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                let mut state = self.state.lock().await;
                state.signup_form_mut().error = Some(signup_failure_message(&e));
            }
        }
    }

    /// Create a new note. Success reloads the note list and dismisses the
    /// editor; failure leaves the editor open for correction.
    ///
    async fn create_note(&mut self, title: String, content: String, tags: Vec<String>) {
        match self.api.create_note(&title, &content, &tags).await {
            Ok(note) => {
                debug!("Saved new note {}.", note.id);
                let mut state = self.state.lock().await;
                state.refresh_notes();
                state.close_editor();
            }
            Err(e) => {
                warn!("Failed to save new note: {}", e);
                let mut state = self.state.lock().await;
                if let Some(form) = state.note_form_mut() {
                    form.errors.api = note_failure_message(&e);
                }
            }
        }
    }

    /// Update an existing note addressed by its identifier.
    ///
    async fn update_note(&mut self, id: String, title: String, content: String, tags: Vec<String>) {
        match self.api.update_note(&id, &title, &content, &tags).await {
            Ok(note) => {
                debug!("Saved note {}.", note.id);
                let mut state = self.state.lock().await;
                state.refresh_notes();
                state.close_editor();
            }
            Err(e) => {
                warn!("Failed to save note {}: {}", id, e);
                let mut state = self.state.lock().await;
                if let Some(form) = state.note_form_mut() {
                    form.errors.api = note_failure_message(&e);
                }
            }
        }
    }

    /// Reload the note list.
    ///
    async fn fetch_notes(&mut self) {
        match self.api.list_notes().await {
            Ok(notes) => {
                info!("Received {} notes.", notes.len());
                let mut state = self.state.lock().await;
                state.set_notes(notes);
            }
            Err(e) => {
                warn!("Failed to fetch notes: {}", e);
            }
        }
    }

    /// Forget the session and return to the login view.
    ///
    async fn logout(&mut self) {
        info!("Logging out...");
        self.session.clear();
        self.api.clear_access_token();
        let mut state = self.state.lock().await;
        state.complete_logout();
    }
}

/// Message for the login form's api slot: the server message when one was
/// sent, otherwise the generic fallback.
///
fn auth_failure_message(error: &ApiError) -> String {
    error
        .server_message()
        .map(str::to_owned)
        .unwrap_or_else(|| GENERIC_AUTH_ERROR.to_string())
}

/// Message for the signup form's error slot. A token-less success response
/// gets its own message; everything else follows the login rules.
///
fn signup_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::MissingToken => MISSING_TOKEN_ERROR.to_string(),
        _ => auth_failure_message(error),
    }
}

/// Message for the note editor's api slot.
///
fn note_failure_message(error: &ApiError) -> String {
    error
        .server_message()
        .map(str::to_owned)
        .unwrap_or_else(|| GENERIC_NOTE_ERROR.to_string())
}

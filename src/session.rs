//! Session token storage.
//!
//! The access token issued at login/registration is persisted through this
//! interface so authenticated flows can read it and tests can substitute an
//! in-memory store.

/// Store for the opaque access token of the active session. No expiry is
/// tracked client-side.
///
pub trait SessionStore {
    /// Return the stored token, if a session exists.
    fn token(&self) -> Option<String>;

    /// Persist the token for the active session.
    fn set_token(&mut self, token: &str);

    /// Forget the active session.
    fn clear(&mut self);
}

/// In-memory session store. Holds the token for the lifetime of the
/// process only; used in tests and as a fallback when no config file is
/// available.
///
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Option<String>,
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_owned());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

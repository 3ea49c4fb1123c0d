//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (View, EditorMode)
//! - Form editing types (LoginForm, SignupForm, NoteForm)
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{
    EditorField, LoginField, LoginForm, NoteForm, SignupField, SignupForm,
};
pub use navigation::{EditorMode, View};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

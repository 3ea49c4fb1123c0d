//! Navigation-related state types.
//!
//! This module contains enums and types related to navigation between the
//! authentication views, the note list, and the note editor.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum View {
    Login,
    Signup,
    Notes,
    NoteEditor,
}

/// Specifying whether the note editor creates a new note or updates an
/// existing one. Edit mode carries the identifier the update request is
/// addressed to.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No note is selected in the list
    #[error("No note selected")]
    #[allow(dead_code)]
    NoNoteSelected,

    /// Note not found in state
    #[error("Note not found: {id}")]
    #[allow(dead_code)]
    NoteNotFound { id: String },

    /// Editor is not open
    #[error("Note editor is not open")]
    #[allow(dead_code)]
    EditorNotOpen,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

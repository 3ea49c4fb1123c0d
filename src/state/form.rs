//! Form editing state types.
//!
//! This module contains the three submission forms and their validation
//! routines. Each form owns its input and error state exclusively; every
//! check runs locally before any network call, and a failing form never
//! reaches the network.

use crate::api::Note;
use crate::utils::validation::{
    has_duplicate_tags, is_strong_password, is_valid_email, normalized_tags,
    LOGIN_PASSWORD_MIN_CHARS,
};
use tui_textarea::TextArea;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

pub const SIGNUP_NAME_REQUIRED: &str = "Please enter your name";
pub const SIGNUP_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SIGNUP_PASSWORD_REQUIRED: &str = "Please enter the password";
pub const SIGNUP_PASSWORD_WEAK: &str =
    "Password must be at least 8 characters long, contain uppercase, lowercase, and a special character.";

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters.";
pub const CONTENT_REQUIRED: &str = "Content is required.";
pub const CONTENT_TOO_SHORT: &str = "Content must be at least 5 characters.";
pub const TAGS_DUPLICATE: &str = "Duplicate tags are not allowed.";

/// Specifying login form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoginField {
    Email,
    Password,
}

/// Specifying signup form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SignupField {
    Name,
    Email,
    Password,
}

/// Specifying note editor field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EditorField {
    Title,
    Content,
    Tags,
}

/// Field-scoped error messages for the login form. One slot per validated
/// field plus a reserved slot for server/network failures. Empty string
/// means no error.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: String,
    pub password: String,
    pub api: String,
}

impl LoginErrors {
    /// Reset all slots. Runs at the start of every submission attempt so a
    /// previously shown error never survives a later valid submission.
    ///
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.api.clear();
    }
}

/// Login form state: credentials plus field-scoped errors.
///
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: LoginErrors,
    pub focus: LoginField,
}

impl Default for LoginField {
    fn default() -> Self {
        LoginField::Email
    }
}

impl LoginForm {
    /// Move focus to the next field.
    ///
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    /// Append a character to the focused field.
    ///
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    /// Remove the last character from the focused field.
    ///
    pub fn pop_char(&mut self) {
        match self.focus {
            LoginField::Email => {
                self.email.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
        }
    }

    /// Run all field checks. Independent fields are checked independently
    /// so email and password errors can coexist; within a field the first
    /// failing check wins. Returns true when submission may proceed.
    ///
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.email.trim().is_empty() {
            self.errors.email = EMAIL_REQUIRED.to_string();
        } else if !is_valid_email(&self.email) {
            self.errors.email = EMAIL_INVALID.to_string();
        }

        if self.password.is_empty() {
            self.errors.password = PASSWORD_REQUIRED.to_string();
        } else if self.password.chars().count() < LOGIN_PASSWORD_MIN_CHARS {
            self.errors.password = PASSWORD_TOO_SHORT.to_string();
        }

        self.errors.email.is_empty() && self.errors.password.is_empty()
    }
}

/// Signup form state. Unlike the login form, general errors share a single
/// message slot; only the password check has a dedicated slot.
///
#[derive(Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub password_error: Option<String>,
    pub focus: SignupField,
}

impl Default for SignupField {
    fn default() -> Self {
        SignupField::Name
    }
}

impl SignupForm {
    /// Move focus to the next field.
    ///
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SignupField::Name => SignupField::Email,
            SignupField::Email => SignupField::Password,
            SignupField::Password => SignupField::Name,
        };
    }

    /// Move focus to the previous field.
    ///
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            SignupField::Name => SignupField::Password,
            SignupField::Email => SignupField::Name,
            SignupField::Password => SignupField::Email,
        };
    }

    /// Append a character to the focused field. Editing the name field
    /// clears the general error slot.
    ///
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            SignupField::Name => {
                self.name.push(c);
                self.error = None;
            }
            SignupField::Email => self.email.push(c),
            SignupField::Password => self.password.push(c),
        }
    }

    /// Remove the last character from the focused field. Editing the name
    /// field clears the general error slot.
    ///
    pub fn pop_char(&mut self) {
        match self.focus {
            SignupField::Name => {
                self.name.pop();
                self.error = None;
            }
            SignupField::Email => {
                self.email.pop();
            }
            SignupField::Password => {
                self.password.pop();
            }
        }
    }

    /// Run the checks in order, stopping at the first failure: name
    /// non-empty, email format, password non-empty, password strength.
    /// Returns true when submission may proceed.
    ///
    pub fn validate(&mut self) -> bool {
        if self.name.is_empty() {
            self.error = Some(SIGNUP_NAME_REQUIRED.to_string());
            return false;
        }
        if !is_valid_email(&self.email) {
            self.error = Some(SIGNUP_EMAIL_INVALID.to_string());
            return false;
        }
        if self.password.is_empty() {
            self.password_error = Some(SIGNUP_PASSWORD_REQUIRED.to_string());
            return false;
        }
        if !is_strong_password(&self.password) {
            self.password_error = Some(SIGNUP_PASSWORD_WEAK.to_string());
            return false;
        }
        self.password_error = None;
        self.error = None;
        true
    }
}

/// Field-scoped error messages for the note editor.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteErrors {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub api: String,
}

impl NoteErrors {
    /// Reset all slots at the start of a submission attempt.
    ///
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.tags.clear();
        self.api.clear();
    }
}

/// Note editor form state. Operates in create or edit mode; edit mode is
/// seeded from the note passed in by the caller.
///
#[derive(Debug)]
pub struct NoteForm {
    pub mode: crate::state::EditorMode,
    pub title: String,
    pub content: TextArea<'static>,
    pub tags_input: String,
    pub errors: NoteErrors,
    pub focus: EditorField,
}

impl NoteForm {
    /// Return a blank form for creating a new note.
    ///
    pub fn create() -> NoteForm {
        NoteForm {
            mode: crate::state::EditorMode::Create,
            title: String::new(),
            content: TextArea::default(),
            tags_input: String::new(),
            errors: NoteErrors::default(),
            focus: EditorField::Title,
        }
    }

    /// Return a form seeded from an existing note for editing.
    ///
    pub fn edit(note: &Note) -> NoteForm {
        NoteForm {
            mode: crate::state::EditorMode::Edit {
                id: note.id.clone(),
            },
            title: note.title.clone(),
            content: TextArea::new(note.content.lines().map(String::from).collect()),
            tags_input: note.tags.join(", "),
            errors: NoteErrors::default(),
            focus: EditorField::Title,
        }
    }

    /// Move focus to the next field.
    ///
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            EditorField::Title => EditorField::Content,
            EditorField::Content => EditorField::Tags,
            EditorField::Tags => EditorField::Title,
        };
    }

    /// Move focus to the previous field.
    ///
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            EditorField::Title => EditorField::Tags,
            EditorField::Content => EditorField::Title,
            EditorField::Tags => EditorField::Content,
        };
    }

    /// Return the content field as a single string.
    ///
    pub fn content_text(&self) -> String {
        self.content.lines().join("\n")
    }

    /// Split the tag input on commas, preserving each raw segment. Trimming
    /// and empty-segment handling happen during validation and payload
    /// assembly.
    ///
    pub fn parsed_tags(&self) -> Vec<String> {
        if self.tags_input.is_empty() {
            return vec![];
        }
        self.tags_input.split(',').map(str::to_string).collect()
    }

    /// Return the tag list as submitted to the server: trimmed, with empty
    /// segments discarded. Duplicates are never removed here; they fail
    /// validation instead.
    ///
    pub fn submission_tags(&self) -> Vec<String> {
        normalized_tags(&self.parsed_tags())
    }

    /// Run all field checks independently so every failing field is
    /// reported at once. Returns true when submission may proceed.
    ///
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.title.trim().is_empty() {
            self.errors.title = TITLE_REQUIRED.to_string();
        } else if self.title.chars().count() < 3 {
            self.errors.title = TITLE_TOO_SHORT.to_string();
        }

        let content = self.content_text();
        if content.trim().is_empty() {
            self.errors.content = CONTENT_REQUIRED.to_string();
        } else if content.chars().count() < 5 {
            self.errors.content = CONTENT_TOO_SHORT.to_string();
        }

        if has_duplicate_tags(&self.parsed_tags()) {
            self.errors.tags = TAGS_DUPLICATE.to_string();
        }

        self.errors.title.is_empty() && self.errors.content.is_empty() && self.errors.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditorMode;

    fn valid_note_form() -> NoteForm {
        let mut form = NoteForm::create();
        form.title = "Groceries".to_string();
        form.content.insert_str("Milk and eggs");
        form.tags_input = "home, errands".to_string();
        form
    }

    #[test]
    fn test_login_validate_passes() {
        let mut form = LoginForm {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            ..LoginForm::default()
        };
        assert!(form.validate());
        assert_eq!(form.errors, LoginErrors::default());
    }

    #[test]
    fn test_login_empty_email_is_required() {
        let mut form = LoginForm {
            email: "   ".to_string(),
            password: "secret1".to_string(),
            ..LoginForm::default()
        };
        assert!(!form.validate());
        assert_eq!(form.errors.email, EMAIL_REQUIRED);
        assert!(form.errors.password.is_empty());
    }

    #[test]
    fn test_login_malformed_email() {
        let mut form = LoginForm {
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
            ..LoginForm::default()
        };
        assert!(!form.validate());
        assert_eq!(form.errors.email, EMAIL_INVALID);
    }

    #[test]
    fn test_login_short_password_boundary() {
        let mut form = LoginForm {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
            ..LoginForm::default()
        };
        assert!(!form.validate());
        assert_eq!(form.errors.password, PASSWORD_TOO_SHORT);

        form.password = "123456".to_string();
        assert!(form.validate());
    }

    #[test]
    fn test_login_field_errors_coexist() {
        let mut form = LoginForm::default();
        assert!(!form.validate());
        assert_eq!(form.errors.email, EMAIL_REQUIRED);
        assert_eq!(form.errors.password, PASSWORD_REQUIRED);
    }

    #[test]
    fn test_login_errors_cleared_on_next_submit() {
        let mut form = LoginForm::default();
        assert!(!form.validate());

        form.email = "a@b.com".to_string();
        form.password = "secret1".to_string();
        assert!(form.validate());
        assert_eq!(form.errors, LoginErrors::default());
    }

    #[test]
    fn test_signup_validation_order() {
        let mut form = SignupForm::default();
        assert!(!form.validate());
        assert_eq!(form.error.as_deref(), Some(SIGNUP_NAME_REQUIRED));

        form.name = "Ada".to_string();
        assert!(!form.validate());
        assert_eq!(form.error.as_deref(), Some(SIGNUP_EMAIL_INVALID));

        form.email = "ada@example.com".to_string();
        assert!(!form.validate());
        assert_eq!(form.password_error.as_deref(), Some(SIGNUP_PASSWORD_REQUIRED));

        form.password = "weakpass".to_string();
        assert!(!form.validate());
        assert_eq!(form.password_error.as_deref(), Some(SIGNUP_PASSWORD_WEAK));

        form.password = "Str0ng!pass".to_string();
        assert!(form.validate());
        assert!(form.error.is_none());
        assert!(form.password_error.is_none());
    }

    #[test]
    fn test_signup_name_edit_clears_error() {
        let mut form = SignupForm::default();
        assert!(!form.validate());
        assert!(form.error.is_some());

        form.focus = SignupField::Name;
        form.push_char('A');
        assert!(form.error.is_none());
    }

    #[test]
    fn test_note_validate_passes() {
        let mut form = valid_note_form();
        assert!(form.validate());
        assert_eq!(form.errors, NoteErrors::default());
    }

    #[test]
    fn test_note_empty_title_is_required() {
        let mut form = valid_note_form();
        form.title = "  ".to_string();
        assert!(!form.validate());
        assert_eq!(form.errors.title, TITLE_REQUIRED);
    }

    #[test]
    fn test_note_short_title_boundary() {
        let mut form = valid_note_form();
        form.title = "ab".to_string();
        assert!(!form.validate());
        assert_eq!(form.errors.title, TITLE_TOO_SHORT);

        form.title = "abc".to_string();
        assert!(form.validate());
    }

    #[test]
    fn test_note_short_content_boundary() {
        let mut form = NoteForm::create();
        form.title = "Groceries".to_string();
        form.content.insert_str("abcd");
        assert!(!form.validate());
        assert_eq!(form.errors.content, CONTENT_TOO_SHORT);

        form.content.insert_str("e");
        assert!(form.validate());
    }

    #[test]
    fn test_note_empty_content_is_required() {
        let mut form = valid_note_form();
        form.content = TextArea::default();
        assert!(!form.validate());
        assert_eq!(form.errors.content, CONTENT_REQUIRED);
    }

    #[test]
    fn test_note_duplicate_tags_rejected() {
        let mut form = valid_note_form();
        form.tags_input = "x, x ".to_string();
        assert!(!form.validate());
        assert_eq!(form.errors.tags, TAGS_DUPLICATE);
    }

    #[test]
    fn test_note_all_failing_fields_reported_at_once() {
        let mut form = NoteForm::create();
        form.tags_input = "x,x".to_string();
        assert!(!form.validate());
        assert_eq!(form.errors.title, TITLE_REQUIRED);
        assert_eq!(form.errors.content, CONTENT_REQUIRED);
        assert_eq!(form.errors.tags, TAGS_DUPLICATE);
    }

    #[test]
    fn test_note_errors_cleared_on_next_submit() {
        let mut form = NoteForm::create();
        assert!(!form.validate());
        assert!(!form.errors.title.is_empty());

        form.title = "Groceries".to_string();
        form.content.insert_str("Milk and eggs");
        assert!(form.validate());
        assert_eq!(form.errors, NoteErrors::default());
    }

    #[test]
    fn test_note_submission_tags_normalized() {
        let mut form = valid_note_form();
        form.tags_input = " work ,, home".to_string();
        assert_eq!(
            form.submission_tags(),
            vec!["work".to_string(), "home".to_string()]
        );
    }

    #[test]
    fn test_note_form_seeded_from_existing_note() {
        let note = Note {
            id: "n1".to_string(),
            title: "Groceries".to_string(),
            content: "Milk\nEggs".to_string(),
            tags: vec!["home".to_string(), "errands".to_string()],
            created_on: None,
        };
        let form = NoteForm::edit(&note);
        assert_eq!(
            form.mode,
            EditorMode::Edit {
                id: "n1".to_string()
            }
        );
        assert_eq!(form.title, "Groceries");
        assert_eq!(form.content_text(), "Milk\nEggs");
        assert_eq!(form.tags_input, "home, errands");
    }
}

//! Wire models for the notes service API.
//!
//! These mirror the JSON shapes the server sends. Field names follow the
//! wire convention (camelCase, Mongo-style `_id`).

use fake::Dummy;
use serde::Deserialize;

/// Response payload shared by the login and registration endpoints.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<bool>,
    pub message: Option<String>,
}

/// Defines note data structure.
///
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Eq)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdOn", default)]
    pub created_on: Option<String>,
}

/// Envelope around a single saved note.
///
#[derive(Debug, Deserialize)]
pub struct NoteEnvelope {
    pub note: Option<Note>,
}

/// Envelope around the full note list.
///
#[derive(Debug, Deserialize)]
pub struct NotesEnvelope {
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_payload_with_token() {
        let payload: AuthPayload =
            serde_json::from_value(json!({ "accessToken": "tok123" })).unwrap();
        assert_eq!(payload.access_token.as_deref(), Some("tok123"));
        assert!(payload.error.is_none());
        assert!(payload.message.is_none());
    }

    #[test]
    fn test_auth_payload_with_error_flag() {
        let payload: AuthPayload =
            serde_json::from_value(json!({ "error": true, "message": "Account exists" })).unwrap();
        assert_eq!(payload.error, Some(true));
        assert_eq!(payload.message.as_deref(), Some("Account exists"));
        assert!(payload.access_token.is_none());
    }

    #[test]
    fn test_note_wire_names() {
        let note: Note = serde_json::from_value(json!({
            "_id": "n1",
            "title": "Groceries",
            "content": "Milk and eggs",
            "tags": ["home"],
            "createdOn": "2024-05-01T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.tags, vec!["home".to_string()]);
        assert_eq!(note.created_on.as_deref(), Some("2024-05-01T09:30:00Z"));
    }

    #[test]
    fn test_note_optional_fields_default() {
        let note: Note = serde_json::from_value(json!({
            "_id": "n2",
            "title": "Untagged",
            "content": "No tags here"
        }))
        .unwrap();
        assert!(note.tags.is_empty());
        assert!(note.created_on.is_none());
    }
}

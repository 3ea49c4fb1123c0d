//! Notes service API module.
//!
//! This module is responsible for asynchronous interaction with the notes
//! service, one request/response exchange per operation. Response shapes
//! are classified into explicit results here so callers pattern match
//! instead of probing optional fields.

mod client;
mod error;
mod models;

pub use error::ApiError;
pub use models::Note;

use client::Client;
use log::*;
use models::{AuthPayload, NoteEnvelope, NotesEnvelope};
use serde_json::json;

/// Facade over the notes service endpoints.
///
pub struct NotesApi {
    client: Client,
}

impl NotesApi {
    /// Returns a new unauthenticated instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> NotesApi {
        debug!("Initializing notes client for {}...", base_url);
        NotesApi {
            client: Client::new(base_url),
        }
    }

    /// Attach a bearer token to all subsequent requests.
    ///
    pub fn set_access_token(&mut self, token: &str) {
        self.client.set_access_token(token);
    }

    /// Drop the bearer token from subsequent requests.
    ///
    pub fn clear_access_token(&mut self) {
        self.client.clear_access_token();
    }

    /// Exchange credentials for an access token.
    ///
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, ApiError> {
        debug!("Requesting login for {}...", email);
        let payload: AuthPayload = self
            .client
            .post("/login", &json!({ "email": email, "password": password }))
            .await?;
        payload.access_token.ok_or(ApiError::MissingToken)
    }

    /// Register a new account and return the issued access token. The
    /// explicit server error flag takes precedence over a token in the
    /// same payload.
    ///
    pub async fn register(
        &mut self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        debug!("Requesting registration for {}...", email);
        let payload: AuthPayload = self
            .client
            .post(
                "/create-acc",
                &json!({ "fullName": full_name, "email": email, "password": password }),
            )
            .await?;
        if payload.error.unwrap_or(false) {
            return Err(ApiError::Rejected {
                message: payload.message,
            });
        }
        payload.access_token.ok_or(ApiError::MissingToken)
    }

    /// Create a new note and return the saved copy.
    ///
    pub async fn create_note(
        &mut self,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<Note, ApiError> {
        debug!("Creating note '{}'...", title);
        let payload: NoteEnvelope = self
            .client
            .post(
                "/add-note",
                &json!({ "title": title, "content": content, "tags": tags }),
            )
            .await?;
        payload.note.ok_or(ApiError::MissingNote)
    }

    /// Update an existing note by identifier and return the saved copy.
    ///
    pub async fn update_note(
        &mut self,
        id: &str,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<Note, ApiError> {
        debug!("Updating note {}...", id);
        let payload: NoteEnvelope = self
            .client
            .put(
                &format!("/edit-note/{}", id),
                &json!({ "title": title, "content": content, "tags": tags }),
            )
            .await?;
        payload.note.ok_or(ApiError::MissingNote)
    }

    /// Return all notes for the authenticated account.
    ///
    pub async fn list_notes(&mut self) -> Result<Vec<Note>, ApiError> {
        debug!("Fetching all notes...");
        let payload: NotesEnvelope = self.client.get("/get-all-notes").await?;
        Ok(payload.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use uuid::Uuid;

    #[tokio::test]
    async fn login_success() {
        let token: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/login")
                    .json_body(json!({ "email": "a@b.com", "password": "secret1" }));
                then.status(200)
                    .json_body(json!({ "accessToken": token.to_string() }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let issued = api.login("a@b.com", "secret1").await.unwrap();
        assert_eq!(issued, token.to_string());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_invalid_credentials() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/login");
                then.status(400)
                    .json_body(json!({ "message": "Invalid credentials" }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let err = api.login("a@b.com", "wrong12").await.unwrap_err();
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_response_without_token() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/login");
                then.status(200).json_body(json!({}));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let err = api.login("a@b.com", "secret1").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[tokio::test]
    async fn register_success() {
        let token: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/create-acc").json_body(json!({
                    "fullName": "Ada Lovelace",
                    "email": "ada@example.com",
                    "password": "Str0ng!pass"
                }));
                then.status(200)
                    .json_body(json!({ "accessToken": token.to_string() }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let issued = api
            .register("Ada Lovelace", "ada@example.com", "Str0ng!pass")
            .await
            .unwrap();
        assert_eq!(issued, token.to_string());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn register_error_flag_takes_precedence_over_token() {
        let token: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/create-acc");
                then.status(200).json_body(json!({
                    "error": true,
                    "message": "Account already exists",
                    "accessToken": token.to_string()
                }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let err = api
            .register("Ada Lovelace", "ada@example.com", "Str0ng!pass")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.server_message(), Some("Account already exists"));
    }

    #[tokio::test]
    async fn register_response_without_token() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/create-acc");
                then.status(200).json_body(json!({ "error": false }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let err = api
            .register("Ada Lovelace", "ada@example.com", "Str0ng!pass")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[tokio::test]
    async fn create_note_success() {
        let token: Uuid = UUIDv4.fake();
        let note: Note = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/add-note")
                    .header("Authorization", &format!("Bearer {}", &token))
                    .json_body(json!({
                        "title": note.title,
                        "content": note.content,
                        "tags": note.tags
                    }));
                then.status(200).json_body(json!({
                    "note": {
                        "_id": note.id,
                        "title": note.title,
                        "content": note.content,
                        "tags": note.tags
                    }
                }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        api.set_access_token(&token.to_string());
        let saved = api
            .create_note(&note.title, &note.content, &note.tags)
            .await
            .unwrap();
        assert_eq!(saved.id, note.id);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_note_addresses_note_by_id() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("PUT").path("/edit-note/n1");
                then.status(200).json_body(json!({
                    "note": {
                        "_id": "n1",
                        "title": "Updated",
                        "content": "New content",
                        "tags": ["x", "y"]
                    }
                }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let tags = vec!["x".to_string(), "y".to_string()];
        let saved = api
            .update_note("n1", "Updated", "New content", &tags)
            .await
            .unwrap();
        assert_eq!(saved.title, "Updated");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_note_response_without_note() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("PUT").path("/edit-note/n1");
                then.status(200).json_body(json!({}));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let err = api
            .update_note("n1", "Updated", "New content", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingNote));
    }

    #[tokio::test]
    async fn list_notes_success() {
        let notes: [Note; 2] = [Faker.fake(), Faker.fake()];

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/get-all-notes");
                then.status(200).json_body(json!({
                    "notes": [
                        {
                            "_id": notes[0].id,
                            "title": notes[0].title,
                            "content": notes[0].content,
                            "tags": notes[0].tags
                        },
                        {
                            "_id": notes[1].id,
                            "title": notes[1].title,
                            "content": notes[1].content,
                            "tags": notes[1].tags
                        }
                    ]
                }));
            })
            .await;

        let mut api = NotesApi::new(&server.base_url());
        let fetched = api.list_notes().await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0].id, notes[0].id);
        mock.assert_async().await;
    }
}

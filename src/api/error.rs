//! Notes API-specific error types.

/// Errors that can occur while talking to the notes service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded with a non-success status
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// Server accepted the request but flagged it as an error
    #[error("Request rejected by server: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Authentication response carried no access token
    #[error("Server response did not include an access token")]
    MissingToken,

    /// Note response carried no note object
    #[error("Server response did not include the saved note")]
    MissingNote,
}

impl ApiError {
    /// Return the server-provided message, if the server sent one.
    ///
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } | ApiError::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::Api {
            status: 404,
            message: Some("Not found".to_string()),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));

        let error = ApiError::Api {
            status: 500,
            message: None,
        };
        assert!(error.to_string().contains("no message"));

        let error = ApiError::MissingToken;
        assert!(error.to_string().contains("access token"));

        let error = ApiError::MissingNote;
        assert!(error.to_string().contains("saved note"));
    }

    #[test]
    fn test_server_message() {
        let error = ApiError::Api {
            status: 400,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(error.server_message(), Some("Invalid credentials"));

        let error = ApiError::Rejected {
            message: Some("Account exists".to_string()),
        };
        assert_eq!(error.server_message(), Some("Account exists"));

        let error = ApiError::MissingToken;
        assert_eq!(error.server_message(), None);
    }
}

//! Error types for the statement client

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("rejected by server: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text shown to the user for a failed upload.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::NoFileSelected => "Pilih file CSV dulu".to_string(),
            ClientError::Status { .. } | ClientError::Rejected(_) => "Upload gagal".to_string(),
            ClientError::Network(msg) => format!("Terjadi kesalahan saat upload: {msg}"),
            ClientError::Decode(_) => "Terjadi kesalahan saat upload".to_string(),
        }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(value: gloo_net::Error) -> Self {
        ClientError::Network(value.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        ClientError::Decode(value.to_string())
    }
}

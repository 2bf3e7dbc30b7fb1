//! Error types for Mastodon API calls
//!
//! Every operation fails with exactly one [`ClientError`]. The variants map
//! onto the four ways a call can go wrong: the authentication gate refused
//! it before anything was sent, the transport failed, the server answered
//! with a non-2xx status, or the body did not match the declared entity.

use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;

/// Client error type wrapping all possible error conditions
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// Request serialization failed
    #[error("{0}")]
    Encode(
        #[from]
        #[diagnostic_source]
        EncodeError,
    ),

    /// Response deserialization failed
    #[error("{0}")]
    Decode(
        #[from]
        #[diagnostic_source]
        DecodeError,
    ),

    /// Non-2xx response from the instance
    #[error("{0}")]
    Api(
        #[from]
        #[diagnostic_source]
        ApiError,
    ),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(
        #[from]
        #[diagnostic_source]
        AuthError,
    ),
}

impl ClientError {
    /// The API error, if the server answered with a non-2xx status.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the call was refused locally for lack of a credential.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::Auth(AuthError::NotAuthenticated { .. }))
    }
}

/// Transport-level errors that occur during HTTP communication
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish connection to server
    #[error("Connection error: {0}")]
    #[diagnostic(code(tootbox::transport::connect))]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    #[diagnostic(code(tootbox::transport::timeout))]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.)
    #[error("Invalid request: {0}")]
    #[diagnostic(code(tootbox::transport::invalid_request))]
    InvalidRequest(String),

    /// Other transport error
    #[error("Transport error: {0}")]
    #[diagnostic(code(tootbox::transport::other))]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Classify an error coming out of an [`HttpClient`](crate::http_client::HttpClient).
    ///
    /// Errors from the bundled `reqwest` transport are split into connect,
    /// timeout and request-construction kinds; anything else is kept boxed.
    pub fn from_client_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        #[cfg(feature = "reqwest-client")]
        let boxed = match boxed.downcast::<reqwest::Error>() {
            Ok(e) => return Self::from(*e),
            Err(other) => other,
        };
        Self::Other(boxed)
    }
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}

impl From<http::Error> for TransportError {
    fn from(e: http::Error) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}

/// Error type for encoding request parameters
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// Failed to serialize query parameters
    #[error("Failed to serialize query: {0}")]
    #[diagnostic(code(tootbox::encode::query))]
    Query(
        #[from]
        #[source]
        serde_html_form::ser::Error,
    ),
    /// Failed to serialize JSON body
    #[error("Failed to serialize JSON: {0}")]
    #[diagnostic(code(tootbox::encode::json))]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
    /// A path identifier would resolve to a different route (`.` or `..`)
    #[error("Identifier cannot be used as a path segment: {0}")]
    #[diagnostic(code(tootbox::encode::path_segment))]
    PathSegment(String),
    /// Other encoding error
    #[error("Encoding error: {0}")]
    #[diagnostic(code(tootbox::encode::other))]
    Other(String),
}

/// Response deserialization errors
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// JSON body did not match the expected entity shape
    #[error("Failed to decode {target}: {source}")]
    #[diagnostic(
        code(tootbox::decode::json),
        help("the instance returned a body that does not match the documented entity")
    )]
    Json {
        /// Rust type the body was decoded into
        target: &'static str,
        /// Underlying serde_json error, which names the offending field
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Wrap a serde_json error raised while decoding `T`.
    pub fn json<T>(source: serde_json::Error) -> Self {
        Self::Json {
            target: std::any::type_name::<T>(),
            source,
        }
    }
}

/// Mastodon's error body: `{ "error": "...", "error_description": "..." }`.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Non-2xx response from the instance.
#[derive(Debug, Clone, thiserror::Error, miette::Diagnostic)]
#[error("HTTP {status}: {message}")]
#[diagnostic(code(tootbox::api))]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,
    /// Server-supplied `error` message, or a generic message for the status
    pub message: String,
    /// Server-supplied `error_description`, when present
    pub description: Option<String>,
    /// Raw response body
    pub body: Bytes,
}

impl ApiError {
    /// Build an API error from a non-2xx status and its body.
    ///
    /// Bodies that are not Mastodon's error shape fall back to a message
    /// derived from the status code alone.
    pub fn from_response(status: StatusCode, body: Bytes) -> Self {
        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(parsed) if !parsed.error.trim().is_empty() => Self {
                status,
                message: parsed.error,
                description: parsed.error_description,
                body,
            },
            _ => Self {
                status,
                message: generic_message(status),
                description: None,
                body,
            },
        }
    }

    /// Whether the instance answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// Whether the instance rejected the credential (401).
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }
}

/// Generic message used when an error body carries nothing usable.
pub fn generic_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_owned(),
        None => format!("HTTP {}", status.as_u16()),
    }
}

/// Authentication and authorization errors
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AuthError {
    /// Request requires authentication but none was provided
    #[error("{endpoint} requires an OAuth access token, but none was provided")]
    #[diagnostic(
        code(tootbox::auth::not_authenticated),
        help("configure a token on the client or pass one for this call")
    )]
    NotAuthenticated {
        /// Path template of the refused endpoint
        endpoint: &'static str,
        /// Scope the token needs, if the endpoint documents one
        scope: Option<&'static str>,
    },

    /// Access token cannot be sent as an `Authorization` header
    #[error("Invalid access token: {0}")]
    #[diagnostic(code(tootbox::auth::invalid_token))]
    InvalidToken(String),
}

/// Result type for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

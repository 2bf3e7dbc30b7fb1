//! Shared plumbing for the tootbox Mastodon client.
//!
//! Everything an endpoint call needs that is not specific to one endpoint
//! lives here: the [`HttpClient`](http_client::HttpClient) transport trait,
//! the authentication-context gate, the [`Endpoint`] trait with its request
//! builder, the [`Response`] wrapper and its transforms, multipart encoding,
//! and the error taxonomy.

#![warn(missing_docs)]
pub use http;
pub use smol_str;
pub use url;

/// Bearer tokens and the per-endpoint authentication context.
pub mod auth;
pub mod endpoint;
pub mod error;
/// HTTP client abstraction used by tootbox crates.
pub mod http_client;
pub mod multipart;

pub use auth::{AuthContext, BearerToken};
pub use endpoint::{
    Acknowledge, CallExt, CallOptions, Endpoint, EndpointMethod, EndpointResp, List, Response,
    Single,
};
pub use error::{ClientError, ClientResult};

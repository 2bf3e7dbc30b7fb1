//! # tootbox
//!
//! A typed client for the Mastodon REST API: accounts, relationships,
//! hashtags, featured tags, follow suggestions, preferences and OAuth tokens.
//!
//! ## Layout
//!
//! - [`tootbox_common`] (re-exported at the root): the `HttpClient`
//!   transport, the authentication gate, the `Endpoint` trait, response
//!   transforms and errors.
//! - [`api`]: entities and one request type per REST operation.
//! - [`Client`]: one async method per operation over an explicit
//!   [`ClientConfig`].
//!
//! Every call declares how it authenticates. Calls that need a token fail
//! with [`AuthError::NotAuthenticated`](error::AuthError::NotAuthenticated)
//! before any request is made; calls that work anonymously attach the token
//! when there is one; the OAuth token endpoints never send it.
//!
//! ## Example
//!
//! Prints the credentialed account and its most recent statuses.
//!
//! ```no_run
//! # use clap::Parser;
//! use tootbox::api::accounts::get_statuses::GetAccountStatuses;
//! use tootbox::{Client, ClientConfig};
//! # use miette::IntoDiagnostic;
//!
//! # #[derive(Parser, Debug)]
//! # struct Args {
//! #     /// Instance URL
//! #     #[arg(long, default_value = "https://mastodon.social")]
//! #     instance: url::Url,
//! #
//! #     /// Access token
//! #     #[arg(long)]
//! #     token: String,
//! # }
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let args = Args::parse();
//!
//!     let client = Client::with_reqwest(ClientConfig::new(args.instance).with_token(args.token));
//!
//!     let me = client.verify_account_credentials(None).await?;
//!     println!("logged in as {}", me.acct_or_username());
//!
//!     let statuses = client
//!         .lookup_statuses(GetAccountStatuses::new().id(me.id).limit(5).build())
//!         .await?;
//!     for status in statuses {
//!         println!("{}", serde_json::to_string_pretty(&status).into_diagnostic()?);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// The client and its configuration
pub mod client;

pub use client::{Client, ClientConfig};
/// Entities and endpoint request types
pub use tootbox_api as api;
pub use tootbox_common::*;

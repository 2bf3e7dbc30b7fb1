//! Account-wide preferences: `GET /api/v1/preferences`

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single};

use crate::statuses::Visibility;

/// Preferences shared across all of a user's clients.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPreferences {
    /// Default visibility for new posts
    #[serde(rename = "posting:default:visibility")]
    pub posting_default_visibility: Option<Visibility>,
    /// Mark media sensitive by default
    #[serde(rename = "posting:default:sensitive")]
    pub posting_default_sensitive: Option<bool>,
    /// Default language for new posts (ISO 639-1)
    #[serde(rename = "posting:default:language")]
    pub posting_default_language: Option<SmolStr>,
    /// How to show media marked sensitive
    #[serde(rename = "reading:expand:media")]
    pub reading_expand_media: Option<ExpandMedia>,
    /// Always expand content warnings
    #[serde(rename = "reading:expand:spoilers")]
    pub reading_expand_spoilers: Option<bool>,
}

/// Display of media marked sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandMedia {
    /// Hide media marked sensitive
    Default,
    /// Show all media
    ShowAll,
    /// Hide all media
    HideAll,
    /// A setting this client does not know about
    #[serde(other)]
    Unknown,
}

/// Fetch the credentialed account's preferences.
#[derive(serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetPreferences {}

impl Endpoint for GetPreferences {
    const PATH: &'static str = "/api/v1/preferences";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<AccountPreferences>;
}

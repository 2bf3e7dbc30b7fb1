//! `PATCH /api/v1/accounts/update_credentials`
//!
//! Profile text and flags go out as JSON; the avatar and header images go
//! out as single-file multipart uploads.

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{EncodedBody, Endpoint, EndpointMethod, Single};
use tootbox_common::error::EncodeError;
use tootbox_common::multipart::{Form, MediaFile, Part};

use crate::accounts::Account;
use crate::statuses::Visibility;

/// Update the credentialed account's profile.
///
/// Only the fields that are set are sent; everything else stays as is.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct UpdateCredentials {
    /// Display name
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub display_name: Option<String>,
    /// Bio
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub note: Option<String>,
    /// Require approval of follow requests
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locked: Option<bool>,
    /// Mark the account as automated
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bot: Option<bool>,
    /// List the account in the profile directory
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub discoverable: Option<bool>,
    /// Hide followers and followed accounts
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hide_collections: Option<bool>,
    /// Allow full-text search of public posts
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub indexable: Option<bool>,
    /// Replacement profile metadata fields
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fields_attributes: Option<Vec<FieldAttribute>>,
    /// Posting defaults
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source: Option<CredentialSource>,
}

/// One profile metadata field.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldAttribute {
    /// Label
    pub name: String,
    /// Value
    pub value: String,
}

impl FieldAttribute {
    /// Field with the given label and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Posting defaults stored with the account.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct CredentialSource {
    /// Default post visibility
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub privacy: Option<Visibility>,
    /// Mark media sensitive by default
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sensitive: Option<bool>,
    /// Default post language (ISO 639-1)
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub language: Option<SmolStr>,
}

impl Endpoint for UpdateCredentials {
    const PATH: &'static str = "/api/v1/accounts/update_credentials";
    const METHOD: EndpointMethod = EndpointMethod::Patch;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<Account>;
}

/// Multipart field name for avatar uploads.
pub const AVATAR_FIELD: &str = "avatar";

/// Multipart field name for header uploads.
///
/// TODO: confirm against a live instance; Mastodon documents this field as
/// `header`, while uploads from this client have always used `avatar`.
pub const HEADER_FIELD: &str = "avatar";

/// Replace the profile picture.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateAvatar {
    /// Image to upload
    #[serde(skip)]
    pub file: MediaFile,
}

impl UpdateAvatar {
    /// Upload `file` as the new avatar.
    pub fn new(file: MediaFile) -> Self {
        Self { file }
    }
}

impl Endpoint for UpdateAvatar {
    const PATH: &'static str = "/api/v1/accounts/update_credentials";
    const METHOD: EndpointMethod = EndpointMethod::Patch;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<Account>;

    fn encode_body(&self) -> Result<Option<EncodedBody>, EncodeError> {
        let form = Form::new().part(Part::file(AVATAR_FIELD, &self.file));
        Ok(Some(form.into()))
    }
}

/// Replace the profile header image.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateHeader {
    /// Image to upload
    #[serde(skip)]
    pub file: MediaFile,
}

impl UpdateHeader {
    /// Upload `file` as the new header.
    pub fn new(file: MediaFile) -> Self {
        Self { file }
    }
}

impl Endpoint for UpdateHeader {
    const PATH: &'static str = "/api/v1/accounts/update_credentials";
    const METHOD: EndpointMethod = EndpointMethod::Patch;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<Account>;

    fn encode_body(&self) -> Result<Option<EncodedBody>, EncodeError> {
        let form = Form::new().part(Part::file(HEADER_FIELD, &self.file));
        Ok(Some(form.into()))
    }
}

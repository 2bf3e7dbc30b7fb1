//! `GET /api/v1/accounts/:id/statuses`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List, path_segment};

use crate::statuses::Status;

/// Statuses posted to an account, newest first.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetAccountStatuses {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
    /// Only statuses older than this id
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub max_id: Option<SmolStr>,
    /// Only statuses newer than this id
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub since_id: Option<SmolStr>,
    /// Only statuses immediately newer than this id
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub min_id: Option<SmolStr>,
    /// Page size; the server defaults to 20 and caps at 40
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<u32>,
    /// Only statuses with media attachments
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub only_media: Option<bool>,
    /// Skip replies to other accounts
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exclude_replies: Option<bool>,
    /// Skip boosts
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exclude_reblogs: Option<bool>,
    /// Only pinned statuses
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pinned: Option<bool>,
    /// Only statuses with this hashtag, without the `#`
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub tagged: Option<SmolStr>,
}

impl Endpoint for GetAccountStatuses {
    const PATH: &'static str = "/api/v1/accounts/:id/statuses";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2OrAnonymous;
    const SCOPE: Option<&'static str> = Some("read:statuses");

    type Response = List<Status>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/statuses", path_segment(&self.id)).into()
    }
}

//! `GET /api/v1/accounts/:id/following`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List, path_segment};

use crate::accounts::Account;

/// Accounts the given account follows.
///
/// Paged by the `Link` header; the ids are internal follow ids, not account ids.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetFollowing {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
    /// Entries older than this id
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub max_id: Option<SmolStr>,
    /// Entries newer than this id
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub since_id: Option<SmolStr>,
    /// Entries immediately newer than this id
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub min_id: Option<SmolStr>,
    /// Page size; the server defaults to 40 and caps at 80
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<u32>,
}

impl Endpoint for GetFollowing {
    const PATH: &'static str = "/api/v1/accounts/:id/following";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2OrAnonymous;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = List<Account>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/following", path_segment(&self.id)).into()
    }
}

//! `GET /api/v1/accounts/search`

use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List};

use crate::accounts::Account;

/// Search accounts by username, display name or WebFinger address.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct SearchAccounts {
    /// Search query
    #[builder(into)]
    pub q: String,
    /// Maximum results; the server defaults to 40
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<u32>,
    /// Skip this many results
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: Option<u32>,
    /// Fetch remote accounts over WebFinger when `q` is an exact address
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resolve: Option<bool>,
    /// Only accounts you follow
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub following: Option<bool>,
}

impl Endpoint for SearchAccounts {
    const PATH: &'static str = "/api/v1/accounts/search";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = List<Account>;
}

//! Muted accounts: `GET /api/v1/mutes`

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List};

use crate::accounts::Account;

/// Accounts you mute.
///
/// Paged by the `Link` header.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetMutes {
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

impl Endpoint for GetMutes {
    const PATH: &'static str = "/api/v1/mutes";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:mutes");

    type Response = List<Account>;
}

//! Follow suggestions.

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Acknowledge, Endpoint, EndpointMethod, List, path_segment};

use crate::accounts::Account;

/// `GET /api/v1/suggestions`: accounts the server suggests you follow.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetSuggestions {
    /// Maximum results; the server defaults to 40 and caps at 80
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<u32>,
}

impl Endpoint for GetSuggestions {
    const PATH: &'static str = "/api/v1/suggestions";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read");

    type Response = List<Account>;
}

/// `DELETE /api/v1/suggestions/:account_id`: stop suggesting an account.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct RemoveSuggestion {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub account_id: SmolStr,
}

impl Endpoint for RemoveSuggestion {
    const PATH: &'static str = "/api/v1/suggestions/:account_id";
    const METHOD: EndpointMethod = EndpointMethod::Delete;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read");

    type Response = Acknowledge;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/suggestions/{}", path_segment(&self.account_id)).into()
    }
}

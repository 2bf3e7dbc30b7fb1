//! `GET /api/v1/accounts/familiar_followers`

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List};

use crate::accounts::FamiliarFollower;

/// For each given account, the accounts you follow that also follow it.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetFamiliarFollowers {
    /// Account ids, sent as repeated `id[]` entries
    #[serde(rename = "id[]")]
    pub ids: Vec<SmolStr>,
}

impl Endpoint for GetFamiliarFollowers {
    const PATH: &'static str = "/api/v1/accounts/familiar_followers";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:follows");

    type Response = List<FamiliarFollower>;
}

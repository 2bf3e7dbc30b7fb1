//! `GET /api/v1/accounts/:id`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::accounts::Account;

/// View an account by id.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetAccount {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for GetAccount {
    const PATH: &'static str = "/api/v1/accounts/:id";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2OrAnonymous;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<Account>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}", path_segment(&self.id)).into()
    }
}

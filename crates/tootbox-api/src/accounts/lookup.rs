//! `GET /api/v1/accounts/lookup`

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single};

use crate::accounts::Account;

/// Resolve a WebFinger address to an account, without a remote lookup.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct LookupAccount {
    /// `username` or `username@domain`
    #[builder(into)]
    pub acct: SmolStr,
}

impl Endpoint for LookupAccount {
    const PATH: &'static str = "/api/v1/accounts/lookup";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2OrAnonymous;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<Account>;
}

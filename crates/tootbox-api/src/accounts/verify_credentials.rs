//! `GET /api/v1/accounts/verify_credentials`

use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single};

use crate::accounts::Account;

/// Check the access token and return the account it belongs to.
///
/// The returned account carries `source` and `role`.
#[derive(serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyCredentials {}

impl Endpoint for VerifyCredentials {
    const PATH: &'static str = "/api/v1/accounts/verify_credentials";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Single<Account>;
}

//! `POST /oauth/revoke`

use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Acknowledge, Endpoint, EndpointMethod};

/// Revoke an access token. Any 2xx means the token is gone.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct RevokeToken {
    /// Application client id
    #[builder(into)]
    pub client_id: String,
    /// Application client secret
    #[builder(into)]
    pub client_secret: String,
    /// Token to revoke
    #[builder(into)]
    pub token: String,
}

impl Endpoint for RevokeToken {
    const PATH: &'static str = "/oauth/revoke";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::Anonymous;
    const SCOPE: Option<&'static str> = None;

    type Response = Acknowledge;
}

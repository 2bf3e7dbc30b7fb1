//! `POST /oauth/token`

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single};

use crate::oauth::Token;

/// Exchange an authorization code, or client credentials, for a token.
///
/// Sent without credentials even when the client has a token configured.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct ObtainToken {
    /// `authorization_code` or `client_credentials`
    #[builder(into)]
    pub grant_type: SmolStr,
    /// Application client id
    #[builder(into)]
    pub client_id: String,
    /// Application client secret
    #[builder(into)]
    pub client_secret: String,
    /// Redirect URI registered with the application
    #[builder(into)]
    pub redirect_uri: String,
    /// Authorization code, for the `authorization_code` grant
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub code: Option<String>,
    /// Space-separated scopes; must be a subset of the application's
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub scope: Option<String>,
}

impl Endpoint for ObtainToken {
    const PATH: &'static str = "/oauth/token";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::Anonymous;
    const SCOPE: Option<&'static str> = None;

    type Response = Single<Token>;
}

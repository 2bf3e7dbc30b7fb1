//! `POST /api/v1/accounts`

use chrono::NaiveDate;
use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single};

use crate::oauth::Token;

/// Register a new account.
///
/// Needs an app-level token (client credentials grant). The returned token
/// belongs to the new, still unconfirmed, user.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct CreateAccount {
    /// Desired username
    #[builder(into)]
    pub username: SmolStr,
    /// Email address for confirmation
    #[builder(into)]
    pub email: String,
    /// Password
    #[builder(into)]
    pub password: String,
    /// Agreement to the server rules and privacy policy
    pub agreement: bool,
    /// Language of the confirmation email (ISO 639-1)
    #[builder(into)]
    pub locale: SmolStr,
    /// Note for moderators when registrations need approval
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub reason: Option<String>,
    /// Date of birth, when the server enforces a minimum age
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl Endpoint for CreateAccount {
    const PATH: &'static str = "/api/v1/accounts";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:accounts");

    type Response = Single<Token>;
}

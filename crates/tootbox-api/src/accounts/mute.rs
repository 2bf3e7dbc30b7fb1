//! `POST /api/v1/accounts/:id/mute` and `POST /api/v1/accounts/:id/unmute`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::accounts::Relationship;

/// Hide an account's posts and, optionally, its notifications.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Mute {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
    /// Also mute notifications; the server defaults to true
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notifications: Option<bool>,
    /// Seconds until the mute expires; 0 or absent means indefinitely
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub duration: Option<u64>,
}

impl Endpoint for Mute {
    const PATH: &'static str = "/api/v1/accounts/:id/mute";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:mutes");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/mute", path_segment(&self.id)).into()
    }
}

/// Lift a mute.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Unmute {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for Unmute {
    const PATH: &'static str = "/api/v1/accounts/:id/unmute";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:mutes");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/unmute", path_segment(&self.id)).into()
    }
}

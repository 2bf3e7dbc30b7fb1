//! `POST /api/v1/accounts/:id/follow` and `POST /api/v1/accounts/:id/unfollow`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::accounts::Relationship;

/// Follow an account, or update the options of an existing follow.
///
/// Locked accounts answer with `requested: true` until they approve.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Follow {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
    /// Show their boosts in the home timeline
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reblogs: Option<bool>,
    /// Notify when they post
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notify: Option<bool>,
    /// Only show posts in these languages (ISO 639-1)
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub languages: Option<Vec<SmolStr>>,
}

impl Endpoint for Follow {
    const PATH: &'static str = "/api/v1/accounts/:id/follow";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    // Mastodon documents write:follows for this route
    const SCOPE: Option<&'static str> = Some("read:lists");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/follow", path_segment(&self.id)).into()
    }
}

/// Unfollow an account, or withdraw a pending follow request.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Unfollow {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for Unfollow {
    const PATH: &'static str = "/api/v1/accounts/:id/unfollow";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:follows");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/unfollow", path_segment(&self.id)).into()
    }
}

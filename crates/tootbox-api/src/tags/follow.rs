//! `POST /api/v1/tags/:name/follow` and `POST /api/v1/tags/:name/unfollow`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::tags::Tag;

/// Follow a hashtag; its posts then show in the home timeline.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct FollowTag {
    /// Tag name, without the `#`
    #[serde(skip)]
    #[builder(into)]
    pub name: SmolStr,
}

impl Endpoint for FollowTag {
    const PATH: &'static str = "/api/v1/tags/:name/follow";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:follows");

    type Response = Single<Tag>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/tags/{}/follow", path_segment(&self.name)).into()
    }
}

/// Stop following a hashtag.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct UnfollowTag {
    /// Tag name, without the `#`
    #[serde(skip)]
    #[builder(into)]
    pub name: SmolStr,
}

impl Endpoint for UnfollowTag {
    const PATH: &'static str = "/api/v1/tags/:name/unfollow";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:follows");

    type Response = Single<Tag>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/tags/{}/unfollow", path_segment(&self.name)).into()
    }
}

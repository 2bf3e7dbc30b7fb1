//! `DELETE /api/v1/featured_tags/:id`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Acknowledge, Endpoint, EndpointMethod, path_segment};

/// Stop featuring a hashtag. The server answers with an empty object.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct DeleteFeaturedTag {
    /// Featured tag id, not the tag name
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for DeleteFeaturedTag {
    const PATH: &'static str = "/api/v1/featured_tags/:id";
    const METHOD: EndpointMethod = EndpointMethod::Delete;
    const AUTH: AuthContext = AuthContext::OAuth2;
    // Mastodon documents write:accounts for this route
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = Acknowledge;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/featured_tags/{}", path_segment(&self.id)).into()
    }
}

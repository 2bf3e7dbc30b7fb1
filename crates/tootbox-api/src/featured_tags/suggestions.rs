//! `GET /api/v1/featured_tags/suggestions`

use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List};

use crate::tags::Tag;

/// Your ten most used hashtags that are not featured yet.
#[derive(serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetFeaturedTagSuggestions {}

impl Endpoint for GetFeaturedTagSuggestions {
    const PATH: &'static str = "/api/v1/featured_tags/suggestions";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = List<Tag>;
}

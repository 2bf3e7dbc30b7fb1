//! `GET /api/v1/featured_tags`

use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List};

use crate::featured_tags::FeaturedTag;

/// Hashtags featured on your profile.
#[derive(serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetFeaturedTags {}

impl Endpoint for GetFeaturedTags {
    const PATH: &'static str = "/api/v1/featured_tags";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = List<FeaturedTag>;
}

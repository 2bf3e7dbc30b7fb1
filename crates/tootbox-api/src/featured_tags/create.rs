//! `POST /api/v1/featured_tags`

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single};

use crate::featured_tags::FeaturedTag;

/// Feature a hashtag on your profile.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct CreateFeaturedTag {
    /// Tag name, without the `#`
    #[builder(into)]
    pub name: SmolStr,
}

impl Endpoint for CreateFeaturedTag {
    const PATH: &'static str = "/api/v1/featured_tags";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:accounts");

    type Response = Single<FeaturedTag>;
}

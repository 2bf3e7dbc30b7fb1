//! `GET /api/v1/accounts/:id/featured_tags`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List, path_segment};

use crate::featured_tags::FeaturedTag;

/// Hashtags an account features on its profile.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetAccountFeaturedTags {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for GetAccountFeaturedTags {
    const PATH: &'static str = "/api/v1/accounts/:id/featured_tags";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2OrAnonymous;
    const SCOPE: Option<&'static str> = Some("read:accounts");

    type Response = List<FeaturedTag>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/featured_tags", path_segment(&self.id)).into()
    }
}

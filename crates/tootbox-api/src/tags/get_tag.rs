//! `GET /api/v1/tags/:name`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::tags::Tag;

/// View a hashtag. `following` is only present when authenticated.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetTag {
    /// Tag name, without the `#`
    #[serde(skip)]
    #[builder(into)]
    pub name: SmolStr,
}

impl Endpoint for GetTag {
    const PATH: &'static str = "/api/v1/tags/:name";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2OrAnonymous;
    const SCOPE: Option<&'static str> = None;

    type Response = Single<Tag>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/tags/{}", path_segment(&self.name)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_one_path_segment() {
        assert_eq!(GetTag::new().name("rust").build().path(), "/api/v1/tags/rust");
        assert_eq!(
            GetTag::new().name("c#/c++").build().path(),
            "/api/v1/tags/c%23%2Fc++"
        );
    }
}

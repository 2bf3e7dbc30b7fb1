//! Endorsements: `POST /api/v1/accounts/:id/pin` and `POST /api/v1/accounts/:id/unpin`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::accounts::Relationship;

/// Feature a followed account on your profile.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Pin {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for Pin {
    const PATH: &'static str = "/api/v1/accounts/:id/pin";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:accounts");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/pin", path_segment(&self.id)).into()
    }
}

/// Stop featuring an account on your profile.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Unpin {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for Unpin {
    const PATH: &'static str = "/api/v1/accounts/:id/unpin";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:accounts");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/unpin", path_segment(&self.id)).into()
    }
}

//! `POST /api/v1/accounts/:id/block` and `POST /api/v1/accounts/:id/unblock`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::accounts::Relationship;

/// Block an account. Also removes any follow in either direction.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Block {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for Block {
    const PATH: &'static str = "/api/v1/accounts/:id/block";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:blocks");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/block", path_segment(&self.id)).into()
    }
}

/// Lift a block.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Unblock {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for Unblock {
    const PATH: &'static str = "/api/v1/accounts/:id/unblock";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:blocks");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/unblock", path_segment(&self.id)).into()
    }
}

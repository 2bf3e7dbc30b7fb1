//! `GET /api/v1/accounts/:id/lists`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List, path_segment};

use crate::lists::UserList;

/// Your lists that contain the given account.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetAccountLists {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
}

impl Endpoint for GetAccountLists {
    const PATH: &'static str = "/api/v1/accounts/:id/lists";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:lists");

    type Response = List<UserList>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/lists", path_segment(&self.id)).into()
    }
}

//! `POST /api/v1/accounts/:id/note`

use std::borrow::Cow;

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, Single, path_segment};

use crate::accounts::Relationship;

/// Set or clear your private note on an account.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct SetNote {
    /// Account id
    #[serde(skip)]
    #[builder(into)]
    pub id: SmolStr,
    /// Note text; absent or empty clears the note
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[builder(into)]
    pub comment: Option<String>,
}

impl Endpoint for SetNote {
    const PATH: &'static str = "/api/v1/accounts/:id/note";
    const METHOD: EndpointMethod = EndpointMethod::Post;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("write:accounts");

    type Response = Single<Relationship>;

    fn path(&self) -> Cow<'_, str> {
        format!("/api/v1/accounts/{}/note", path_segment(&self.id)).into()
    }
}

//! `GET /api/v1/accounts/relationships`

use smol_str::SmolStr;
use tootbox_common::auth::AuthContext;
use tootbox_common::endpoint::{Endpoint, EndpointMethod, List};

use crate::accounts::Relationship;

/// Your relationship to each of the given accounts.
///
/// Ids go out as repeated `id[]` entries, in the order given.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct GetRelationships {
    /// Account ids
    #[serde(rename = "id[]")]
    pub ids: Vec<SmolStr>,
    /// Include suspended accounts
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub with_suspended: Option<bool>,
}

impl Endpoint for GetRelationships {
    const PATH: &'static str = "/api/v1/accounts/relationships";
    const METHOD: EndpointMethod = EndpointMethod::Get;
    const AUTH: AuthContext = AuthContext::OAuth2;
    const SCOPE: Option<&'static str> = Some("read:follows");

    type Response = List<Relationship>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_repeat_in_order() {
        let req = GetRelationships::new()
            .ids(vec!["1".into(), "2".into(), "10".into()])
            .with_suspended(false)
            .build();
        let query = req.encode_query().unwrap().unwrap();
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            pairs,
            [
                ("id[]".to_owned(), "1".to_owned()),
                ("id[]".to_owned(), "2".to_owned()),
                ("id[]".to_owned(), "10".to_owned()),
                ("with_suspended".to_owned(), "false".to_owned()),
            ]
        );
    }
}

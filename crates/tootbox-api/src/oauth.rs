//! OAuth access tokens.

pub mod revoke;
pub mod token;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tootbox_common::auth::BearerToken;

/// An OAuth access token, as issued by `/oauth/token` or account creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token itself
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: SmolStr,
    /// Space-separated granted scopes
    pub scope: String,
    /// Unix timestamp of issue
    pub created_at: i64,
}

impl Token {
    /// The access token, ready for `Authorization` headers.
    pub fn bearer(&self) -> BearerToken {
        BearerToken::new(self.access_token.as_str())
    }

    /// Whether the granted scopes include `scope`.
    ///
    /// A top-level scope such as `read` covers its `read:*` children.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|granted| {
            granted == scope
                || scope
                    .split_once(':')
                    .is_some_and(|(parent, _)| parent == granted)
        })
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token() -> Token {
        serde_json::from_value(json!({
            "access_token": "ZA-Yj3aBD8U8Cm7lKUp-lm9O9BmDgdhHzDeqsY8tlL0",
            "token_type": "Bearer",
            "scope": "read write:follows",
            "created_at": 1573979017
        }))
        .unwrap()
    }

    #[test]
    fn token_field_mapping() {
        let token = token();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.created_at, 1573979017);
        assert_eq!(
            token.bearer().as_str(),
            "ZA-Yj3aBD8U8Cm7lKUp-lm9O9BmDgdhHzDeqsY8tlL0"
        );
    }

    #[test]
    fn scopes() {
        let token = token();
        assert!(token.has_scope("read"));
        assert!(token.has_scope("read:accounts"));
        assert!(token.has_scope("write:follows"));
        assert!(!token.has_scope("write:blocks"));
        assert!(!token.has_scope("write"));
    }

    #[test]
    fn debug_hides_the_secret() {
        assert!(!format!("{:?}", token()).contains("ZA-Yj3"));
    }

    #[test]
    fn created_at_is_required() {
        let err = serde_json::from_value::<Token>(json!({
            "access_token": "x", "token_type": "Bearer", "scope": "read"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("created_at"), "{err}");
    }
}

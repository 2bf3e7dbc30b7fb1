use std::fmt;

use http::HeaderValue;
use smol_str::SmolStr;

use crate::error::AuthError;

/// OAuth bearer access token.
///
/// `Debug` output is redacted so tokens do not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BearerToken(SmolStr);

impl BearerToken {
    /// Wrap a raw access token.
    pub fn new(token: impl Into<SmolStr>) -> Self {
        Self(token.into())
    }

    /// The raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl From<&str> for BearerToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BearerToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl TryFrom<&BearerToken> for HeaderValue {
    type Error = AuthError;

    fn try_from(token: &BearerToken) -> Result<Self, Self::Error> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Credential state an endpoint accepts.
///
/// Every endpoint declares exactly one of these; the gate in
/// [`AuthContext::select`] runs once per call, before the request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthContext {
    /// Sent without credentials, even when a token is configured.
    Anonymous,
    /// Requires a bearer token.
    OAuth2,
    /// Sent with the bearer token when one is available.
    OAuth2OrAnonymous,
}

impl AuthContext {
    /// Whether a call in this context fails without a token.
    pub const fn requires_token(self) -> bool {
        matches!(self, Self::OAuth2)
    }

    /// Whether a token is attached when one is available.
    pub const fn sends_token(self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Pick the credential to send for a call to `endpoint`.
    ///
    /// Returns `Ok(None)` when the call goes out anonymously and
    /// [`AuthError::NotAuthenticated`] when the context demands a token that
    /// is not there.
    pub fn select<'t>(
        self,
        token: Option<&'t BearerToken>,
        endpoint: &'static str,
        scope: Option<&'static str>,
    ) -> Result<Option<&'t BearerToken>, AuthError> {
        match (self, token) {
            (Self::Anonymous, _) => Ok(None),
            (Self::OAuth2, None) => Err(AuthError::NotAuthenticated { endpoint, scope }),
            (Self::OAuth2 | Self::OAuth2OrAnonymous, token) => Ok(token),
        }
    }
}

impl fmt::Display for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Anonymous => "anonymous",
            Self::OAuth2 => "oauth2",
            Self::OAuth2OrAnonymous => "oauth2-or-anonymous",
        })
    }
}

use tootbox_api::Token;
use tootbox_api::oauth::revoke::RevokeToken;
use tootbox_api::oauth::token::ObtainToken;
use tootbox_common::ClientResult;
use tootbox_common::http_client::HttpClient;

use crate::client::Client;

/// OAuth. Both calls go out without credentials.
impl<C: HttpClient> Client<C> {
    /// Exchange an authorization code or client credentials for a token.
    ///
    /// The result is not stored; build a new configuration with
    /// [`Token::bearer`] to use it.
    pub async fn obtain_token(&self, request: ObtainToken) -> ClientResult<Token> {
        self.output(&request).await
    }

    /// Revoke a token. `true` on any 2xx.
    pub async fn revoke_token(&self, request: RevokeToken) -> ClientResult<bool> {
        self.output(&request).await
    }
}

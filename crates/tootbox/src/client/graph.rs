use smol_str::SmolStr;
use tootbox_api::Account;
use tootbox_api::blocks::GetBlocks;
use tootbox_api::endorsements::GetEndorsements;
use tootbox_api::mutes::GetMutes;
use tootbox_api::suggestions::{GetSuggestions, RemoveSuggestion};
use tootbox_common::ClientResult;
use tootbox_common::http_client::HttpClient;

use crate::client::Client;

/// Blocks, mutes, endorsements and follow suggestions.
impl<C: HttpClient> Client<C> {
    /// Accounts you block.
    pub async fn lookup_blocks(&self, request: GetBlocks) -> ClientResult<Vec<Account>> {
        self.output(&request).await
    }

    /// Accounts you mute.
    pub async fn lookup_mutes(&self, request: GetMutes) -> ClientResult<Vec<Account>> {
        self.output(&request).await
    }

    /// Accounts you feature on your profile.
    pub async fn lookup_endorsements(
        &self,
        request: GetEndorsements,
    ) -> ClientResult<Vec<Account>> {
        self.output(&request).await
    }

    /// Accounts the server suggests you follow.
    pub async fn lookup_follow_suggestions(&self, limit: Option<u32>) -> ClientResult<Vec<Account>> {
        self.output(&GetSuggestions::new().maybe_limit(limit).build())
            .await
    }

    /// Stop suggesting an account. `true` on any 2xx.
    pub async fn destroy_follow_suggestion(
        &self,
        account_id: impl Into<SmolStr>,
    ) -> ClientResult<bool> {
        self.output(&RemoveSuggestion::new().account_id(account_id).build())
            .await
    }
}

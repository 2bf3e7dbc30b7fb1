use smol_str::SmolStr;
use tootbox_api::accounts::block::{Block, Unblock};
use tootbox_api::accounts::create::CreateAccount;
use tootbox_api::accounts::familiar_followers::GetFamiliarFollowers;
use tootbox_api::accounts::follow::{Follow, Unfollow};
use tootbox_api::accounts::get_account::GetAccount;
use tootbox_api::accounts::get_featured_tags::GetAccountFeaturedTags;
use tootbox_api::accounts::get_followers::GetFollowers;
use tootbox_api::accounts::get_following::GetFollowing;
use tootbox_api::accounts::get_lists::GetAccountLists;
use tootbox_api::accounts::get_statuses::GetAccountStatuses;
use tootbox_api::accounts::lookup::LookupAccount;
use tootbox_api::accounts::mute::{Mute, Unmute};
use tootbox_api::accounts::note::SetNote;
use tootbox_api::accounts::pin::{Pin, Unpin};
use tootbox_api::accounts::relationships::GetRelationships;
use tootbox_api::accounts::remove_from_followers::RemoveFromFollowers;
use tootbox_api::accounts::search::SearchAccounts;
use tootbox_api::accounts::update_credentials::{UpdateAvatar, UpdateCredentials, UpdateHeader};
use tootbox_api::accounts::verify_credentials::VerifyCredentials;
use tootbox_api::preferences::GetPreferences;
use tootbox_api::{
    Account, AccountPreferences, FamiliarFollower, FeaturedTag, Relationship, Status, Token,
    UserList,
};
use tootbox_common::endpoint::CallOptions;
use tootbox_common::http_client::HttpClient;
use tootbox_common::multipart::MediaFile;
use tootbox_common::{BearerToken, ClientResult};

use crate::client::Client;

/// Accounts.
impl<C: HttpClient> Client<C> {
    /// Register a new account. Needs an app token from the client credentials grant.
    pub async fn create_account(&self, request: CreateAccount) -> ClientResult<Token> {
        self.output(&request).await
    }

    /// The account the token belongs to.
    ///
    /// `token` overrides the configured token for this call only; with
    /// neither, the call fails before anything is sent.
    pub async fn verify_account_credentials(
        &self,
        token: Option<BearerToken>,
    ) -> ClientResult<Account> {
        let opts = CallOptions {
            auth: token,
            ..Default::default()
        };
        self.send_with(&VerifyCredentials::default(), opts)
            .await?
            .into_output()
    }

    /// Update profile text and flags.
    pub async fn update_account(&self, request: UpdateCredentials) -> ClientResult<Account> {
        self.output(&request).await
    }

    /// Replace the profile picture.
    pub async fn update_account_avatar(&self, file: MediaFile) -> ClientResult<Account> {
        self.output(&UpdateAvatar::new(file)).await
    }

    /// Replace the profile header image.
    pub async fn update_account_header(&self, file: MediaFile) -> ClientResult<Account> {
        self.output(&UpdateHeader::new(file)).await
    }

    /// Account by id.
    pub async fn lookup_by_id(&self, id: impl Into<SmolStr>) -> ClientResult<Account> {
        self.output(&GetAccount::new().id(id).build()).await
    }

    /// Account by WebFinger address, without a remote lookup.
    pub async fn lookup_by_acct(&self, acct: impl Into<SmolStr>) -> ClientResult<Account> {
        self.output(&LookupAccount::new().acct(acct).build()).await
    }

    /// Statuses posted by an account.
    pub async fn lookup_statuses(&self, request: GetAccountStatuses) -> ClientResult<Vec<Status>> {
        self.output(&request).await
    }

    /// Followers of an account.
    pub async fn lookup_followers(&self, request: GetFollowers) -> ClientResult<Vec<Account>> {
        self.output(&request).await
    }

    /// Accounts an account follows.
    pub async fn lookup_following(&self, request: GetFollowing) -> ClientResult<Vec<Account>> {
        self.output(&request).await
    }

    /// Hashtags an account features on its profile.
    pub async fn lookup_account_featured_tags(
        &self,
        id: impl Into<SmolStr>,
    ) -> ClientResult<Vec<FeaturedTag>> {
        self.output(&GetAccountFeaturedTags::new().id(id).build())
            .await
    }

    /// Your lists containing an account.
    pub async fn lookup_account_lists(
        &self,
        id: impl Into<SmolStr>,
    ) -> ClientResult<Vec<UserList>> {
        self.output(&GetAccountLists::new().id(id).build()).await
    }

    /// Follow an account, or change the options of an existing follow.
    pub async fn create_follow(&self, request: Follow) -> ClientResult<Relationship> {
        self.output(&request).await
    }

    /// Unfollow an account.
    pub async fn destroy_follow(&self, id: impl Into<SmolStr>) -> ClientResult<Relationship> {
        self.output(&Unfollow::new().id(id).build()).await
    }

    /// Make an account stop following you.
    pub async fn remove_from_followers(
        &self,
        id: impl Into<SmolStr>,
    ) -> ClientResult<Relationship> {
        self.output(&RemoveFromFollowers::new().id(id).build())
            .await
    }

    /// Block an account.
    pub async fn create_block(&self, id: impl Into<SmolStr>) -> ClientResult<Relationship> {
        self.output(&Block::new().id(id).build()).await
    }

    /// Unblock an account.
    pub async fn destroy_block(&self, id: impl Into<SmolStr>) -> ClientResult<Relationship> {
        self.output(&Unblock::new().id(id).build()).await
    }

    /// Mute an account.
    pub async fn create_mute(&self, request: Mute) -> ClientResult<Relationship> {
        self.output(&request).await
    }

    /// Unmute an account.
    pub async fn destroy_mute(&self, id: impl Into<SmolStr>) -> ClientResult<Relationship> {
        self.output(&Unmute::new().id(id).build()).await
    }

    /// Feature an account on your profile.
    pub async fn create_endorsement(&self, id: impl Into<SmolStr>) -> ClientResult<Relationship> {
        self.output(&Pin::new().id(id).build()).await
    }

    /// Stop featuring an account on your profile.
    pub async fn destroy_endorsement(
        &self,
        id: impl Into<SmolStr>,
    ) -> ClientResult<Relationship> {
        self.output(&Unpin::new().id(id).build()).await
    }

    /// Set or clear your private note on an account.
    pub async fn create_note(&self, request: SetNote) -> ClientResult<Relationship> {
        self.output(&request).await
    }

    /// Relationships with several accounts, in the order the server returns them.
    pub async fn lookup_relationships(
        &self,
        request: GetRelationships,
    ) -> ClientResult<Vec<Relationship>> {
        self.output(&request).await
    }

    /// For each account, the accounts you follow that also follow it.
    pub async fn lookup_familiar_followers<I>(&self, ids: I) -> ClientResult<Vec<FamiliarFollower>>
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        let ids = ids.into_iter().map(Into::into).collect::<Vec<SmolStr>>();
        self.output(&GetFamiliarFollowers::new().ids(ids).build())
            .await
    }

    /// Search accounts.
    pub async fn search_accounts(&self, request: SearchAccounts) -> ClientResult<Vec<Account>> {
        self.output(&request).await
    }

    /// Preferences shared across the user's clients.
    pub async fn lookup_preferences(&self) -> ClientResult<AccountPreferences> {
        self.output(&GetPreferences::default()).await
    }
}

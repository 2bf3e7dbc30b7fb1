//! Mastodon REST API entities and endpoint requests.
//!
//! Modules follow the API's resource groups. Each group module holds the
//! entities it returns and one submodule per operation; every request type
//! implements [`Endpoint`](tootbox_common::Endpoint) with its path, verb,
//! authentication context and scope, and can be sent through any
//! `HttpClient` with [`CallExt`](tootbox_common::CallExt) or through the
//! `tootbox` client.
//!
//! ```ignore
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use tootbox_api::accounts::get_statuses::GetAccountStatuses;
//! use tootbox_common::CallExt;
//!
//! let http = reqwest::Client::new();
//! let request = GetAccountStatuses::new().id("109302").limit(5).build();
//! let statuses = http
//!     .call(url::Url::parse("https://mastodon.social")?)
//!     .send(&request)
//!     .await?
//!     .into_output()?;
//! # let _ = statuses;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod accounts;
pub mod blocks;
pub mod endorsements;
pub mod featured_tags;
pub mod lists;
pub mod mutes;
pub mod oauth;
pub mod preferences;
pub mod statuses;
pub mod suggestions;
pub mod tags;

pub use accounts::{Account, FamiliarFollower, Relationship};
pub use featured_tags::FeaturedTag;
pub use lists::UserList;
pub use oauth::Token;
pub use preferences::AccountPreferences;
pub use statuses::{Status, Visibility};
pub use tags::Tag;

#[cfg(test)]
mod tests {
    use tootbox_common::{AuthContext, Endpoint, EndpointMethod};

    use super::*;

    type Row = (
        &'static str,
        EndpointMethod,
        AuthContext,
        Option<&'static str>,
    );

    fn row<E: Endpoint>() -> Row {
        (E::PATH, E::METHOD, E::AUTH, E::SCOPE)
    }

    #[test]
    fn endpoint_table() {
        use AuthContext::{Anonymous, OAuth2, OAuth2OrAnonymous};
        use EndpointMethod::{Delete, Get, Patch, Post};

        let expected: Vec<(Row, Row)> = vec![
            (row::<accounts::create::CreateAccount>(), ("/api/v1/accounts", Post, OAuth2, Some("write:accounts"))),
            (row::<accounts::verify_credentials::VerifyCredentials>(), ("/api/v1/accounts/verify_credentials", Get, OAuth2, Some("read:accounts"))),
            (row::<accounts::update_credentials::UpdateCredentials>(), ("/api/v1/accounts/update_credentials", Patch, OAuth2, Some("read:accounts"))),
            (row::<accounts::update_credentials::UpdateAvatar>(), ("/api/v1/accounts/update_credentials", Patch, OAuth2, Some("read:accounts"))),
            (row::<accounts::update_credentials::UpdateHeader>(), ("/api/v1/accounts/update_credentials", Patch, OAuth2, Some("read:accounts"))),
            (row::<accounts::get_account::GetAccount>(), ("/api/v1/accounts/:id", Get, OAuth2OrAnonymous, Some("read:accounts"))),
            (row::<accounts::lookup::LookupAccount>(), ("/api/v1/accounts/lookup", Get, OAuth2OrAnonymous, Some("read:accounts"))),
            (row::<accounts::get_statuses::GetAccountStatuses>(), ("/api/v1/accounts/:id/statuses", Get, OAuth2OrAnonymous, Some("read:statuses"))),
            (row::<accounts::get_followers::GetFollowers>(), ("/api/v1/accounts/:id/followers", Get, OAuth2OrAnonymous, Some("read:accounts"))),
            (row::<accounts::get_following::GetFollowing>(), ("/api/v1/accounts/:id/following", Get, OAuth2OrAnonymous, Some("read:accounts"))),
            (row::<accounts::get_featured_tags::GetAccountFeaturedTags>(), ("/api/v1/accounts/:id/featured_tags", Get, OAuth2OrAnonymous, Some("read:accounts"))),
            (row::<accounts::get_lists::GetAccountLists>(), ("/api/v1/accounts/:id/lists", Get, OAuth2, Some("read:lists"))),
            (row::<accounts::follow::Follow>(), ("/api/v1/accounts/:id/follow", Post, OAuth2, Some("read:lists"))),
            (row::<accounts::follow::Unfollow>(), ("/api/v1/accounts/:id/unfollow", Post, OAuth2, Some("write:follows"))),
            (row::<accounts::remove_from_followers::RemoveFromFollowers>(), ("/api/v1/accounts/:id/remove_from_followers", Post, OAuth2, Some("write:follows"))),
            (row::<accounts::block::Block>(), ("/api/v1/accounts/:id/block", Post, OAuth2, Some("write:blocks"))),
            (row::<accounts::block::Unblock>(), ("/api/v1/accounts/:id/unblock", Post, OAuth2, Some("write:blocks"))),
            (row::<accounts::mute::Mute>(), ("/api/v1/accounts/:id/mute", Post, OAuth2, Some("write:mutes"))),
            (row::<accounts::mute::Unmute>(), ("/api/v1/accounts/:id/unmute", Post, OAuth2, Some("write:mutes"))),
            (row::<accounts::pin::Pin>(), ("/api/v1/accounts/:id/pin", Post, OAuth2, Some("write:accounts"))),
            (row::<accounts::pin::Unpin>(), ("/api/v1/accounts/:id/unpin", Post, OAuth2, Some("write:accounts"))),
            (row::<accounts::note::SetNote>(), ("/api/v1/accounts/:id/note", Post, OAuth2, Some("write:accounts"))),
            (row::<accounts::relationships::GetRelationships>(), ("/api/v1/accounts/relationships", Get, OAuth2, Some("read:follows"))),
            (row::<accounts::familiar_followers::GetFamiliarFollowers>(), ("/api/v1/accounts/familiar_followers", Get, OAuth2, Some("read:follows"))),
            (row::<accounts::search::SearchAccounts>(), ("/api/v1/accounts/search", Get, OAuth2, Some("read:accounts"))),
            (row::<blocks::GetBlocks>(), ("/api/v1/blocks", Get, OAuth2, Some("read:blocks"))),
            (row::<mutes::GetMutes>(), ("/api/v1/mutes", Get, OAuth2, Some("read:mutes"))),
            (row::<endorsements::GetEndorsements>(), ("/api/v1/endorsements", Get, OAuth2, Some("read:accounts"))),
            (row::<preferences::GetPreferences>(), ("/api/v1/preferences", Get, OAuth2, Some("read:accounts"))),
            (row::<featured_tags::get_featured_tags::GetFeaturedTags>(), ("/api/v1/featured_tags", Get, OAuth2, Some("read:accounts"))),
            (row::<featured_tags::create::CreateFeaturedTag>(), ("/api/v1/featured_tags", Post, OAuth2, Some("write:accounts"))),
            (row::<featured_tags::delete::DeleteFeaturedTag>(), ("/api/v1/featured_tags/:id", Delete, OAuth2, Some("read:accounts"))),
            (row::<featured_tags::suggestions::GetFeaturedTagSuggestions>(), ("/api/v1/featured_tags/suggestions", Get, OAuth2, Some("read:accounts"))),
            (row::<tags::get_tag::GetTag>(), ("/api/v1/tags/:name", Get, OAuth2OrAnonymous, None)),
            (row::<tags::follow::FollowTag>(), ("/api/v1/tags/:name/follow", Post, OAuth2, Some("write:follows"))),
            (row::<tags::follow::UnfollowTag>(), ("/api/v1/tags/:name/unfollow", Post, OAuth2, Some("write:follows"))),
            (row::<tags::get_followed_tags::GetFollowedTags>(), ("/api/v1/followed_tags", Get, OAuth2, Some("read:follows"))),
            (row::<suggestions::GetSuggestions>(), ("/api/v1/suggestions", Get, OAuth2, Some("read"))),
            (row::<suggestions::RemoveSuggestion>(), ("/api/v1/suggestions/:account_id", Delete, OAuth2, Some("read"))),
            (row::<oauth::token::ObtainToken>(), ("/oauth/token", Post, Anonymous, None)),
            (row::<oauth::revoke::RevokeToken>(), ("/oauth/revoke", Post, Anonymous, None)),
        ];

        assert_eq!(expected.len(), 41);
        for (actual, want) in expected {
            assert_eq!(actual, want, "{}", want.0);
        }
    }
}

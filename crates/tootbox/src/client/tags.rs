use smol_str::SmolStr;
use tootbox_api::featured_tags::create::CreateFeaturedTag;
use tootbox_api::featured_tags::delete::DeleteFeaturedTag;
use tootbox_api::featured_tags::get_featured_tags::GetFeaturedTags;
use tootbox_api::featured_tags::suggestions::GetFeaturedTagSuggestions;
use tootbox_api::tags::follow::{FollowTag, UnfollowTag};
use tootbox_api::tags::get_followed_tags::GetFollowedTags;
use tootbox_api::tags::get_tag::GetTag;
use tootbox_api::{FeaturedTag, Tag};
use tootbox_common::ClientResult;
use tootbox_common::http_client::HttpClient;

use crate::client::Client;

/// Hashtags and featured tags.
impl<C: HttpClient> Client<C> {
    /// Hashtags featured on your profile.
    pub async fn lookup_featured_tags(&self) -> ClientResult<Vec<FeaturedTag>> {
        self.output(&GetFeaturedTags::default()).await
    }

    /// Feature a hashtag on your profile.
    pub async fn create_featured_tag(&self, name: impl Into<SmolStr>) -> ClientResult<FeaturedTag> {
        self.output(&CreateFeaturedTag::new().name(name).build())
            .await
    }

    /// Stop featuring a hashtag. `true` on any 2xx.
    pub async fn destroy_featured_tag(&self, id: impl Into<SmolStr>) -> ClientResult<bool> {
        self.output(&DeleteFeaturedTag::new().id(id).build()).await
    }

    /// Your most used hashtags that are not featured yet.
    pub async fn lookup_featured_tag_suggestions(&self) -> ClientResult<Vec<Tag>> {
        self.output(&GetFeaturedTagSuggestions::default()).await
    }

    /// A hashtag, with `following` set when authenticated.
    pub async fn lookup_tag(&self, name: impl Into<SmolStr>) -> ClientResult<Tag> {
        self.output(&GetTag::new().name(name).build()).await
    }

    /// Follow a hashtag.
    pub async fn follow_tag(&self, name: impl Into<SmolStr>) -> ClientResult<Tag> {
        self.output(&FollowTag::new().name(name).build()).await
    }

    /// Stop following a hashtag.
    pub async fn unfollow_tag(&self, name: impl Into<SmolStr>) -> ClientResult<Tag> {
        self.output(&UnfollowTag::new().name(name).build()).await
    }

    /// Hashtags you follow.
    pub async fn lookup_followed_tags(&self, request: GetFollowedTags) -> ClientResult<Vec<Tag>> {
        self.output(&request).await
    }
}

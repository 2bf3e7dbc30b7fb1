//! Hashtags.

pub mod follow;
pub mod get_followed_tags;
pub mod get_tag;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use smol_str::SmolStr;

/// A hashtag.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Name without the `#`
    pub name: SmolStr,
    /// Tag page on the instance
    pub url: String,
    /// Tag id, on newer servers
    pub id: Option<SmolStr>,
    /// Daily usage, most recent day first
    pub history: Option<Vec<TagHistory>>,
    /// You follow this tag
    pub following: Option<bool>,
    /// You feature this tag on your profile
    pub featuring: Option<bool>,
}

/// Usage of a tag on one day.
///
/// Mastodon sends every value here as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagHistory {
    /// Unix timestamp of midnight that day
    pub day: SmolStr,
    /// Statuses using the tag
    pub uses: SmolStr,
    /// Accounts using the tag
    pub accounts: SmolStr,
}

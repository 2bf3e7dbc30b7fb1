//! Hashtags featured on a profile.

pub mod create;
pub mod delete;
pub mod get_featured_tags;
pub mod suggestions;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as, skip_serializing_none};
use smol_str::SmolStr;

/// A hashtag featured on a profile, with usage counts.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedTag {
    /// Featured tag id
    pub id: SmolStr,
    /// Tag name, without the `#`
    pub name: SmolStr,
    /// Profile page filtered to the tag
    pub url: String,
    /// Statuses by the account using the tag.
    ///
    /// Some server versions send this as a string.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub statuses_count: Option<u64>,
    /// Day of the last status using the tag
    pub last_status_at: Option<NaiveDate>,
}

//! Statuses, as returned inside account timelines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use smol_str::SmolStr;

use crate::accounts::{Account, CustomEmoji};
use crate::tags::Tag;

/// Who can see a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Everyone, in public timelines
    Public,
    /// Everyone, but kept out of public timelines
    Unlisted,
    /// Followers only
    Private,
    /// Mentioned accounts only
    Direct,
    /// A level this client does not know about
    #[serde(other)]
    Unknown,
}

impl Visibility {
    /// Wire name of the visibility level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
            Self::Direct => "direct",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Opaque status id
    pub id: SmolStr,
    /// ActivityPub object id
    pub uri: String,
    /// When it was posted
    pub created_at: DateTime<Utc>,
    /// Author
    pub account: Account,
    /// Body, HTML
    pub content: String,
    /// Visibility
    pub visibility: Visibility,
    /// HTML page of the status
    pub url: Option<String>,
    /// Id of the status this replies to
    pub in_reply_to_id: Option<SmolStr>,
    /// Id of the account being replied to
    pub in_reply_to_account_id: Option<SmolStr>,
    /// The boosted status, when this is a boost
    pub reblog: Option<Box<Status>>,
    /// Content warning applies
    pub sensitive: Option<bool>,
    /// Content warning text
    pub spoiler_text: Option<String>,
    /// Language (ISO 639-1)
    pub language: Option<SmolStr>,
    /// Replies received
    pub replies_count: Option<u64>,
    /// Boosts received
    pub reblogs_count: Option<u64>,
    /// Favourites received
    pub favourites_count: Option<u64>,
    /// Last edit
    pub edited_at: Option<DateTime<Utc>>,
    /// You favourited it
    pub favourited: Option<bool>,
    /// You boosted it
    pub reblogged: Option<bool>,
    /// You muted the conversation
    pub muted: Option<bool>,
    /// You bookmarked it
    pub bookmarked: Option<bool>,
    /// Pinned on its author's profile
    pub pinned: Option<bool>,
    /// Plain-text source, only right after posting or on delete
    pub text: Option<String>,
    /// Mentioned accounts
    pub mentions: Option<Vec<Mention>>,
    /// Hashtags used
    pub tags: Option<Vec<Tag>>,
    /// Custom emoji used
    pub emojis: Option<Vec<CustomEmoji>>,
}

/// An account mentioned in a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// Account id
    pub id: SmolStr,
    /// Username
    pub username: SmolStr,
    /// WebFinger address
    pub acct: SmolStr,
    /// Profile page
    pub url: String,
}

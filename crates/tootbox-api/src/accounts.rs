//! Accounts and the relationships between them.

pub mod block;
pub mod create;
pub mod familiar_followers;
pub mod follow;
pub mod get_account;
pub mod get_featured_tags;
pub mod get_followers;
pub mod get_following;
pub mod get_lists;
pub mod get_statuses;
pub mod lookup;
pub mod mute;
pub mod note;
pub mod pin;
pub mod relationships;
pub mod remove_from_followers;
pub mod search;
pub mod update_credentials;
pub mod verify_credentials;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use smol_str::SmolStr;

use crate::statuses::Visibility;

/// A user of the instance, or a remote user known to it.
///
/// Only `id` and `username` are guaranteed; everything else depends on the
/// server version and on who is asking.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account id, local to the instance
    pub id: SmolStr,
    /// Username without the domain
    pub username: SmolStr,
    /// WebFinger address: `username` for local accounts, `username@domain` otherwise
    pub acct: Option<SmolStr>,
    /// Profile display name
    pub display_name: Option<String>,
    /// Profile bio, HTML
    pub note: Option<String>,
    /// Profile page
    pub url: Option<String>,
    /// ActivityPub actor id
    pub uri: Option<String>,
    /// Avatar image URL
    pub avatar: Option<String>,
    /// Non-animated avatar URL
    pub avatar_static: Option<String>,
    /// Header image URL
    pub header: Option<String>,
    /// Non-animated header URL
    pub header_static: Option<String>,
    /// Follows must be approved
    pub locked: Option<bool>,
    /// Automated account
    pub bot: Option<bool>,
    /// Group actor
    pub group: Option<bool>,
    /// Opted into the profile directory
    pub discoverable: Option<bool>,
    /// Opted into full-text search of public posts
    pub indexable: Option<bool>,
    /// Asked not to be indexed by search engines
    pub noindex: Option<bool>,
    /// Suspended by moderators
    pub suspended: Option<bool>,
    /// Hidden by moderators
    pub limited: Option<bool>,
    /// Memorialized account
    pub memorial: Option<bool>,
    /// When the account was created
    pub created_at: Option<DateTime<Utc>>,
    /// Day of the most recent status
    pub last_status_at: Option<NaiveDate>,
    /// Number of statuses
    pub statuses_count: Option<u64>,
    /// Number of followers
    pub followers_count: Option<u64>,
    /// Number of accounts followed
    pub following_count: Option<u64>,
    /// Profile metadata fields
    pub fields: Option<Vec<AccountField>>,
    /// Custom emoji used in the display name and bio
    pub emojis: Option<Vec<CustomEmoji>>,
    /// Account this one has moved to
    pub moved: Option<Box<Account>>,
    /// Source values for editing, only on the credentialed account
    pub source: Option<AccountSource>,
    /// Role, only on the credentialed account
    pub role: Option<Role>,
}

impl Account {
    /// The WebFinger address if the server sent one, else the bare username.
    pub fn acct_or_username(&self) -> &str {
        self.acct.as_deref().unwrap_or(&self.username)
    }

    /// Whether this account points at a new one.
    pub fn has_moved(&self) -> bool {
        self.moved.is_some()
    }
}

/// A profile metadata field.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountField {
    /// Label
    pub name: String,
    /// Value, HTML
    pub value: String,
    /// When a link in `value` was verified
    pub verified_at: Option<DateTime<Utc>>,
}

/// Custom emoji.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEmoji {
    /// Name without the surrounding colons
    pub shortcode: SmolStr,
    /// Image URL
    pub url: String,
    /// Non-animated image URL
    pub static_url: Option<String>,
    /// Listed in the emoji picker
    pub visible_in_picker: Option<bool>,
    /// Picker category
    pub category: Option<SmolStr>,
}

/// Raw profile values, as the owner entered them.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSource {
    /// Bio as plain text
    pub note: Option<String>,
    /// Metadata fields as plain text
    pub fields: Option<Vec<AccountField>>,
    /// Default post visibility
    pub privacy: Option<Visibility>,
    /// Mark media sensitive by default
    pub sensitive: Option<bool>,
    /// Default post language (ISO 639-1)
    pub language: Option<SmolStr>,
    /// Pending follow requests
    pub follow_requests_count: Option<u64>,
}

/// Moderation role held by an account.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role id
    pub id: Option<SmolStr>,
    /// Role name
    pub name: Option<SmolStr>,
    /// Badge colour, hex
    pub color: Option<SmolStr>,
    /// Permission bitmask, as a decimal string
    pub permissions: Option<SmolStr>,
    /// Shown on the profile
    pub highlighted: Option<bool>,
}

/// How the credentialed account relates to another account.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The other account's id
    pub id: SmolStr,
    /// You follow them
    pub following: Option<bool>,
    /// Their boosts show in your home timeline
    pub showing_reblogs: Option<bool>,
    /// You get notified of their posts
    pub notifying: Option<bool>,
    /// Languages of theirs you follow; `None` means all
    pub languages: Option<Vec<SmolStr>>,
    /// They follow you
    pub followed_by: Option<bool>,
    /// You block them
    pub blocking: Option<bool>,
    /// They block you
    pub blocked_by: Option<bool>,
    /// You mute them
    pub muting: Option<bool>,
    /// You mute their notifications
    pub muting_notifications: Option<bool>,
    /// You asked to follow them
    pub requested: Option<bool>,
    /// They asked to follow you
    pub requested_by: Option<bool>,
    /// You block their domain
    pub domain_blocking: Option<bool>,
    /// You feature them on your profile
    pub endorsed: Option<bool>,
    /// Your private note on them
    pub note: Option<String>,
}

/// Accounts you follow that also follow a given account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamiliarFollower {
    /// The account asked about
    pub id: SmolStr,
    /// Your followees who follow it
    pub accounts: Vec<Account>,
}

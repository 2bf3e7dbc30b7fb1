//! User-defined timelines.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use smol_str::SmolStr;

/// A list of accounts with its own timeline.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    /// List id
    pub id: SmolStr,
    /// List title
    pub title: String,
    /// Which replies show in the list timeline
    pub replies_policy: Option<RepliesPolicy>,
    /// Members are removed from the home timeline
    pub exclusive: Option<bool>,
}

/// Which replies show in a list timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepliesPolicy {
    /// Replies to any followed account
    Followed,
    /// Replies to members of the list
    List,
    /// No replies
    #[serde(rename = "none")]
    Nobody,
    /// A policy this client does not know about
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_field_mapping() {
        let lists: Vec<UserList> = serde_json::from_value(json!([
            {"id": "12249", "title": "Friends", "replies_policy": "followed", "exclusive": false},
            {"id": "13585", "title": "Test", "replies_policy": "none"},
            {"id": "13586", "title": "Newer"}
        ]))
        .unwrap();
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0].replies_policy, Some(RepliesPolicy::Followed));
        assert_eq!(lists[0].exclusive, Some(false));
        assert_eq!(lists[1].replies_policy, Some(RepliesPolicy::Nobody));
        assert_eq!(lists[2].replies_policy, None);
    }
}

//! Wire schema shared with the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user reference as federated between hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub host: String,
}

/// One block of post body content. Posts are a sequence of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostContent {
    Text(TextContent),
    Markdown(MarkdownContent),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownContent {
    pub text: String,
}

/// A post or comment (comments carry a `parent`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub community: String,
    pub parent: Option<Uuid>,
    pub author: User,
    pub title: String,
    pub content: Vec<PostContent>,
    pub created: i64,
    pub modified: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A direct chat message between two users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: User,
    pub receiver: User,
    pub title: String,
    pub content: PostContent,
    pub timestamp: i64,
    pub read: bool,
}

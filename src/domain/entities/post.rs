//! Post entity fetched from the upstream content API.

use serde::{Deserialize, Serialize};

/// A post as published by the upstream content API.
///
/// Treated as an opaque value: it is fetched, optionally serialized into the
/// cache, and rendered. The upstream names the author field `userId`, and the
/// same name is used for the cached JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl Post {
    /// Creates a new Post instance.
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>, user_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

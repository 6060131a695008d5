use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Post {
    pub post_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(user_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn into_post(self, post_id: i64) -> Post {
        Post {
            post_id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
        }
    }
}

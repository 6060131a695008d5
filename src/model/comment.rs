use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub user_id: i64,
    pub post_id: i64,
    pub content: String,
}

impl NewComment {
    pub fn new(user_id: i64, post_id: i64, content: impl Into<String>) -> Self {
        Self {
            user_id,
            post_id,
            content: content.into(),
        }
    }

    pub fn into_comment(self, comment_id: i64) -> Comment {
        Comment {
            comment_id,
            user_id: self.user_id,
            post_id: self.post_id,
            content: self.content,
        }
    }
}

use sqlx::{QueryBuilder, Sqlite};

use super::store::{Store, push_in_list};
use crate::error::Result;
use crate::model::{Comment, NewComment};

impl Store {
    pub async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>> {
        tracing::debug!(comment_id, "Fetching comment");
        let comment = sqlx::query_as::<_, Comment>(
            r#"SELECT "commentId", "userId", "postId", "content" FROM "comment"
               WHERE "commentId" = ?"#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(comment)
    }

    pub async fn list_comments(&self) -> Result<Vec<Comment>> {
        tracing::debug!("Listing comments");
        let comments = sqlx::query_as::<_, Comment>(
            r#"SELECT "commentId", "userId", "postId", "content" FROM "comment"
               ORDER BY "commentId""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    pub async fn comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        tracing::debug!(post_id, "Listing comments by post");
        let comments = sqlx::query_as::<_, Comment>(
            r#"SELECT "commentId", "userId", "postId", "content" FROM "comment"
               WHERE "postId" = ? ORDER BY "commentId""#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    pub async fn comments_by_user(&self, user_id: i64) -> Result<Vec<Comment>> {
        tracing::debug!(user_id, "Listing comments by user");
        let comments = sqlx::query_as::<_, Comment>(
            r#"SELECT "commentId", "userId", "postId", "content" FROM "comment"
               WHERE "userId" = ? ORDER BY "commentId""#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    /// Inserts a comment without checking that the user or post exists.
    pub async fn add_comment(&self, comment: &NewComment) -> Result<i64> {
        let comment_id = sqlx::query(
            r#"INSERT INTO "comment" ("userId", "postId", "content") VALUES (?, ?, ?)"#,
        )
        .bind(comment.user_id)
        .bind(comment.post_id)
        .bind(&comment.content)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        tracing::info!(
            comment_id,
            user_id = comment.user_id,
            post_id = comment.post_id,
            "Created comment"
        );
        Ok(comment_id)
    }

    pub async fn comments_by_posts(&self, post_ids: &[i64]) -> Result<Vec<Comment>> {
        self.comments_where_in("postId", post_ids).await
    }

    pub async fn comments_by_users(&self, user_ids: &[i64]) -> Result<Vec<Comment>> {
        self.comments_where_in("userId", user_ids).await
    }

    async fn comments_where_in(&self, column: &'static str, keys: &[i64]) -> Result<Vec<Comment>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(column, count = keys.len(), "Batch listing comments");
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"SELECT "commentId", "userId", "postId", "content" FROM "comment" WHERE ""#,
        );
        qb.push(column);
        qb.push(r#"" IN "#);
        push_in_list(&mut qb, keys);
        qb.push(r#" ORDER BY "commentId""#);
        let comments = qb.build_query_as::<Comment>().fetch_all(&self.pool).await?;
        Ok(comments)
    }
}

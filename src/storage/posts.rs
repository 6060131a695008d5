use sqlx::{QueryBuilder, Sqlite};

use super::store::{Store, push_in_list};
use crate::error::Result;
use crate::model::{NewPost, Post};

impl Store {
    pub async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        tracing::debug!(post_id, "Fetching post");
        let post = sqlx::query_as::<_, Post>(
            r#"SELECT "postId", "userId", "title", "content" FROM "post" WHERE "postId" = ?"#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        tracing::debug!("Listing posts");
        let posts = sqlx::query_as::<_, Post>(
            r#"SELECT "postId", "userId", "title", "content" FROM "post" ORDER BY "postId""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// Posts written by one user; empty when the user has none or does not exist.
    pub async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        tracing::debug!(user_id, "Listing posts by user");
        let posts = sqlx::query_as::<_, Post>(
            r#"SELECT "postId", "userId", "title", "content" FROM "post"
               WHERE "userId" = ? ORDER BY "postId""#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// Inserts a post without checking that `userId` exists.
    pub async fn add_post(&self, post: &NewPost) -> Result<i64> {
        let post_id = sqlx::query(
            r#"INSERT INTO "post" ("userId", "title", "content") VALUES (?, ?, ?)"#,
        )
        .bind(post.user_id)
        .bind(&post.title)
        .bind(&post.content)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        tracing::info!(post_id, user_id = post.user_id, title = %post.title, "Created post");
        Ok(post_id)
    }

    pub async fn posts_by_ids(&self, post_ids: &[i64]) -> Result<Vec<Post>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = post_ids.len(), "Batch fetching posts");
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"SELECT "postId", "userId", "title", "content" FROM "post" WHERE "postId" IN "#,
        );
        push_in_list(&mut qb, post_ids);
        qb.push(r#" ORDER BY "postId""#);
        let posts = qb.build_query_as::<Post>().fetch_all(&self.pool).await?;
        Ok(posts)
    }

    /// Posts of several users in one read, for grouping by `user_id`.
    pub async fn posts_by_users(&self, user_ids: &[i64]) -> Result<Vec<Post>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = user_ids.len(), "Batch listing posts by user");
        let mut qb = QueryBuilder::<Sqlite>::new(
            r#"SELECT "postId", "userId", "title", "content" FROM "post" WHERE "userId" IN "#,
        );
        push_in_list(&mut qb, user_ids);
        qb.push(r#" ORDER BY "postId""#);
        let posts = qb.build_query_as::<Post>().fetch_all(&self.pool).await?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{NewPost, NewUser};
    use crate::storage::test_support::temp_store;

    #[tokio::test]
    async fn test_add_then_get_post() {
        let (store, _temp_dir) = temp_store().await;
        let user_id = store
            .add_user(&NewUser::new("a@x.com", "Alice"))
            .await
            .unwrap();

        let post_id = store
            .add_post(&NewPost::new(user_id, "Hi", "Body"))
            .await
            .unwrap();
        assert_eq!(post_id, 1);

        let post = store.get_post(post_id).await.unwrap().unwrap();
        assert_eq!(post.user_id, user_id);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "Body");
    }

    #[tokio::test]
    async fn test_post_for_unknown_user_is_accepted() {
        let (store, _temp_dir) = temp_store().await;
        let post_id = store
            .add_post(&NewPost::new(77, "Orphan", "No author"))
            .await
            .unwrap();

        let post = store.get_post(post_id).await.unwrap().unwrap();
        assert_eq!(post.user_id, 77);
        assert!(store.get_user(77).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_repeated_get_is_stable() {
        let (store, _temp_dir) = temp_store().await;
        let post_id = store.add_post(&NewPost::new(1, "T", "C")).await.unwrap();

        let first = store.get_post(post_id).await.unwrap();
        let second = store.get_post(post_id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_posts_by_user_filters_on_author() {
        let (store, _temp_dir) = temp_store().await;
        let alice = store.add_user(&NewUser::new("a@x.com", "Alice")).await.unwrap();
        let bob = store.add_user(&NewUser::new("b@x.com", "Bob")).await.unwrap();
        store.add_post(&NewPost::new(alice, "A1", "")).await.unwrap();
        store.add_post(&NewPost::new(bob, "B1", "")).await.unwrap();
        store.add_post(&NewPost::new(alice, "A2", "")).await.unwrap();

        let titles: Vec<String> = store
            .posts_by_user(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["A1", "A2"]);

        assert!(store.posts_by_user(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_batched_post_reads() {
        let (store, _temp_dir) = temp_store().await;
        let p1 = store.add_post(&NewPost::new(1, "One", "")).await.unwrap();
        let p2 = store.add_post(&NewPost::new(2, "Two", "")).await.unwrap();
        let p3 = store.add_post(&NewPost::new(1, "Three", "")).await.unwrap();

        let by_id = store.posts_by_ids(&[p3, p1]).await.unwrap();
        assert_eq!(by_id.len(), 2);

        let by_user = store.posts_by_users(&[1, 2]).await.unwrap();
        let ids: Vec<i64> = by_user.iter().map(|p| p.post_id).collect();
        assert_eq!(ids, vec![p1, p2, p3]);
    }
}

//! Batch loaders for relation fields.
//!
//! Only installed when `graphql.batch_relations` is enabled. The
//! `DataLoader` runs without a cache, so each batch reads the store again;
//! relation lookups issued in the same execution tick share one
//! `IN (...)` query instead of one query per parent.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;

use crate::error::BlogError;
use crate::model::{Comment, Post, User};
use crate::storage::Store;

/// A user by `userId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserKey(pub i64);

/// A post by `postId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PostKey(pub i64);

/// Every post written by a `userId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PostsOfUser(pub i64);

/// Every comment on a `postId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CommentsOfPost(pub i64);

/// Every comment written by a `userId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CommentsOfUser(pub i64);

pub struct BlogLoader {
    store: Store,
}

impl BlogLoader {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

fn raw_keys<K, F: Fn(&K) -> i64>(keys: &[K], f: F) -> Vec<i64> {
    keys.iter().map(f).collect()
}

/// Groups rows under their parent key; parents without rows map to an empty list.
fn group_by<K, V, F>(keys: &[K], rows: Vec<V>, parent: F) -> HashMap<K, Vec<V>>
where
    K: Copy + Eq + std::hash::Hash,
    F: Fn(&V) -> K,
{
    let mut grouped: HashMap<K, Vec<V>> = keys.iter().map(|k| (*k, Vec::new())).collect();
    for row in rows {
        grouped.entry(parent(&row)).or_default().push(row);
    }
    grouped
}

impl Loader<UserKey> for BlogLoader {
    type Value = User;
    type Error = Arc<BlogError>;

    async fn load(&self, keys: &[UserKey]) -> Result<HashMap<UserKey, User>, Self::Error> {
        let users = self.store.users_by_ids(&raw_keys(keys, |k| k.0)).await?;
        Ok(users.into_iter().map(|u| (UserKey(u.user_id), u)).collect())
    }
}

impl Loader<PostKey> for BlogLoader {
    type Value = Post;
    type Error = Arc<BlogError>;

    async fn load(&self, keys: &[PostKey]) -> Result<HashMap<PostKey, Post>, Self::Error> {
        let posts = self.store.posts_by_ids(&raw_keys(keys, |k| k.0)).await?;
        Ok(posts.into_iter().map(|p| (PostKey(p.post_id), p)).collect())
    }
}

impl Loader<PostsOfUser> for BlogLoader {
    type Value = Vec<Post>;
    type Error = Arc<BlogError>;

    async fn load(
        &self,
        keys: &[PostsOfUser],
    ) -> Result<HashMap<PostsOfUser, Vec<Post>>, Self::Error> {
        let posts = self.store.posts_by_users(&raw_keys(keys, |k| k.0)).await?;
        Ok(group_by(keys, posts, |p| PostsOfUser(p.user_id)))
    }
}

impl Loader<CommentsOfPost> for BlogLoader {
    type Value = Vec<Comment>;
    type Error = Arc<BlogError>;

    async fn load(
        &self,
        keys: &[CommentsOfPost],
    ) -> Result<HashMap<CommentsOfPost, Vec<Comment>>, Self::Error> {
        let comments = self.store.comments_by_posts(&raw_keys(keys, |k| k.0)).await?;
        Ok(group_by(keys, comments, |c| CommentsOfPost(c.post_id)))
    }
}

impl Loader<CommentsOfUser> for BlogLoader {
    type Value = Vec<Comment>;
    type Error = Arc<BlogError>;

    async fn load(
        &self,
        keys: &[CommentsOfUser],
    ) -> Result<HashMap<CommentsOfUser, Vec<Comment>>, Self::Error> {
        let comments = self.store.comments_by_users(&raw_keys(keys, |k| k.0)).await?;
        Ok(group_by(keys, comments, |c| CommentsOfUser(c.user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewComment, NewPost, NewUser};
    use crate::storage::test_support::temp_store;

    #[test]
    fn test_group_by_keeps_empty_parents() {
        let keys = [PostsOfUser(1), PostsOfUser(2)];
        let rows = vec![(1, "a"), (1, "b")];
        let grouped = group_by(&keys, rows, |r| PostsOfUser(r.0));
        assert_eq!(grouped[&PostsOfUser(1)].len(), 2);
        assert!(grouped[&PostsOfUser(2)].is_empty());
    }

    #[tokio::test]
    async fn test_user_loader_omits_missing_keys() {
        let (store, _temp_dir) = temp_store().await;
        let id = store.add_user(&NewUser::new("a@x.com", "Alice")).await.unwrap();
        let loader = BlogLoader::new(store);

        let loaded = loader.load(&[UserKey(id), UserKey(404)]).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&UserKey(id)].name, "Alice");
    }

    #[tokio::test]
    async fn test_relation_loaders_group_by_parent() {
        let (store, _temp_dir) = temp_store().await;
        let p1 = store.add_post(&NewPost::new(1, "One", "")).await.unwrap();
        store.add_post(&NewPost::new(1, "Two", "")).await.unwrap();
        store.add_comment(&NewComment::new(2, p1, "hey")).await.unwrap();
        let loader = BlogLoader::new(store);

        let posts = loader.load(&[PostsOfUser(1), PostsOfUser(3)]).await.unwrap();
        assert_eq!(posts[&PostsOfUser(1)].len(), 2);
        assert!(posts[&PostsOfUser(3)].is_empty());

        let comments = loader.load(&[CommentsOfPost(p1)]).await.unwrap();
        assert_eq!(comments[&CommentsOfPost(p1)][0].content, "hey");

        let by_user = loader.load(&[CommentsOfUser(2)]).await.unwrap();
        assert_eq!(by_user[&CommentsOfUser(2)].len(), 1);
    }
}

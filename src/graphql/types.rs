use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object};

use super::loaders::{BlogLoader, CommentsOfPost, CommentsOfUser, PostKey, PostsOfUser, UserKey};
use crate::model;
use crate::storage::Store;

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    ctx.data::<Store>()
}

/// Present only when the schema was built with relation batching.
fn loader<'a>(ctx: &Context<'a>) -> Option<&'a DataLoader<BlogLoader>> {
    ctx.data_opt::<DataLoader<BlogLoader>>()
}

/// Blog user
pub struct User(pub model::User);

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self(u)
    }
}

#[Object]
impl User {
    /// User ID
    async fn user_id(&self) -> i64 {
        self.0.user_id
    }

    /// User email address
    async fn email(&self) -> &str {
        &self.0.email
    }

    /// User name
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Posts by user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let posts = match loader(ctx) {
            Some(loader) => loader
                .load_one(PostsOfUser(self.0.user_id))
                .await?
                .unwrap_or_default(),
            None => store(ctx)?.posts_by_user(self.0.user_id).await?,
        };
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Comments by user
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let comments = match loader(ctx) {
            Some(loader) => loader
                .load_one(CommentsOfUser(self.0.user_id))
                .await?
                .unwrap_or_default(),
            None => store(ctx)?.comments_by_user(self.0.user_id).await?,
        };
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

/// Blog post
pub struct Post(pub model::Post);

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self(p)
    }
}

#[Object]
impl Post {
    /// Post ID
    async fn post_id(&self) -> i64 {
        self.0.post_id
    }

    /// ID of user who posted the blog
    async fn user_id(&self) -> i64 {
        self.0.user_id
    }

    /// Post title
    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Post content
    async fn content(&self) -> &str {
        &self.0.content
    }

    /// User who posted; null when that user does not exist
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let user = match loader(ctx) {
            Some(loader) => loader.load_one(UserKey(self.0.user_id)).await?,
            None => store(ctx)?.get_user(self.0.user_id).await?,
        };
        Ok(user.map(User::from))
    }

    /// Comments on post
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let comments = match loader(ctx) {
            Some(loader) => loader
                .load_one(CommentsOfPost(self.0.post_id))
                .await?
                .unwrap_or_default(),
            None => store(ctx)?.comments_by_post(self.0.post_id).await?,
        };
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

/// Blog comment
pub struct Comment(pub model::Comment);

impl From<model::Comment> for Comment {
    fn from(c: model::Comment) -> Self {
        Self(c)
    }
}

#[Object]
impl Comment {
    /// Comment ID
    async fn comment_id(&self) -> i64 {
        self.0.comment_id
    }

    /// ID of user who posted the comment
    async fn user_id(&self) -> i64 {
        self.0.user_id
    }

    /// ID of post commented on
    async fn post_id(&self) -> i64 {
        self.0.post_id
    }

    /// Comment content
    async fn content(&self) -> &str {
        &self.0.content
    }

    /// User who commented
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let user = match loader(ctx) {
            Some(loader) => loader.load_one(UserKey(self.0.user_id)).await?,
            None => store(ctx)?.get_user(self.0.user_id).await?,
        };
        Ok(user.map(User::from))
    }

    /// Post commented on
    async fn post(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Post>> {
        let post = match loader(ctx) {
            Some(loader) => loader.load_one(PostKey(self.0.post_id)).await?,
            None => store(ctx)?.get_post(self.0.post_id).await?,
        };
        Ok(post.map(Post::from))
    }
}

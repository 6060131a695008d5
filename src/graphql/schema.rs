use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::config::GraphqlSettings;
use crate::model::{NewComment, NewPost, NewUser};
use crate::storage::Store;

use super::loaders::BlogLoader;
use super::types::{Comment, Post, User, store};

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema around an already opened store.
pub fn build_schema(store: Store, settings: &GraphqlSettings) -> BlogSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store.clone());

    if settings.batch_relations {
        builder = builder.data(DataLoader::new(BlogLoader::new(store), tokio::spawn));
    }

    builder.finish()
}

/// SDL of the schema; needs no database.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single user by ID
    async fn user(&self, ctx: &Context<'_>, user_id: i64) -> async_graphql::Result<Option<User>> {
        Ok(store(ctx)?.get_user(user_id).await?.map(User::from))
    }

    /// List all users
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let users = store(ctx)?.list_users().await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get a single post by ID
    async fn post(&self, ctx: &Context<'_>, post_id: i64) -> async_graphql::Result<Option<Post>> {
        Ok(store(ctx)?.get_post(post_id).await?.map(Post::from))
    }

    /// List all posts
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let posts = store(ctx)?.list_posts().await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Get a single comment by ID
    async fn comment(
        &self,
        ctx: &Context<'_>,
        comment_id: i64,
    ) -> async_graphql::Result<Option<Comment>> {
        Ok(store(ctx)?.get_comment(comment_id).await?.map(Comment::from))
    }

    /// List all comments
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let comments = store(ctx)?.list_comments().await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user and return its generated ID
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        name: String,
    ) -> async_graphql::Result<i64> {
        Ok(store(ctx)?.add_user(&NewUser { email, name }).await?)
    }

    /// Create a post and return its generated ID
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "ID of user creating this post")] user_id: i64,
        #[graphql(desc = "Title of the post")] title: String,
        #[graphql(desc = "Content of the post")] content: String,
    ) -> async_graphql::Result<i64> {
        let post = NewPost {
            user_id,
            title,
            content,
        };
        Ok(store(ctx)?.add_post(&post).await?)
    }

    /// Create a comment and return its generated ID
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        user_id: i64,
        post_id: i64,
        content: String,
    ) -> async_graphql::Result<i64> {
        let comment = NewComment {
            user_id,
            post_id,
            content,
        };
        Ok(store(ctx)?.add_comment(&comment).await?)
    }
}

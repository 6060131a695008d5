use crate::cli::PostAction;
use crate::error::BlogError;
use crate::model::NewPost;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_comment_list, print_post, print_post_list};

pub async fn handle_post(ctx: &CommandContext, action: PostAction) -> Result<()> {
    match action {
        PostAction::Add {
            user_id,
            title,
            content,
            json,
        } => {
            let new_post = NewPost::new(user_id, title, content);
            let id = ctx.store.add_post(&new_post).await?;
            let post = new_post.into_post(id);

            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                println!("{} post #{} {}", "Created".green(), id, post.title);
            }
        }
        PostAction::List { user, json } => {
            let posts = match user {
                Some(user_id) => ctx.store.posts_by_user(user_id).await?,
                None => ctx.store.list_posts().await?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print_post_list(&posts);
            }
        }
        PostAction::Show { id, json } => {
            let post = ctx
                .store
                .get_post(id)
                .await?
                .ok_or(BlogError::NotFound { entity: "Post", id })?;
            let author = ctx.store.get_user(post.user_id).await?;
            let comments = ctx.store.comments_by_post(id).await?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "post": post,
                        "user": author,
                        "comments": comments,
                    }))?
                );
            } else {
                print_post(&post, author.as_ref());
                println!("\nComments:");
                print_comment_list(&comments);
            }
        }
    }
    Ok(())
}

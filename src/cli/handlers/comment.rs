use crate::cli::CommentAction;
use crate::error::BlogError;
use crate::model::NewComment;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_comment, print_comment_list};

pub async fn handle_comment(ctx: &CommandContext, action: CommentAction) -> Result<()> {
    match action {
        CommentAction::Add {
            user_id,
            post_id,
            content,
            json,
        } => {
            let new_comment = NewComment::new(user_id, post_id, content);
            let id = ctx.store.add_comment(&new_comment).await?;
            let comment = new_comment.into_comment(id);

            if json {
                println!("{}", serde_json::to_string_pretty(&comment)?);
            } else {
                println!(
                    "{} comment #{} on post #{}",
                    "Created".green(),
                    id,
                    comment.post_id
                );
            }
        }
        CommentAction::List { post, json } => {
            let comments = match post {
                Some(post_id) => ctx.store.comments_by_post(post_id).await?,
                None => ctx.store.list_comments().await?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&comments)?);
            } else {
                print_comment_list(&comments);
            }
        }
        CommentAction::Show { id, json } => {
            let comment = ctx
                .store
                .get_comment(id)
                .await?
                .ok_or(BlogError::NotFound {
                    entity: "Comment",
                    id,
                })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&comment)?);
            } else {
                print_comment(&comment);
            }
        }
    }
    Ok(())
}

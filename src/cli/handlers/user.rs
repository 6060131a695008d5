use crate::cli::UserAction;
use crate::error::BlogError;
use crate::model::NewUser;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_post_list, print_user, print_user_list};

pub async fn handle_user(ctx: &CommandContext, action: UserAction) -> Result<()> {
    match action {
        UserAction::Add { email, name, json } => {
            let new_user = NewUser::new(email, name);
            let id = ctx.store.add_user(&new_user).await?;
            let user = new_user.into_user(id);

            if json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                println!("{} user #{} {}", "Created".green(), id, user.name);
            }
        }
        UserAction::List { json } => {
            let users = ctx.store.list_users().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_user_list(&users);
            }
        }
        UserAction::Show { id, json } => {
            let user = ctx
                .store
                .get_user(id)
                .await?
                .ok_or(BlogError::NotFound { entity: "User", id })?;
            let posts = ctx.store.posts_by_user(id).await?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "user": user,
                        "posts": posts,
                    }))?
                );
            } else {
                print_user(&user);
                println!("\nPosts:");
                print_post_list(&posts);
            }
        }
    }
    Ok(())
}

use crate::model::{Comment, Post, User};
use colored::Colorize;

pub fn print_user(user: &User) {
    println!(
        "{} {} <{}>",
        format!("#{}", user.user_id).cyan().bold(),
        user.name.bold(),
        user.email
    );
}

pub fn print_user_list(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    for user in users {
        println!(
            "{} {} {}",
            format!("#{}", user.user_id).cyan(),
            user.name,
            format!("<{}>", user.email).dimmed()
        );
    }
}

pub fn print_post(post: &Post, author: Option<&User>) {
    println!(
        "{} {}",
        format!("#{}", post.post_id).cyan().bold(),
        post.title.bold()
    );
    match author {
        Some(user) => println!("Author:   {} (#{})", user.name, user.user_id),
        None => println!(
            "Author:   {}",
            format!("#{} (unknown user)", post.user_id).dimmed()
        ),
    }
    if !post.content.is_empty() {
        println!("\n{}", post.content);
    }
}

pub fn print_post_list(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for post in posts {
        println!(
            "{} {} {}",
            format!("#{}", post.post_id).cyan(),
            post.title,
            format!("by #{}", post.user_id).dimmed()
        );
    }
}

pub fn print_comment(comment: &Comment) {
    println!(
        "{} {} {}",
        format!("#{}", comment.comment_id).cyan(),
        format!("user #{} on post #{}:", comment.user_id, comment.post_id).dimmed(),
        comment.content
    );
}

pub fn print_comment_list(comments: &[Comment]) {
    if comments.is_empty() {
        println!("No comments found.");
        return;
    }

    for comment in comments {
        print_comment(comment);
    }
}

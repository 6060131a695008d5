use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blogql")]
#[command(
    author,
    version,
    about = "A GraphQL blog API over SQLite: users, posts and comments"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .blogql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the SQLite database, or ':memory:' (overrides config)
    #[arg(long, global = true, env = "BLOGQL_DATABASE")]
    pub database: Option<String>,

    /// Enable debug logging, including every store query
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new blog project in the current directory
    ///
    /// Writes .blogql.toml and creates the database; pass --database to
    /// choose the file.
    Init,

    /// Apply pending database migrations
    Migrate,

    /// Start GraphQL HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Merge relation lookups into batched queries instead of one query per field
        #[arg(long)]
        batch: bool,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Manage comments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Add a user
    Add {
        /// Email address
        email: String,

        /// Display name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all users
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a user and their posts
    Show {
        /// User ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PostAction {
    /// Add a post
    Add {
        /// ID of the author (not checked)
        user_id: i64,

        /// Title of the post
        title: String,

        /// Content of the post
        content: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all posts
    #[command(visible_alias = "ls")]
    List {
        /// Only posts by this user
        #[arg(long)]
        user: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post with its author and comments
    Show {
        /// Post ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CommentAction {
    /// Add a comment
    Add {
        /// ID of the commenter (not checked)
        user_id: i64,

        /// ID of the post (not checked)
        post_id: i64,

        /// Comment content
        content: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all comments
    #[command(visible_alias = "ls")]
    List {
        /// Only comments on this post
        #[arg(long)]
        post: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a comment
    Show {
        /// Comment ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_post_add() {
        let cli = Cli::parse_from(["blogql", "post", "add", "1", "Hi", "Body", "--json"]);
        match cli.command {
            Commands::Post {
                action:
                    PostAction::Add {
                        user_id,
                        title,
                        content,
                        json,
                    },
            } => {
                assert_eq!(user_id, 1);
                assert_eq!(title, "Hi");
                assert_eq!(content, "Body");
                assert!(json);
            }
            _ => panic!("expected post add"),
        }
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["blogql", "user", "show", "abc"]).is_err());
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "postboard-cli", about = "Postboard blog API from the terminal")]
pub struct Cli {
    #[arg(long, env = "POSTBOARD_API_URL", default_value = "http://localhost:8000/api")]
    pub base_url: String,

    #[arg(long, env = "POSTBOARD_TOKEN_FILE", default_value = ".postboard-token")]
    pub token_file: PathBuf,

    /// Log requests and outcomes to stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token.
    Logout,
    Posts(PostsCommand),
    Comments(CommentsCommand),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PostsCommand {
    #[command(subcommand)]
    pub command: PostsSubcommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PostsSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CommentsCommand {
    #[command(subcommand)]
    pub command: CommentsSubcommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CommentsSubcommand {
    /// Comments embedded in one post of the listing.
    List {
        post_id: i64,
    },
    Create {
        post_id: i64,
        #[arg(long)]
        content: String,
    },
    Edit {
        post_id: i64,
        id: i64,
        #[arg(long)]
        content: String,
    },
    Delete {
        id: i64,
    },
}

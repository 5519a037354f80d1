//! Subcommand execution on top of the shared request cycle.
//!
//! DESIGN
//! ======
//! Commands never print. They return a [`Report`] so `main` owns the
//! terminal and tests can assert on toasts and listings directly.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use contract::{
    ApiTransport, CommentForm, Credentials, Mutation, PostForm, PostsFeed, Registration, SessionStore, Toast, submit,
};

use crate::CliError;
use crate::args::{Command, CommentsSubcommand, PostsSubcommand};
use crate::output::{Report, render_comments, render_feed};

pub const LOGGED_OUT: &str = "Logged out.";

pub async fn run<Tr, S>(command: Command, transport: &Tr, session: &S) -> Result<Report, CliError>
where
    Tr: ApiTransport + ?Sized,
    S: SessionStore + ?Sized,
{
    let report = match command {
        Command::Register { name, email, password } => {
            let flow = contract::register(transport, &Registration { name, email, password }).await;
            auth_report(flow)
        }
        Command::Login { email, password } => {
            let flow = contract::login(transport, session, &Credentials { email, password }).await;
            auth_report(flow)
        }
        Command::Logout => {
            session.clear_token()?;
            let mut report = Report::new(true);
            report.toasts.push(Toast::success(LOGGED_OUT));
            report
        }
        Command::Posts(posts) => match posts.command {
            PostsSubcommand::List => list_posts(transport).await,
            PostsSubcommand::Create { title, content } => {
                mutate(transport, session, Mutation::CreatePost(PostForm { title, content })).await
            }
            PostsSubcommand::Edit { id, title, content } => {
                let form = PostForm { title, content };
                mutate(transport, session, Mutation::EditPost { id, form }).await
            }
            PostsSubcommand::Delete { id } => mutate(transport, session, Mutation::DeletePost { id }).await,
        },
        Command::Comments(comments) => match comments.command {
            CommentsSubcommand::List { post_id } => list_comments(transport, post_id).await,
            CommentsSubcommand::Create { post_id, content } => {
                let form = CommentForm { content };
                mutate(transport, session, Mutation::CreateComment { post_id, form }).await
            }
            CommentsSubcommand::Edit { post_id, id, content } => {
                let form = CommentForm { content };
                mutate(transport, session, Mutation::EditComment { post_id, id, form }).await
            }
            CommentsSubcommand::Delete { id } => mutate(transport, session, Mutation::DeleteComment { id }).await,
        },
    };
    Ok(report)
}

fn auth_report(flow: contract::AuthFlow) -> Report {
    let mut report = Report::new(flow.navigate_to.is_some());
    report.toasts = flow.toasts;
    report
}

async fn mutate<Tr, S>(transport: &Tr, session: &S, mutation: Mutation) -> Report
where
    Tr: ApiTransport + ?Sized,
    S: SessionStore + ?Sized,
{
    let resolution = submit(transport, session, &mutation).await;
    let mut report = Report::new(false);
    report.succeeded = resolution.apply(&mut report, || {});
    report
}

/// Fetch the feed. A failed fetch leaves the feed empty, which is reported
/// as a failure rather than as "no posts".
async fn load_feed<Tr>(transport: &Tr) -> (PostsFeed, Report)
where
    Tr: ApiTransport + ?Sized,
{
    let mut feed = PostsFeed::default();
    let mut report = Report::new(false);
    feed.load(transport, &mut report).await;
    report.succeeded = report.toasts.is_empty();
    (feed, report)
}

async fn list_posts<Tr>(transport: &Tr) -> Report
where
    Tr: ApiTransport + ?Sized,
{
    let (feed, report) = load_feed(transport).await;
    if report.succeeded { report.with_listing(render_feed(&feed)) } else { report }
}

async fn list_comments<Tr>(transport: &Tr, post_id: i64) -> Report
where
    Tr: ApiTransport + ?Sized,
{
    let (feed, mut report) = load_feed(transport).await;
    if !report.succeeded {
        return report;
    }
    match feed.posts().iter().find(|post| post.id == post_id) {
        Some(post) => report.with_listing(render_comments(&post.comments)),
        None => {
            report.toasts.push(Toast::error(format!("Post {post_id} not found.")));
            report.succeeded = false;
            report
        }
    }
}

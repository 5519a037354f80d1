use super::*;
use contract::{ApiOutcome, User};

fn ada() -> User {
    User { id: 1, name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

fn comment(id: i64, user: Option<User>, content: &str) -> Comment {
    Comment { id, content: content.to_owned(), post_id: 7, user_id: 1, user }
}

fn loaded_feed(posts: Vec<Post>) -> PostsFeed {
    let mut feed = PostsFeed::default();
    let mut sink = Vec::new();
    feed.apply(ApiOutcome::Success(posts), &mut sink);
    feed
}

#[test]
fn empty_feed_prints_empty_message() {
    assert_eq!(render_feed(&loaded_feed(Vec::new())), "No posts available.");
}

#[test]
fn feed_lists_each_post_with_comment_count() {
    let post = Post {
        id: 7,
        title: "Hello".to_owned(),
        content: "First post".to_owned(),
        user: ada(),
        comments: vec![comment(1, None, "Nice")],
    };
    assert_eq!(render_feed(&loaded_feed(vec![post])), "#7 Hello\n  by Ada\n  First post\n  1 comment");
}

#[test]
fn comments_fall_back_to_anonymous_author() {
    let rendered = render_comments(&[comment(1, Some(ada()), "Great"), comment(2, None, "Agreed")]);
    assert_eq!(rendered, "#1 Ada: Great\n#2 User: Agreed");
}

#[test]
fn no_comments_prints_empty_message() {
    assert_eq!(render_comments(&[]), "No comments yet.");
}

#[test]
fn report_collects_toasts_as_sink() {
    let mut report = Report::new(false);
    report.push_all(vec![Toast::error("Title is required.")]);
    assert_eq!(report.toasts, vec![Toast::error("Title is required.")]);
    assert!(!report.succeeded);
}

use super::*;

#[test]
fn post_without_comments_field_reads_as_empty() {
    let json = serde_json::json!({
        "id": 1,
        "title": "Hello",
        "content": "World",
        "user": { "id": 7, "name": "Ada", "email": "ada@example.com" }
    });
    let post: Post = serde_json::from_value(json).expect("post");
    assert!(post.comments.is_empty());
    assert_eq!(post.user.name, "Ada");
}

#[test]
fn post_with_null_comments_reads_as_empty() {
    let json = serde_json::json!({
        "id": 1,
        "title": "Hello",
        "content": "World",
        "user": { "id": 7, "name": "Ada", "email": "ada@example.com" },
        "comments": null
    });
    let post: Post = serde_json::from_value(json).expect("post");
    assert!(post.comments.is_empty());
}

#[test]
fn comment_keeps_embedded_user_when_present() {
    let json = serde_json::json!({
        "id": 3,
        "content": "Nice",
        "post_id": 1,
        "user_id": 9,
        "user": { "id": 9, "name": "Grace", "email": "grace@example.com" }
    });
    let comment: Comment = serde_json::from_value(json).expect("comment");
    assert_eq!(comment.user.map(|u| u.name), Some("Grace".to_owned()));
}

#[test]
fn post_form_copies_title_and_content() {
    let post = Post {
        id: 4,
        title: "Title".to_owned(),
        content: "Body".to_owned(),
        user: User { id: 1, name: "Ada".to_owned(), email: "ada@example.com".to_owned() },
        comments: Vec::new(),
    };
    assert_eq!(PostForm::from(&post), PostForm { title: "Title".to_owned(), content: "Body".to_owned() });
}

#[test]
fn registration_serializes_all_fields() {
    let form = Registration {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&form).expect("json"),
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "secret" })
    );
}

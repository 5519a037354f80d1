use super::*;
use crate::model::LoginResponse;

// =============================================================
// Success
// =============================================================

#[test]
fn success_decodes_payload() {
    let outcome = ApiOutcome::<LoginResponse>::from_response(200, r#"{"token":"abc"}"#);
    assert_eq!(outcome, ApiOutcome::Success(LoginResponse { token: "abc".to_owned() }));
}

#[test]
fn no_content_success_reads_as_null() {
    let outcome = ApiOutcome::<Value>::from_response(204, "");
    assert_eq!(outcome, ApiOutcome::Success(Value::Null));
}

#[test]
fn success_with_wrong_shape_is_decode_error() {
    let outcome = ApiOutcome::<LoginResponse>::from_response(200, r#"{"nope":1}"#);
    assert!(matches!(outcome, ApiOutcome::Transport(ApiError::Decode(_))));
}

#[test]
fn success_with_malformed_json_is_decode_error() {
    let outcome = ApiOutcome::<Value>::from_response(201, "<html>");
    assert!(matches!(outcome, ApiOutcome::Transport(ApiError::Decode(_))));
}

// =============================================================
// 422
// =============================================================

#[test]
fn unprocessable_collects_messages_in_body_order() {
    let body = r#"{"title":["Title is required."],"content":["Content is required.","Content is too short."]}"#;
    let ApiOutcome::Validation(errors) = ApiOutcome::<Value>::from_response(422, body) else {
        panic!("expected validation outcome");
    };
    let messages: Vec<&str> = errors.messages().collect();
    assert_eq!(messages, vec!["Title is required.", "Content is required.", "Content is too short."]);
    assert_eq!(errors.field("title"), Some(&["Title is required.".to_owned()][..]));
}

#[test]
fn unprocessable_without_messages_falls_back_to_failed() {
    let outcome = ApiOutcome::<Value>::from_response(422, r#"{"content":[]}"#);
    assert_eq!(outcome, ApiOutcome::Failed { status: 422, message: None });
}

#[test]
fn unprocessable_accepts_bare_string_messages() {
    let ApiOutcome::Validation(errors) = ApiOutcome::<Value>::from_response(422, r#"{"email":"Taken."}"#) else {
        panic!("expected validation outcome");
    };
    assert_eq!(errors.messages().collect::<Vec<_>>(), vec!["Taken."]);
}

// =============================================================
// 401 / 403 / other
// =============================================================

#[test]
fn unauthorized_statuses_are_grouped() {
    for status in [401, 403] {
        let outcome = ApiOutcome::<Value>::from_response(status, r#"{"error":"Unauthenticated."}"#);
        assert_eq!(
            outcome,
            ApiOutcome::Unauthorized { status, message: Some("Unauthenticated.".to_owned()) }
        );
    }
}

#[test]
fn other_status_carries_server_error_message() {
    let outcome = ApiOutcome::<Value>::from_response(500, r#"{"error":"Database offline"}"#);
    assert_eq!(outcome, ApiOutcome::Failed { status: 500, message: Some("Database offline".to_owned()) });
}

#[test]
fn other_status_with_html_body_has_no_message() {
    let outcome = ApiOutcome::<Value>::from_response(502, "<h1>Bad Gateway</h1>");
    assert_eq!(outcome, ApiOutcome::Failed { status: 502, message: None });
}

#[test]
fn blank_server_error_is_ignored() {
    let outcome = ApiOutcome::<Value>::from_response(404, r#"{"error":"  "}"#);
    assert_eq!(outcome, ApiOutcome::Failed { status: 404, message: None });
}

#[test]
fn map_transforms_only_success() {
    let ok = ApiOutcome::Success(2).map(|n| n * 10);
    assert_eq!(ok, ApiOutcome::Success(20));
    let failed: ApiOutcome<i32> = ApiOutcome::Failed { status: 500, message: None };
    assert_eq!(failed.map(|n| n * 10), ApiOutcome::Failed { status: 500, message: None });
}

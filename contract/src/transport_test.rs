use super::*;
use crate::test_helpers::MockTransport;

#[test]
fn headers_include_json_content_negotiation() {
    let request = ApiRequest::new(Endpoint::ListPosts);
    assert_eq!(
        request.headers(),
        vec![
            ("Content-Type", "application/json".to_owned()),
            ("Accept", "application/json".to_owned()),
        ]
    );
}

#[test]
fn bearer_token_becomes_authorization_header() {
    let request = ApiRequest::new(Endpoint::DeletePost { id: 3 }).with_bearer(Some("tok".to_owned()));
    assert!(request.headers().contains(&("Authorization", "Bearer tok".to_owned())));
}

#[test]
fn missing_token_omits_authorization_header() {
    let request = ApiRequest::new(Endpoint::DeletePost { id: 3 }).with_bearer(None);
    assert!(request.headers().iter().all(|(name, _)| *name != "Authorization"));
}

#[test]
fn url_joins_base_and_endpoint_path() {
    let request = ApiRequest::new(Endpoint::EditComment { post_id: 1, id: 2 });
    assert_eq!(request.url("http://api.test/"), "http://api.test/posts/1/comments/2");
}

#[tokio::test]
async fn execute_classifies_transport_response() {
    let transport = MockTransport::replying(200, r#"[]"#);
    let outcome: ApiOutcome<Vec<crate::model::Post>> =
        execute(&transport, &ApiRequest::new(Endpoint::ListPosts)).await;
    assert_eq!(outcome, ApiOutcome::Success(Vec::new()));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn execute_surfaces_network_failure_as_transport_error() {
    let transport = MockTransport::failing("connection refused");
    let outcome: ApiOutcome<Value> = execute(&transport, &ApiRequest::new(Endpoint::ListPosts)).await;
    assert_eq!(outcome, ApiOutcome::Transport(ApiError::Network("connection refused".to_owned())));
}

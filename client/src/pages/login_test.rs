use super::*;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}

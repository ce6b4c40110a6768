use super::*;

#[test]
fn header_title_names_customer() {
    assert_eq!(header_title(Some("1042")), "Agentic AI ChatBot for Customer: 1042");
}

#[test]
fn enter_submits() {
    assert!(is_submit_key("Enter", false));
}

#[test]
fn shift_enter_does_not_submit() {
    assert!(!is_submit_key("Enter", true));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!is_submit_key("a", false));
    assert!(!is_submit_key("Tab", false));
}

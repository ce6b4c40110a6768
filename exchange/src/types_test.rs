use super::*;

#[test]
fn customer_accepts_integer_primary_key() {
    let customer: Customer = serde_json::from_str(
        r#"{"customer_pk": 1042, "customer_name": "Corner Cafe", "customer_group": "Retail"}"#,
    )
    .expect("customer should decode");
    assert_eq!(customer.customer_pk, "1042");
    assert_eq!(customer.customer_name, "Corner Cafe");
    assert_eq!(customer.customer_group, "Retail");
}

#[test]
fn customer_accepts_string_primary_key() {
    let customer: Customer = serde_json::from_str(
        r#"{"customer_pk": "C-7", "customer_name": "Hotel Nord", "customer_group": "Hospitality"}"#,
    )
    .expect("customer should decode");
    assert_eq!(customer.customer_pk, "C-7");
}

#[test]
fn customer_rejects_missing_name() {
    let result = serde_json::from_str::<Customer>(r#"{"customer_pk": 1, "customer_group": "Retail"}"#);
    assert!(result.is_err());
}

#[test]
fn chat_request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest { message: "hello".to_owned() }).expect("serialize");
    assert_eq!(body, serde_json::json!({ "message": "hello" }));
}

#[test]
fn api_error_body_tolerates_missing_error_field() {
    let body: ApiErrorBody = serde_json::from_str("{}").expect("decode");
    assert_eq!(body.error, None);

    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"overloaded"}"#).expect("decode");
    assert_eq!(body.error.as_deref(), Some("overloaded"));
}

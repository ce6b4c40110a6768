use super::*;

#[test]
fn api_base_is_never_blank() {
    assert!(!api_base().trim().is_empty());
}

#[test]
fn customers_endpoint_targets_customer_list() {
    assert!(customers_endpoint().ends_with("/api/customers"));
    assert!(customers_endpoint().starts_with(exchange::normalize_base(api_base()).as_str()));
}

#[test]
fn chat_endpoint_passes_customer_number_query() {
    assert!(chat_endpoint("1042").ends_with("/api/chat?customer_number=1042"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_without_browser_transport() {
    let customers = futures::executor::block_on(fetch_customers());
    assert_eq!(customers, Err(ExchangeError::Unavailable));

    let reply = futures::executor::block_on(send_chat_message("1", "hi"));
    assert_eq!(reply, Err(ExchangeError::Unavailable));
}

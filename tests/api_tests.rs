use lifeplus_client::client::LifePlusClient;
use lifeplus_client::config::Config;
use lifeplus_client::error::AppError;
use lifeplus_client::model::requests::{
    CreateOrderRequest, ListProductsRequest, PageRequest, SearchRequest,
};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_list_products_passes_pagination_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/products")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "5".into()),
            Matcher::UrlEncoded("search_key".into(), "paracetamol".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"message":null,"data":[{"id":1,"name":"Napa","price":"1.20","in_stock":true}]}"#,
        )
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let products = client
        .products()
        .list_products(
            &ListProductsRequest::new()
                .with_page(2)
                .with_per_page(5)
                .with_search_key("paracetamol"),
        )
        .await
        .unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Napa");
    assert_eq!(products[0].price, Some(1.2));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_error_exposes_status_and_field_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/verify-otp")
        .with_status(422)
        .with_body(r#"{"message":"validation failed","errors":{"phone":["required"]}}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let error = client.auth().verify_phone("", "1234").await.unwrap_err();

    match error {
        AppError::Api(api) => {
            assert_eq!(api.status, 422);
            assert_eq!(api.message, "validation failed");
            assert_eq!(api.field_errors("phone"), Some(&["required".to_string()][..]));
        }
        other => panic!("Expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn test_get_product_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/products/999")
        .with_status(404)
        .with_body(r#"{"message":"product not found"}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let error = client.products().get_product(999).await.unwrap_err();
    assert!(matches!(error, AppError::NotFound));
}

#[tokio::test]
async fn test_requests_carry_request_id_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup/specialties")
        .match_header(
            "x-request-id",
            Matcher::Regex(
                "^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$".into(),
            ),
        )
        .with_status(200)
        .with_body(r#"{"message":null,"data":[{"id":1,"name":"Cardiology"}]}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let specialties = client.lookup().specialties().await.unwrap();
    assert_eq!(specialties[0].name, "Cardiology");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_partner_headers_coexist_with_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/partners/orders/9")
        .match_header("authorization", "Bearer tok")
        .match_header("x-api-key", "key-1")
        .match_header("x-partner-id", "p-1")
        .with_status(200)
        .with_body(r#"{"message":null,"data":{"id":9,"reference":"REF-9","status":"confirmed"}}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    client.set_access_token("tok").await;
    client.set_partner_credentials("p-1", "key-1").await;

    let order = client.partners().order_status(9).await.unwrap();
    assert_eq!(order.reference, "REF-9");
    assert_eq!(order.status, "confirmed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_sends_body_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/orders")
        .match_body(Matcher::Json(json!({
            "cart_id": 11,
            "address_id": 22,
            "payment_method": "cod"
        })))
        .with_status(200)
        .with_body(
            r#"{"message":"order placed","data":{"id":501,"status":"pending","payment_method":"cod","total":350.0}}"#,
        )
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let order = client
        .orders()
        .create(&CreateOrderRequest::new(11, 22, "cod"))
        .await
        .unwrap();

    assert_eq!(order.id, 501);
    assert_eq!(order.status, "pending");
    assert_eq!(order.total, Some(350.0));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_cart_add_and_clear() {
    let mut server = mockito::Server::new_async().await;
    let add_mock = server
        .mock("POST", "/cart/items")
        .match_body(Matcher::Json(json!({"product_id": 1, "quantity": 2})))
        .with_status(200)
        .with_body(
            r#"{"message":null,"data":{"id":3,"items":[{"id":10,"product_id":1,"quantity":2,"unit_price":"12.50"}],"total":25.0}}"#,
        )
        .create_async()
        .await;
    let clear_mock = server
        .mock("DELETE", "/cart")
        .with_status(200)
        .with_body(r#"{"message":"cart cleared"}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let cart = client.cart().add_item(1, 2).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].unit_price, Some(12.5));
    assert_eq!(cart.total, Some(25.0));

    let cleared = client.cart().clear().await.unwrap();
    assert_eq!(cleared.message.as_deref(), Some("cart cleared"));

    add_mock.assert_async().await;
    clear_mock.assert_async().await;
}

#[tokio::test]
async fn test_cart_rejects_zero_quantity_before_sending() {
    // No mock registered: a request would fail with a connect error instead
    let client = LifePlusClient::new("http://127.0.0.1:1");
    let error = client.cart().add_item(1, 0).await.unwrap_err();
    assert!(matches!(error, AppError::InvalidInput(_)));

    let error = client.cart().update_item(10, 0).await.unwrap_err();
    assert!(matches!(error, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_list_hospitals_search_passthrough() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/hospitals")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "3".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"message":null,"data":[{"id":4,"name":"Square Hospital","address":"18 Bir Uttam Qazi Nuruzzaman Sarak, Dhaka"}]}"#,
        )
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let hospitals = client
        .hospitals()
        .list_hospitals(&SearchRequest::new().with_page(1).with_per_page(3))
        .await
        .unwrap();

    assert_eq!(hospitals.len(), 1);
    assert_eq!(hospitals[0].name, "Square Hospital");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_slow_response_fails_with_configured_timeout() {
    use std::io::Write;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/products/1")
        .with_status(200)
        .with_chunked_body(|writer| {
            // Stall past the client-side deadline before sending the body
            std::thread::sleep(std::time::Duration::from_secs(3));
            writer.write_all(br#"{"message":null,"data":{"id":1,"name":"Napa"}}"#)
        })
        .create_async()
        .await;

    let mut config = Config::with_base_url(server.url());
    config.timeout = 1;
    let client = LifePlusClient::with_config(config);

    let error = client.products().get_product(1).await.unwrap_err();
    match error {
        AppError::Network(e) => assert!(e.is_timeout()),
        other => panic!("Expected Network timeout error, got: {other}"),
    }
}

#[tokio::test]
async fn test_list_orders_first_page_uses_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/orders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"message":null,"data":[]}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let orders = client.orders().list_orders(&PageRequest::first()).await.unwrap();

    assert!(orders.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_orders_uses_page_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/orders")
        .match_query(Matcher::UrlEncoded("page".into(), "4".into()))
        .with_status(200)
        .with_body(r#"{"message":null,"data":[]}"#)
        .create_async()
        .await;

    let client = LifePlusClient::new(server.url());
    let orders = client
        .orders()
        .list_orders(&PageRequest {
            page: Some(4),
            per_page: None,
        })
        .await
        .unwrap();

    assert!(orders.is_empty());
    mock.assert_async().await;
}

//! Integration tests for the HTTP client functionality.
//!
//! These tests verify request building, header injection, response parsing,
//! and error handling against a local mock server.

use itglue::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
};
use itglue::{ApiKey, ApiUrl, ItGlueConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer, api_key: &str) -> HttpClient {
    let config = ItGlueConfig::builder()
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new(api_key).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_api_key_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(header("x-api-key", "ITG.test-key"))
        .and(header("accept", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.test-key");
    let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({"data": []}));
}

#[tokio::test]
async fn test_post_sends_jsonapi_body() {
    let server = MockServer::start().await;
    let body = json!({"data": {"type": "organizations", "attributes": {"name": "Acme"}}});

    Mock::given(method("POST"))
        .and(path("/organizations"))
        .and(header("content-type", "application/vnd.api+json"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "1", "type": "organizations", "attributes": {"name": "Acme"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.test-key");
    let request = HttpRequest::builder(HttpMethod::Post, "/organizations")
        .body(body)
        .body_type(DataType::JsonApi)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.data().unwrap()["id"], "1");
}

#[tokio::test]
async fn test_query_pairs_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/configurations"))
        .and(query_param("filter[name]", "web01"))
        .and(query_param("page[size]", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.test-key");
    let request = HttpRequest::builder(HttpMethod::Get, "/configurations")
        .query_param("filter[name]", "web01")
        .query_param("page[size]", "50")
        .build()
        .unwrap();

    assert!(client.request(request).await.is_ok());
}

// ============================================================================
// Response Tests
// ============================================================================

#[tokio::test]
async fn test_pagination_metadata_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"current-page": 1, "next-page": 2, "prev-page": null, "total-pages": 3, "total-count": 120},
            "links": {"next": "https://api.itglue.com/organizations?page[number]=2"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.test-key");
    let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.pagination.current_page, Some(1));
    assert_eq!(response.pagination.next_page, Some(2));
    assert_eq!(response.pagination.prev_page, None);
    assert_eq!(response.pagination.total_count, Some(120));
    assert!(response.pagination.has_next_page());
    assert!(!response.pagination.has_prev_page());
}

#[tokio::test]
async fn test_empty_body_becomes_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/organizations/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.test-key");
    let request = HttpRequest::builder(HttpMethod::Delete, "/organizations/9")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 204);
    assert!(response.body.is_null());
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_non_2xx_response_is_an_error_with_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"status": "401", "title": "Unauthorized", "detail": "Invalid API key"}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.wrong");
    let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert_eq!(error.status(), Some(401));

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 401);
            assert!(e.message.contains("Unauthorized"));
            let details = e.details();
            assert_eq!(details.len(), 1);
            assert_eq!(details[0].detail.as_deref(), Some("Invalid API key"));
        }
        other => panic!("Expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "ITG.test-key");
    let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 502);
            assert_eq!(e.body["raw_body"], "<html>Bad Gateway</html>");
        }
        other => panic!("Expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_request_produces_correct_error() {
    let result = HttpRequest::builder(HttpMethod::Patch, "/organizations/1").build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "/organizations".to_string(),
        body: Some(json!({"key": "value"})),
        body_type: None,
        query: None,
    };
    assert!(matches!(
        request.verify(),
        Err(InvalidHttpRequestError::MissingBodyType)
    ));
}

#[tokio::test]
async fn test_http_method_display() {
    assert_eq!(HttpMethod::Get.to_string(), "get");
    assert_eq!(HttpMethod::Post.to_string(), "post");
    assert_eq!(HttpMethod::Patch.to_string(), "patch");
    assert_eq!(HttpMethod::Delete.to_string(), "delete");
}

#[tokio::test]
async fn test_data_type_content_types() {
    assert_eq!(
        DataType::JsonApi.as_content_type(),
        "application/vnd.api+json"
    );
    assert_eq!(DataType::Json.as_content_type(), "application/json");
}

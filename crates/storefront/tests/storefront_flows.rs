//! End-to-end router tests for the storefront.
//!
//! Drives the full router (sessions included) with `tower::ServiceExt::
//! oneshot`. The Gemini base URL points at an unroutable address so chat
//! requests exercise the fallback path without touching the network.

use axum::Router;
use axum::body::Body;
use axum::http::{
    Request, StatusCode,
    header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use tower::ServiceExt;

use hive_image_storefront::config::{GeminiConfig, StorefrontConfig};
use hive_image_storefront::content::ContentStore;
use hive_image_storefront::state::AppState;

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        gemini: GeminiConfig {
            api_key: SecretString::from("test-key"),
            model: "gemini-3-flash-preview".to_string(),
            // Unroutable: every chat call fails fast and falls back
            api_base: "http://127.0.0.1:9".to_string(),
        },
    }
}

fn test_app() -> Router {
    // The test binary runs from the crate root, so `content/` resolves
    let content = ContentStore::load(std::path::Path::new("content")).expect("content loads");
    let state = AppState::new(test_config(), content).expect("state builds");
    hive_image_storefront::build_router(state)
}

/// A tiny session-aware client over `oneshot`.
struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    fn new() -> Self {
        Self {
            app: test_app(),
            cookie: None,
        }
    }

    async fn request(&mut self, method: &str, uri: &str, form: Option<&str>) -> (StatusCode, String, Option<String>) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", "203.0.113.7");
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie.clone());
        }
        let request = match form {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        };

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router responds");

        // Carry the session cookie across requests
        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let raw = set_cookie.to_str().expect("cookie is ascii");
            if let Some(pair) = raw.split(';').next() {
                self.cookie = Some(pair.to_string());
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned(), location)
    }

    async fn get(&mut self, uri: &str) -> (StatusCode, String) {
        let (status, body, _) = self.request("GET", uri, None).await;
        (status, body)
    }

    async fn post(&mut self, uri: &str, form: &str) -> (StatusCode, String, Option<String>) {
        self.request("POST", uri, Some(form)).await
    }
}

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let (status, body) = client.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_home_page_renders_featured() {
    let mut client = TestClient::new();
    let (status, body) = client.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HivePhone Pro Max"));
    assert!(body.contains("HiveWash Pro 9000"));
}

#[tokio::test]
async fn test_product_listing_and_filters() {
    let mut client = TestClient::new();

    let (status, body) = client.get("/products").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("8 products"));

    let (status, body) = client.get("/products?category=Kitchen").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HiveSmart Kettle"));
    assert!(!body.contains("HivePhone Pro Max"));

    // Price bounds are inclusive
    let (status, body) = client
        .get("/products?min_price=249&max_price=249")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 products"));
    assert!(body.contains("HiveSound ANC Headphones"));
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let mut client = TestClient::new();
    let (status, _) = client.get("/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_view_recorded_in_recently_viewed() {
    let mut client = TestClient::new();
    let (status, _) = client.get("/products/4").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = client.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Recently Viewed"));
    assert!(body.contains("HiveSmart Kettle"));
}

#[tokio::test]
async fn test_quick_view_recorded_in_recently_viewed() {
    let mut client = TestClient::new();
    let (status, _) = client.get("/products/4/quick-view").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = client.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Recently Viewed"));
    assert!(body.contains("HiveSmart Kettle"));
}

#[tokio::test]
async fn test_cart_add_and_count() {
    let mut client = TestClient::new();

    let (status, body, _) = client.post("/cart/add", "product_id=1&quantity=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains('2'));

    // Adding the same product merges the line
    let (status, body, _) = client.post("/cart/add", "product_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains('3'));

    let (status, body) = client.get("/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HivePhone Pro Max"));
}

#[tokio::test]
async fn test_cart_quantity_floor() {
    let mut client = TestClient::new();
    client.post("/cart/add", "product_id=4").await;

    // Quantity cannot drop below 1 via the stepper
    let (status, body, _) = client.post("/cart/update", "product_id=4&delta=-5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HiveSmart Kettle"));

    let (_, count_body) = client.get("/cart/count").await;
    assert!(count_body.contains('1'));

    // Remove deletes the line entirely
    let (status, body, _) = client.post("/cart/remove", "product_id=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your basket is empty"));
}

#[tokio::test]
async fn test_add_unknown_product_is_404() {
    let mut client = TestClient::new();
    let (status, _, _) = client.post("/cart/add", "product_id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_compare_rejects_fourth_product() {
    let mut client = TestClient::new();

    for id in 1..=3 {
        let (status, body, _) = client
            .post("/compare/toggle", &format!("product_id={id}"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Max 3 products"));
    }

    let (status, body, _) = client.post("/compare/toggle", "product_id=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Max 3 products for comparison"));

    // The set is unchanged: toggling a member off still works
    let (_, body, _) = client.post("/compare/toggle", "product_id=2").await;
    assert!(!body.contains("Max 3 products"));

    let (status, body) = client.get("/compare").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HivePhone Pro Max"));
    assert!(!body.contains("HiveSmart Kettle"));
}

#[tokio::test]
async fn test_wishlist_toggle_roundtrip() {
    let mut client = TestClient::new();

    // Each toggle announces what it did
    let (status, body, _) = client.post("/wishlist/toggle", "product_id=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Added to wishlist"));

    let (status, body) = client.get("/wishlist").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HiveSound ANC Headphones"));

    let (_, body, _) = client.post("/wishlist/toggle", "product_id=3").await;
    assert!(body.contains("Removed from wishlist"));

    let (_, body) = client.get("/wishlist").await;
    assert!(body.contains("Nothing saved yet"));
}

#[tokio::test]
async fn test_checkout_records_one_order_and_empties_cart() {
    let mut client = TestClient::new();
    client.post("/cart/add", "product_id=4").await; // 89.99

    let (status, body) = client.get("/checkout").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HiveSmart Kettle"));
    // The pay button knows both delivery totals: 89.99 + 4.99 / + 8.99
    assert!(body.contains(r#"data-total="£94.98""#));
    assert!(body.contains(r#"data-total="£98.98""#));

    let (status, _, location) = client.post("/checkout", "delivery=standard").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/checkout/success"));

    let (status, body) = client.get("/checkout/success").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HI-"));
    // 89.99 + 4.99 standard delivery
    assert!(body.contains("£94.98"));

    let (status, body) = client.get("/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HI-"));
    assert!(body.contains("Processing"));

    // The basket was emptied by the purchase
    let (_, body) = client.get("/cart").await;
    assert!(body.contains("Your basket is empty"));
}

#[tokio::test]
async fn test_buy_now_checkout_leaves_basket_untouched() {
    let mut client = TestClient::new();
    client.post("/cart/add", "product_id=1").await;

    let (status, body) = client.get("/checkout?buy_now=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HiveSmart Kettle"));
    assert!(!body.contains("HivePhone Pro Max"));

    let (status, _, location) = client
        .post("/checkout", "delivery=platinum&buy_now=true")
        .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/checkout/success"));

    let (_, body) = client.get("/checkout/success").await;
    // 89.99 + 8.99 platinum delivery
    assert!(body.contains("£98.98"));

    // The basket still holds the original line
    let (_, body) = client.get("/cart").await;
    assert!(body.contains("HivePhone Pro Max"));
}

#[tokio::test]
async fn test_empty_checkout_redirects_to_cart() {
    let mut client = TestClient::new();
    let (status, _, location) = client.request("GET", "/checkout", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/cart"));
}

#[tokio::test]
async fn test_request_id_echoed_on_responses() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let generated = response
        .headers()
        .get("x-request-id")
        .expect("header present")
        .to_str()
        .expect("ascii");
    assert!(!generated.is_empty());

    // An upstream-supplied id is passed through unchanged
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "upstream-correlation-id")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let echoed = response
        .headers()
        .get("x-request-id")
        .expect("header present")
        .to_str()
        .expect("ascii");
    assert_eq!(echoed, "upstream-correlation-id");
}

#[tokio::test]
async fn test_content_pages() {
    let mut client = TestClient::new();

    let (status, body) = client.get("/pages/warranty").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Warranty"));

    let (status, _) = client.get("/pages/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chat_greeting_and_fallback() {
    let mut client = TestClient::new();

    let (status, body) = client.get("/chat/messages").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Hive Image assistant"));

    // The Gemini endpoint is unroutable, so the fallback reply is used
    let (status, body, _) = client.post("/chat/send", "message=Do+you+sell+kettles%3F").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Do you sell kettles?"));
    assert!(body.contains("trouble connecting to my brain"));
    assert!(body.contains("+44 7469 535612"));
}

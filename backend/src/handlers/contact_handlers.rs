use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::models::inquiry::{ContactRequest, InquiryReceipt};
use crate::utils::rate_limit::client_key;
use crate::AppState;

pub async fn submit_inquiry(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<InquiryReceipt>, ApiError> {
    let client = client_key(&headers);
    if !state.limiter.check(&client) {
        warn!("Contact rate limit hit for client {}", client);
        return Err(ApiError::RateLimited);
    }

    // Malformed bodies count against the quota like any other submission
    let Json(request) = payload.map_err(|rejection| {
        info!("Unreadable contact body from {}: {}", client, rejection.body_text());
        ApiError::Validation(format!("invalid request body: {}", rejection.body_text()))
    })?;

    let inquiry = request.validate().map_err(|e| {
        info!("Rejected contact inquiry from {}: {}", client, e);
        e
    })?;

    if let Err(e) = state.sink.deliver(&inquiry).await {
        error!("Failed to deliver inquiry {}: {}", inquiry.id, e);
        return Err(e.into());
    }

    info!("Accepted contact inquiry {} ({})", inquiry.id, inquiry.language);
    Ok(Json(InquiryReceipt::received(inquiry.id)))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::server_config::ServerConfig;
    use crate::utils::delivery::{DeliveryError, MockInquirySink};
    use crate::utils::rate_limit::ContactLimiter;
    use crate::{build_router, AppState};

    fn test_app(sink: MockInquirySink, per_minute: u32) -> Router {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        let state = AppState {
            limiter: ContactLimiter::per_minute(NonZeroU32::new(per_minute).unwrap()),
            sink: Arc::new(sink),
        };
        build_router(Arc::new(state), &config)
    }

    fn valid_body() -> Value {
        json!({
            "name": "Layla Haddad",
            "email": "layla@example.sa",
            "phone": "+966 11 234 5678",
            "service": "access-control",
            "message": "Please quote turnstiles for our head office lobby.",
            "language": "en"
        })
    }

    fn contact_request(body: &Value, client: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .header("x-forwarded-for", client)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn untouched_sink() -> MockInquirySink {
        let mut sink = MockInquirySink::new();
        sink.expect_deliver().times(0);
        sink
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let app = test_app(untouched_sink(), 5);
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn valid_inquiry_is_delivered_once() {
        let mut sink = MockInquirySink::new();
        sink.expect_deliver()
            .withf(|inquiry| {
                inquiry.name == "Layla Haddad" && inquiry.service.as_deref() == Some("access-control")
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = test_app(sink, 5)
            .oneshot(contact_request(&valid_body(), "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "received");
        assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn invalid_inquiries_are_rejected_before_delivery() {
        let cases = [
            ("name", json!("A")),
            ("email", json!("layla-at-example")),
            ("message", json!("Hi there")),
            ("phone", json!("ext. 42")),
            ("language", json!("de")),
        ];

        for (field, value) in cases {
            let mut body = valid_body();
            body[field] = value;

            let response = test_app(untouched_sink(), 5)
                .oneshot(contact_request(&body, "203.0.113.7"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field {}", field);
            let body = json_body(response).await;
            assert!(
                body["error"].as_str().unwrap().contains(field),
                "error for {} was {}",
                field,
                body["error"]
            );
        }
    }

    #[tokio::test]
    async fn quota_is_enforced_per_client() {
        let mut sink = MockInquirySink::new();
        sink.expect_deliver().times(3).returning(|_| Ok(()));
        let app = test_app(sink, 2);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(contact_request(&valid_body(), "203.0.113.7"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(contact_request(&valid_body(), "203.0.113.7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(json_body(response).await["error"].is_string());

        let response = app
            .oneshot(contact_request(&valid_body(), "198.51.100.2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delivery_failure_maps_to_bad_gateway() {
        let mut sink = MockInquirySink::new();
        sink.expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::Transport("connection refused".into())));

        let response = test_app(sink, 5)
            .oneshot(contact_request(&valid_body(), "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert!(!body["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_400_and_uses_quota() {
        let app = test_app(untouched_sink(), 1);

        let response = app
            .clone()
            .oneshot(contact_request(&json!({ "name": "Layla Haddad" }), "203.0.113.7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("email"));

        let response = app
            .oneshot(contact_request(&valid_body(), "203.0.113.7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn body_without_json_content_type_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::from(valid_body().to_string()))
            .unwrap();

        let response = test_app(untouched_sink(), 5).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }
}

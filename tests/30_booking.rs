mod support;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

fn booking_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/booking")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_payload() -> serde_json::Value {
    json!({
        "name": "Ada Yilmaz",
        "email": "ada@example.com",
        "phone": "+49 151 1234567",
        "service": 2,
        "date": "2025-11-03",
        "time": "14:30",
    })
}

#[tokio::test]
async fn booking_with_any_missing_field_is_rejected() {
    for field in ["name", "email", "phone", "service", "date", "time"] {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove(field);

        let response = support::test_app()
            .oneshot(booking_request(payload))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "missing {field} should be rejected"
        );

        let body = support::body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required");
    }
}

#[tokio::test]
async fn booking_with_unparseable_service_is_rejected() {
    let mut payload = valid_payload();
    payload["service"] = json!("haircut");

    let response = support::test_app()
        .oneshot(booking_request(payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = support::body_json(response).await;
    assert_eq!(body["message"], "Selected service is not valid");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn preflight_echoes_allowed_origins_only() {
    let cases = [
        (support::ALLOWED_ORIGIN, true),
        ("https://salon-git-main.vercel.app", true),
        ("https://unrelated.example.com", false),
    ];

    for (origin, allowed) in cases {
        let response = support::test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/booking")
                    .header(header::ORIGIN, origin)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let allow_origin = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string());
        if allowed {
            assert_eq!(allow_origin.as_deref(), Some(origin));
            assert_eq!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                    .map(|v| v.to_str().unwrap()),
                Some("true")
            );
        } else {
            assert_eq!(allow_origin, None, "{origin} must not be allowed");
        }
    }
}

#[tokio::test]
async fn wrong_method_is_405() {
    let response = support::test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/booking")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

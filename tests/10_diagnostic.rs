mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn diagnostic_endpoint_responds_and_is_idempotent() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Repeating the call must never mutate state; both responses agree.
    for _ in 0..2 {
        let res = client
            .get(format!("{}/api/test", server.base_url))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["success"], true);
        assert_eq!(body["environment"], "development");
        assert!(body["timestamp"].is_string());
    }

    Ok(())
}

#[tokio::test]
async fn diagnostic_echoes_request_host() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/test", server.base_url))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;

    let host = body["host"].as_str().expect("host echoed");
    assert!(host.starts_with("127.0.0.1"));
    Ok(())
}

#[tokio::test]
async fn health_reports_database_state() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    // The smoke server has no reachable database, so degraded is expected;
    // OK is accepted so the test also passes against a full local stack.
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["data"]["status"].is_string());
    Ok(())
}

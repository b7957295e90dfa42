use std::time::Duration;

use jobboard_client::{ClientSettings, FailureKind, ReqwestTransport, RequestSpec, Transport};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(settings: ClientSettings) -> ReqwestTransport {
    jobboard_logging::initialize_for_tests();
    ReqwestTransport::new(settings).expect("client")
}

fn transport_for(server: &MockServer) -> ReqwestTransport {
    transport(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
}

#[tokio::test]
async fn get_sends_encoded_query_and_parses_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("email", "a@gmail.com"))
        .and(query_param("keyword", "rust dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"job_id": 1}])))
        .mount(&server)
        .await;

    let spec = RequestSpec::get(
        "/search",
        Some("email=a%40gmail.com&keyword=rust+dev".to_string()),
    );
    let reply = transport_for(&server).send(&spec).await.expect("reply");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!([{"job_id": 1}]));
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    let body = json!({"email": "a@gmail.com", "job_id": "9"});
    Mock::given(method("POST"))
        .and(path("/job/submit"))
        .and(header("content-type", "application/json"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"applied_for_job": true})))
        .mount(&server)
        .await;

    let reply = transport_for(&server)
        .send(&RequestSpec::post("/job/submit", body))
        .await
        .expect("reply");
    assert_eq!(reply.body, json!({"applied_for_job": true}));
}

#[tokio::test]
async fn error_status_is_still_a_reply() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/applied"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no such user"})))
        .mount(&server)
        .await;

    let reply = transport_for(&server)
        .send(&RequestSpec::get("/search/applied", None))
        .await
        .expect("reply");
    assert_eq!(reply.status, 404);
    assert_eq!(reply.body, json!({"error": "no such user"}));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/applied"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = transport_for(&server)
        .send(&RequestSpec::get("/search/applied", None))
        .await
        .expect_err("should fail");
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = transport(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });
    let err = client
        .send(&RequestSpec::get("/slow", None))
        .await
        .expect_err("should time out");
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
        .mount(&server)
        .await;

    let client = transport(ClientSettings {
        base_url: server.uri(),
        max_bytes: 16,
        ..ClientSettings::default()
    });
    let err = client
        .send(&RequestSpec::get("/big", None))
        .await
        .expect_err("should fail");
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 16, .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    drop(server);

    let client = transport(ClientSettings {
        base_url,
        ..ClientSettings::default()
    });
    let err = client
        .send(&RequestSpec::get("/search/applied", None))
        .await
        .expect_err("should fail");
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn malformed_base_url_is_invalid() {
    let client = transport(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    });
    let err = client
        .send(&RequestSpec::get("/search/applied", None))
        .await
        .expect_err("should fail");
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

use std::time::Duration;

use patcher_engine::{
    Backend, BackendError, BackendSettings, ReqwestBackend, StartOutcome, StatusPayload,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    let settings = BackendSettings {
        base_url: format!("{}/", server.uri()),
        ..BackendSettings::default()
    };
    ReqwestBackend::new(settings).expect("backend")
}

#[tokio::test]
async fn start_processing_posts_device_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/start_processing"))
        .and(body_json(serde_json::json!({ "device_name": "ABCD1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "job_id": "j1" })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = backend_for(&server)
        .start_processing("ABCD1234")
        .await
        .expect("start ok");
    assert_eq!(
        outcome,
        StartOutcome::Accepted {
            job_id: "j1".to_string()
        }
    );
}

#[tokio::test]
async fn error_body_with_bad_request_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/start_processing"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Please enter a device model" })),
        )
        .mount(&server)
        .await;

    let outcome = backend_for(&server)
        .start_processing("")
        .await
        .expect("rejection is not a transport error");
    assert_eq!(
        outcome,
        StartOutcome::Rejected {
            error: "Please enter a device model".to_string()
        }
    );
}

#[tokio::test]
async fn response_without_job_id_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/start_processing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .start_processing("ABCD1234")
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn server_error_without_json_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/start_processing"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .start_processing("ABCD1234")
        .await
        .unwrap_err();
    assert_eq!(err, BackendError::HttpStatus(502));
}

#[tokio::test]
async fn status_parses_payload_and_ignores_extra_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "progress": 100,
            "status": "Complete!",
            "download_url": "/download/j1",
            "filename": "ABCD1234_120FPS.zip",
            "device_name": "ABCD1234",
            "created_time": 1700000000.5
        })))
        .mount(&server)
        .await;

    let status = backend_for(&server).job_status("j1").await.expect("status");
    assert_eq!(
        status,
        StatusPayload {
            progress: 100,
            status: "Complete!".to_string(),
            download_url: Some("/download/j1".to_string()),
            filename: Some("ABCD1234_120FPS.zip".to_string()),
        }
    );
}

#[tokio::test]
async fn status_defaults_missing_optionals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/j2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "progress": 0,
            "status": "Not found"
        })))
        .mount(&server)
        .await;

    let status = backend_for(&server).job_status("j2").await.expect("status");
    assert_eq!(status.download_url, None);
    assert_eq!(status.filename, None);
}

#[tokio::test]
async fn status_with_garbage_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/j3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).job_status("j3").await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn slow_status_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "progress": 10, "status": "slow" })),
        )
        .mount(&server)
        .await;

    let settings = BackendSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..BackendSettings::default()
    };
    let backend = ReqwestBackend::new(settings).expect("backend");
    let err = backend.job_status("slow").await.unwrap_err();
    assert!(matches!(err, BackendError::Timeout(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let settings = BackendSettings {
        // Port 9 (discard) on localhost is expected to refuse connections.
        base_url: "http://127.0.0.1:9/".to_string(),
        connect_timeout: Duration::from_millis(200),
        ..BackendSettings::default()
    };
    let backend = ReqwestBackend::new(settings).expect("backend");
    let err = backend.start_processing("ABCD1234").await.unwrap_err();
    assert!(matches!(
        err,
        BackendError::Network(_) | BackendError::Timeout(_)
    ));
}

#[test]
fn relative_links_resolve_against_base() {
    let settings = BackendSettings {
        base_url: "http://patcher.local:5000/".to_string(),
        ..BackendSettings::default()
    };
    let url = settings.resolve_link("/download_file/j1").expect("link");
    assert_eq!(url.as_str(), "http://patcher.local:5000/download_file/j1");
}

#[test]
fn invalid_base_url_is_rejected() {
    let settings = BackendSettings {
        base_url: "not a url".to_string(),
        ..BackendSettings::default()
    };
    assert!(matches!(
        ReqwestBackend::new(settings),
        Err(BackendError::InvalidUrl(_))
    ));
}

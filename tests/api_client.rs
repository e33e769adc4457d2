//! REST client behavior against a mock backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{api_for, cake};
use foodboard::api::{execute, spawn_worker, ApiError, ApiOutcome, FoodApi, Operation, UiCommand};
use foodboard::config::ApiConfig;
use foodboard::food::{FoodPatch, NewFood};
use std::time::Duration;

const CAKE_JSON: &str = r#"{"id":1,"name":"Cake","price":"10.00","image":"https://img.example/cake.png","available":true}"#;

fn pie() -> NewFood {
    NewFood {
        name: "Pie".to_string(),
        price: "5.00".to_string(),
        image: "https://img.example/pie.png".to_string(),
        description: None,
    }
}

#[tokio::test]
async fn list_fetches_all_foods() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&format!("[{}]", CAKE_JSON)))
        .await;

    let foods = api_for(&mock.base_url()).list().await.unwrap();

    assert_eq!(foods, vec![cake()]);
    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/foods");
}

#[tokio::test]
async fn create_sends_available_true() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created(
        r#"{"id":2,"name":"Pie","price":"5.00","image":"https://img.example/pie.png","available":true}"#,
    ))
    .await;

    let created = api_for(&mock.base_url()).create(&pie()).await.unwrap();

    assert_eq!(created.id, 2);
    assert!(created.available);
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/foods");
    let body = request.json();
    assert_eq!(body["available"], true);
    assert_eq!(body["name"], "Pie");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_puts_merged_item() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"id":1,"name":"Cake","price":"12.00","image":"https://img.example/cake.png","available":true}"#,
    ))
    .await;

    let patch = FoodPatch {
        price: Some("12.00".to_string()),
        ..FoodPatch::default()
    };
    let merged = patch.apply(&cake());
    let updated = api_for(&mock.base_url()).update(1, &merged).await.unwrap();

    assert_eq!(updated.price, "12.00");
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/foods/1");
    let body = request.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Cake");
    assert_eq!(body["image"], "https://img.example/cake.png");
    assert_eq!(body["available"], true);
    assert_eq!(body["price"], "12.00");
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("not json at all")).await;

    api_for(&mock.base_url()).delete(3).await.unwrap();

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/foods/3");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let err = api_for(&mock.base_url()).list().await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"foods": []}"#)).await;

    let err = api_for(&mock.base_url()).list().await.unwrap_err();
    assert_eq!(err.kind(), "decode_error");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("[]").with_delay(2_500))
        .await;

    let api = FoodApi::new(&ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    })
    .unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout { .. }), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_backend_is_a_connection_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = api_for(&format!("http://127.0.0.1:{}", port))
        .list()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "connection_error");
}

#[tokio::test]
async fn execute_turns_errors_into_failed_outcome() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "missing")).await;

    let outcome = execute(&api_for(&mock.base_url()), UiCommand::DeleteFood { id: 9 }).await;

    match outcome {
        ApiOutcome::Failed { operation, message } => {
            assert_eq!(operation, Operation::Delete);
            assert!(message.contains("404"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn worker_processes_commands_in_order() {
    let mock = MockBackend::start().await;
    // First response is slow; order must still follow submission.
    mock.enqueue_response(MockResponse::json(&format!("[{}]", CAKE_JSON)).with_delay(100))
        .await;
    mock.enqueue_response(MockResponse::json("{}")).await;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let commands = spawn_worker(
        &tokio::runtime::Handle::current(),
        api_for(&mock.base_url()),
        move |outcome| {
            let _ = tx.send(outcome);
        },
    );

    commands.send(UiCommand::LoadFoods).await.unwrap();
    commands.send(UiCommand::DeleteFood { id: 1 }).await.unwrap();

    let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    let second = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first, ApiOutcome::Loaded(vec![cake()]));
    assert_eq!(second, ApiOutcome::Deleted(1));
}

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;

use crate::app;

async fn test_app() -> Router {
    let db = Database::in_memory().await.unwrap();
    db.ensure_schema().await.unwrap();
    app::router(db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_athlete(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/athletes/")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn athlete(name: &str, cpf: &str) -> Value {
    json!({
        "nome": name,
        "cpf": cpf,
        "centro_treinamento": "CT1",
        "categoria": "scale"
    })
}

#[tokio::test]
async fn create_returns_record_with_assigned_id() {
    let app = test_app().await;

    let (status, body) = send(&app, post_athlete(&athlete("Ana", "111"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "nome": "Ana",
            "cpf": "111",
            "centro_treinamento": "CT1",
            "categoria": "scale"
        })
    );
}

#[tokio::test]
async fn duplicate_cpf_conflicts_and_keeps_one_record() {
    let app = test_app().await;

    let (status, _) = send(&app, post_athlete(&athlete("Ana", "111"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_athlete(&athlete("Bia", "111"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("111"));

    let (_, page) = send(&app, get("/athletes/")).await;
    assert_eq!(page["pagination"]["total_items"], 1);
    assert_eq!(page["data"][0]["nome"], "Ana");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/athletes/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Athlete not found" }));
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = test_app().await;

    let (status, _) = send(&app, get("/athletes/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_paginates_in_insertion_order() {
    let app = test_app().await;
    for i in 1..=15 {
        let (status, _) = send(
            &app,
            post_athlete(&athlete(&format!("Athlete {i}"), &format!("{i:03}"))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, first) = send(&app, get("/athletes/?skip=0&limit=10")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = first["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    assert_eq!(
        first["pagination"],
        json!({
            "skip": 0,
            "limit": 10,
            "page": 1,
            "total_items": 15,
            "total_pages": 2
        })
    );

    let (_, second) = send(&app, get("/athletes/?skip=10&limit=10")).await;
    let names: Vec<&str> = second["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["nome"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Athlete 11",
            "Athlete 12",
            "Athlete 13",
            "Athlete 14",
            "Athlete 15"
        ]
    );
    assert_eq!(second["pagination"]["page"], 2);
}

#[tokio::test]
async fn list_defaults_to_first_ten() {
    let app = test_app().await;
    for i in 1..=12 {
        send(&app, post_athlete(&athlete("A", &i.to_string()))).await;
    }

    let (status, body) = send(&app, get("/athletes")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["pagination"]["skip"], 0);
    assert_eq!(body["pagination"]["limit"], 10);
}

#[tokio::test]
async fn invalid_pagination_is_bad_request() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/athletes/?limit=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "limit must be between 1 and 100");

    let (status, _) = send(&app, get("/athletes/?skip=-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_field_is_rejected_before_storage() {
    let app = test_app().await;
    let payload = json!({ "nome": "Ana", "cpf": "111", "categoria": "scale" });

    let (status, _) = send(&app, post_athlete(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, page) = send(&app, get("/athletes/")).await;
    assert_eq!(page["pagination"]["total_items"], 0);
}

#[tokio::test]
async fn wrong_type_is_rejected() {
    let app = test_app().await;
    let payload = json!({
        "nome": "Ana",
        "cpf": 111,
        "centro_treinamento": "CT1",
        "categoria": "scale"
    });

    let (status, _) = send(&app, post_athlete(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_field_fails_validation() {
    let app = test_app().await;

    let (status, body) = send(&app, post_athlete(&athlete("", "111"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn repeated_get_is_idempotent() {
    let app = test_app().await;
    send(&app, post_athlete(&athlete("Ana", "111"))).await;

    let (first_status, first) = send(&app, get("/athletes/1")).await;
    let (second_status, second) = send(&app, get("/athletes/1")).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["cpf"], "111");
}

#[tokio::test]
async fn openapi_document_lists_athlete_paths() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/athletes/").is_some());
    assert!(body["paths"].get("/athletes/{id}").is_some());
}

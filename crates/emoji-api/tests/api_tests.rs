//! Integration tests for the emoji API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. The repository is an in-memory double so every
//! test can also assert how many persistence calls a request made.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode, header};
use emoji_api::router::build_router;
use emoji_api::state::AppState;
use emoji_db::{DbError, EmojiRepository};
use emoji_types::{Emoji, EmojiId};
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:3000";

// =========================================================================
// Test doubles
// =========================================================================

/// In-memory stand-in for the `emojis` table.
#[derive(Default)]
struct MemoryRepo {
    rows: Mutex<Vec<Emoji>>,
    last_id: AtomicI32,
    calls: AtomicUsize,
}

impl MemoryRepo {
    fn seed(&self, character: &str) -> EmojiId {
        let id = EmojiId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.rows.lock().unwrap().push(Emoji {
            id,
            character: character.to_owned(),
        });
        id
    }

    fn snapshot(&self) -> Vec<Emoji> {
        self.rows.lock().unwrap().clone()
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmojiRepository for MemoryRepo {
    async fn list_all(&self) -> Result<Vec<Emoji>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    async fn insert(&self, character: &str) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seed(character);
        Ok(())
    }

    async fn delete_by_id(&self, id: EmojiId) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }
}

/// A repository whose every call fails like a dead pool.
struct BrokenRepo;

impl EmojiRepository for BrokenRepo {
    async fn list_all(&self) -> Result<Vec<Emoji>, DbError> {
        Err(DbError::Postgres(sqlx::Error::PoolClosed))
    }

    async fn insert(&self, _character: &str) -> Result<(), DbError> {
        Err(DbError::Postgres(sqlx::Error::PoolClosed))
    }

    async fn delete_by_id(&self, _id: EmojiId) -> Result<(), DbError> {
        Err(DbError::Postgres(sqlx::Error::PoolClosed))
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn make_test_state() -> (Arc<AppState<MemoryRepo>>, Router) {
    let state = Arc::new(AppState::new(MemoryRepo::default()));
    let router = build_router(Arc::clone(&state));
    (state, router)
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body,
    }
}

fn get_emojis() -> Request<Body> {
    Request::get("/emojis")
        .header(header::ORIGIN, ORIGIN)
        .body(Body::empty())
        .unwrap()
}

fn post_emoji(body: &str) -> Request<Body> {
    Request::post("/emojis")
        .header(header::ORIGIN, ORIGIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn delete_emoji(id: &str) -> Request<Body> {
    Request::delete(format!("/emojis/{id}"))
        .header(header::ORIGIN, ORIGIN)
        .body(Body::empty())
        .unwrap()
}

fn characters(emojis: &[Emoji]) -> BTreeSet<String> {
    emojis.iter().map(|e| e.character.clone()).collect()
}

async fn list(router: &Router) -> Vec<Emoji> {
    let response = send(router, get_emojis()).await;
    assert_eq!(response.status, StatusCode::OK);
    serde_json::from_slice(&response.body).unwrap()
}

fn assert_cors(headers: &HeaderMap) {
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static(ORIGIN))
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some(&HeaderValue::from_static("true"))
    );
}

// =========================================================================
// GET /emojis
// =========================================================================

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let (_state, router) = make_test_state();

    let response = send(&router, get_emojis()).await;

    assert_eq!(response.status, StatusCode::OK);
    let content_type = response
        .headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("application/json"));
    assert_eq!(&response.body[..], b"[]");
}

#[tokio::test]
async fn test_list_returns_id_and_character() {
    let (state, router) = make_test_state();
    let id = state.repo.seed("\u{1F389}");

    let response = send(&router, get_emojis()).await;

    let json: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"id": id.into_inner(), "character": "\u{1F389}"}])
    );
}

#[tokio::test]
async fn test_list_twice_is_identical() {
    let (state, router) = make_test_state();
    state.repo.seed("a");
    state.repo.seed("b");

    let first: BTreeSet<Emoji> = list(&router).await.into_iter().collect();
    let second: BTreeSet<Emoji> = list(&router).await.into_iter().collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

// =========================================================================
// POST /emojis
// =========================================================================

#[tokio::test]
async fn test_insert_then_list_round_trip() {
    let (_state, router) = make_test_state();

    let response = send(&router, post_emoji(r#"{"character": "😀"}"#)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.is_empty());

    let emojis = list(&router).await;
    assert_eq!(emojis.len(), 1);
    assert_eq!(emojis[0].character, "\u{1F600}");
}

#[tokio::test]
async fn test_insert_ignores_client_id() {
    let (state, router) = make_test_state();

    let response = send(&router, post_emoji(r#"{"id": 500, "character": "x"}"#)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let rows = state.repo.snapshot();
    assert_eq!(rows.len(), 1);
    assert_ne!(rows[0].id, EmojiId(500));
}

#[tokio::test]
async fn test_insert_accepts_any_string() {
    let (_state, router) = make_test_state();

    for body in [r#"{"character": ""}"#, r#"{"character": "not an emoji"}"#] {
        let response = send(&router, post_emoji(body)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    assert_eq!(
        characters(&list(&router).await),
        BTreeSet::from([String::new(), String::from("not an emoji")])
    );
}

#[tokio::test]
async fn test_insert_without_json_content_type() {
    let (state, router) = make_test_state();

    let request = Request::post("/emojis")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"character": "y"}"#))
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(state.repo.snapshot().len(), 1);
}

#[tokio::test]
async fn test_malformed_insert_is_400_without_mutation() {
    let (state, router) = make_test_state();
    state.repo.seed("existing");
    let before = state.repo.snapshot();

    for body in ["not json", "", "{}", r#"{"character": 5}"#, "[]", r#"{"character": null}"#] {
        let response = send(&router, post_emoji(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert!(!response.body.is_empty());
        assert_cors(&response.headers);
    }

    assert_eq!(state.repo.calls(), 0);
    assert_eq!(state.repo.snapshot(), before);
}

// =========================================================================
// DELETE /emojis/{id}
// =========================================================================

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let (state, router) = make_test_state();
    let a = state.repo.seed("A");
    state.repo.seed("B");

    let response = send(&router, delete_emoji(&a.to_string())).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    assert_eq!(
        characters(&list(&router).await),
        BTreeSet::from([String::from("B")])
    );
}

#[tokio::test]
async fn test_delete_nonexistent_is_404() {
    let (state, router) = make_test_state();
    state.repo.seed("only");
    let before = state.repo.snapshot();

    let response = send(&router, delete_emoji("4242")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(&response.body[..], b"Emoji not found");
    assert_eq!(state.repo.snapshot(), before);
}

#[tokio::test]
async fn test_delete_invalid_id_is_400_without_mutation() {
    let (state, router) = make_test_state();
    state.repo.seed("only");
    let before = state.repo.snapshot();

    for id in ["abc", "1.5", "99999999999"] {
        let response = send(&router, delete_emoji(id)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "id: {id}");
        assert_eq!(&response.body[..], b"Invalid ID");
    }

    assert_eq!(state.repo.calls(), 0);
    assert_eq!(state.repo.snapshot(), before);
}

// =========================================================================
// Database failures
// =========================================================================

#[tokio::test]
async fn test_database_failure_is_500_with_raw_message() {
    let router = build_router(Arc::new(AppState::new(BrokenRepo)));
    let expected = sqlx::Error::PoolClosed.to_string();

    for request in [get_emojis(), post_emoji(r#"{"character": "z"}"#), delete_emoji("1")] {
        let response = send(&router, request).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, Bytes::from(expected.clone()));
        let content_type = response
            .headers
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_cors(&response.headers);
    }
}

// =========================================================================
// CORS
// =========================================================================

#[tokio::test]
async fn test_cors_headers_on_every_response() {
    let (state, router) = make_test_state();
    let id = state.repo.seed("q");

    let requests = [
        get_emojis(),
        post_emoji(r#"{"character": "w"}"#),
        post_emoji("garbage"),
        delete_emoji(&id.to_string()),
        delete_emoji(&id.to_string()),
        delete_emoji("abc"),
        Request::get("/nowhere")
            .header(header::ORIGIN, ORIGIN)
            .body(Body::empty())
            .unwrap(),
        Request::put("/emojis")
            .header(header::ORIGIN, ORIGIN)
            .body(Body::empty())
            .unwrap(),
    ];

    let mut statuses = Vec::new();
    for request in requests {
        let response = send(&router, request).await;
        assert_cors(&response.headers);
        statuses.push(response.status);
    }

    assert_eq!(
        statuses,
        [
            StatusCode::OK,
            StatusCode::CREATED,
            StatusCode::BAD_REQUEST,
            StatusCode::NO_CONTENT,
            StatusCode::NOT_FOUND,
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::METHOD_NOT_ALLOWED,
        ]
    );
}

#[tokio::test]
async fn test_cors_origin_sent_without_request_origin() {
    let (_state, router) = make_test_state();

    let request = Request::get("/emojis").body(Body::empty()).unwrap();
    let response = send(&router, request).await;

    assert_cors(&response.headers);
}

#[tokio::test]
async fn test_preflight_short_circuits_without_repository_call() {
    let (state, router) = make_test_state();
    state.repo.seed("untouched");

    for path in ["/emojis/1", "/emojis"] {
        let request = Request::options(path)
            .header(header::ORIGIN, ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = send(&router, request).await;

        assert_eq!(response.status, StatusCode::OK, "path: {path}");
        assert!(response.body.is_empty());
        assert_cors(&response.headers);

        let methods = response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        for method in ["GET", "POST", "DELETE", "OPTIONS"] {
            assert!(methods.contains(method), "missing {method} in {methods}");
        }
        assert_eq!(
            response.headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some(&HeaderValue::from_static("content-type"))
        );
    }

    assert_eq!(state.repo.calls(), 0);
    assert_eq!(state.repo.snapshot().len(), 1);
}

#[tokio::test]
async fn test_custom_allowed_origin() {
    let state = Arc::new(
        AppState::new(MemoryRepo::default())
            .with_allowed_origin(HeaderValue::from_static("https://emoji.example")),
    );
    let router = build_router(state);

    let response = send(&router, get_emojis()).await;

    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("https://emoji.example"))
    );
}

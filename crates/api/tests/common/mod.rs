#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use chrono::{Duration, Utc};
use dogcollector_api::auth::password::hash_password;
use dogcollector_api::auth::session::{generate_session_token, SessionConfig, SESSION_COOKIE};
use dogcollector_api::config::ServerConfig;
use dogcollector_api::router::build_app_router;
use dogcollector_api::state::AppState;
use dogcollector_core::types::DbId;
use dogcollector_db::models::dog::{CreateDog, Dog};
use dogcollector_db::models::session::CreateSession;
use dogcollector_db::models::toy::{Toy, ToyInput};
use dogcollector_db::models::user::{CreateUser, User};
use dogcollector_db::repositories::{DogRepo, SessionRepo, ToyRepo, UserRepo};
use dogcollector_storage::{ObjectStore, StorageConfig, StorageError};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Password used for every user created through [`create_user`].
pub const TEST_PASSWORD: &str = "kibble-and-bones";

/// Boundary used by [`post_multipart`].
const BOUNDARY: &str = "dogcollector-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        min_password_length: 8,
        session: SessionConfig::default(),
        storage: StorageConfig::default(),
    }
}

/// Build the full application router over `pool` with a [`RecordingStore`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool, Arc::new(RecordingStore::default()))
}

/// Build the full application router with a specific object store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_store(pool: PgPool, store: Arc<dyn ObjectStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Object stores
// ---------------------------------------------------------------------------

/// A stored object as seen by [`RecordingStore`].
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub size: usize,
    pub content_type: Option<String>,
}

/// In-memory store that records every upload.
#[derive(Debug, Default)]
pub struct RecordingStore {
    config: StorageConfig,
    objects: Mutex<Vec<StoredObject>>,
}

impl RecordingStore {
    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            size: body.len(),
            content_type: content_type.map(str::to_string),
        });
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        self.config.object_url(key)
    }
}

/// Store whose uploads always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put_object(
        &self,
        key: &str,
        _body: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        Err(StorageError::UploadFailed {
            key: key.to_string(),
            message: "bucket unavailable".into(),
        })
    }

    fn public_url(&self, key: &str) -> String {
        StorageConfig::default().object_url(key)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Open a session for `user_id` directly in the database and return the
/// plaintext token.
pub async fn session_for(pool: &PgPool, user_id: DbId) -> String {
    let (token, token_hash) = generate_session_token();
    SessionRepo::create(
        pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at: Utc::now() + Duration::days(1),
        },
    )
    .await
    .expect("session creation should succeed");
    token
}

/// Create a user and a session for them. Returns `(user, token)`.
pub async fn logged_in_user(pool: &PgPool, username: &str) -> (User, String) {
    let user = create_user(pool, username).await;
    let token = session_for(pool, user.id).await;
    (user, token)
}

pub async fn create_dog(pool: &PgPool, user_id: DbId, name: &str) -> Dog {
    DogRepo::create(
        pool,
        &CreateDog {
            name: name.to_string(),
            breed: "Mutt".into(),
            description: "Fixture dog".into(),
            age: 2,
            user_id,
        },
    )
    .await
    .expect("dog creation should succeed")
}

pub async fn create_toy(pool: &PgPool, name: &str, color: &str) -> Toy {
    ToyRepo::create(
        pool,
        &ToyInput {
            name: name.to_string(),
            color: color.to_string(),
        },
    )
    .await
    .expect("toy creation should succeed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}")
}

/// Anonymous GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with a session cookie.
pub async fn get_as(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(COOKIE, cookie_header(token))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Anonymous url-encoded form POST.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Url-encoded form POST with a session cookie.
pub async fn post_form_as(app: Router, uri: &str, token: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(COOKIE, cookie_header(token))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Multipart POST with a single file part, sent with a session cookie.
pub async fn post_multipart_as(
    app: Router,
    uri: &str,
    token: &str,
    field: &str,
    filename: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(COOKIE, cookie_header(token))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
}

/// The session token a response sets, if any. An empty value (logout)
/// comes back as `Some("")`.
pub fn set_session_token(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

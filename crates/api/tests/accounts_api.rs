//! Integration tests for signup, login and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_as, location, post_form, post_form_as, set_session_token};
use dogcollector_api::error::is_unique_violation;
use dogcollector_core::accounts::{LOGIN_ERROR_MESSAGE, SIGNUP_ERROR_MESSAGE};
use dogcollector_db::models::user::CreateUser;
use dogcollector_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_logs_in_and_redirects_to_dogs(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/accounts/signup",
        "username=alice&password1=walkies-at-noon&password2=walkies-at-noon",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dogs/");
    let token = set_session_token(&response).expect("signup should set the session cookie");
    assert!(!token.is_empty());

    let user = UserRepo::find_by_username(&pool, "alice").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "walkies-at-noon");

    let response = get_as(common::build_test_app(pool), "/dogs/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_mismatched_passwords(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/accounts/signup",
        "username=alice&password1=walkies-at-noon&password2=walkies-at-one",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_session_token(&response).is_none());
    let json = body_json(response).await;
    assert_eq!(json["error_message"], SIGNUP_ERROR_MESSAGE);

    assert!(!UserRepo::username_exists(&pool, "alice").await.unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_weak_passwords_and_bad_usernames(pool: PgPool) {
    for body in [
        "username=alice&password1=short&password2=short",
        "username=alice&password1=12345678901&password2=12345678901",
        "username=two+words&password1=walkies-at-noon&password2=walkies-at-noon",
        "username=&password1=walkies-at-noon&password2=walkies-at-noon",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_form(app, "/accounts/signup", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = body_json(response).await;
        assert_eq!(json["error_message"], SIGNUP_ERROR_MESSAGE);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_taken_username(pool: PgPool) {
    common::create_user(&pool, "alice").await;

    let response = post_form(
        common::build_test_app(pool),
        "/accounts/signup",
        "username=alice&password1=walkies-at-noon&password2=walkies-at-noon",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error_message"], SIGNUP_ERROR_MESSAGE);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn concurrent_signups_for_one_username_yield_one_account(pool: PgPool) {
    let body = "username=alice&password1=walkies-at-noon&password2=walkies-at-noon";
    let (first, second) = tokio::join!(
        post_form(common::build_test_app(pool.clone()), "/accounts/signup", body),
        post_form(common::build_test_app(pool.clone()), "/accounts/signup", body),
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::SEE_OTHER, StatusCode::BAD_REQUEST]);

    let loser = if first.status() == StatusCode::BAD_REQUEST {
        first
    } else {
        second
    };
    let json = body_json(loser).await;
    assert_eq!(json["error_message"], SIGNUP_ERROR_MESSAGE);
    assert!(UserRepo::username_exists(&pool, "alice").await.unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_insert_is_a_unique_violation(pool: PgPool) {
    common::create_user(&pool, "alice").await;

    let err = UserRepo::create(
        &pool,
        &CreateUser {
            username: "alice".to_string(),
            password_hash: "other".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(is_unique_violation(&err, "uq_users_username"));
    assert!(!is_unique_violation(&err, "uq_user_sessions_token_hash"));
    assert!(!is_unique_violation(&sqlx::Error::RowNotFound, "uq_users_username"));
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_redirects_to_next_and_records_login(pool: PgPool) {
    let user = common::create_user(&pool, "bob").await;
    assert!(user.last_login_at.is_none());

    let body = format!("username=bob&password={}&next=/toys/", common::TEST_PASSWORD);
    let response = post_form(common::build_test_app(pool.clone()), "/accounts/login", &body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/toys/");
    assert!(set_session_token(&response).is_some());

    let user = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(user.last_login_at.is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_ignores_offsite_next(pool: PgPool) {
    common::create_user(&pool, "bob").await;

    let body = format!(
        "username=bob&password={}&next=//evil.example/",
        common::TEST_PASSWORD
    );
    let response = post_form(common::build_test_app(pool), "/accounts/login", &body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dogs/");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_failures_share_one_message(pool: PgPool) {
    let inactive = common::create_user(&pool, "sleepy").await;
    UserRepo::deactivate(&pool, inactive.id).await.unwrap();
    common::create_user(&pool, "bob").await;

    let cases = [
        "username=bob&password=not-the-password".to_string(),
        "username=ghost&password=whatever".to_string(),
        format!("username=sleepy&password={}", common::TEST_PASSWORD),
    ];
    for body in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_form(app, "/accounts/login", &body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert!(set_session_token(&response).is_none());
        let json = body_json(response).await;
        assert_eq!(json["error_message"], LOGIN_ERROR_MESSAGE);
    }
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_session_and_clears_cookie(pool: PgPool) {
    let (_user, token) = common::logged_in_user(&pool, "carol").await;

    let response = post_form_as(
        common::build_test_app(pool.clone()),
        "/accounts/logout",
        &token,
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(set_session_token(&response).as_deref(), Some(""));

    let response = get_as(common::build_test_app(pool), "/dogs/", &token).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/accounts/login?next=%2Fdogs%2F");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sessions_of_deactivated_users_stop_working(pool: PgPool) {
    let (user, token) = common::logged_in_user(&pool, "dave").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    let response = get_as(common::build_test_app(pool), "/toys/", &token).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

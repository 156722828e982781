//! Integration tests for recording feedings.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get_as, location, post_form_as};
use dogcollector_core::types::DbId;
use dogcollector_db::repositories::FeedingRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn feeding_is_recorded_and_listed_newest_first(pool: PgPool) {
    let (user, token) = common::logged_in_user(&pool, "alice").await;
    let dog = common::create_dog(&pool, user.id, "Rex").await;
    let path = format!("/dogs/{}/add_feeding", dog.id);

    for body in ["date=2024-05-01&meal=B", "date=2024-05-03&meal=D"] {
        let app = common::build_test_app(pool.clone());
        let response = post_form_as(app, &path, &token, body).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/dogs/{}", dog.id));
    }

    let response = get_as(
        common::build_test_app(pool),
        &format!("/dogs/{}", dog.id),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let feedings = json["feedings"].as_array().unwrap();
    assert_eq!(feedings.len(), 2);
    assert_eq!(feedings[0]["date"], "2024-05-03");
    assert_eq!(feedings[0]["meal"], "D");
    assert_eq!(feedings[0]["meal_display"], "Dinner");
    assert_eq!(feedings[1]["meal_display"], "Breakfast");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_feeding_is_dropped_with_redirect(pool: PgPool) {
    let (user, token) = common::logged_in_user(&pool, "alice").await;
    let dog = common::create_dog(&pool, user.id, "Rex").await;
    let path = format!("/dogs/{}/add_feeding", dog.id);

    for body in ["date=not-a-date&meal=B", "date=2024-05-01&meal=S", ""] {
        let app = common::build_test_app(pool.clone());
        let response = post_form_as(app, &path, &token, body).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{body}");
        assert_eq!(location(&response), format!("/dogs/{}", dog.id));
    }

    assert!(FeedingRepo::list_for_dog(&pool, dog.id).await.unwrap().is_empty());
}

async fn fed_for_today(pool: &PgPool, dog_id: DbId, token: &str) -> bool {
    let response = get_as(
        common::build_test_app(pool.clone()),
        &format!("/dogs/{dog_id}"),
        token,
    )
    .await;
    body_json(response).await["fed_for_today"].as_bool().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn three_feedings_today_means_fed(pool: PgPool) {
    let (user, token) = common::logged_in_user(&pool, "alice").await;
    let dog = common::create_dog(&pool, user.id, "Rex").await;
    let path = format!("/dogs/{}/add_feeding", dog.id);
    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);

    // Meals on other days never count towards today.
    for meal in ["B", "L", "D"] {
        let body = format!("date={yesterday}&meal={meal}");
        post_form_as(common::build_test_app(pool.clone()), &path, &token, &body).await;
    }
    assert!(!fed_for_today(&pool, dog.id, &token).await);

    for meal in ["B", "L"] {
        let body = format!("date={today}&meal={meal}");
        post_form_as(common::build_test_app(pool.clone()), &path, &token, &body).await;
    }
    assert!(!fed_for_today(&pool, dog.id, &token).await);

    let body = format!("date={today}&meal=D");
    post_form_as(common::build_test_app(pool.clone()), &path, &token, &body).await;
    assert!(fed_for_today(&pool, dog.id, &token).await);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn feeding_for_missing_dog_returns_404(pool: PgPool) {
    let (_user, token) = common::logged_in_user(&pool, "alice").await;

    let response = post_form_as(
        common::build_test_app(pool),
        "/dogs/999999/add_feeding",
        &token,
        "date=2024-05-01&meal=B",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

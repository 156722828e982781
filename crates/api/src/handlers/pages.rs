//! Handlers for the public static pages.

use axum::Json;
use serde::Serialize;

/// Context for a static page.
#[derive(Debug, Serialize)]
pub struct StaticPage {
    pub title: &'static str,
    pub body: &'static str,
}

/// GET /
pub async fn home() -> Json<StaticPage> {
    Json(StaticPage {
        title: "Dog Collector",
        body: "Keep track of your dogs, their toys, their meals and their photos.",
    })
}

/// GET /about
pub async fn about() -> Json<StaticPage> {
    Json(StaticPage {
        title: "About",
        body: "Dog Collector is a small record-keeping app for dog owners.",
    })
}

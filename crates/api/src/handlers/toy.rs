//! Handlers for the `/toys` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use dogcollector_core::error::CoreError;
use dogcollector_core::forms::ToyForm;
use dogcollector_core::types::DbId;
use dogcollector_db::models::toy::{Toy, ToyInput};
use dogcollector_db::repositories::ToyRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ToyListPage {
    pub toys: Vec<Toy>,
}

#[derive(Debug, Serialize)]
pub struct ToyDetailPage {
    pub toy: Toy,
}

#[derive(Debug, Serialize)]
pub struct ToyFormPage {
    /// Set when editing an existing toy.
    pub toy_id: Option<DbId>,
    pub form: ToyForm,
}

fn redirect_to_toy(toy_id: DbId) -> Redirect {
    Redirect::to(&format!("/toys/{toy_id}"))
}

/// GET /toys/
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<ToyListPage>> {
    let toys = ToyRepo::list(&state.pool).await?;
    Ok(Json(ToyListPage { toys }))
}

/// GET /toys/new
pub async fn new_form(_user: AuthUser) -> Json<ToyFormPage> {
    Json(ToyFormPage {
        toy_id: None,
        form: ToyForm::default(),
    })
}

/// POST /toys/new
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Form(form): Form<ToyForm>,
) -> AppResult<Redirect> {
    let input = ToyInput::from(form.validated()?);
    let toy = ToyRepo::create(&state.pool, &input).await?;
    tracing::info!(toy_id = toy.id, user_id = user.user_id, "Toy created");
    Ok(redirect_to_toy(toy.id))
}

/// GET /toys/{id}
pub async fn detail(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ToyDetailPage>> {
    let toy = find_toy(&state, id).await?;
    Ok(Json(ToyDetailPage { toy }))
}

/// GET /toys/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ToyFormPage>> {
    let toy = find_toy(&state, id).await?;
    Ok(Json(ToyFormPage {
        toy_id: Some(toy.id),
        form: ToyForm {
            name: toy.name,
            color: toy.color,
        },
    }))
}

/// POST /toys/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Form(form): Form<ToyForm>,
) -> AppResult<Redirect> {
    let input = ToyInput::from(form.validated()?);
    let toy = ToyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::toy_not_found(id))?;
    tracing::info!(toy_id = toy.id, user_id = user.user_id, "Toy updated");
    Ok(redirect_to_toy(toy.id))
}

/// GET /toys/{id}/delete
pub async fn delete_confirm(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ToyDetailPage>> {
    let toy = find_toy(&state, id).await?;
    Ok(Json(ToyDetailPage { toy }))
}

/// POST /toys/{id}/delete
///
/// Removing a toy also detaches it from every dog.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !ToyRepo::delete(&state.pool, id).await? {
        return Err(CoreError::toy_not_found(id).into());
    }
    tracing::info!(toy_id = id, user_id = user.user_id, "Toy deleted");
    Ok(Redirect::to("/toys/"))
}

async fn find_toy(state: &AppState, id: DbId) -> AppResult<Toy> {
    Ok(ToyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::toy_not_found(id))?)
}

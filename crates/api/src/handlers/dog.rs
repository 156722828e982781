//! Handlers for the `/dogs` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Utc;
use dogcollector_core::error::CoreError;
use dogcollector_core::forms::{DogForm, DogUpdateForm};
use dogcollector_core::meal::{is_fed_for_today, meal_choices, Meal, MealChoice};
use dogcollector_core::types::DbId;
use dogcollector_db::models::dog::{CreateDog, Dog, UpdateDog};
use dogcollector_db::models::feeding::Feeding;
use dogcollector_db::models::photo::Photo;
use dogcollector_db::models::toy::Toy;
use dogcollector_db::repositories::{DogRepo, DogToyRepo, FeedingRepo, PhotoRepo};
use serde::Serialize;

use super::redirect_to_dog;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Page contexts
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DogListPage {
    pub dogs: Vec<Dog>,
}

/// Blank or prefilled create form.
#[derive(Debug, Serialize)]
pub struct DogFormPage {
    pub form: DogForm,
}

/// Edit form. The name is shown but is not an editable field.
#[derive(Debug, Serialize)]
pub struct DogEditPage {
    pub dog_id: DbId,
    pub name: String,
    pub form: DogUpdateForm,
}

#[derive(Debug, Serialize)]
pub struct DogDeletePage {
    pub dog: Dog,
}

/// A feeding with its meal label resolved.
#[derive(Debug, Serialize)]
pub struct FeedingView {
    #[serde(flatten)]
    pub feeding: Feeding,
    pub meal_display: String,
}

/// The empty feeding form rendered on the detail page.
#[derive(Debug, Serialize)]
pub struct FeedingFormContext {
    pub meal_choices: Vec<MealChoice>,
    pub default_meal: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DogDetailPage {
    pub dog: Dog,
    /// Toys the dog already has.
    pub dog_toys: Vec<Toy>,
    pub photos: Vec<Photo>,
    pub feedings: Vec<FeedingView>,
    pub fed_for_today: bool,
    /// Toys the dog does NOT have yet, offered for association.
    pub toys: Vec<Toy>,
    pub feeding_form: FeedingFormContext,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /dogs/
///
/// Every dog, whoever created it.
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<DogListPage>> {
    let dogs = DogRepo::list(&state.pool).await?;
    Ok(Json(DogListPage { dogs }))
}

/// GET /dogs/new
pub async fn new_form(_user: AuthUser) -> Json<DogFormPage> {
    Json(DogFormPage {
        form: DogForm::default(),
    })
}

/// POST /dogs/new
///
/// The owner is always the acting user; the form has no owner field.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Form(form): Form<DogForm>,
) -> AppResult<Redirect> {
    let fields = form.validated()?;
    let dog = DogRepo::create(&state.pool, &CreateDog::from_fields(fields, user.user_id)).await?;
    tracing::info!(
        dog_id = dog.id,
        user_id = user.user_id,
        username = %user.username,
        "Dog created"
    );
    Ok(redirect_to_dog(dog.id))
}

/// GET /dogs/{id}
pub async fn detail(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DogDetailPage>> {
    let dog = find_dog(&state, id).await?;

    let dog_toys = DogToyRepo::list_for_dog(&state.pool, id).await?;
    let toys = DogToyRepo::list_not_for_dog(&state.pool, id).await?;
    let photos = PhotoRepo::list_for_dog(&state.pool, id).await?;
    let feedings = FeedingRepo::list_for_dog(&state.pool, id)
        .await?
        .into_iter()
        .map(|feeding| FeedingView {
            meal_display: feeding.meal_label().to_string(),
            feeding,
        })
        .collect();
    let today = Utc::now().date_naive();
    let fed_today = FeedingRepo::count_on_date(&state.pool, id, today).await?;

    Ok(Json(DogDetailPage {
        dog,
        dog_toys,
        photos,
        feedings,
        fed_for_today: is_fed_for_today(fed_today),
        toys,
        feeding_form: FeedingFormContext {
            meal_choices: meal_choices(),
            default_meal: Meal::DEFAULT.code(),
        },
    }))
}

/// GET /dogs/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DogEditPage>> {
    let dog = find_dog(&state, id).await?;
    Ok(Json(DogEditPage {
        dog_id: dog.id,
        form: DogUpdateForm {
            breed: dog.breed,
            description: dog.description,
            age: dog.age.to_string(),
        },
        name: dog.name,
    }))
}

/// POST /dogs/{id}/edit
///
/// Only breed, description and age change; a submitted name is ignored.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Form(form): Form<DogUpdateForm>,
) -> AppResult<Redirect> {
    let fields = form.validated()?;
    let dog = DogRepo::update(&state.pool, id, &UpdateDog::from(fields))
        .await?
        .ok_or(CoreError::dog_not_found(id))?;
    tracing::info!(dog_id = dog.id, user_id = user.user_id, "Dog updated");
    Ok(redirect_to_dog(dog.id))
}

/// GET /dogs/{id}/delete
pub async fn delete_confirm(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DogDeletePage>> {
    let dog = find_dog(&state, id).await?;
    Ok(Json(DogDeletePage { dog }))
}

/// POST /dogs/{id}/delete
///
/// Toy associations, photos and feedings go with the dog.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if !DogRepo::delete(&state.pool, id).await? {
        return Err(CoreError::dog_not_found(id).into());
    }
    tracing::info!(dog_id = id, user_id = user.user_id, "Dog deleted");
    Ok(Redirect::to("/dogs/"))
}

async fn find_dog(state: &AppState, id: DbId) -> AppResult<Dog> {
    Ok(DogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::dog_not_found(id))?)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    pets::{
        dto::{CreatePetRequest, UpdatePetRequest},
        repo_types::Pet,
        services::owned_pet,
    },
    state::AppState,
};

pub fn pets_routes() -> Router<AppState> {
    Router::new()
        .route("/pets", get(list_pets).post(create_pet))
        .route(
            "/pets/:pet_id",
            get(get_pet).patch(update_pet).put(update_pet).delete(delete_pet),
        )
}

#[instrument(skip(state))]
pub async fn list_pets(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Pet>>, AppError> {
    Ok(Json(Pet::list_by_owner(&state.db, user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_pet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<Pet>), AppError> {
    payload.validate()?;
    let pet = Pet::create(&state.db, user_id, &payload).await?;
    info!(%user_id, pet_id = %pet.id, "pet created");
    Ok((StatusCode::CREATED, Json(pet)))
}

#[instrument(skip(state))]
pub async fn get_pet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Pet>, AppError> {
    Ok(Json(owned_pet(&state.db, user_id, pet_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn update_pet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
    Json(payload): Json<UpdatePetRequest>,
) -> Result<Json<Pet>, AppError> {
    payload.validate()?;
    let pet = Pet::update(&state.db, pet_id, user_id, &payload)
        .await?
        .ok_or(AppError::NotFound("Pet"))?;
    Ok(Json(pet))
}

#[instrument(skip(state))]
pub async fn delete_pet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !Pet::delete(&state.db, pet_id, user_id).await? {
        return Err(AppError::NotFound("Pet"));
    }
    info!(%user_id, %pet_id, "pet deleted");
    Ok(StatusCode::NO_CONTENT)
}

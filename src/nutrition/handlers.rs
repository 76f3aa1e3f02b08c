use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    nutrition::{
        dto::UpsertNutritionRequest,
        repo,
        repo_types::{NutritionProfile, NutritionWrite},
    },
    pets::services::owned_pet,
    state::AppState,
};

pub fn nutrition_routes() -> Router<AppState> {
    Router::new().route(
        "/pets/:pet_id/nutrition",
        get(get_nutrition).put(upsert_nutrition),
    )
}

/// `null` when the pet has no profile yet.
#[instrument(skip(state))]
pub async fn get_nutrition(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Option<NutritionProfile>>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let profile = repo::find_by_pet(&state.db, pet.id).await?;
    Ok(Json(profile.map(NutritionProfile::from)))
}

#[instrument(skip(state, payload))]
pub async fn upsert_nutrition(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
    Json(payload): Json<UpsertNutritionRequest>,
) -> Result<Json<NutritionProfile>, AppError> {
    payload.validate()?;
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let row = repo::upsert(&state.db, pet.id, &NutritionWrite::from(payload)).await?;
    info!(%user_id, %pet_id, "nutrition profile saved");
    Ok(Json(row.into()))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    clinical::{
        dto::{
            DiseasePatch, DiseaseRequest, UpsertClinicalRequest, VaccinationPatch,
            VaccinationRequest, WeightRequest,
        },
        repo,
        repo_types::{ClinicalRecord, ClinicalWrite, Disease, Vaccination, WeightLog},
    },
    error::AppError,
    pets::services::owned_pet,
    state::AppState,
};

pub fn clinical_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pets/:pet_id/clinical",
            get(get_clinical).put(upsert_clinical),
        )
        .route(
            "/pets/:pet_id/clinical/vaccinations",
            get(list_vaccinations).post(add_vaccination),
        )
        .route(
            "/pets/:pet_id/clinical/vaccinations/:vaccination_id",
            patch(update_vaccination).delete(delete_vaccination),
        )
        .route(
            "/pets/:pet_id/clinical/diseases",
            get(list_diseases).post(add_disease),
        )
        .route(
            "/pets/:pet_id/clinical/diseases/:disease_id",
            patch(update_disease).delete(delete_disease),
        )
        .route(
            "/pets/:pet_id/clinical/weights",
            get(list_weights).post(add_weight),
        )
        .route(
            "/pets/:pet_id/clinical/weights/:weight_id",
            delete(delete_weight),
        )
}

// --- clinical record ---

#[instrument(skip(state))]
pub async fn get_clinical(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Option<ClinicalRecord>>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let row = repo::find_record(&state.db, pet.id).await?;
    Ok(Json(row.map(ClinicalRecord::from)))
}

#[instrument(skip(state, payload))]
pub async fn upsert_clinical(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
    Json(payload): Json<UpsertClinicalRequest>,
) -> Result<Json<ClinicalRecord>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let row = repo::upsert_record(&state.db, pet.id, &ClinicalWrite::from(payload)).await?;
    info!(%user_id, %pet_id, "clinical record saved");
    Ok(Json(row.into()))
}

// --- vaccinations ---

#[instrument(skip(state))]
pub async fn list_vaccinations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Vec<Vaccination>>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    Ok(Json(repo::list_vaccinations(&state.db, pet.id).await?))
}

#[instrument(skip(state, payload))]
pub async fn add_vaccination(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
    Json(payload): Json<VaccinationRequest>,
) -> Result<(StatusCode, Json<Vaccination>), AppError> {
    payload.validate()?;
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let date = payload.date.unwrap_or_else(OffsetDateTime::now_utc);
    let row = repo::insert_vaccination(&state.db, pet.id, &payload.name, date).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_vaccination(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((pet_id, vaccination_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<VaccinationPatch>,
) -> Result<Json<Vaccination>, AppError> {
    payload.validate()?;
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let row = repo::update_vaccination(&state.db, pet.id, vaccination_id, &payload)
        .await?
        .ok_or(AppError::NotFound("Vaccination"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_vaccination(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((pet_id, vaccination_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    if !repo::delete_vaccination(&state.db, pet.id, vaccination_id).await? {
        return Err(AppError::NotFound("Vaccination"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- diseases ---

#[instrument(skip(state))]
pub async fn list_diseases(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Vec<Disease>>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    Ok(Json(repo::list_diseases(&state.db, pet.id).await?))
}

#[instrument(skip(state, payload))]
pub async fn add_disease(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
    Json(payload): Json<DiseaseRequest>,
) -> Result<(StatusCode, Json<Disease>), AppError> {
    payload.validate()?;
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let diagnosed_at = payload.diagnosed_at.unwrap_or_else(OffsetDateTime::now_utc);
    let status = payload.status.as_deref().unwrap_or("ACTIVE");
    let row = repo::insert_disease(&state.db, pet.id, &payload.name, diagnosed_at, status).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_disease(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((pet_id, disease_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<DiseasePatch>,
) -> Result<Json<Disease>, AppError> {
    payload.validate()?;
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let row = repo::update_disease(&state.db, pet.id, disease_id, &payload)
        .await?
        .ok_or(AppError::NotFound("Disease"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_disease(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((pet_id, disease_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    if !repo::delete_disease(&state.db, pet.id, disease_id).await? {
        return Err(AppError::NotFound("Disease"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- weights ---

#[instrument(skip(state))]
pub async fn list_weights(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Vec<WeightLog>>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    Ok(Json(repo::list_weights(&state.db, pet.id).await?))
}

#[instrument(skip(state, payload))]
pub async fn add_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
    Json(payload): Json<WeightRequest>,
) -> Result<(StatusCode, Json<WeightLog>), AppError> {
    payload.validate()?;
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    let date = payload.date.unwrap_or_else(OffsetDateTime::now_utc);
    let row = repo::insert_weight(&state.db, pet.id, date, payload.weight_kg).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state))]
pub async fn delete_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((pet_id, weight_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;
    if !repo::delete_weight(&state.db, pet.id, weight_id).await? {
        return Err(AppError::NotFound("Weight log"));
    }
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    matching::{classify, Restrictions},
    nutrition::{repo as nutrition_repo, repo_types::NutritionProfile},
    pantry::{
        dto::{
            CreatePantryItemRequest, DeletedResponse, ExpiringQuery, ExpiringResponse,
            PantrySummary, PetRef, UpdatePantryItemRequest, UsableCounts, UsableForPetResponse,
        },
        repo,
        repo_types::{NewPantryItem, PantryChanges, PantryItem},
        services::{self, DEFAULT_EXPIRING_DAYS},
    },
    pets::services::owned_pet,
    state::AppState,
};

pub fn pantry_routes() -> Router<AppState> {
    Router::new()
        .route("/pantry", get(list_items).post(create_item))
        .route("/pantry/expiring", get(expiring_items))
        .route("/pantry/summary", get(summary))
        .route("/pantry/usable/:pet_id", get(usable_for_pet))
        .route("/pantry/:item_id", patch(update_item).delete(delete_item))
}

#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<PantryItem>>, AppError> {
    let mut items = repo::list_by_owner(&state.db, user_id).await?;
    services::sort_for_listing(&mut items);
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn create_item(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePantryItemRequest>,
) -> Result<(StatusCode, Json<PantryItem>), AppError> {
    payload.validate()?;
    let item = repo::insert(&state.db, &NewPantryItem::new(user_id, payload)).await?;
    info!(%user_id, item_id = %item.id, "pantry item created");
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state, payload))]
pub async fn update_item(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(item_id): Path<Uuid>,
    Json(payload): Json<UpdatePantryItemRequest>,
) -> Result<Json<PantryItem>, AppError> {
    payload.validate()?;
    let changes = PantryChanges::from(payload);
    let item = repo::update(&state.db, user_id, item_id, &changes)
        .await?
        .ok_or(AppError::NotFound("Pantry item"))?;
    Ok(Json(item))
}

#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(item_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !repo::delete(&state.db, user_id, item_id).await? {
        return Err(AppError::NotFound("Pantry item"));
    }
    info!(%user_id, %item_id, "pantry item deleted");
    Ok(Json(DeletedResponse { ok: true }))
}

/// Negative windows are rejected rather than clamped.
fn expiring_days(q: &ExpiringQuery) -> Result<u32, AppError> {
    match q.days {
        None => Ok(DEFAULT_EXPIRING_DAYS),
        Some(d) => u32::try_from(d)
            .map_err(|_| AppError::validation("days must be a non-negative integer")),
    }
}

#[instrument(skip(state))]
pub async fn expiring_items(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<ExpiringQuery>,
) -> Result<Json<ExpiringResponse>, AppError> {
    let days = expiring_days(&q)?;
    let items = repo::list_by_owner(&state.db, user_id).await?;
    let items = services::expiring(items, days, OffsetDateTime::now_utc());
    Ok(Json(ExpiringResponse { days, items }))
}

#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PantrySummary>, AppError> {
    let items = repo::list_by_owner(&state.db, user_id).await?;
    Ok(Json(services::summarize(&items)))
}

#[instrument(skip(state))]
pub async fn usable_for_pet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<UsableForPetResponse>, AppError> {
    let pet = owned_pet(&state.db, user_id, pet_id).await?;

    let restrictions = nutrition_repo::find_by_pet(&state.db, pet.id)
        .await?
        .map(|row| Restrictions::from_profile(&NutritionProfile::from(row)))
        .unwrap_or_default();

    let mut items = repo::list_by_owner(&state.db, user_id).await?;
    services::sort_for_listing(&mut items);

    let out = classify(&restrictions, items);
    debug!(
        %pet_id,
        apt = out.apt.len(),
        forbidden = out.forbidden.len(),
        "pantry classified"
    );

    Ok(Json(UsableForPetResponse {
        pet: PetRef {
            id: pet.id,
            name: pet.name,
        },
        counts: UsableCounts {
            apt: out.apt.len(),
            forbidden: out.forbidden.len(),
        },
        apt: out.apt,
        forbidden: out.forbidden,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_default_to_three() {
        assert_eq!(expiring_days(&ExpiringQuery { days: None }).unwrap(), 3);
        assert_eq!(expiring_days(&ExpiringQuery { days: Some(0) }).unwrap(), 0);
        assert_eq!(expiring_days(&ExpiringQuery { days: Some(14) }).unwrap(), 14);
    }

    #[test]
    fn negative_days_are_rejected() {
        let err = expiring_days(&ExpiringQuery { days: Some(-1) }).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

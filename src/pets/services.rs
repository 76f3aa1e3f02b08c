use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::pets::repo_types::Pet;

/// Load-and-authorize: the single ownership check every pet-scoped operation
/// runs first. Absent and foreign pets both come back as `NotFound`.
pub async fn owned_pet(db: &PgPool, owner_id: Uuid, pet_id: Uuid) -> Result<Pet, AppError> {
    match Pet::find_owned(db, pet_id, owner_id).await? {
        Some(pet) => Ok(pet),
        None => {
            debug!(%owner_id, %pet_id, "pet not found for owner");
            Err(AppError::NotFound("Pet"))
        }
    }
}

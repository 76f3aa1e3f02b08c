use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Pet record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub species: String,
    pub sex: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

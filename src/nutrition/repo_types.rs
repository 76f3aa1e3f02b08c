use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::codec;
use crate::nutrition::dto::UpsertNutritionRequest;

/// Row as stored: list fields hold encoded JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct NutritionProfileRow {
    pub pet_id: Uuid,
    pub diet_type: String,
    pub meals_per_day: i32,
    pub activity_level: String,
    pub goal: String,
    pub preferred_foods: Option<String>,
    pub forbidden_foods: Option<String>,
    pub intolerances: Option<String>,
    pub food_allergies: Option<String>,
    pub supplements: Option<String>,
    pub daily_calories: Option<i32>,
    pub water_intake_ml: Option<i32>,
    pub notes: Option<String>,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionProfile {
    pub pet_id: Uuid,
    pub diet_type: String,
    pub meals_per_day: i32,
    pub activity_level: String,
    pub goal: String,
    pub preferred_foods: Vec<String>,
    pub forbidden_foods: Vec<String>,
    pub intolerances: Vec<String>,
    pub food_allergies: Vec<String>,
    pub supplements: Vec<String>,
    pub daily_calories: Option<i32>,
    pub water_intake_ml: Option<i32>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<NutritionProfileRow> for NutritionProfile {
    fn from(r: NutritionProfileRow) -> Self {
        Self {
            pet_id: r.pet_id,
            diet_type: r.diet_type,
            meals_per_day: r.meals_per_day,
            activity_level: r.activity_level,
            goal: r.goal,
            preferred_foods: codec::decode(r.preferred_foods.as_deref()),
            forbidden_foods: codec::decode(r.forbidden_foods.as_deref()),
            intolerances: codec::decode(r.intolerances.as_deref()),
            food_allergies: codec::decode(r.food_allergies.as_deref()),
            supplements: codec::decode(r.supplements.as_deref()),
            daily_calories: r.daily_calories,
            water_intake_ml: r.water_intake_ml,
            notes: r.notes,
            updated_at: r.updated_at,
        }
    }
}

/// Full replacement of every writable field, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionWrite {
    pub diet_type: String,
    pub meals_per_day: i32,
    pub activity_level: String,
    pub goal: String,
    pub preferred_foods: Option<String>,
    pub forbidden_foods: Option<String>,
    pub intolerances: Option<String>,
    pub food_allergies: Option<String>,
    pub supplements: Option<String>,
    pub daily_calories: Option<i32>,
    pub water_intake_ml: Option<i32>,
    pub notes: Option<String>,
}

impl From<UpsertNutritionRequest> for NutritionWrite {
    fn from(b: UpsertNutritionRequest) -> Self {
        Self {
            diet_type: b.diet_type.unwrap_or_else(|| "RAW".into()),
            meals_per_day: b.meals_per_day.unwrap_or(2),
            activity_level: b.activity_level.unwrap_or_else(|| "MODERATE".into()),
            goal: b.goal.unwrap_or_else(|| "MAINTENANCE".into()),
            preferred_foods: codec::encode(b.preferred_foods.as_deref()),
            forbidden_foods: codec::encode(b.forbidden_foods.as_deref()),
            intolerances: codec::encode(b.intolerances.as_deref()),
            food_allergies: codec::encode(b.food_allergies.as_deref()),
            supplements: codec::encode(b.supplements.as_deref()),
            daily_calories: b.daily_calories,
            water_intake_ml: b.water_intake_ml,
            notes: b.notes,
        }
    }
}

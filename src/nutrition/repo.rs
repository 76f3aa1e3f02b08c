use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::nutrition::repo_types::{NutritionProfileRow, NutritionWrite};

pub async fn find_by_pet(db: &PgPool, pet_id: Uuid) -> anyhow::Result<Option<NutritionProfileRow>> {
    let row = sqlx::query_as::<_, NutritionProfileRow>(
        r#"
        SELECT pet_id, diet_type, meals_per_day, activity_level, goal,
               preferred_foods, forbidden_foods, intolerances, food_allergies, supplements,
               daily_calories, water_intake_ml, notes, updated_at
        FROM nutrition_profiles
        WHERE pet_id = $1
        "#,
    )
    .bind(pet_id)
    .fetch_optional(db)
    .await
    .context("find nutrition profile")?;
    Ok(row)
}

/// Creates the profile or replaces every writable field in a single statement.
pub async fn upsert(db: &PgPool, pet_id: Uuid, w: &NutritionWrite) -> anyhow::Result<NutritionProfileRow> {
    let row = sqlx::query_as::<_, NutritionProfileRow>(
        r#"
        INSERT INTO nutrition_profiles
            (pet_id, diet_type, meals_per_day, activity_level, goal,
             preferred_foods, forbidden_foods, intolerances, food_allergies, supplements,
             daily_calories, water_intake_ml, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        ON CONFLICT (pet_id) DO UPDATE SET
            diet_type       = EXCLUDED.diet_type,
            meals_per_day   = EXCLUDED.meals_per_day,
            activity_level  = EXCLUDED.activity_level,
            goal            = EXCLUDED.goal,
            preferred_foods = EXCLUDED.preferred_foods,
            forbidden_foods = EXCLUDED.forbidden_foods,
            intolerances    = EXCLUDED.intolerances,
            food_allergies  = EXCLUDED.food_allergies,
            supplements     = EXCLUDED.supplements,
            daily_calories  = EXCLUDED.daily_calories,
            water_intake_ml = EXCLUDED.water_intake_ml,
            notes           = EXCLUDED.notes,
            updated_at      = now()
        RETURNING pet_id, diet_type, meals_per_day, activity_level, goal,
                  preferred_foods, forbidden_foods, intolerances, food_allergies, supplements,
                  daily_calories, water_intake_ml, notes, updated_at
        "#,
    )
    .bind(pet_id)
    .bind(&w.diet_type)
    .bind(w.meals_per_day)
    .bind(&w.activity_level)
    .bind(&w.goal)
    .bind(&w.preferred_foods)
    .bind(&w.forbidden_foods)
    .bind(&w.intolerances)
    .bind(&w.food_allergies)
    .bind(&w.supplements)
    .bind(w.daily_calories)
    .bind(w.water_intake_ml)
    .bind(&w.notes)
    .fetch_one(db)
    .await
    .context("upsert nutrition profile")?;
    Ok(row)
}

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct UpsertNutritionRequest {
    pub diet_type: Option<String>,
    pub meals_per_day: Option<i32>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,

    pub preferred_foods: Option<Vec<String>>,
    pub forbidden_foods: Option<Vec<String>>,
    pub intolerances: Option<Vec<String>>,
    pub food_allergies: Option<Vec<String>>,
    pub supplements: Option<Vec<String>>,

    pub daily_calories: Option<i32>,
    pub water_intake_ml: Option<i32>,
    pub notes: Option<String>,
}

impl UpsertNutritionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if matches!(self.meals_per_day, Some(n) if n <= 0) {
            return Err(AppError::validation("meals_per_day must be positive"));
        }
        if matches!(self.daily_calories, Some(n) if n <= 0) {
            return Err(AppError::validation("daily_calories must be positive"));
        }
        if matches!(self.water_intake_ml, Some(n) if n <= 0) {
            return Err(AppError::validation("water_intake_ml must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_valid() {
        let req: UpsertNutritionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.forbidden_foods.is_none());
    }

    #[test]
    fn rejects_non_positive_counts() {
        let req = UpsertNutritionRequest {
            meals_per_day: Some(0),
            ..Default::default()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));

        let req = UpsertNutritionRequest {
            water_intake_ml: Some(-5),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}

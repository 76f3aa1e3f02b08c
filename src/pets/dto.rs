use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePetRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub sex: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
}

fn check_body(age: Option<i32>, weight_kg: Option<f64>) -> Result<(), AppError> {
    if matches!(age, Some(a) if a < 0) {
        return Err(AppError::validation("age must not be negative"));
    }
    if matches!(weight_kg, Some(w) if !w.is_finite() || w <= 0.0) {
        return Err(AppError::validation("weight_kg must be positive"));
    }
    Ok(())
}

impl CreatePetRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }
        check_body(self.age, self.weight_kg)
    }
}

impl UpdatePetRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if matches!(&self.name, Some(n) if n.trim().is_empty()) {
            return Err(AppError::validation("name must not be empty"));
        }
        check_body(self.age, self.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name() {
        let req: CreatePetRequest = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert!(req.validate().is_err());
        let req: CreatePetRequest = serde_json::from_str(r#"{"name": "Firulais"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_negative_age_and_weight() {
        let req = CreatePetRequest {
            name: "Michi".into(),
            age: Some(-1),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = UpdatePetRequest {
            weight_kg: Some(0.0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}

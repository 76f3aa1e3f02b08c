use serde::Deserialize;
use time::OffsetDateTime;

use crate::dates;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct UpsertClinicalRequest {
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub chronic_conditions: Option<Vec<String>>,
    #[serde(default)]
    pub medications: Option<Vec<String>>,
    #[serde(default)]
    pub surgeries: Option<Vec<String>>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub last_vet_visit: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub last_deworming: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub last_flea_tick: Option<OffsetDateTime>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub vet_clinic: Option<String>,
    #[serde(default)]
    pub vet_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VaccinationRequest {
    pub name: String,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub date: Option<OffsetDateTime>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VaccinationPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub date: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct DiseaseRequest {
    pub name: String,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub diagnosed_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DiseasePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub diagnosed_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeightRequest {
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub date: Option<OffsetDateTime>,
    pub weight_kg: f64,
}

fn required_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    Ok(())
}

fn optional_name(name: Option<&str>) -> Result<(), AppError> {
    match name {
        Some(n) => required_name(n),
        None => Ok(()),
    }
}

impl VaccinationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        required_name(&self.name)
    }
}

impl VaccinationPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        optional_name(self.name.as_deref())
    }
}

impl DiseaseRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        required_name(&self.name)
    }
}

impl DiseasePatch {
    pub fn validate(&self) -> Result<(), AppError> {
        optional_name(self.name.as_deref())
    }
}

impl WeightRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::validation("weight_kg must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clinical_body_parses_lists_and_dates() {
        let req: UpsertClinicalRequest = serde_json::from_str(
            r#"{"allergies": ["polen"], "last_vet_visit": "2025-02-14", "vet_phone": "555-1234"}"#,
        )
        .unwrap();
        assert_eq!(req.allergies, Some(vec!["polen".to_string()]));
        assert!(req.last_vet_visit.is_some());
        assert!(req.medications.is_none());
    }

    #[test]
    fn vaccination_needs_a_name() {
        let req: VaccinationRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(req.validate().is_err());
        let req: VaccinationRequest = serde_json::from_str(r#"{"name": "Rabia"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.date.is_none());
    }

    #[test]
    fn patches_allow_missing_name_but_not_blank() {
        assert!(DiseasePatch::default().validate().is_ok());
        let patch = DiseasePatch {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn weight_must_be_positive() {
        let req: WeightRequest = serde_json::from_str(r#"{"weight_kg": 0}"#).unwrap();
        assert!(req.validate().is_err());
        let req: WeightRequest = serde_json::from_str(r#"{"weight_kg": 12.4}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::dates;
use crate::error::AppError;
use crate::matching::AptItem;
use crate::pantry::repo_types::PantryItem;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePantryItemRequest {
    pub name: String,
    #[serde(default, alias = "keywords_csv")]
    pub synonyms: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub purchased_at: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePantryItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "keywords_csv")]
    pub synonyms: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub purchased_at: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 80;
const SYNONYMS_MAX: usize = 300;
const UNIT_MAX: usize = 12;
const CATEGORY_MAX: usize = 24;
const NOTES_MAX: usize = 500;

fn check_name(name: &str) -> Result<(), AppError> {
    let len = name.trim().chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Err(AppError::validation(format!(
            "name must be {NAME_MIN}-{NAME_MAX} characters"
        )));
    }
    Ok(())
}

fn check_max(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

fn check_quantity(quantity: Option<f64>) -> Result<(), AppError> {
    match quantity {
        Some(q) if !q.is_finite() || q < 0.0 => Err(AppError::validation(
            "quantity must be a non-negative number",
        )),
        _ => Ok(()),
    }
}

impl CreatePantryItemRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_name(&self.name)?;
        check_max("synonyms", self.synonyms.as_deref(), SYNONYMS_MAX)?;
        check_quantity(self.quantity)?;
        check_max("unit", self.unit.as_deref(), UNIT_MAX)?;
        check_max("category", self.category.as_deref(), CATEGORY_MAX)?;
        check_max("notes", self.notes.as_deref(), NOTES_MAX)
    }
}

impl UpdatePantryItemRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        check_max("synonyms", self.synonyms.as_deref(), SYNONYMS_MAX)?;
        check_quantity(self.quantity)?;
        check_max("unit", self.unit.as_deref(), UNIT_MAX)?;
        check_max("category", self.category.as_deref(), CATEGORY_MAX)?;
        check_max("notes", self.notes.as_deref(), NOTES_MAX)
    }
}

#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ExpiringResponse {
    pub days: u32,
    pub items: Vec<PantryItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub count: usize,
    pub total_qty: f64,
    pub units: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct PantrySummary {
    pub total_items: usize,
    pub categories: BTreeMap<String, CategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct PetRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UsableCounts {
    pub apt: usize,
    pub forbidden: usize,
}

#[derive(Debug, Serialize)]
pub struct UsableForPetResponse {
    pub pet: PetRef,
    pub counts: UsableCounts,
    pub apt: Vec<AptItem<PantryItem>>,
    pub forbidden: Vec<PantryItem>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
}

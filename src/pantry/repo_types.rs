use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::matching::{normalize, Ingredient};
use crate::pantry::dto::{CreatePantryItemRequest, UpdatePantryItemRequest};

pub const DEFAULT_CATEGORY: &str = "OTROS";

/// Pantry row. `normalized` always equals `normalize(name)`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PantryItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub normalized: String,
    pub synonyms: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub purchased_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Ingredient for PantryItem {
    fn name(&self) -> &str {
        &self.name
    }
    fn synonyms(&self) -> Option<&str> {
        self.synonyms.as_deref()
    }
}

/// Insert payload. Name and its normalized form can only be set together.
#[derive(Debug, Clone)]
pub struct NewPantryItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    name: String,
    normalized: String,
    pub synonyms: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: String,
    pub purchased_at: Option<OffsetDateTime>,
    pub expires_at: Option<OffsetDateTime>,
    pub notes: Option<String>,
}

impl NewPantryItem {
    pub fn new(owner_id: Uuid, req: CreatePantryItemRequest) -> Self {
        let category = req
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        Self {
            id: Uuid::new_v4(),
            owner_id,
            normalized: normalize(Some(req.name.as_str())),
            name: req.name,
            synonyms: req.synonyms,
            quantity: req.quantity,
            unit: req.unit,
            category,
            purchased_at: req.purchased_at,
            expires_at: req.expires_at,
            notes: req.notes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PantryChanges {
    name: Option<String>,
    normalized: Option<String>,
    pub synonyms: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub purchased_at: Option<OffsetDateTime>,
    pub expires_at: Option<OffsetDateTime>,
    pub notes: Option<String>,
}

impl PantryChanges {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }
}

impl From<UpdatePantryItemRequest> for PantryChanges {
    fn from(req: UpdatePantryItemRequest) -> Self {
        let name = req.name.filter(|n| !n.trim().is_empty());
        Self {
            normalized: name.as_deref().map(|n| normalize(Some(n))),
            name,
            synonyms: req.synonyms,
            quantity: req.quantity,
            unit: req.unit,
            category: req.category,
            purchased_at: req.purchased_at,
            expires_at: req.expires_at,
            notes: req.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str) -> CreatePantryItemRequest {
        CreatePantryItemRequest {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_item_normalizes_name() {
        let item = NewPantryItem::new(Uuid::new_v4(), create("  Pechuga de Pollo "));
        assert_eq!(item.name(), "  Pechuga de Pollo ");
        assert_eq!(item.normalized(), "pechuga de pollo");
    }

    #[test]
    fn new_item_defaults_category() {
        let item = NewPantryItem::new(Uuid::new_v4(), create("Arroz"));
        assert_eq!(item.category, DEFAULT_CATEGORY);

        let mut req = create("Arroz");
        req.category = Some("  ".into());
        assert_eq!(NewPantryItem::new(Uuid::new_v4(), req).category, DEFAULT_CATEGORY);

        let mut req = create("Arroz");
        req.category = Some("granos".into());
        assert_eq!(NewPantryItem::new(Uuid::new_v4(), req).category, "granos");
    }

    #[test]
    fn rename_recomputes_normalized() {
        let changes = PantryChanges::from(UpdatePantryItemRequest {
            name: Some("Ñame Morado".into()),
            ..Default::default()
        });
        assert_eq!(changes.name(), Some("Ñame Morado"));
        assert_eq!(changes.normalized(), Some("name morado"));
    }

    #[test]
    fn untouched_name_leaves_normalized_alone() {
        let changes = PantryChanges::from(UpdatePantryItemRequest {
            notes: Some("abrir pronto".into()),
            ..Default::default()
        });
        assert_eq!(changes.name(), None);
        assert_eq!(changes.normalized(), None);
        assert_eq!(changes.notes.as_deref(), Some("abrir pronto"));
    }
}

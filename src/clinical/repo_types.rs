use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::clinical::dto::UpsertClinicalRequest;
use crate::codec;

#[derive(Debug, Clone, FromRow)]
pub struct ClinicalRecordRow {
    pub pet_id: Uuid,
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
    pub medications: Option<String>,
    pub surgeries: Option<String>,
    pub last_vet_visit: Option<OffsetDateTime>,
    pub last_deworming: Option<OffsetDateTime>,
    pub last_flea_tick: Option<OffsetDateTime>,
    pub blood_type: Option<String>,
    pub vet_clinic: Option<String>,
    pub vet_phone: Option<String>,
    pub notes: Option<String>,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicalRecord {
    pub pet_id: Uuid,
    pub allergies: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub surgeries: Vec<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_vet_visit: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_deworming: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_flea_tick: Option<OffsetDateTime>,
    pub blood_type: Option<String>,
    pub vet_clinic: Option<String>,
    pub vet_phone: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<ClinicalRecordRow> for ClinicalRecord {
    fn from(r: ClinicalRecordRow) -> Self {
        Self {
            pet_id: r.pet_id,
            allergies: codec::decode(r.allergies.as_deref()),
            chronic_conditions: codec::decode(r.chronic_conditions.as_deref()),
            medications: codec::decode(r.medications.as_deref()),
            surgeries: codec::decode(r.surgeries.as_deref()),
            last_vet_visit: r.last_vet_visit,
            last_deworming: r.last_deworming,
            last_flea_tick: r.last_flea_tick,
            blood_type: r.blood_type,
            vet_clinic: r.vet_clinic,
            vet_phone: r.vet_phone,
            notes: r.notes,
            updated_at: r.updated_at,
        }
    }
}

/// Every writable column of the clinical record, lists already encoded.
#[derive(Debug, Clone)]
pub struct ClinicalWrite {
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
    pub medications: Option<String>,
    pub surgeries: Option<String>,
    pub last_vet_visit: Option<OffsetDateTime>,
    pub last_deworming: Option<OffsetDateTime>,
    pub last_flea_tick: Option<OffsetDateTime>,
    pub blood_type: Option<String>,
    pub vet_clinic: Option<String>,
    pub vet_phone: Option<String>,
    pub notes: Option<String>,
}

impl From<UpsertClinicalRequest> for ClinicalWrite {
    fn from(b: UpsertClinicalRequest) -> Self {
        Self {
            allergies: codec::encode(b.allergies.as_deref()),
            chronic_conditions: codec::encode(b.chronic_conditions.as_deref()),
            medications: codec::encode(b.medications.as_deref()),
            surgeries: codec::encode(b.surgeries.as_deref()),
            last_vet_visit: b.last_vet_visit,
            last_deworming: b.last_deworming,
            last_flea_tick: b.last_flea_tick,
            blood_type: b.blood_type,
            vet_clinic: b.vet_clinic,
            vet_phone: b.vet_phone,
            notes: b.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vaccination {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Disease {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub diagnosed_at: OffsetDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightLog {
    pub id: Uuid,
    pub pet_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub weight_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_lists_wholesale() {
        let w = ClinicalWrite::from(UpsertClinicalRequest {
            allergies: Some(vec!["polen".into(), "ácaros".into()]),
            surgeries: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(w.allergies.as_deref(), Some(r#"["polen","ácaros"]"#));
        assert_eq!(w.surgeries.as_deref(), Some("[]"));
        assert_eq!(w.medications, None);
    }

    #[test]
    fn row_decodes_lists() {
        let row = ClinicalRecordRow {
            pet_id: Uuid::new_v4(),
            allergies: Some(r#"["polen"]"#.into()),
            chronic_conditions: Some("garbage".into()),
            medications: None,
            surgeries: Some(r#"["castración"]"#.into()),
            last_vet_visit: None,
            last_deworming: None,
            last_flea_tick: None,
            blood_type: Some("DEA 1.1+".into()),
            vet_clinic: None,
            vet_phone: None,
            notes: None,
            updated_at: OffsetDateTime::now_utc(),
        };
        let rec = ClinicalRecord::from(row);
        assert_eq!(rec.allergies, vec!["polen".to_string()]);
        assert!(rec.chronic_conditions.is_empty());
        assert!(rec.medications.is_empty());
        assert_eq!(rec.surgeries, vec!["castración".to_string()]);
    }
}

use anyhow::Context;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::clinical::dto::{DiseasePatch, VaccinationPatch};
use crate::clinical::repo_types::{ClinicalRecordRow, ClinicalWrite, Disease, Vaccination, WeightLog};

// ---- Clinical record ----

pub async fn find_record(db: &PgPool, pet_id: Uuid) -> anyhow::Result<Option<ClinicalRecordRow>> {
    let row = sqlx::query_as::<_, ClinicalRecordRow>(
        r#"
        SELECT pet_id, allergies, chronic_conditions, medications, surgeries,
               last_vet_visit, last_deworming, last_flea_tick,
               blood_type, vet_clinic, vet_phone, notes, updated_at
        FROM clinical_records
        WHERE pet_id = $1
        "#,
    )
    .bind(pet_id)
    .fetch_optional(db)
    .await
    .context("find clinical record")?;
    Ok(row)
}

pub async fn upsert_record(db: &PgPool, pet_id: Uuid, w: &ClinicalWrite) -> anyhow::Result<ClinicalRecordRow> {
    let row = sqlx::query_as::<_, ClinicalRecordRow>(
        r#"
        INSERT INTO clinical_records
            (pet_id, allergies, chronic_conditions, medications, surgeries,
             last_vet_visit, last_deworming, last_flea_tick,
             blood_type, vet_clinic, vet_phone, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        ON CONFLICT (pet_id) DO UPDATE SET
            allergies          = EXCLUDED.allergies,
            chronic_conditions = EXCLUDED.chronic_conditions,
            medications        = EXCLUDED.medications,
            surgeries          = EXCLUDED.surgeries,
            last_vet_visit     = EXCLUDED.last_vet_visit,
            last_deworming     = EXCLUDED.last_deworming,
            last_flea_tick     = EXCLUDED.last_flea_tick,
            blood_type         = EXCLUDED.blood_type,
            vet_clinic         = EXCLUDED.vet_clinic,
            vet_phone          = EXCLUDED.vet_phone,
            notes              = EXCLUDED.notes,
            updated_at         = now()
        RETURNING pet_id, allergies, chronic_conditions, medications, surgeries,
                  last_vet_visit, last_deworming, last_flea_tick,
                  blood_type, vet_clinic, vet_phone, notes, updated_at
        "#,
    )
    .bind(pet_id)
    .bind(&w.allergies)
    .bind(&w.chronic_conditions)
    .bind(&w.medications)
    .bind(&w.surgeries)
    .bind(w.last_vet_visit)
    .bind(w.last_deworming)
    .bind(w.last_flea_tick)
    .bind(&w.blood_type)
    .bind(&w.vet_clinic)
    .bind(&w.vet_phone)
    .bind(&w.notes)
    .fetch_one(db)
    .await
    .context("upsert clinical record")?;
    Ok(row)
}

// ---- Vaccinations ----

pub async fn list_vaccinations(db: &PgPool, pet_id: Uuid) -> anyhow::Result<Vec<Vaccination>> {
    let rows = sqlx::query_as::<_, Vaccination>(
        r#"
        SELECT id, pet_id, name, date
          FROM vaccinations
         WHERE pet_id = $1
         ORDER BY date DESC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
    .context("list vaccinations")?;
    Ok(rows)
}

pub async fn insert_vaccination(
    db: &PgPool,
    pet_id: Uuid,
    name: &str,
    date: OffsetDateTime,
) -> anyhow::Result<Vaccination> {
    let row = sqlx::query_as::<_, Vaccination>(
        r#"
        INSERT INTO vaccinations (id, pet_id, name, date)
        VALUES ($1, $2, $3, $4)
        RETURNING id, pet_id, name, date
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(pet_id)
    .bind(name.trim())
    .bind(date)
    .fetch_one(db)
    .await
    .context("insert vaccination")?;
    Ok(row)
}

pub async fn update_vaccination(
    db: &PgPool,
    pet_id: Uuid,
    id: Uuid,
    patch: &VaccinationPatch,
) -> anyhow::Result<Option<Vaccination>> {
    let row = sqlx::query_as::<_, Vaccination>(
        r#"
        UPDATE vaccinations
           SET name = COALESCE($3, name),
               date = COALESCE($4, date)
         WHERE id = $1 AND pet_id = $2
        RETURNING id, pet_id, name, date
        "#,
    )
    .bind(id)
    .bind(pet_id)
    .bind(patch.name.as_deref().map(str::trim))
    .bind(patch.date)
    .fetch_optional(db)
    .await
    .context("update vaccination")?;
    Ok(row)
}

pub async fn delete_vaccination(db: &PgPool, pet_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM vaccinations WHERE id = $1 AND pet_id = $2")
        .bind(id)
        .bind(pet_id)
        .execute(db)
        .await
        .context("delete vaccination")?;
    Ok(res.rows_affected() > 0)
}

// ---- Diseases ----

pub async fn list_diseases(db: &PgPool, pet_id: Uuid) -> anyhow::Result<Vec<Disease>> {
    let rows = sqlx::query_as::<_, Disease>(
        r#"
        SELECT id, pet_id, name, diagnosed_at, status
          FROM diseases
         WHERE pet_id = $1
         ORDER BY diagnosed_at DESC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
    .context("list diseases")?;
    Ok(rows)
}

pub async fn insert_disease(
    db: &PgPool,
    pet_id: Uuid,
    name: &str,
    diagnosed_at: OffsetDateTime,
    status: &str,
) -> anyhow::Result<Disease> {
    let row = sqlx::query_as::<_, Disease>(
        r#"
        INSERT INTO diseases (id, pet_id, name, diagnosed_at, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, pet_id, name, diagnosed_at, status
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(pet_id)
    .bind(name.trim())
    .bind(diagnosed_at)
    .bind(status)
    .fetch_one(db)
    .await
    .context("insert disease")?;
    Ok(row)
}

pub async fn update_disease(
    db: &PgPool,
    pet_id: Uuid,
    id: Uuid,
    patch: &DiseasePatch,
) -> anyhow::Result<Option<Disease>> {
    let row = sqlx::query_as::<_, Disease>(
        r#"
        UPDATE diseases
           SET name         = COALESCE($3, name),
               diagnosed_at = COALESCE($4, diagnosed_at),
               status       = COALESCE($5, status)
         WHERE id = $1 AND pet_id = $2
        RETURNING id, pet_id, name, diagnosed_at, status
        "#,
    )
    .bind(id)
    .bind(pet_id)
    .bind(patch.name.as_deref().map(str::trim))
    .bind(patch.diagnosed_at)
    .bind(&patch.status)
    .fetch_optional(db)
    .await
    .context("update disease")?;
    Ok(row)
}

pub async fn delete_disease(db: &PgPool, pet_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM diseases WHERE id = $1 AND pet_id = $2")
        .bind(id)
        .bind(pet_id)
        .execute(db)
        .await
        .context("delete disease")?;
    Ok(res.rows_affected() > 0)
}

// ---- Weights ----

pub async fn list_weights(db: &PgPool, pet_id: Uuid) -> anyhow::Result<Vec<WeightLog>> {
    let rows = sqlx::query_as::<_, WeightLog>(
        r#"
        SELECT id, pet_id, date, weight_kg
          FROM weight_logs
         WHERE pet_id = $1
         ORDER BY date DESC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
    .context("list weights")?;
    Ok(rows)
}

pub async fn insert_weight(
    db: &PgPool,
    pet_id: Uuid,
    date: OffsetDateTime,
    weight_kg: f64,
) -> anyhow::Result<WeightLog> {
    let row = sqlx::query_as::<_, WeightLog>(
        r#"
        INSERT INTO weight_logs (id, pet_id, date, weight_kg)
        VALUES ($1, $2, $3, $4)
        RETURNING id, pet_id, date, weight_kg
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(pet_id)
    .bind(date)
    .bind(weight_kg)
    .fetch_one(db)
    .await
    .context("insert weight")?;
    Ok(row)
}

pub async fn delete_weight(db: &PgPool, pet_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM weight_logs WHERE id = $1 AND pet_id = $2")
        .bind(id)
        .bind(pet_id)
        .execute(db)
        .await
        .context("delete weight")?;
    Ok(res.rows_affected() > 0)
}

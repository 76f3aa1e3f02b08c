use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::pets::dto::{CreatePetRequest, UpdatePetRequest};
use crate::pets::repo_types::Pet;

impl Pet {
    pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Vec<Pet>> {
        let rows = sqlx::query_as::<_, Pet>(
            r#"
            SELECT id, owner_id, name, species, sex, breed, age, weight_kg, created_at
            FROM pets
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await
        .context("list pets by owner")?;
        Ok(rows)
    }

    /// The pet only if it belongs to `owner_id`.
    pub async fn find_owned(db: &PgPool, pet_id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Pet>> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            SELECT id, owner_id, name, species, sex, breed, age, weight_kg, created_at
            FROM pets
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(pet_id)
        .bind(owner_id)
        .fetch_optional(db)
        .await
        .context("find owned pet")?;
        Ok(pet)
    }

    pub async fn create(db: &PgPool, owner_id: Uuid, req: &CreatePetRequest) -> anyhow::Result<Pet> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            INSERT INTO pets (id, owner_id, name, species, sex, breed, age, weight_kg)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, owner_id, name, species, sex, breed, age, weight_kg, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(req.name.trim())
        .bind(req.species.as_deref().unwrap_or("DOG"))
        .bind(&req.sex)
        .bind(&req.breed)
        .bind(req.age)
        .bind(req.weight_kg)
        .fetch_one(db)
        .await
        .context("insert pet")?;
        Ok(pet)
    }

    pub async fn update(
        db: &PgPool,
        pet_id: Uuid,
        owner_id: Uuid,
        req: &UpdatePetRequest,
    ) -> anyhow::Result<Option<Pet>> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
            UPDATE pets
               SET name      = COALESCE($3, name),
                   species   = COALESCE($4, species),
                   sex       = COALESCE($5, sex),
                   breed     = COALESCE($6, breed),
                   age       = COALESCE($7, age),
                   weight_kg = COALESCE($8, weight_kg)
             WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, name, species, sex, breed, age, weight_kg, created_at
            "#,
        )
        .bind(pet_id)
        .bind(owner_id)
        .bind(req.name.as_deref().map(str::trim))
        .bind(&req.species)
        .bind(&req.sex)
        .bind(&req.breed)
        .bind(req.age)
        .bind(req.weight_kg)
        .fetch_optional(db)
        .await
        .context("update pet")?;
        Ok(pet)
    }

    pub async fn delete(db: &PgPool, pet_id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM pets WHERE id = $1 AND owner_id = $2")
            .bind(pet_id)
            .bind(owner_id)
            .execute(db)
            .await
            .context("delete pet")?;
        Ok(res.rows_affected() > 0)
    }
}

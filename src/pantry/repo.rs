use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::pantry::repo_types::{NewPantryItem, PantryChanges, PantryItem};

const COLUMNS: &str = "id, owner_id, name, normalized, synonyms, quantity, unit, category, \
                       purchased_at, expires_at, notes, created_at, updated_at";

/// All items of one owner, unordered.
pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Vec<PantryItem>> {
    let rows = sqlx::query_as::<_, PantryItem>(&format!(
        "SELECT {COLUMNS} FROM pantry_items WHERE owner_id = $1"
    ))
    .bind(owner_id)
    .fetch_all(db)
    .await
    .context("list pantry items by owner")?;
    Ok(rows)
}

pub async fn insert(db: &PgPool, item: &NewPantryItem) -> anyhow::Result<PantryItem> {
    let row = sqlx::query_as::<_, PantryItem>(&format!(
        r#"
        INSERT INTO pantry_items
            (id, owner_id, name, normalized, synonyms, quantity, unit, category,
             purchased_at, expires_at, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(item.id)
    .bind(item.owner_id)
    .bind(item.name())
    .bind(item.normalized())
    .bind(&item.synonyms)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(&item.category)
    .bind(item.purchased_at)
    .bind(item.expires_at)
    .bind(&item.notes)
    .fetch_one(db)
    .await
    .context("insert pantry item")?;
    Ok(row)
}

/// Applies `changes` to an item of `owner_id`; `None` when no such item is owned.
pub async fn update(
    db: &PgPool,
    owner_id: Uuid,
    item_id: Uuid,
    changes: &PantryChanges,
) -> anyhow::Result<Option<PantryItem>> {
    let row = sqlx::query_as::<_, PantryItem>(&format!(
        r#"
        UPDATE pantry_items
           SET name         = COALESCE($3, name),
               normalized   = COALESCE($4, normalized),
               synonyms     = COALESCE($5, synonyms),
               quantity     = COALESCE($6, quantity),
               unit         = COALESCE($7, unit),
               category     = COALESCE($8, category),
               purchased_at = COALESCE($9, purchased_at),
               expires_at   = COALESCE($10, expires_at),
               notes        = COALESCE($11, notes),
               updated_at   = now()
         WHERE id = $1 AND owner_id = $2
        RETURNING {COLUMNS}
        "#
    ))
    .bind(item_id)
    .bind(owner_id)
    .bind(changes.name())
    .bind(changes.normalized())
    .bind(&changes.synonyms)
    .bind(changes.quantity)
    .bind(&changes.unit)
    .bind(&changes.category)
    .bind(changes.purchased_at)
    .bind(changes.expires_at)
    .bind(&changes.notes)
    .fetch_optional(db)
    .await
    .context("update pantry item")?;
    Ok(row)
}

/// Returns whether a row owned by `owner_id` was removed.
pub async fn delete(db: &PgPool, owner_id: Uuid, item_id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query("DELETE FROM pantry_items WHERE id = $1 AND owner_id = $2")
        .bind(item_id)
        .bind(owner_id)
        .execute(db)
        .await
        .context("delete pantry item")?;
    Ok(res.rows_affected() > 0)
}

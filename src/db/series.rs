use sqlx::AnyPool;

use crate::models::{Series, SeriesPayload};

const SELECT_COLUMNS: &str = "SELECT id, imagen, nombre, tipo, subido_hace, capitulo FROM series";

pub async fn list(pool: &AnyPool) -> sqlx::Result<Vec<Series>> {
    sqlx::query_as::<_, Series>(SELECT_COLUMNS)
        .fetch_all(pool)
        .await
}

/// The id is bound as received; storage does any coercion.
pub async fn find(pool: &AnyPool, id: &str) -> sqlx::Result<Option<Series>> {
    sqlx::query_as::<_, Series>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Returns the id storage assigned to the new row.
pub async fn insert(pool: &AnyPool, payload: &SeriesPayload) -> sqlx::Result<i64> {
    // The id lookup has to run on the connection that did the insert.
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        "INSERT INTO series (imagen, nombre, tipo, subido_hace, capitulo) VALUES (?, ?, ?, ?, ?)"
    )
    .bind(payload.imagen.as_deref())
    .bind(payload.nombre.as_deref())
    .bind(payload.tipo.as_deref())
    .bind(payload.subido_hace.as_deref())
    .bind(payload.capitulo.as_deref())
    .execute(&mut *conn)
    .await?;

    match result.last_insert_id() {
        Some(id) => Ok(id),
        // The SQLite backend of the Any driver never fills it in.
        None => {
            sqlx::query_scalar::<_, i64>("SELECT last_insert_rowid()")
                .fetch_one(&mut *conn)
                .await
        }
    }
}

/// Overwrites all five fields. Returns the number of rows touched.
pub async fn update(pool: &AnyPool, id: &str, payload: &SeriesPayload) -> sqlx::Result<u64> {
    let result = sqlx::query(
        "UPDATE series SET imagen = ?, nombre = ?, tipo = ?, subido_hace = ?, capitulo = ? WHERE id = ?"
    )
    .bind(payload.imagen.as_deref())
    .bind(payload.nombre.as_deref())
    .bind(payload.tipo.as_deref())
    .bind(payload.subido_hace.as_deref())
    .bind(payload.capitulo.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &AnyPool, id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM series WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

use sqlx::{any::AnyPoolOptions, AnyPool};

pub mod series;

/// Builds the shared pool without opening a connection yet, so the server can
/// come up while the database is still unreachable.
pub fn connect(database_url: &str) -> sqlx::Result<AnyPool> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
}

/// Opens one connection to check that the database answers.
pub async fn probe(pool: &AnyPool) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}

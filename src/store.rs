use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::AppResult;

/// Key under which the logged-in identity lives.
pub const USER_KEY: &str = "user";

/// Local persistence shim: one sqlite `kv` table with string keys and
/// values, async-storage semantics. A single connection keeps `:memory:`
/// databases coherent and is plenty for a kv store with one writer.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn open(url: &str) -> AppResult<Store> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;
        sqlx::query("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .execute(&pool)
            .await?;
        Ok(Store { pool })
    }

    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key=?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    pub async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO kv (key,value) VALUES (?,?) ON CONFLICT(key) DO UPDATE SET value=excluded.value")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Wipes everything persisted locally. This is logout.
    pub async fn clear(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM kv").execute(&self.pool).await?;
        Ok(())
    }
}

use deadpool_postgres::{Pool, Runtime};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tokio_postgres::NoTls;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("connection pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("database error: {0}")]
    Query(#[from] tokio_postgres::Error),
}

pub fn create_pool(database_url: &str) -> Pool {
    let pg_config = database_url
        .parse::<tokio_postgres::Config>()
        .expect("Invalid database URL");
    let mut cfg = deadpool_postgres::Config::new();

    cfg.user = pg_config.get_user().map(|s| s.to_string());
    cfg.password = pg_config
        .get_password()
        .map(|s| String::from_utf8_lossy(s).to_string());
    cfg.host = pg_config.get_hosts().first().map(|host| match host {
        tokio_postgres::config::Host::Tcp(s) => s.to_string(),
        tokio_postgres::config::Host::Unix(s) => s.to_string_lossy().to_string(),
    });
    cfg.port = pg_config.get_ports().first().copied();
    cfg.dbname = pg_config.get_dbname().map(|s| s.to_string());

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .expect("Failed to create pool")
}

pub async fn init_db(pool: &Pool) -> Result<(), DbError> {
    let conn = pool.get().await?;
    conn.batch_execute(
        "CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            data JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (collection, id)
        )",
    )
    .await?;

    Ok(())
}

pub struct Document {
    pub id: String,
    pub data: JsonValue,
}

/// Thin pass-through adapter over the `documents` table. Records are
/// schemaless JSON keyed by collection+id; concurrent writers race with
/// last-write-wins, nothing here adds locking or versioning on top.
#[derive(Clone)]
pub struct DocStore {
    pool: Pool,
}

impl DocStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<JsonValue>, DbError> {
        let conn = self.pool.get().await?;
        let row = conn
            .query_opt(
                "SELECT data FROM documents WHERE collection = $1 AND id = $2",
                &[&collection, &id],
            )
            .await?;

        Ok(row.map(|r| r.get(0)))
    }

    /// Inserts a new document under a generated id and returns the id.
    pub async fn create(&self, collection: &str, data: &JsonValue) -> Result<String, DbError> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = self.pool.get().await?;
        conn.execute(
            "INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)",
            &[&collection, &id, data],
        )
        .await?;

        Ok(id)
    }

    /// Shallow-merges `patch` into an existing document. Returns `false`
    /// when no document with that id exists.
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: &JsonValue,
    ) -> Result<bool, DbError> {
        let conn = self.pool.get().await?;
        let rows = conn
            .execute(
                "UPDATE documents SET data = data || $3 WHERE collection = $1 AND id = $2",
                &[&collection, &id, patch],
            )
            .await?;

        Ok(rows == 1)
    }

    /// Merge-or-insert under a caller-chosen id (singleton records).
    pub async fn merge(
        &self,
        collection: &str,
        id: &str,
        patch: &JsonValue,
    ) -> Result<(), DbError> {
        let conn = self.pool.get().await?;
        conn.execute(
            "INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)
             ON CONFLICT (collection, id)
             DO UPDATE SET data = documents.data || EXCLUDED.data",
            &[&collection, &id, patch],
        )
        .await?;

        Ok(())
    }

    pub async fn delete(&self, collection: &str, id: &str) -> Result<bool, DbError> {
        let conn = self.pool.get().await?;
        let rows = conn
            .execute(
                "DELETE FROM documents WHERE collection = $1 AND id = $2",
                &[&collection, &id],
            )
            .await?;

        Ok(rows == 1)
    }

    pub async fn list(&self, collection: &str) -> Result<Vec<Document>, DbError> {
        let conn = self.pool.get().await?;
        let rows = conn
            .query(
                "SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at",
                &[&collection],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Document {
                id: r.get(0),
                data: r.get(1),
            })
            .collect())
    }

    /// First document whose top-level `field` equals `value`, if any.
    pub async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, DbError> {
        let conn = self.pool.get().await?;
        let row = conn
            .query_opt(
                "SELECT id, data FROM documents
                 WHERE collection = $1 AND data->>($2::text) = $3
                 LIMIT 1",
                &[&collection, &field, &value],
            )
            .await?;

        Ok(row.map(|r| Document {
            id: r.get(0),
            data: r.get(1),
        }))
    }
}

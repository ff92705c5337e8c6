use crate::error::{SnapError, SnapResult};
use sqlx::SqlitePool;
use std::fs;
use std::path::{Path, PathBuf};

/// Schema version this build writes. Fresh databases report 0.
const SCHEMA_VERSION: i64 = 1;

/// An open handle to the notes database.
///
/// Owns the connection pool and the physical schema. Constructed once at
/// startup and handed to [`crate::repo::NoteRepository`]; there is no
/// process-wide singleton, so shutdown is an explicit [`Store::close`].
pub struct Store {
    pub(crate) pool: SqlitePool,
    path: PathBuf,
}

impl Store {
    /// Opens (creating if missing) the database at `path` and brings the
    /// schema up to date.
    ///
    /// Runs on every start; migration is idempotent. Any failure here is
    /// [`SnapError::Init`] and should be treated as fatal, since nothing
    /// else in the crate can operate without storage.
    pub async fn open(path: &Path) -> SnapResult<Store> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SnapError::Init(format!("cannot create {}: {e}", parent.display())))?;
        }

        let connection_path = format!("sqlite:{}?mode=rwc", path.display());
        let pool = SqlitePool::connect(&connection_path)
            .await
            .map_err(|e| SnapError::Init(format!("cannot open {}: {e}", path.display())))?;

        // WAL keeps readers unblocked during writes on a single-writer db.
        sqlx::query_scalar::<_, String>("PRAGMA journal_mode=WAL")
            .fetch_one(&pool)
            .await
            .map_err(|e| SnapError::Init(e.to_string()))?;

        migrate(&pool)
            .await
            .map_err(|e| SnapError::Init(e.to_string()))?;

        Ok(Store {
            pool,
            path: path.to_path_buf(),
        })
    }

    /// Opens the database at [`Store::default_path`].
    pub async fn open_default() -> SnapResult<Store> {
        let path = Store::default_path()?;
        Store::open(&path).await
    }

    /// Resolves the default database location, `{data dir}/snapnote/snapnote.db`.
    pub fn default_path() -> SnapResult<PathBuf> {
        let data = dirs::data_local_dir()
            .ok_or_else(|| SnapError::Init("local data directory not found".into()))?;

        Ok(data.join("snapnote").join("snapnote.db"))
    }

    /// The file this store was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Direct access to the pool, for callers that need raw statements.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Stored schema version as reported by `PRAGMA user_version`.
    pub async fn schema_version(&self) -> SnapResult<i64> {
        let version = sqlx::query_scalar::<_, i64>("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Brings the schema from whatever version the file carries up to
/// [`SCHEMA_VERSION`], using `PRAGMA user_version` as the marker.
async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let version = sqlx::query_scalar::<_, i64>("PRAGMA user_version")
        .fetch_one(pool)
        .await?;

    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    tracing::info!(from = version, to = SCHEMA_VERSION, "migrating notes schema");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            tags TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_notes_updated_at ON notes(updated_at DESC)")
        .execute(pool)
        .await?;

    sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
        .execute(pool)
        .await?;

    Ok(())
}

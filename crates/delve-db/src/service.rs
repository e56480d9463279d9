//! Storage accessor wrapping the database handle.
//!
//! `GameService` owns the single `DelveDb` connection for the process. All
//! repo methods are implemented as `impl GameService` blocks under `repos/`.

use delve_config::ConnectionTarget;

use crate::DelveDb;
use crate::error::DatabaseError;

/// Entry point for every storage operation the application performs.
pub struct GameService {
    db: DelveDb,
}

impl GameService {
    /// Open the database named by `target` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn connect(target: &ConnectionTarget) -> Result<Self, DatabaseError> {
        let db = DelveDb::open(target).await?;
        match target {
            ConnectionTarget::Local(path) => tracing::info!(%path, "opened local database"),
            ConnectionTarget::Remote { url, .. } => {
                tracing::info!(%url, "connected to remote database");
            }
        }
        Ok(Self { db })
    }

    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = DelveDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `DelveDb`.
    #[must_use]
    pub const fn from_db(db: DelveDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &DelveDb {
        &self.db
    }
}

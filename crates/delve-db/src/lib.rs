//! # delve-db
//!
//! libSQL storage for Delve rooms, characters and abilities.
//!
//! Each class hierarchy lives in a single table tagged by a discriminator
//! column (see [`mapping`]). Characters and abilities are linked through the
//! `CharacterAbilities` join table. Repository methods hang off
//! [`service::GameService`].

pub mod error;
pub mod helpers;
pub mod mapping;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use delve_config::ConnectionTarget;
use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Delve storage operations.
///
/// Wraps a libSQL database and the single connection the process uses.
pub struct DelveDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl DelveDb {
    /// Open the database named by a validated connection target.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(target: &ConnectionTarget) -> Result<Self, DatabaseError> {
        match target {
            ConnectionTarget::Local(path) => Self::open_local(path).await,
            ConnectionTarget::Remote { url, auth_token } => {
                Self::open_remote(url, auth_token).await
            }
        }
    }

    /// Open a local database file, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::connect(db).await
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::connect(db).await
    }

    async fn connect(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let delve_db = Self { db, conn };
        delve_db.run_migrations().await?;
        Ok(delve_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> DelveDb {
        DelveDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["Rooms", "Characters", "Abilities", "CharacterAbilities"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn open_through_local_target() {
        let db = DelveDb::open(&ConnectionTarget::Local(":memory:".into()))
            .await
            .unwrap();
        let mut rows = db.conn().query("SELECT COUNT(*) FROM Rooms", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO Characters (Id, Name, Level, RoomId, Discriminator, Experience)
                 VALUES (1, 'Orphan', 1, 99, 'Player', 0)",
                (),
            )
            .await;
        assert!(result.is_err(), "character in a missing room should be rejected");
    }

    #[tokio::test]
    async fn join_table_rejects_duplicate_pair() {
        let db = test_db().await;
        db.conn()
            .execute_batch(
                "INSERT INTO Rooms (Id, Name, Description) VALUES (1, 'Dungeon', 'd');
                 INSERT INTO Characters (Id, Name, Level, RoomId, Discriminator, Experience)
                     VALUES (1, 'Hero', 1, 1, 'Player', 0);
                 INSERT INTO Abilities (Id, Name, Description, AbilityType, Shove)
                     VALUES (1, 'Push', 'p', 'PlayerAbility', 3);
                 INSERT INTO CharacterAbilities (CharacterId, AbilityId) VALUES (1, 1);",
            )
            .await
            .unwrap();

        let duplicate = db
            .conn()
            .execute(
                "INSERT INTO CharacterAbilities (CharacterId, AbilityId) VALUES (1, 1)",
                (),
            )
            .await;
        assert!(duplicate.is_err(), "duplicate link should be rejected");
    }
}

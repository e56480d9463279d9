//! Seed data: two rooms and three characters with fixed identities.
//!
//! `seed_initial_data` and `remove_seed_data` are inverses. Removal deletes by
//! the known ids, characters before rooms, so running it and then seeding
//! again always lands on a single fresh seed.

use delve_core::entities::{Character, CharacterKind, Room};
use libsql::params::Params;

use crate::error::DatabaseError;
use crate::helpers::{id_values, placeholders};
use crate::service::GameService;

pub const SEED_ROOM_IDS: [i64; 2] = [1, 2];
pub const SEED_CHARACTER_IDS: [i64; 3] = [1, 2, 3];

#[must_use]
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            name: "Dungeon".into(),
            description: "A dark and damp dungeon".into(),
        },
        Room {
            id: 2,
            name: "Forest".into(),
            description: "A lush green forest".into(),
        },
    ]
}

#[must_use]
pub fn seed_characters() -> Vec<Character> {
    vec![
        Character {
            id: 1,
            name: "Bob Goblin".into(),
            level: 1,
            room_id: 1,
            kind: CharacterKind::Goblin {
                aggression_level: 5,
            },
        },
        Character {
            id: 2,
            name: "Gob Boglin".into(),
            level: 2,
            room_id: 1,
            kind: CharacterKind::Goblin {
                aggression_level: 7,
            },
        },
        Character {
            id: 3,
            name: "Sir Lancelot".into(),
            level: 1,
            room_id: 2,
            kind: CharacterKind::Player { experience: 100 },
        },
    ]
}

impl GameService {
    /// Insert the seed rooms and characters in one transaction.
    ///
    /// # Errors
    ///
    /// Fails with a constraint error if any seed id is already taken; nothing
    /// is written in that case.
    pub async fn seed_initial_data(&self) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        if let Err(error) = Self::insert_seed_rows(&tx).await {
            tx.rollback().await?;
            return Err(error);
        }
        tx.commit().await?;
        tracing::info!(
            rooms = SEED_ROOM_IDS.len(),
            characters = SEED_CHARACTER_IDS.len(),
            "seed data applied"
        );
        Ok(())
    }

    /// Delete the seed characters, then the seed rooms, by known id.
    ///
    /// # Errors
    ///
    /// Fails if a non-seed character still lives in a seed room; nothing is
    /// deleted in that case.
    pub async fn remove_seed_data(&self) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let (characters, rooms) = match Self::delete_seed_rows(&tx).await {
            Ok(counts) => counts,
            Err(error) => {
                tx.rollback().await?;
                return Err(error);
            }
        };
        tx.commit().await?;
        tracing::info!(characters, rooms, "seed data removed");
        Ok(())
    }

    async fn insert_seed_rows(conn: &libsql::Connection) -> Result<(), DatabaseError> {
        for room in seed_rooms() {
            Self::insert_room(conn, &room).await?;
        }
        for character in seed_characters() {
            Self::insert_character(conn, &character, Some(character.id)).await?;
        }
        Ok(())
    }

    async fn delete_seed_rows(conn: &libsql::Connection) -> Result<(u64, u64), DatabaseError> {
        let characters = conn
            .execute(
                &format!(
                    "DELETE FROM Characters WHERE Id IN ({})",
                    placeholders(1, SEED_CHARACTER_IDS.len())
                ),
                Params::Positional(id_values(&SEED_CHARACTER_IDS)),
            )
            .await?;
        let rooms = conn
            .execute(
                &format!(
                    "DELETE FROM Rooms WHERE Id IN ({})",
                    placeholders(1, SEED_ROOM_IDS.len())
                ),
                Params::Positional(id_values(&SEED_ROOM_IDS)),
            )
            .await?;
        Ok((characters, rooms))
    }

    /// Whether every seed room is present.
    pub async fn is_seeded(&self) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT COUNT(*) FROM Rooms WHERE Id IN ({})",
                    placeholders(1, SEED_ROOM_IDS.len())
                ),
                Params::Positional(id_values(&SEED_ROOM_IDS)),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let present = row.get::<i64>(0)?;
        Ok(usize::try_from(present).is_ok_and(|n| n == SEED_ROOM_IDS.len()))
    }
}

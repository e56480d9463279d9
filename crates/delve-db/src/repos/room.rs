//! Room repository — creation, lookup and the eager room listing.

use std::collections::BTreeMap;

use delve_core::entities::{Character, Room};
use delve_core::responses::RoomWithCharacters;

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::mapping::TablePerHierarchy;
use crate::service::GameService;

fn row_to_room(row: &libsql::Row) -> Result<Room, DatabaseError> {
    Ok(Room {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
    })
}

impl GameService {
    /// Insert a room with a database-assigned id.
    pub async fn create_room(&self, name: &str, description: &str) -> Result<Room, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO Rooms (Name, Description) VALUES (?1, ?2)",
                libsql::params![name, description],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(id, name, "room created");
        Ok(Room {
            id,
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    /// Insert a room keeping its id (used for fixed-identity seed rows).
    pub(crate) async fn insert_room(
        conn: &libsql::Connection,
        room: &Room,
    ) -> Result<(), DatabaseError> {
        conn.execute(
            "INSERT INTO Rooms (Id, Name, Description) VALUES (?1, ?2, ?3)",
            libsql::params![room.id, room.name.as_str(), room.description.as_str()],
        )
        .await?;
        Ok(())
    }

    pub async fn get_room(&self, id: i64) -> Result<Room, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT Id, Name, Description FROM Rooms WHERE Id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { entity: "Room", id })?;
        row_to_room(&row)
    }

    /// Every room ordered by id, each with its characters eagerly loaded.
    ///
    /// Two queries: one for rooms, one for all characters, grouped by room.
    pub async fn list_rooms(&self) -> Result<Vec<RoomWithCharacters>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT Id, Name, Description FROM Rooms ORDER BY Id", ())
            .await?;
        let rooms = collect_rows(rows, row_to_room).await?;

        let rows = self
            .db()
            .conn()
            .query(
                &format!("{} ORDER BY RoomId, Id", Character::select_sql()),
                (),
            )
            .await?;
        let mut by_room: BTreeMap<i64, Vec<Character>> = BTreeMap::new();
        for character in collect_rows(rows, Character::from_row).await? {
            by_room.entry(character.room_id).or_default().push(character);
        }

        tracing::debug!(rooms = rooms.len(), "listed rooms");
        Ok(rooms
            .into_iter()
            .map(|room| {
                let characters = by_room.remove(&room.id).unwrap_or_default();
                RoomWithCharacters { room, characters }
            })
            .collect())
    }

    /// Delete a room. Fails while any character still lives in it.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete_room(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM Rooms WHERE Id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use delve_core::entities::CharacterKind;
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{seeded_service, test_service};

    #[tokio::test]
    async fn create_and_get_room() {
        let svc = test_service().await;
        let room = svc.create_room("Cave", "A cold cave").await.unwrap();
        assert_eq!(svc.get_room(room.id).await.unwrap(), room);
    }

    #[tokio::test]
    async fn get_missing_room_is_not_found() {
        let svc = test_service().await;
        let err = svc.get_room(42).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound {
                entity: "Room",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn list_rooms_empty_store() {
        let svc = test_service().await;
        assert!(svc.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_rooms_includes_empty_room() {
        let svc = seeded_service().await;
        let cave = svc.create_room("Cave", "A cold cave").await.unwrap();

        let rooms = svc.list_rooms().await.unwrap();
        assert_eq!(rooms.len(), 3);
        let listed = rooms.iter().find(|r| r.room.id == cave.id).unwrap();
        assert!(listed.characters.is_empty());
    }

    #[tokio::test]
    async fn list_rooms_groups_characters_by_room() {
        let svc = seeded_service().await;
        let rooms = svc.list_rooms().await.unwrap();

        let names: Vec<(&str, Vec<&str>)> = rooms
            .iter()
            .map(|r| {
                (
                    r.room.name.as_str(),
                    r.characters.iter().map(|c| c.name.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            names,
            vec![
                ("Dungeon", vec!["Bob Goblin", "Gob Boglin"]),
                ("Forest", vec!["Sir Lancelot"]),
            ]
        );
    }

    #[tokio::test]
    async fn occupied_room_cannot_be_deleted() {
        let svc = seeded_service().await;
        assert!(svc.delete_room(1).await.is_err());
        assert!(svc.get_room(1).await.is_ok());
    }

    #[tokio::test]
    async fn empty_room_can_be_deleted() {
        let svc = test_service().await;
        let room = svc.create_room("Cave", "A cold cave").await.unwrap();
        let other = svc.create_room("Hall", "A long hall").await.unwrap();
        svc.create_character(
            "Scout",
            1,
            other.id,
            CharacterKind::Player { experience: 0 },
        )
        .await
        .unwrap();

        assert!(svc.delete_room(room.id).await.unwrap());
        assert!(!svc.delete_room(room.id).await.unwrap());
    }
}

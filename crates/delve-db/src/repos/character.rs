//! Character repository over the `Characters` hierarchy table.

use delve_core::entities::{Character, CharacterKind};
use delve_core::responses::CharacterRoster;
use libsql::params::Params;

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::mapping::TablePerHierarchy;
use crate::service::GameService;

impl GameService {
    /// Insert a character of any variant with a database-assigned id.
    pub async fn create_character(
        &self,
        name: &str,
        level: i64,
        room_id: i64,
        kind: CharacterKind,
    ) -> Result<Character, DatabaseError> {
        let mut character = Character {
            id: 0,
            name: name.to_string(),
            level,
            room_id,
            kind,
        };
        Self::insert_character(self.db().conn(), &character, None).await?;
        character.id = self.db().conn().last_insert_rowid();
        tracing::debug!(id = character.id, name, variant = %kind.character_type(), "character created");
        Ok(character)
    }

    /// Insert a character, keeping `id` when given.
    pub(crate) async fn insert_character(
        conn: &libsql::Connection,
        character: &Character,
        id: Option<i64>,
    ) -> Result<(), DatabaseError> {
        conn.execute(
            &Character::insert_sql(),
            Params::Positional(character.insert_values(id)),
        )
        .await?;
        Ok(())
    }

    pub async fn get_character(&self, id: i64) -> Result<Character, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{} WHERE Id = ?1", Character::select_sql()), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "Character",
            id,
        })?;
        Character::from_row(&row)
    }

    /// Every character of every variant, ordered by id.
    pub async fn list_characters(&self) -> Result<CharacterRoster, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("{} ORDER BY Id", Character::select_sql()), ())
            .await?;
        let characters = collect_rows(rows, Character::from_row).await?;
        tracing::debug!(count = characters.len(), "listed characters");
        Ok(CharacterRoster::from_vec(characters))
    }

    pub async fn characters_in_room(&self, room_id: i64) -> Result<Vec<Character>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("{} WHERE RoomId = ?1 ORDER BY Id", Character::select_sql()),
                [room_id],
            )
            .await?;
        collect_rows(rows, Character::from_row).await
    }

    /// Delete a character; its ability links go with it.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete_character(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM Characters WHERE Id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

//! Ability repository and the character/ability join table.
//!
//! Links are plain `(CharacterId, AbilityId)` rows. Both directions of the
//! relation are derived reads through the join table.

use delve_core::entities::{Ability, AbilityKind, Character};
use libsql::params::Params;

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::mapping::TablePerHierarchy;
use crate::service::GameService;

impl GameService {
    /// Insert an ability of any variant with a database-assigned id.
    pub async fn create_ability(
        &self,
        name: &str,
        description: &str,
        kind: AbilityKind,
    ) -> Result<Ability, DatabaseError> {
        let mut ability = Ability {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            kind,
        };
        self.db()
            .conn()
            .execute(&Ability::insert_sql(), Params::Positional(ability.insert_values(None)))
            .await?;
        ability.id = self.db().conn().last_insert_rowid();
        tracing::debug!(id = ability.id, name, variant = %kind.ability_type(), "ability created");
        Ok(ability)
    }

    pub async fn get_ability(&self, id: i64) -> Result<Ability, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{} WHERE Id = ?1", Ability::select_sql()), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "Ability",
            id,
        })?;
        Ability::from_row(&row)
    }

    pub async fn list_abilities(&self) -> Result<Vec<Ability>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("{} ORDER BY Id", Ability::select_sql()), ())
            .await?;
        collect_rows(rows, Ability::from_row).await
    }

    /// Delete an ability; characters simply stop knowing it.
    pub async fn delete_ability(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM Abilities WHERE Id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }

    /// Teach `ability_id` to `character_id`.
    ///
    /// Idempotent: returns `false` when the link already existed.
    pub async fn grant_ability(
        &self,
        character_id: i64,
        ability_id: i64,
    ) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO CharacterAbilities (CharacterId, AbilityId) VALUES (?1, ?2)",
                [character_id, ability_id],
            )
            .await?;
        tracing::debug!(character_id, ability_id, created = affected > 0, "ability granted");
        Ok(affected > 0)
    }

    /// Remove a link. Returns whether one existed.
    pub async fn revoke_ability(
        &self,
        character_id: i64,
        ability_id: i64,
    ) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM CharacterAbilities WHERE CharacterId = ?1 AND AbilityId = ?2",
                [character_id, ability_id],
            )
            .await?;
        Ok(affected > 0)
    }

    /// Abilities known by a character, ordered by ability id.
    pub async fn abilities_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<Ability>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM Abilities a
                     JOIN CharacterAbilities ca ON ca.AbilityId = a.Id
                     WHERE ca.CharacterId = ?1 ORDER BY a.Id",
                    Ability::column_list(Some("a"))
                ),
                [character_id],
            )
            .await?;
        collect_rows(rows, Ability::from_row).await
    }

    /// Characters that know an ability, ordered by character id.
    pub async fn characters_with_ability(
        &self,
        ability_id: i64,
    ) -> Result<Vec<Character>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM Characters c
                     JOIN CharacterAbilities ca ON ca.CharacterId = c.Id
                     WHERE ca.AbilityId = ?1 ORDER BY c.Id",
                    Character::column_list(Some("c"))
                ),
                [ability_id],
            )
            .await?;
        collect_rows(rows, Character::from_row).await
    }
}

//! Single-table-per-hierarchy mapping.
//!
//! A hierarchy with N concrete variants is stored in one table whose columns
//! are the union of the shared columns and every variant's own columns, plus a
//! discriminator column naming the variant of each row:
//!
//! ```text
//! | Id | Name | Level | RoomId | Discriminator | Experience | AggressionLevel |
//! |----|------|-------|--------|---------------|------------|-----------------|
//! | 1  | Bob  | 1     | 1      | Goblin        | NULL       | 5               |
//! | 3  | Sir  | 1     | 2      | Player        | 100        | NULL            |
//! ```
//!
//! Column order is always: base columns (identity first), discriminator,
//! variant columns. Reads parse the discriminator before anything else and
//! then look only at that variant's column; every other variant column must
//! be `NULL`. Writes store the tag and `NULL` for every foreign column.

use std::str::FromStr;

use delve_core::CoreError;
use delve_core::entities::{Ability, AbilityKind, Character, CharacterKind};
use delve_core::enums::{AbilityType, CharacterType};
use libsql::Value;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_i64, opt_integer, placeholders};

/// A variant-specific column and the discriminator value that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantColumn {
    pub name: &'static str,
    pub owner: &'static str,
}

/// Mapping of one entity hierarchy onto a single table.
pub trait TablePerHierarchy: Sized {
    /// Physical table name.
    const TABLE: &'static str;
    /// Shared columns, identity column first.
    const BASE_COLUMNS: &'static [&'static str];
    /// Column holding the variant tag.
    const DISCRIMINATOR: &'static str;
    /// One entry per variant-specific column.
    const VARIANT_COLUMNS: &'static [VariantColumn];

    /// Materialise the variant named by the row's discriminator.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Core(CoreError::UnknownVariant)` for an unrecognised
    /// tag, `DatabaseError::InvalidState` when a variant column is inconsistent
    /// with the tag.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    /// Discriminator value for this instance.
    fn tag(&self) -> &'static str;

    /// This instance's own variant value, keyed by column name.
    fn variant_value(&self) -> (&'static str, i64);

    /// Values for the base columns after the identity, in column order.
    fn base_values(&self) -> Vec<Value>;

    /// Every column, comma separated, optionally qualified with a table alias.
    fn column_list(alias: Option<&str>) -> String {
        let prefix = alias.map(|a| format!("{a}.")).unwrap_or_default();
        Self::BASE_COLUMNS
            .iter()
            .copied()
            .chain(std::iter::once(Self::DISCRIMINATOR))
            .chain(Self::VARIANT_COLUMNS.iter().map(|c| c.name))
            .map(|column| format!("{prefix}{column}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `SELECT <all columns> FROM <table>`; callers append filters and ordering.
    fn select_sql() -> String {
        format!("SELECT {} FROM {}", Self::column_list(None), Self::TABLE)
    }

    /// `INSERT` of every column. Parameter `?1` is the identity; bind `NULL`
    /// to let the database assign one.
    fn insert_sql() -> String {
        let count = Self::BASE_COLUMNS.len() + 1 + Self::VARIANT_COLUMNS.len();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            Self::TABLE,
            Self::column_list(None),
            placeholders(1, count)
        )
    }

    /// Parameters for [`Self::insert_sql`]: identity, base values, tag, then
    /// the own variant value with `NULL` in every foreign variant column.
    fn insert_values(&self, id: Option<i64>) -> Vec<Value> {
        let (own_column, own_value) = self.variant_value();
        let mut values = Vec::with_capacity(Self::BASE_COLUMNS.len() + 1 + Self::VARIANT_COLUMNS.len());
        values.push(opt_integer(id));
        values.extend(self.base_values());
        values.push(Value::Text(self.tag().to_string()));
        values.extend(Self::VARIANT_COLUMNS.iter().map(|column| {
            if column.name == own_column {
                Value::Integer(own_value)
            } else {
                Value::Null
            }
        }));
        values
    }

    /// Column index of the discriminator in [`Self::column_list`] order.
    fn discriminator_index() -> i32 {
        to_index(Self::BASE_COLUMNS.len())
    }

    /// Read the discriminator, then check the variant columns against it.
    ///
    /// Returns the parsed tag and the value of the tag's own column.
    ///
    /// # Errors
    ///
    /// See [`Self::from_row`].
    fn read_variant<T>(row: &libsql::Row) -> Result<(T, i64), DatabaseError>
    where
        T: FromStr<Err = CoreError> + Copy,
    {
        let raw = row.get::<String>(Self::discriminator_index())?;
        let tag = raw.parse::<T>()?;
        let id = row.get::<i64>(0)?;

        let mut own = None;
        for (offset, column) in Self::VARIANT_COLUMNS.iter().enumerate() {
            let idx = to_index(Self::BASE_COLUMNS.len() + 1 + offset);
            let value = get_opt_i64(row, idx)?;
            if column.owner == raw {
                own = Some(value.ok_or_else(|| {
                    DatabaseError::InvalidState(format!(
                        "{} row {id} ({raw}) has no {}",
                        Self::TABLE,
                        column.name
                    ))
                })?);
            } else if value.is_some() {
                return Err(DatabaseError::InvalidState(format!(
                    "{} row {id} ({raw}) has {} set, which belongs to {}",
                    Self::TABLE,
                    column.name,
                    column.owner
                )));
            }
        }

        let own = own.ok_or_else(|| {
            DatabaseError::InvalidState(format!(
                "{} has no variant column for '{raw}'",
                Self::TABLE
            ))
        })?;
        Ok((tag, own))
    }
}

fn to_index(idx: usize) -> i32 {
    i32::try_from(idx).unwrap_or(i32::MAX)
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

impl TablePerHierarchy for Character {
    const TABLE: &'static str = "Characters";
    const BASE_COLUMNS: &'static [&'static str] = &["Id", "Name", "Level", "RoomId"];
    const DISCRIMINATOR: &'static str = "Discriminator";
    const VARIANT_COLUMNS: &'static [VariantColumn] = &[
        VariantColumn {
            name: "Experience",
            owner: "Player",
        },
        VariantColumn {
            name: "AggressionLevel",
            owner: "Goblin",
        },
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (tag, stat) = Self::read_variant::<CharacterType>(row)?;
        let kind = match tag {
            CharacterType::Player => CharacterKind::Player { experience: stat },
            CharacterType::Goblin => CharacterKind::Goblin {
                aggression_level: stat,
            },
        };
        Ok(Self {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
            level: row.get::<i64>(2)?,
            room_id: row.get::<i64>(3)?,
            kind,
        })
    }

    fn tag(&self) -> &'static str {
        self.character_type().as_str()
    }

    fn variant_value(&self) -> (&'static str, i64) {
        match self.kind {
            CharacterKind::Player { experience } => ("Experience", experience),
            CharacterKind::Goblin { aggression_level } => ("AggressionLevel", aggression_level),
        }
    }

    fn base_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Integer(self.level),
            Value::Integer(self.room_id),
        ]
    }
}

// ---------------------------------------------------------------------------
// Ability
// ---------------------------------------------------------------------------

impl TablePerHierarchy for Ability {
    const TABLE: &'static str = "Abilities";
    const BASE_COLUMNS: &'static [&'static str] = &["Id", "Name", "Description"];
    const DISCRIMINATOR: &'static str = "AbilityType";
    const VARIANT_COLUMNS: &'static [VariantColumn] = &[
        VariantColumn {
            name: "Shove",
            owner: "PlayerAbility",
        },
        VariantColumn {
            name: "Taunt",
            owner: "GoblinAbility",
        },
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (tag, stat) = Self::read_variant::<AbilityType>(row)?;
        let kind = match tag {
            AbilityType::PlayerAbility => AbilityKind::PlayerAbility { shove: stat },
            AbilityType::GoblinAbility => AbilityKind::GoblinAbility { taunt: stat },
        };
        Ok(Self {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
            description: row.get::<String>(2)?,
            kind,
        })
    }

    fn tag(&self) -> &'static str {
        self.ability_type().as_str()
    }

    fn variant_value(&self) -> (&'static str, i64) {
        match self.kind {
            AbilityKind::PlayerAbility { shove } => ("Shove", shove),
            AbilityKind::GoblinAbility { taunt } => ("Taunt", taunt),
        }
    }

    fn base_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.description.clone()),
        ]
    }
}

use serde::{Deserialize, Serialize};

/// A location that characters occupy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub description: String,
}

//! JSON shape of listing responses.

use delve_core::entities::{Character, CharacterKind, Room};
use delve_core::responses::{CharacterRoster, RoomWithCharacters};
use pretty_assertions::assert_eq;

fn dungeon() -> RoomWithCharacters {
    RoomWithCharacters {
        room: Room {
            id: 1,
            name: "Dungeon".into(),
            description: "A dark and damp dungeon".into(),
        },
        characters: vec![Character {
            id: 2,
            name: "Gob Boglin".into(),
            level: 2,
            room_id: 1,
            kind: CharacterKind::Goblin {
                aggression_level: 7,
            },
        }],
    }
}

#[test]
fn room_listing_flattens_room_fields() {
    let json = serde_json::to_value(dungeon()).unwrap();
    assert_eq!(json["name"], "Dungeon");
    assert_eq!(json["characters"][0]["discriminator"], "Goblin");
    assert_eq!(json["characters"][0]["aggression_level"], 7);

    let back: RoomWithCharacters = serde_json::from_value(json).unwrap();
    assert_eq!(back, dungeon());
}

#[test]
fn empty_roster_serializes_as_status_only() {
    let json = serde_json::to_value(CharacterRoster::Empty).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "empty" }));
}

#[test]
fn populated_roster_serializes_characters() {
    let roster = CharacterRoster::from_vec(dungeon().characters);
    let json = serde_json::to_value(&roster).unwrap();
    assert_eq!(json["status"], "characters");
    assert_eq!(json["characters"][0]["name"], "Gob Boglin");
}

//! Storage accessor behaviour through the public API:
//! seeding, reversal, room and character listings, ability links.

use delve_config::ConnectionTarget;
use delve_core::entities::{AbilityKind, CharacterKind};
use delve_core::enums::CharacterType;
use delve_core::responses::CharacterRoster;
use delve_db::repos::seed::{SEED_CHARACTER_IDS, seed_characters};
use delve_db::service::GameService;
use pretty_assertions::assert_eq;

async fn empty_service() -> GameService {
    GameService::connect(&ConnectionTarget::Local(":memory:".into()))
        .await
        .unwrap()
}

async fn seeded_service() -> GameService {
    let svc = empty_service().await;
    svc.seed_initial_data().await.unwrap();
    svc
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rooms_after_seed_match_seed_values() {
    let svc = seeded_service().await;
    let rooms = svc.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 2);

    let dungeon = &rooms[0];
    assert_eq!(dungeon.room.name, "Dungeon");
    assert_eq!(dungeon.room.description, "A dark and damp dungeon");
    let occupants: Vec<(&str, i64)> = dungeon
        .characters
        .iter()
        .map(|c| (c.name.as_str(), c.level))
        .collect();
    assert_eq!(occupants, vec![("Bob Goblin", 1), ("Gob Boglin", 2)]);

    let forest = &rooms[1];
    assert_eq!(forest.room.name, "Forest");
    assert_eq!(forest.room.description, "A lush green forest");
    let occupants: Vec<(&str, i64)> = forest
        .characters
        .iter()
        .map(|c| (c.name.as_str(), c.level))
        .collect();
    assert_eq!(occupants, vec![("Sir Lancelot", 1)]);
}

#[tokio::test]
async fn characters_on_empty_store_is_empty_signal() {
    let svc = empty_service().await;
    let roster = svc.list_characters().await.unwrap();
    assert_eq!(roster, CharacterRoster::Empty);
}

#[tokio::test]
async fn seeded_variant_fields_follow_discriminator() {
    let svc = seeded_service().await;
    let roster = svc.list_characters().await.unwrap();
    assert_eq!(roster.characters(), seed_characters().as_slice());

    for character in roster.characters() {
        match character.character_type() {
            CharacterType::Player => {
                assert_eq!(character.experience(), Some(100));
                assert_eq!(character.aggression_level(), None);
            }
            CharacterType::Goblin => {
                assert!(character.aggression_level().is_some());
                assert_eq!(character.experience(), None);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Seed reversal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reversal_then_seed_is_idempotent() {
    let svc = seeded_service().await;
    let before = (
        svc.list_rooms().await.unwrap(),
        svc.list_characters().await.unwrap(),
    );

    for _ in 0..2 {
        svc.remove_seed_data().await.unwrap();
        svc.seed_initial_data().await.unwrap();
    }

    let after = (
        svc.list_rooms().await.unwrap(),
        svc.list_characters().await.unwrap(),
    );
    assert_eq!(after, before);
    assert_eq!(after.1.characters().len(), SEED_CHARACTER_IDS.len());
}

#[tokio::test]
async fn reversal_on_empty_store_is_harmless() {
    let svc = empty_service().await;
    svc.remove_seed_data().await.unwrap();
    assert!(svc.list_rooms().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Abilities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_ability_activates_with_stored_characters() {
    let svc = seeded_service().await;
    let push = svc
        .create_ability("Push", "Push enemy back", AbilityKind::PlayerAbility { shove: 10 })
        .await
        .unwrap();
    svc.grant_ability(3, push.id).await.unwrap();

    let lancelot = svc.get_character(3).await.unwrap();
    let bob = svc.get_character(1).await.unwrap();
    let known = svc.abilities_for_character(lancelot.id).await.unwrap();
    assert_eq!(known.len(), 1);

    let text = lancelot.use_ability(&known[0], &bob);
    assert!(text.contains("Sir Lancelot"));
    assert!(text.contains("Bob Goblin"));
    assert!(text.contains("Push enemy back"));
    assert!(text.contains("10 feet"));
}

#[tokio::test]
async fn new_goblin_shows_up_in_its_room() {
    let svc = seeded_service().await;
    svc.create_character(
        "Grub",
        4,
        2,
        CharacterKind::Goblin {
            aggression_level: 2,
        },
    )
    .await
    .unwrap();

    let rooms = svc.list_rooms().await.unwrap();
    let forest: Vec<&str> = rooms[1].characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(forest, vec!["Sir Lancelot", "Grub"]);
}

//! End-to-end tests: `App` wired over a JSON world snapshot.

use perfection_domain::{CategoryId, ItemId, ItemQuality};

use crate::infrastructure::app_settings::AppSettings;
use crate::infrastructure::memory::WorldSnapshot;
use crate::App;

const SAVE: &str = r#"{
    "rooms": [
        { "name": "Pantry", "reward_granted": false },
        { "name": "Fish Tank", "reward_granted": true }
    ],
    "bundles": [
        {
            "name": "Spring Crops", "room": "Pantry",
            "slots": [
                { "index": 0, "items": [ { "item_id": "(O)24", "name": "Parsnip" } ], "filled": true, "filled_by": "(O)24" },
                { "index": 1, "items": [ { "item_id": "(O)188", "name": "Green Bean" } ] },
                { "index": 2, "items": [ { "item_id": "(O)190", "name": "Cauliflower" } ] },
                { "index": 3, "items": [ { "item_id": "(O)192", "name": "Potato" } ] }
            ]
        },
        {
            "name": "Quality Crops", "room": "Pantry",
            "slots": [
                { "index": 0, "items": [
                    { "item_id": "(O)24", "name": "Parsnip", "quantity": 5, "min_quality": "gold" },
                    { "item_id": "(O)192", "name": "Potato", "quantity": 5, "min_quality": "gold" }
                ] }
            ]
        },
        {
            "name": "River Fish", "room": "Fish Tank",
            "slots": [
                { "index": 0, "items": [ { "item_id": "(O)145", "name": "Sunfish" } ], "filled": true }
            ]
        }
    ],
    "owned_items": [
        { "item_id": "(O)192", "name": "Potato", "quantity": 7, "quality": "gold", "location": { "building": "Big Shed" } },
        { "item_id": "(O)188", "name": "Green Bean", "quantity": 1, "location": "inventory" }
    ],
    "unavailable_items": {
        "(O)188": "out_of_season",
        "(O)190": "out_of_season",
        "(O)192": "out_of_season",
        "(O)24": "out_of_season"
    },
    "cooking": [
        { "id": "Omelet", "name": "Omelet", "status": "completed" },
        { "id": "Pancakes", "name": "Pancakes", "status": "known" }
    ],
    "friendships": [ { "npc": "Leah", "hearts": 10, "max_hearts": 10 } ],
    "skills": [ { "name": "Farming", "level": 10, "max_level": 10 } ],
    "island_unlocked": true
}"#;

fn app(settings: AppSettings) -> App {
    let snapshot = WorldSnapshot::from_json(SAVE).unwrap();
    App::new(snapshot.into_providers(), settings)
}

#[test]
fn bundle_roll_ups_from_snapshot() {
    let app = app(AppSettings::default());
    let progress = &app.use_cases.bundles.progress;

    let overall = progress.overall_progress();
    assert_eq!((overall.completed, overall.total, overall.percent), (1, 3, 33));

    let rooms = progress.room_progress_list();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[1].room, "Fish Tank");
    assert!(rooms[1].bundles.is_complete());
    assert!(rooms[1].reward_granted);

    let details = progress.bundle_details("spring crops").unwrap();
    assert_eq!(details.filled_slots, 1);
    assert_eq!(details.slots_remaining(), 3);
    assert!(!progress.is_community_complete());
}

#[test]
fn matcher_finds_gold_potato_for_quality_slot() {
    let app = app(AppSettings::default());
    let bundles = app.use_cases.bundles.progress.bundle_details("Quality Crops").unwrap();

    let owned = app
        .use_cases
        .bundles
        .matcher
        .find_match(&bundles.missing_slots[0])
        .unwrap();

    assert_eq!(owned.item_id, ItemId::new("(O)192"));
    assert_eq!(owned.quality, ItemQuality::Gold);
}

#[test]
fn winter_save_has_nothing_available() {
    let app = app(AppSettings::default());
    let summary = app.use_cases.bundles.availability.availability_summary();

    assert!(summary.available.is_empty());
    assert_eq!(summary.unavailable, vec!["Spring Crops", "Quality Crops"]);
}

#[test]
fn notifications_reset_on_session_hooks() {
    let app = app(AppSettings::default());
    let tracker = &app.use_cases.bundles.notifications;
    let potato = ItemId::new("(O)192");

    let first = tracker.check_for_bundle_item(&potato, "Potato").unwrap();
    assert_eq!(first.message, "Potato is needed for Spring Crops (+1 more)");
    assert!(tracker.check_for_bundle_item(&potato, "Potato").is_none());

    app.on_save_loaded();
    assert!(tracker.check_for_bundle_item(&potato, "Potato").is_some());

    app.on_returned_to_title();
    assert_eq!(tracker.notified_count(), 0);
}

#[test]
fn disabled_notifications_setting_silences_tracker() {
    let app = app(AppSettings::default().with_bundle_notifications(false));
    assert!(app
        .use_cases
        .bundles
        .notifications
        .check_for_bundle_item(&ItemId::new("(O)192"), "Potato")
        .is_none());
}

#[test]
fn perfection_over_partial_save() {
    let app = app(AppSettings::default().with_incomplete_items_limit(1));
    let progress = app.perfection();

    // cooking 1/80 of 10, friendship 11, skills 5
    let expected = 10.0 / 80.0 + 11.0 + 5.0;
    assert!((progress.total_percentage() - expected).abs() < 1e-9);
    assert!(progress.island_unlocked());
    assert!(!progress.is_complete());

    assert_eq!(
        app.incomplete_items(CategoryId::Cooking),
        vec!["Pancakes (known but not yet cooked)"]
    );
    assert!(app.incomplete_items_by_name("Dinosaurs").is_err());
}

//! Integration tests for the full doctrine change loop.
//!
//! Exercises: DoctrineConfig -> DoctrinePoolSet -> DoctrineChanger -> sink
//! writes, against a recording sink and seeded RNGs. No host, no I/O.

use fleetdoctrine_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Recording sink ──────────────────────────────────────────────────────

/// Records every write so tests can assert on the exact sequence.
#[derive(Debug, Default)]
struct RecordingSink {
    compositions: Vec<CompositionRatio>,
    ships: Vec<Vec<String>>,
    weapons: Vec<Vec<String>>,
    fighters: Vec<Vec<String>>,
}

impl FactionSink for RecordingSink {
    fn set_fleet_composition(&mut self, ratio: CompositionRatio) {
        self.compositions.push(ratio);
    }

    fn replace_priority_lists(&mut self, ships: &[String], weapons: &[String], fighters: &[String]) {
        self.ships.push(ships.to_vec());
        self.weapons.push(weapons.to_vec());
        self.fighters.push(fighters.to_vec());
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Every category's single pool entry carries a distinct marker ship, so
/// the applied priority list identifies the category that was drawn.
const MARKED_CONFIG: &str = r#"{
    "doctrineChangeDelay": 1,
    "warships": [{ "priorityShips": ["warship_marker"] }],
    "carriers": [{ "priorityShips": ["carrier_marker"] }],
    "phaseShips": [{ "priorityShips": ["phase_marker"] }],
    "balanced": [{ "priorityShips": ["balanced_marker"] }]
}"#;

fn marker_for(category: DoctrineCategory) -> &'static str {
    match category {
        DoctrineCategory::Warship => "warship_marker",
        DoctrineCategory::Carrier => "carrier_marker",
        DoctrineCategory::PhaseFocused => "phase_marker",
        DoctrineCategory::Balanced => "balanced_marker",
    }
}

fn marked_changer(seed: u64) -> DoctrineChanger<RecordingSink> {
    DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        MARKED_CONFIG,
        StdRng::seed_from_u64(seed),
    )
    .expect("marked config parses")
}

// ── Tests ───────────────────────────────────────────────────────────────

#[test]
fn test_cold_start_selection_end_to_end() {
    let mut changer = marked_changer(99);
    changer.on_tick();

    // Balanced holds the cold-start "last used" slot, so the first draw
    // can yield anything but Balanced.
    let category = changer.current_category();
    assert_ne!(category, DoctrineCategory::Balanced);

    // Assert against whatever category the permutation actually yielded.
    let sink = changer.sink();
    assert_eq!(sink.compositions, vec![category.composition()]);
    assert_eq!(sink.ships, vec![vec![marker_for(category).to_string()]]);
    assert_eq!(sink.weapons, vec![Vec::<String>::new()]);
    assert_eq!(sink.fighters, vec![Vec::<String>::new()]);
}

#[test]
fn test_applied_priority_always_matches_category() {
    let mut changer = marked_changer(123);
    for _ in 0..300 {
        changer.on_tick();
        let category = changer.current_category();
        let last_ships = changer.sink().ships.last().expect("a write happened");
        assert_eq!(last_ships, &vec![marker_for(category).to_string()]);
    }
}

#[test]
fn test_selection_only_on_cadence_boundary() {
    let json = MARKED_CONFIG.replace("\"doctrineChangeDelay\": 1", "\"doctrineChangeDelay\": 5");
    let mut changer = DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        &json,
        StdRng::seed_from_u64(7),
    )
    .unwrap();
    assert_eq!(changer.cadence(), 5);

    for _ in 0..4 {
        changer.on_tick();
    }
    assert!(changer.sink().compositions.is_empty());
    assert!(changer.selected_priority().is_none());

    changer.on_tick();
    assert_eq!(changer.sink().compositions.len(), 1);

    // The counter reset: the next selection is another full cadence away.
    for _ in 0..4 {
        changer.on_tick();
    }
    assert_eq!(changer.sink().compositions.len(), 1);
    changer.on_tick();
    assert_eq!(changer.sink().compositions.len(), 2);
}

#[test]
fn test_refresh_before_first_selection() {
    let mut changer = marked_changer(5);
    changer.refresh();

    let sink = changer.sink();
    // Only the cold-start composition goes out; no priority lists exist yet.
    assert_eq!(
        sink.compositions,
        vec![DoctrineCategory::Balanced.composition()]
    );
    assert!(sink.ships.is_empty());
}

#[test]
fn test_refresh_is_idempotent() {
    let mut changer = marked_changer(31);
    changer.on_tick();

    changer.refresh();
    changer.refresh();

    let sink = changer.sink();
    assert_eq!(sink.compositions.len(), 3); // selection + two refreshes
    assert_eq!(sink.compositions[1], sink.compositions[2]);
    assert_eq!(sink.ships.len(), 3);
    assert_eq!(sink.ships[1], sink.ships[2]);
    assert_eq!(sink.weapons[1], sink.weapons[2]);
    assert_eq!(sink.fighters[1], sink.fighters[2]);

    // Refresh re-applies the retained selection exactly.
    assert_eq!(sink.compositions[0], sink.compositions[1]);
    assert_eq!(sink.ships[0], sink.ships[1]);
}

#[test]
fn test_refresh_restores_state_after_simulated_reload() {
    let mut changer = marked_changer(64);
    for _ in 0..3 {
        changer.on_tick();
    }
    let category = changer.current_category();
    let retained = changer.selected_priority().cloned().expect("selected");

    // A session reload resets the faction's doctrine state; the changer
    // survives and pushes its retained selection back out.
    // (Recording sinks model the reset by just looking at post-reload writes.)
    let writes_before = changer.sink().compositions.len();
    changer.refresh();

    let sink = changer.sink();
    assert_eq!(sink.compositions[writes_before], category.composition());
    assert_eq!(*sink.ships.last().unwrap(), retained.priority_ships);
    assert_eq!(*sink.weapons.last().unwrap(), retained.priority_weapons);
    assert_eq!(*sink.fighters.last().unwrap(), retained.priority_fighters);
}

#[test]
fn test_empty_pools_apply_empty_lists() {
    let json = r#"{
        "doctrineChangeDelay": 1,
        "warships": [],
        "carriers": [],
        "phaseShips": [],
        "balanced": []
    }"#;
    let mut changer = DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        json,
        StdRng::seed_from_u64(2),
    )
    .unwrap();

    changer.on_tick();
    let sink = changer.sink();
    assert_eq!(sink.compositions.len(), 1);
    assert_eq!(sink.ships, vec![Vec::<String>::new()]);
    assert_eq!(sink.weapons, vec![Vec::<String>::new()]);
    assert_eq!(sink.fighters, vec![Vec::<String>::new()]);
}

#[test]
fn test_weighted_pool_respects_weights() {
    let json = r#"{
        "doctrineChangeDelay": 1,
        "warships": [
            { "priorityShips": ["rare"], "weight": 1 },
            { "priorityShips": ["common"], "weight": 9 }
        ],
        "carriers": [{ "priorityShips": ["c"] }],
        "phaseShips": [{ "priorityShips": ["p"] }],
        "balanced": [{ "priorityShips": ["b"] }]
    }"#;
    let mut changer = DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        json,
        StdRng::seed_from_u64(17),
    )
    .unwrap();

    let mut common = 0u32;
    let mut warship_picks = 0u32;
    for _ in 0..6_000 {
        changer.on_tick();
        if changer.current_category() == DoctrineCategory::Warship {
            warship_picks += 1;
            if changer.sink().ships.last().unwrap() == &vec!["common".to_string()] {
                common += 1;
            }
        }
    }

    assert!(warship_picks > 500, "warship drawn {} times", warship_picks);
    let freq = common as f64 / warship_picks as f64;
    assert!((freq - 0.9).abs() < 0.05, "common entry frequency {}", freq);
}

#[test]
fn test_malformed_config_reports_descriptive_error() {
    let err = DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        r#"{ "doctrineChangeDelay": true, "warships": [], "carriers": [], "phaseShips": [], "balanced": [] }"#,
        StdRng::seed_from_u64(0),
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(
        message.contains("doctrine configuration parse error"),
        "unexpected message: {}",
        message
    );
}

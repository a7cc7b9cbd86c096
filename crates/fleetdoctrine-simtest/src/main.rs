//! Fleetdoctrine Headless Harness
//!
//! Plays the host role for the doctrine changer: constructs it from the
//! bundled configuration, drives the monthly tick loop, and simulates a
//! session reload. Runs entirely in-process, no game engine required.
//!
//! Usage:
//!   cargo run -p fleetdoctrine-simtest
//!   cargo run -p fleetdoctrine-simtest -- --verbose

use fleetdoctrine_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Bundled configuration (same JSON a game host would ship) ────────────
const DOCTRINES_JSON: &str = include_str!("../../../data/doctrines.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn result(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

/// Records doctrine writes so the harness can assert on them.
#[derive(Default)]
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

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Fleetdoctrine Harness ===\n");

    let mut results = Vec::new();

    // 1. Bundled configuration parses and shapes the pools
    results.extend(validate_config(verbose));

    // 2. Anti-repeat cycle sweep
    results.extend(validate_cycle(verbose));

    // 3. Weighted picker distribution
    results.extend(validate_picker_distribution(verbose));

    // 4. Full changer loop at the configured cadence
    results.extend(validate_changer_loop(verbose));

    // 5. Session reload and refresh
    results.extend(validate_reload_refresh(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        if !r.passed {
            println!("FAIL {}: {}", r.name, r.detail);
        } else if verbose {
            println!("ok   {}: {}", r.name, r.detail);
        }
    }

    println!("\n{} passed, {} failed, {} total", passed, failed, total);
    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Validations ─────────────────────────────────────────────────────────

fn validate_config(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let config = match DoctrineConfig::from_json(DOCTRINES_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(result("config.parse", false, format!("{}", e)));
            return results;
        }
    };
    results.push(result("config.parse", true, "bundled JSON parses".into()));

    results.push(result(
        "config.cadence",
        config.cadence() >= 1,
        format!("cadence = {}", config.cadence()),
    ));

    for category in [
        DoctrineCategory::Warship,
        DoctrineCategory::Carrier,
        DoctrineCategory::PhaseFocused,
        DoctrineCategory::Balanced,
    ] {
        let groups = config.groups_for(category);
        if verbose {
            println!("  {:?}: {} declared group(s)", category, groups.len());
        }
        let weights_ok = groups.iter().all(|g| g.weight > 0.0);
        results.push(result(
            &format!("config.weights.{:?}", category),
            weights_ok,
            format!("{} group(s), all weights positive", groups.len()),
        ));
    }

    // The empty balanced list must still produce a total pool.
    let pools = DoctrinePoolSet::build(&config);
    let mut rng = StdRng::seed_from_u64(1);
    let fallback = pools.pick_for(DoctrineCategory::Balanced, &mut rng);
    results.push(result(
        "config.empty_category_fallback",
        fallback.is_empty(),
        "empty balanced list yields the default doctrine".into(),
    ));

    results
}

fn validate_cycle(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();
    let mut cycle = CategoryCycle::new();
    let mut rng = StdRng::seed_from_u64(20_260_830);

    let n = 10_000;
    let mut previous = cycle.current();
    let mut repeats = 0u32;
    let mut counts = std::collections::HashMap::new();

    for _ in 0..n {
        let selected = cycle.advance(&mut rng);
        if selected == previous {
            repeats += 1;
        }
        *counts.entry(selected).or_insert(0u32) += 1;
        previous = selected;
    }

    results.push(result(
        "cycle.anti_repeat",
        repeats == 0,
        format!("{} consecutive repeats over {} advances", repeats, n),
    ));

    let mut balanced = true;
    for (category, count) in &counts {
        let freq = *count as f64 / n as f64;
        if verbose {
            println!("  {:?}: {:.3}", category, freq);
        }
        if (freq - 0.25).abs() > 0.03 {
            balanced = false;
        }
    }
    results.push(result(
        "cycle.uniformity",
        balanced && counts.len() == 4,
        "long-run frequency within 0.25 +/- 0.03 for all categories".into(),
    ));

    results
}

fn validate_picker_distribution(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let config = DoctrineConfig::from_json(DOCTRINES_JSON).expect("validated above");
    let pools = DoctrinePoolSet::build(&config);
    let mut rng = StdRng::seed_from_u64(4_242);

    // Warship pool: weights 3 and 1, so the heavy group should land ~75%.
    let n = 20_000;
    let mut heavy = 0u32;
    for _ in 0..n {
        let picked = pools.pick_for(DoctrineCategory::Warship, &mut rng);
        if picked.priority_ships.contains(&"bulwark_mk2".to_string()) {
            heavy += 1;
        }
    }
    let freq = heavy as f64 / n as f64;
    if verbose {
        println!("  heavy warship group: {:.3}", freq);
    }
    results.push(result(
        "picker.weighted_frequency",
        (freq - 0.75).abs() < 0.02,
        format!("weight-3 group frequency {:.3}, expected ~0.750", freq),
    ));

    results
}

fn validate_changer_loop(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let mut changer = DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        DOCTRINES_JSON,
        StdRng::seed_from_u64(11),
    )
    .expect("validated above");

    let cadence = changer.cadence();
    let cycles = 50u32;
    let mut previous = None;
    let mut repeats = 0u32;

    for _ in 0..cycles {
        for _ in 0..cadence {
            changer.on_tick();
        }
        let current = changer.current_category();
        if verbose {
            println!("  month {}: {:?}", changer.sink().compositions.len() * cadence as usize, current);
        }
        if previous == Some(current) {
            repeats += 1;
        }
        previous = Some(current);
    }

    let selections = changer.sink().compositions.len();
    results.push(result(
        "changer.cadence",
        selections == cycles as usize,
        format!(
            "{} selections over {} ticks at cadence {}",
            selections,
            cycles * cadence,
            cadence
        ),
    ));
    results.push(result(
        "changer.anti_repeat",
        repeats == 0,
        format!("{} repeated categories over {} selections", repeats, cycles),
    ));

    let lists_match = changer.sink().ships.len() == selections
        && changer.sink().weapons.len() == selections
        && changer.sink().fighters.len() == selections;
    results.push(result(
        "changer.paired_writes",
        lists_match,
        "every selection wrote composition and all three lists".into(),
    ));

    results
}

fn validate_reload_refresh(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let mut changer = DoctrineChanger::from_json(
        "crimson_pact",
        RecordingSink::default(),
        0,
        DOCTRINES_JSON,
        StdRng::seed_from_u64(13),
    )
    .expect("validated above");

    // Run until a selection exists, then note what is active.
    for _ in 0..changer.cadence() {
        changer.on_tick();
    }
    let category = changer.current_category();
    let retained = changer
        .selected_priority()
        .cloned()
        .expect("selection after one full cadence");

    // Host reload wipes faction doctrine state; refresh must restore it
    // without drawing, so compare the refresh writes against the retained
    // selection.
    changer.refresh();
    changer.refresh();

    let sink = changer.sink();
    let n = sink.compositions.len();
    let restored = sink.compositions[n - 1] == category.composition()
        && sink.compositions[n - 2] == sink.compositions[n - 1]
        && *sink.ships.last().unwrap() == retained.priority_ships
        && *sink.weapons.last().unwrap() == retained.priority_weapons
        && *sink.fighters.last().unwrap() == retained.priority_fighters;

    if verbose {
        println!("  active after reload: {:?}", category);
    }
    results.push(result(
        "reload.refresh_idempotent",
        restored,
        "two refreshes re-applied the retained doctrine identically".into(),
    ));
    results.push(result(
        "reload.no_redraw",
        changer.current_category() == category,
        "refresh did not advance the cycle".into(),
    ));

    results
}

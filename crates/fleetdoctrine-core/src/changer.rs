//! The tick-driven doctrine orchestrator.

use rand::rngs::StdRng;

use crate::config::{ConfigError, DoctrineConfig};
use crate::doctrine::{CategoryCycle, CompositionRatio, DoctrineCategory};
use crate::pools::DoctrinePoolSet;
use crate::priority::PriorityDoctrine;

/// Receiver for doctrine writes, scoped to one faction.
///
/// Both writes carry complete replacement values, never diffs, and must be
/// idempotent: writing the same values twice leaves the sink in the same
/// observable state. Any cache the sink keeps keyed on the priority lists
/// is the sink's responsibility to invalidate on replacement.
pub trait FactionSink {
    /// Set the faction's fleet composition ratio.
    fn set_fleet_composition(&mut self, ratio: CompositionRatio);

    /// Replace the faction's priority ship, weapon, and fighter lists.
    fn replace_priority_lists(&mut self, ships: &[String], weapons: &[String], fighters: &[String]);
}

/// Re-randomizes a faction's combat doctrine on a fixed cadence.
///
/// Driven by host tick notifications, one call per simulated period. Owns
/// its RNG, so independent factions never share a random stream. All
/// validation happens at construction; `on_tick` and `refresh` cannot
/// fail.
#[derive(Debug)]
pub struct DoctrineChanger<S: FactionSink> {
    faction: String,
    sink: S,
    cadence: u32,
    elapsed: i32,
    cycle: CategoryCycle,
    pools: DoctrinePoolSet,
    selected: Option<PriorityDoctrine>,
    rng: StdRng,
}

impl<S: FactionSink> DoctrineChanger<S> {
    /// Build a changer from a parsed configuration document.
    ///
    /// `initial_elapsed` pre-seeds the tick counter. A host whose clock
    /// delivers a spurious tick at session start passes a negative offset
    /// to absorb it; passing `cadence - 1` makes the first real tick
    /// select immediately.
    pub fn new(
        faction: impl Into<String>,
        sink: S,
        initial_elapsed: i32,
        config: &DoctrineConfig,
        rng: StdRng,
    ) -> Self {
        let faction = faction.into();
        log::info!("Faction doctrine changer active for: {}", faction);
        Self {
            cadence: config.cadence(),
            elapsed: initial_elapsed,
            cycle: CategoryCycle::new(),
            pools: DoctrinePoolSet::build(config),
            selected: None,
            faction,
            sink,
            rng,
        }
    }

    /// Parse `json` and build a changer from it. The only fallible step in
    /// the component's lifecycle; malformed configuration fails here and
    /// the feature simply does not activate for the session.
    pub fn from_json(
        faction: impl Into<String>,
        sink: S,
        initial_elapsed: i32,
        json: &str,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let config = DoctrineConfig::from_json(json)?;
        Ok(Self::new(faction, sink, initial_elapsed, &config, rng))
    }

    /// Count one elapsed period; reselect the doctrine once the cadence is
    /// met. The same category is never selected twice in a row.
    pub fn on_tick(&mut self) {
        self.elapsed += 1;
        if self.elapsed < self.cadence as i32 {
            return;
        }
        self.elapsed = 0;

        let category = self.cycle.advance(&mut self.rng);
        let priority = self.pools.pick_for(category, &mut self.rng).clone();
        self.apply_composition(category);
        Self::apply_priority(&mut self.sink, &self.faction, &priority);
        self.selected = Some(priority);
    }

    /// Re-apply the currently active doctrine without drawing a new one
    /// and without touching the tick counter.
    ///
    /// Used when the owning session reloads: the sink's state was reset by
    /// the reload, so the retained selection is pushed back out as-is. If
    /// no selection has happened yet, only the cold-start composition is
    /// written.
    pub fn refresh(&mut self) {
        self.apply_composition(self.cycle.current());
        if let Some(priority) = &self.selected {
            Self::apply_priority(&mut self.sink, &self.faction, priority);
        }
    }

    /// The category most recently made active.
    pub fn current_category(&self) -> DoctrineCategory {
        self.cycle.current()
    }

    /// The currently applied priority doctrine, if one has been selected.
    pub fn selected_priority(&self) -> Option<&PriorityDoctrine> {
        self.selected.as_ref()
    }

    /// Reselection cadence in ticks.
    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    /// The faction this changer writes to.
    pub fn faction(&self) -> &str {
        &self.faction
    }

    /// Borrow the sink, e.g. to inspect recorded writes in tests.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn apply_composition(&mut self, category: DoctrineCategory) {
        let ratio = category.composition();
        self.sink.set_fleet_composition(ratio);
        log::info!(
            "{} fleet composition set to {}-{}-{}",
            self.faction,
            ratio.warships,
            ratio.carriers,
            ratio.phase_ships
        );
    }

    fn apply_priority(sink: &mut S, faction: &str, priority: &PriorityDoctrine) {
        sink.replace_priority_lists(
            &priority.priority_ships,
            &priority.priority_weapons,
            &priority.priority_fighters,
        );
        log_priority_list(faction, "ships", &priority.priority_ships);
        log_priority_list(faction, "weapons", &priority.priority_weapons);
        log_priority_list(faction, "fighters", &priority.priority_fighters);
    }
}

fn log_priority_list(faction: &str, kind: &str, ids: &[String]) {
    if ids.is_empty() {
        log::info!("{} has no priority {}", faction, kind);
    } else {
        log::info!("{} priority {}: [{}]", faction, kind, ids.join(","));
    }
}

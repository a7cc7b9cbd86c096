//! Per-category weighted pools of priority doctrines.

use rand::Rng;

use crate::config::{DoctrineConfig, PriorityGroup};
use crate::doctrine::DoctrineCategory;
use crate::picker::WeightedPicker;
use crate::priority::PriorityDoctrine;

/// One weighted priority-doctrine pool per doctrine category, built once
/// from configuration and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DoctrinePoolSet {
    warships: WeightedPicker<PriorityDoctrine>,
    carriers: WeightedPicker<PriorityDoctrine>,
    phase_ships: WeightedPicker<PriorityDoctrine>,
    balanced: WeightedPicker<PriorityDoctrine>,
}

impl DoctrinePoolSet {
    /// Build all four pools, preserving configuration order within each.
    pub fn build(config: &DoctrineConfig) -> Self {
        Self {
            warships: build_pool(&config.warships),
            carriers: build_pool(&config.carriers),
            phase_ships: build_pool(&config.phase_ships),
            balanced: build_pool(&config.balanced),
        }
    }

    /// Weighted-pick a priority doctrine from the given category's pool.
    pub fn pick_for(&self, category: DoctrineCategory, rng: &mut impl Rng) -> &PriorityDoctrine {
        match category {
            DoctrineCategory::Warship => self.warships.pick(rng),
            DoctrineCategory::Carrier => self.carriers.pick(rng),
            DoctrineCategory::PhaseFocused => self.phase_ships.pick(rng),
            DoctrineCategory::Balanced => self.balanced.pick(rng),
        }
    }
}

/// A category with no declared groups gets a single empty doctrine at
/// weight 1, so no pool is ever empty.
fn build_pool(groups: &[PriorityGroup]) -> WeightedPicker<PriorityDoctrine> {
    if groups.is_empty() {
        let mut picker = WeightedPicker::with_capacity(1);
        picker.add(PriorityDoctrine::default(), 1.0);
        return picker;
    }

    let mut picker = WeightedPicker::with_capacity(groups.len());
    for group in groups {
        picker.add(group.doctrine.clone(), group.weight);
    }
    picker
}

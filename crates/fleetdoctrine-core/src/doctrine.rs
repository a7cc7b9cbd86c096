//! Doctrine categories and the anti-repeat selection cycle.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Top-level fleet composition archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoctrineCategory {
    Warship,
    Carrier,
    PhaseFocused,
    Balanced,
}

/// Relative weighting of warship, carrier, and phase-ship hulls a faction's
/// fleet generator should favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionRatio {
    pub warships: u32,
    pub carriers: u32,
    pub phase_ships: u32,
}

impl DoctrineCategory {
    /// Fixed composition ratio for this category.
    pub fn composition(&self) -> CompositionRatio {
        match self {
            DoctrineCategory::Warship => CompositionRatio {
                warships: 5,
                carriers: 1,
                phase_ships: 1,
            },
            DoctrineCategory::Carrier => CompositionRatio {
                warships: 1,
                carriers: 5,
                phase_ships: 1,
            },
            DoctrineCategory::PhaseFocused => CompositionRatio {
                warships: 1,
                carriers: 1,
                phase_ships: 5,
            },
            DoctrineCategory::Balanced => CompositionRatio {
                warships: 3,
                carriers: 2,
                phase_ships: 2,
            },
        }
    }
}

/// Anti-repeat selection state over the four doctrine categories.
///
/// Four slots hold a permutation of the categories. Slot 3 always holds the
/// most recently activated category and is excluded from sampling; slots
/// 0-2 are drawn uniformly. After a draw, the picked category swaps into
/// slot 3 and the previously excluded one re-enters the pool, so two
/// consecutive draws can never return the same category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCycle {
    slots: [DoctrineCategory; 4],
}

impl CategoryCycle {
    /// Cold-start permutation: Balanced occupies the "last used" slot, so
    /// the first advance draws from the other three categories.
    pub fn new() -> Self {
        Self {
            slots: [
                DoctrineCategory::Warship,
                DoctrineCategory::Carrier,
                DoctrineCategory::PhaseFocused,
                DoctrineCategory::Balanced,
            ],
        }
    }

    /// Draw the next active category, never repeating the previous result.
    pub fn advance(&mut self, rng: &mut impl Rng) -> DoctrineCategory {
        // Slot 3 is excluded from the draw.
        let i = rng.gen_range(0..3);
        let selected = self.slots[i];
        self.slots[i] = self.slots[3];
        self.slots[3] = selected;
        selected
    }

    /// The most recently activated category, without drawing a new one.
    pub fn current(&self) -> DoctrineCategory {
        self.slots[3]
    }
}

impl Default for CategoryCycle {
    fn default() -> Self {
        Self::new()
    }
}

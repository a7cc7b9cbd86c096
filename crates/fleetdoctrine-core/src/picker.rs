//! Weighted random sampling over a fixed set of entries.
//!
//! Pickers are populated once at construction time and sampled read-only
//! any number of times afterwards. The sampling scan clamps at both ends,
//! so floating-point rounding at the upper boundary can never read past
//! the last entry.

use rand::Rng;

/// A value paired with its sampling weight.
#[derive(Debug, Clone)]
struct WeightedEntry<T> {
    item: T,
    weight: f32,
}

/// Weighted random picker over a fixed sequence of entries.
///
/// Entries keep insertion order, so the same inputs always build the same
/// picker. Sampling never mutates the picker.
#[derive(Debug, Clone)]
pub struct WeightedPicker<T> {
    entries: Vec<WeightedEntry<T>>,
    total: f32,
}

impl<T> WeightedPicker<T> {
    /// Create an empty picker with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            total: 0.0,
        }
    }

    /// Add an entry. A declared weight of zero or less is coerced to 1, so
    /// every stored entry keeps a positive weight and stays reachable.
    pub fn add(&mut self, item: T, weight: f32) {
        let weight = if weight <= 0.0 { 1.0 } else { weight };
        self.total += weight;
        self.entries.push(WeightedEntry { item, weight });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all stored entry weights.
    pub fn total_weight(&self) -> f32 {
        self.total
    }

    /// Pick an entry at random, weighted by entry weight.
    ///
    /// Panics if the picker has no entries. Builders must guarantee at
    /// least one entry before any sampling happens.
    pub fn pick(&self, rng: &mut impl Rng) -> &T {
        self.pick_at(rng.gen::<f32>() * self.total)
    }

    /// Resolve a raw draw to an entry.
    ///
    /// A draw above `total` is clamped back to `total`, and ties at a
    /// cumulative boundary go to the earlier entry (`<=`), so a draw of
    /// exactly `total` lands on the last entry. The final index clamp
    /// keeps the lookup in bounds even if rounding let the scan run off
    /// the end.
    fn pick_at(&self, draw: f32) -> &T {
        assert!(
            !self.entries.is_empty(),
            "weighted picker sampled with no entries"
        );
        let draw = if draw > self.total { self.total } else { draw };

        let mut weight_so_far = 0.0;
        let mut index = 0;
        for entry in &self.entries {
            weight_so_far += entry.weight;
            if draw <= weight_so_far {
                break;
            }
            index += 1;
        }
        &self.entries[index.min(self.entries.len() - 1)].item
    }
}

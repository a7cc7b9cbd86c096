//! Priority doctrine value objects.

use serde::{Deserialize, Serialize};

/// Identifier sets a faction should prefer above generic selection, split
/// into ships, weapons, and fighters.
///
/// Deserializes straight from a configuration entry with camelCase field
/// names; every list defaults to empty, so a bare `{}` entry is valid and
/// `PriorityDoctrine::default()` is the "no priorities at all" doctrine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriorityDoctrine {
    pub priority_ships: Vec<String>,
    pub priority_weapons: Vec<String>,
    pub priority_fighters: Vec<String>,
}

impl PriorityDoctrine {
    /// True when none of the three lists has any entries.
    pub fn is_empty(&self) -> bool {
        self.priority_ships.is_empty()
            && self.priority_weapons.is_empty()
            && self.priority_fighters.is_empty()
    }
}

//! Fleetdoctrine Core - dynamic combat doctrine engine
//!
//! Periodically re-randomizes a faction's combat doctrine on a fixed
//! cadence: a fleet-composition archetype plus weighted-picked priority
//! equipment lists, with the guarantee that the same archetype is never
//! chosen twice in a row.
//!
//! # Architecture
//!
//! - **WeightedPicker**: generic weighted sampling, built once from
//!   configuration.
//! - **CategoryCycle**: 4-slot anti-repeat permutation over the doctrine
//!   categories.
//! - **DoctrinePoolSet**: one weighted pool of [`PriorityDoctrine`] values
//!   per category.
//! - **DoctrineChanger**: the orchestrator, driven by host tick
//!   notifications and writing through a [`FactionSink`].
//!
//! # Example
//!
//! ```rust,no_run
//! use fleetdoctrine_core::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! struct PrintSink;
//!
//! impl FactionSink for PrintSink {
//!     fn set_fleet_composition(&mut self, ratio: CompositionRatio) {
//!         println!("composition {}-{}-{}", ratio.warships, ratio.carriers, ratio.phase_ships);
//!     }
//!
//!     fn replace_priority_lists(&mut self, ships: &[String], _: &[String], _: &[String]) {
//!         println!("priority ships: {:?}", ships);
//!     }
//! }
//!
//! let json = r#"{
//!     "doctrineChangeDelay": 6,
//!     "warships": [{ "priorityShips": ["bulwark_mk2"], "weight": 2 }],
//!     "carriers": [],
//!     "phaseShips": [],
//!     "balanced": []
//! }"#;
//!
//! let mut changer = DoctrineChanger::from_json(
//!     "crimson_pact",
//!     PrintSink,
//!     0,
//!     json,
//!     StdRng::from_entropy(),
//! ).expect("valid doctrine config");
//!
//! // One call per simulated month; every 6th call reselects the doctrine.
//! loop {
//!     changer.on_tick();
//! }
//! ```

pub mod changer;
pub mod config;
pub mod doctrine;
pub mod picker;
pub mod pools;
pub mod priority;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::changer::{DoctrineChanger, FactionSink};
    pub use crate::config::{ConfigError, DoctrineConfig};
    pub use crate::doctrine::{CategoryCycle, CompositionRatio, DoctrineCategory};
    pub use crate::pools::DoctrinePoolSet;
    pub use crate::priority::PriorityDoctrine;
}

//! # Islandsim Core
//!
//! The simulation engine for a closed island ecosystem of plants and animals.
//!
//! This crate contains the daily step logic, including:
//! - Organism lifecycle (growth, aging, death) and the species preset table
//! - Plant expansion bids arbitrated against a shared land pool
//! - Foraging, hunting, starvation and reproduction
//! - Weather and temperature effects
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use islandsim_core::Ecosystem;
//! use islandsim_data::Species;
//!
//! let mut island = Ecosystem::with_seed(10_000.0, 25, 42);
//! island.spawn_species(Species::Grass, 10);
//! island.spawn_species(Species::Rabbit, 3);
//!
//! for _ in 0..5 {
//!     island.simulate_step();
//! }
//! assert_eq!(island.day, 5);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// The island orchestrator and its daily step
pub mod ecosystem;
/// Temperature and weather state
pub mod environment;
/// Animal feeding, starvation and reproduction
pub mod fauna;
/// Plant expansion, eating and fruiting
pub mod flora;
/// Shared organism primitives and the offspring factory
pub mod lifecycle;
/// Run metrics collection and logging setup
pub mod metrics;
/// Per-species numeric presets
pub mod species;
/// Daily phases (environment, expansion, feeding, census)
pub mod systems;

pub use config::AppConfig;
pub use ecosystem::Ecosystem;
pub use fauna::FaunaLogic;
pub use flora::FloraLogic;
pub use lifecycle::Lifeform;
pub use metrics::{init_logging, Metrics};
pub use species::SpeciesTable;

//! Plain data types shared by the island simulation crates.
//!
//! Nothing in here owns behavior beyond trivial accessors; the rules that
//! mutate these values live in `islandsim_core`.

pub mod data;

pub use data::census::{Census, StepSummary};
pub use data::environment::{Conditions, Weather};
pub use data::organism::{
    Animal, EdibilityRule, HuntTraits, Organism, Plant, Vitals, YieldPool,
};
pub use data::species::{FeedingRole, Kingdom, Species, UnknownSpecies};

//! Daily phases of the ecosystem step, as free functions over the organism
//! collections. The [`crate::ecosystem::Ecosystem`] sequences them.

pub mod environment;
pub mod expansion;
pub mod feeding;
pub mod stats;

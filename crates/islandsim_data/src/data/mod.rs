//! Core data structures for the island simulation.

pub mod census;
pub mod environment;
pub mod organism;
pub mod species;

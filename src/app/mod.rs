//! The simulation driver: configuration loading, the day loop, pausing and
//! reporting. The engine in [`crate::model`] knows nothing about any of it.

pub mod error;
pub mod pause;
pub mod report;
pub mod runner;
pub mod settings;

pub use error::AppError;
pub use pause::PauseSignal;
pub use report::{Reporter, RunOutcome};
pub use runner::SimulationRunner;

use super::environment::Weather;
use super::species::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only population snapshot handed to reporters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub day: u32,
    pub temperature: i32,
    pub weather: Option<Weather>,
    pub flora_total: usize,
    pub fauna_total: usize,
    pub species_counts: BTreeMap<Species, usize>,
}

impl Census {
    #[must_use]
    pub fn count(&self, species: Species) -> usize {
        self.species_counts.get(&species).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flora_total == 0 && self.fauna_total == 0
    }
}

/// Tallies of what happened during one simulated day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    pub day: u32,
    pub free_area: f64,
    pub expansion_requests: usize,
    pub plants_spawned: usize,
    pub births: usize,
    pub forages_attempted: usize,
    pub forages_succeeded: usize,
    pub hunts_attempted: usize,
    pub hunts_succeeded: usize,
    pub storm_casualties: usize,
    pub flora_deaths: usize,
    pub fauna_deaths: usize,
}

//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration mapping to an `island.toml` file. Every
//! section falls back to its `Default` impl, so a file only needs the keys it
//! wants to change.
//!
//! ## Example `island.toml`
//!
//! ```toml
//! [island]
//! capacity = 12000.0
//! rounds = 60
//! seed = 7
//!
//! [rules]
//! weather_roll = "single_draw"
//! grow_fauna = true
//!
//! [population]
//! grass = 40
//! rabbit = 12
//!
//! [run]
//! speed = "fast"
//! mode = "step"
//! ```

use crate::species::SpeciesTable;
use islandsim_data::Species;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Island-level parameters handed to the ecosystem on construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct IslandConfig {
    /// Total land area shared by all plants.
    pub capacity: f64,
    pub initial_temperature: i32,
    /// Number of days the driver simulates.
    pub rounds: u32,
    pub seed: Option<u64>,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000.0,
            initial_temperature: 25,
            rounds: 30,
            seed: None,
        }
    }
}

/// How the daily weather is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherRoll {
    /// Windy and storm are tested against two separate draws, so storms land
    /// at roughly `(1 - windy) * storm` instead of `storm`.
    #[default]
    IndependentDraws,
    /// One draw partitioned into windy / storm / normal bands.
    SingleDraw,
}

/// Rules of the daily step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EcosystemConfig {
    /// Inclusive lower bound of the daily temperature roll.
    pub min_temperature: i32,
    /// Exclusive upper bound of the daily temperature roll.
    pub max_temperature: i32,
    pub windy_chance: f64,
    pub storm_chance: f64,
    pub weather_roll: WeatherRoll,
    pub windy_expansion_modifier: f64,
    pub heat_threshold: i32,
    pub heat_hunt_modifier: f64,
    /// Fraction of max size a plant needs before it asks for land.
    pub plant_maturity_fraction: f64,
    /// Fraction of max size an animal needs before it can breed.
    pub animal_maturity_fraction: f64,
    pub reproduction_health: f64,
    pub newborn_health: f64,
    /// Days an animal may go unfed before health starts dropping.
    pub hunger_grace_days: u32,
    pub starvation_multiplier: f64,
    /// Chance an omnivore forages instead of hunting on a given day.
    pub omnivore_forage_chance: f64,
    /// Animals also call `grow` during the growth phase.
    pub grow_fauna: bool,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            min_temperature: 22,
            max_temperature: 40,
            windy_chance: 0.3,
            storm_chance: 0.1,
            weather_roll: WeatherRoll::IndependentDraws,
            windy_expansion_modifier: 1.5,
            heat_threshold: 36,
            heat_hunt_modifier: 0.5,
            plant_maturity_fraction: 0.5,
            animal_maturity_fraction: 0.7,
            reproduction_health: 60.0,
            newborn_health: 50.0,
            hunger_grace_days: 3,
            starvation_multiplier: 10.0,
            omnivore_forage_chance: 0.5,
            grow_fauna: false,
        }
    }
}

impl EcosystemConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.min_temperature < self.max_temperature,
            "Temperature range must be non-empty"
        );
        for (name, p) in [
            ("Windy chance", self.windy_chance),
            ("Storm chance", self.storm_chance),
            ("Omnivore forage chance", self.omnivore_forage_chance),
            ("Plant maturity fraction", self.plant_maturity_fraction),
            ("Animal maturity fraction", self.animal_maturity_fraction),
        ] {
            anyhow::ensure!((0.0..=1.0).contains(&p), "{name} must be in [0.0, 1.0]");
        }
        anyhow::ensure!(
            self.windy_chance + self.storm_chance <= 1.0,
            "Windy and storm chances must not exceed 1.0 together"
        );
        anyhow::ensure!(
            self.windy_expansion_modifier >= 0.0,
            "Windy expansion modifier must be non-negative"
        );
        anyhow::ensure!(
            self.heat_hunt_modifier >= 0.0,
            "Heat hunt modifier must be non-negative"
        );
        anyhow::ensure!(
            self.newborn_health > 0.0 && self.newborn_health <= 100.0,
            "Newborn health must be in (0, 100]"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.reproduction_health),
            "Reproduction health must be in [0, 100]"
        );
        anyhow::ensure!(
            self.starvation_multiplier >= 0.0,
            "Starvation multiplier must be non-negative"
        );
        Ok(())
    }
}

/// Starting head count per species.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PopulationConfig {
    pub eucalyptus: usize,
    pub mango_tree: usize,
    pub elderberry: usize,
    pub grass: usize,
    pub rabbit: usize,
    pub koala: usize,
    pub fox: usize,
    pub leopard: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            eucalyptus: 5,
            mango_tree: 5,
            elderberry: 5,
            grass: 10,
            rabbit: 5,
            koala: 3,
            fox: 2,
            leopard: 1,
        }
    }
}

impl PopulationConfig {
    /// A population with nobody in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            eucalyptus: 0,
            mango_tree: 0,
            elderberry: 0,
            grass: 0,
            rabbit: 0,
            koala: 0,
            fox: 0,
            leopard: 0,
        }
    }

    fn slot(&mut self, species: Species) -> &mut usize {
        match species {
            Species::Eucalyptus => &mut self.eucalyptus,
            Species::MangoTree => &mut self.mango_tree,
            Species::Elderberry => &mut self.elderberry,
            Species::Grass => &mut self.grass,
            Species::Rabbit => &mut self.rabbit,
            Species::Koala => &mut self.koala,
            Species::Fox => &mut self.fox,
            Species::Leopard => &mut self.leopard,
        }
    }

    #[must_use]
    pub fn count(&self, species: Species) -> usize {
        match species {
            Species::Eucalyptus => self.eucalyptus,
            Species::MangoTree => self.mango_tree,
            Species::Elderberry => self.elderberry,
            Species::Grass => self.grass,
            Species::Rabbit => self.rabbit,
            Species::Koala => self.koala,
            Species::Fox => self.fox,
            Species::Leopard => self.leopard,
        }
    }

    pub fn set(&mut self, species: Species, count: usize) {
        *self.slot(species) = count;
    }

    /// `(species, count)` pairs in species order, plants first.
    pub fn iter(&self) -> impl Iterator<Item = (Species, usize)> + '_ {
        Species::ALL.into_iter().map(move |s| (s, self.count(s)))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| n).sum()
    }
}

/// Delay between simulated days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
    Instant,
}

impl Speed {
    #[must_use]
    pub fn delay(&self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1000),
            Speed::Normal => Duration::from_millis(500),
            Speed::Fast => Duration::from_millis(100),
            Speed::Instant => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Only the final day is reported.
    #[default]
    Auto,
    /// Every day is reported.
    Step,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub speed: Speed,
    pub mode: RunMode,
    pub format: ReportFormat,
    /// Days between metrics log lines.
    pub log_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            speed: Speed::Normal,
            mode: RunMode::Auto,
            format: ReportFormat::Text,
            log_interval: 10,
        }
    }
}

/// Largest starting head count accepted per species.
pub const MAX_STARTING_COUNT: usize = 50;
/// Smallest island the driver accepts.
pub const MIN_CAPACITY: f64 = 10_000.0;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub island: IslandConfig,
    pub rules: EcosystemConfig,
    pub population: PopulationConfig,
    pub species: SpeciesTable,
    pub run: RunConfig,
}

impl AppConfig {
    /// Checks every driver-side precondition before organisms reach the engine.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.island.capacity.is_finite() && self.island.capacity >= MIN_CAPACITY,
            "Island capacity must be at least {MIN_CAPACITY}"
        );
        anyhow::ensure!(self.island.rounds >= 1, "Rounds must be at least 1");
        anyhow::ensure!(self.run.log_interval > 0, "Log interval must be positive");

        for (species, count) in self.population.iter() {
            anyhow::ensure!(
                count <= MAX_STARTING_COUNT,
                "Starting {species} count must be in [0, {MAX_STARTING_COUNT}], got {count}"
            );
        }

        self.rules.validate()?;
        self.species.validate()?;
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_island_rejected() {
        let config = AppConfig {
            island: IslandConfig {
                capacity: 500.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = AppConfig {
            island: IslandConfig {
                rounds: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_population_over_limit_rejected() {
        let mut config = AppConfig::default();
        config.population.set(Species::Fox, 51);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weather_chances_over_one_rejected() {
        let config = AppConfig {
            rules: EcosystemConfig {
                windy_chance: 0.8,
                storm_chance: 0.3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_temperature_range_rejected() {
        let config = AppConfig {
            rules: EcosystemConfig {
                min_temperature: 30,
                max_temperature: 30,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [island]
            rounds = 12
            seed = 99

            [rules]
            weather_roll = "single_draw"

            [population]
            rabbit = 20

            [run]
            speed = "instant"
            mode = "step"
            "#,
        )
        .unwrap();
        assert_eq!(config.island.rounds, 12);
        assert_eq!(config.island.seed, Some(99));
        assert_eq!(config.island.capacity, 10_000.0);
        assert_eq!(config.rules.weather_roll, WeatherRoll::SingleDraw);
        assert_eq!(config.rules.heat_threshold, 36);
        assert_eq!(config.population.count(Species::Rabbit), 20);
        assert_eq!(config.population.count(Species::Grass), 10);
        assert_eq!(config.run.speed, Speed::Instant);
        assert_eq!(config.run.mode, RunMode::Step);
        assert_eq!(config.species, SpeciesTable::default());
    }

    #[test]
    fn test_invalid_toml_value_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [island]
            capacity = 10.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_population_helpers() {
        let mut population = PopulationConfig::empty();
        assert_eq!(population.total(), 0);
        population.set(Species::Koala, 4);
        population.set(Species::Grass, 6);
        assert_eq!(population.total(), 10);
        assert_eq!(population.count(Species::Koala), 4);
    }

    #[test]
    fn test_speed_delays() {
        assert!(Speed::Slow.delay() > Speed::Normal.delay());
        assert!(Speed::Normal.delay() > Speed::Fast.delay());
        assert_eq!(Speed::Instant.delay(), Duration::ZERO);
    }
}

//! The island: owner of every organism, the environment and the land pool.

use crate::config::{AppConfig, EcosystemConfig, PopulationConfig};
use crate::environment::Environment;
use crate::lifecycle::spawn;
use crate::species::SpeciesTable;
use crate::systems::stats;
use islandsim_data::{Animal, Census, Conditions, Organism, Plant, Species, StepSummary, Weather};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

pub mod step;

#[derive(Debug, Clone)]
pub struct Ecosystem {
    id: Uuid,
    capacity: f64,
    pub day: u32,
    pub environment: Environment,
    pub flora: Vec<Plant>,
    pub fauna: Vec<Animal>,
    rules: EcosystemConfig,
    species: SpeciesTable,
    rng: ChaCha8Rng,
    summary: StepSummary,
}

impl Ecosystem {
    /// A fresh, empty island driven by an entropy-seeded random source.
    #[must_use]
    pub fn new(capacity: f64, initial_temperature: i32) -> Self {
        Self::with_rng(capacity, initial_temperature, ChaCha8Rng::from_entropy())
    }

    /// Same as [`Ecosystem::new`] but every draw is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(capacity: f64, initial_temperature: i32, seed: u64) -> Self {
        Self::with_rng(
            capacity,
            initial_temperature,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    fn with_rng(capacity: f64, initial_temperature: i32, mut rng: ChaCha8Rng) -> Self {
        Self {
            id: Uuid::from_u128(rng.gen::<u128>()),
            capacity,
            day: 0,
            environment: Environment::new(initial_temperature),
            flora: Vec::new(),
            fauna: Vec::new(),
            rules: EcosystemConfig::default(),
            species: SpeciesTable::default(),
            rng,
            summary: StepSummary::default(),
        }
    }

    /// Builds and populates an island from a validated configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let island = &config.island;
        let mut ecosystem = match island.seed {
            Some(seed) => Self::with_seed(island.capacity, island.initial_temperature, seed),
            None => Self::new(island.capacity, island.initial_temperature),
        }
        .with_rules(config.rules.clone())
        .with_species(config.species.clone());
        ecosystem.populate(&config.population);
        ecosystem
    }

    #[must_use]
    pub fn with_rules(mut self, rules: EcosystemConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_species(mut self, species: SpeciesTable) -> Self {
        self.species = species;
        self
    }

    /// Restarts the random source; the next draws depend only on `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Pins temperature and weather for the coming days, or releases them
    /// back to the random roll with `None`.
    pub fn force_conditions(&mut self, conditions: Option<Conditions>) {
        self.environment.forced = conditions;
    }

    /// Takes ownership of `organism` and files it under flora or fauna.
    pub fn add_organism(&mut self, organism: impl Into<Organism>) {
        match organism.into() {
            Organism::Flora(mut plant) => {
                plant.habitat = Some(self.id);
                self.flora.push(plant);
            }
            Organism::Fauna(mut animal) => {
                animal.habitat = Some(self.id);
                self.fauna.push(animal);
            }
        }
    }

    /// Adds `count` default individuals of `species` from the species table.
    pub fn spawn_species(&mut self, species: Species, count: usize) {
        for _ in 0..count {
            let organism = spawn(species, &self.species, &mut self.rng);
            self.add_organism(organism);
        }
    }

    pub fn populate(&mut self, population: &PopulationConfig) {
        for (species, count) in population.iter() {
            self.spawn_species(species, count);
        }
        tracing::debug!(
            flora = self.flora.len(),
            fauna = self.fauna.len(),
            "Island populated"
        );
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.environment.temperature
    }

    #[must_use]
    pub fn weather(&self) -> Option<Weather> {
        self.environment.weather
    }

    #[must_use]
    pub fn rules(&self) -> &EcosystemConfig {
        &self.rules
    }

    #[must_use]
    pub fn species_table(&self) -> &SpeciesTable {
        &self.species
    }

    /// Tallies of the most recent (or current) day.
    #[must_use]
    pub fn last_summary(&self) -> StepSummary {
        self.summary
    }

    #[must_use]
    pub fn census(&self) -> Census {
        stats::census(self.day, &self.environment, &self.flora, &self.fauna)
    }

    /// Nothing left alive on the island.
    #[must_use]
    pub fn is_barren(&self) -> bool {
        self.flora.is_empty() && self.fauna.is_empty()
    }
}

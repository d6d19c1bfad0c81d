pub mod macros;

use islandsim_lib::model::config::EcosystemConfig;
use islandsim_lib::model::ecosystem::Ecosystem;
use islandsim_lib::model::lifecycle;
use islandsim_lib::model::species::SpeciesTable;
use islandsim_lib::model::state::{Animal, Conditions, Plant, Species, Weather};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type OrganismMod = Box<dyn FnOnce(&mut Ecosystem)>;

#[allow(dead_code)]
pub struct EcosystemBuilder {
    capacity: f64,
    temperature: i32,
    seed: u64,
    rules: EcosystemConfig,
    species: SpeciesTable,
    conditions: Option<Conditions>,
    mods: Vec<OrganismMod>,
}

#[allow(dead_code)]
impl EcosystemBuilder {
    pub fn new() -> Self {
        Self {
            capacity: 10_000.0,
            temperature: 25,
            seed: 42,
            rules: EcosystemConfig::default(),
            species: SpeciesTable::default(),
            conditions: None,
            mods: Vec::new(),
        }
    }

    pub fn capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rules<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut EcosystemConfig),
    {
        modifier(&mut self.rules);
        self
    }

    /// Pins the weather for every step.
    pub fn weather(mut self, temperature: i32, weather: Weather) -> Self {
        self.conditions = Some(Conditions {
            temperature,
            weather,
        });
        self
    }

    pub fn calm(self) -> Self {
        self.weather(25, Weather::Normal)
    }

    pub fn with(mut self, species: Species, count: usize) -> Self {
        self.mods
            .push(Box::new(move |eco| eco.spawn_species(species, count)));
        self
    }

    pub fn with_plant(mut self, plant: Plant) -> Self {
        self.mods.push(Box::new(move |eco| eco.add_organism(plant)));
        self
    }

    pub fn with_animal(mut self, animal: Animal) -> Self {
        self.mods.push(Box::new(move |eco| eco.add_organism(animal)));
        self
    }

    pub fn build(self) -> Ecosystem {
        let mut eco = Ecosystem::with_seed(self.capacity, self.temperature, self.seed)
            .with_rules(self.rules)
            .with_species(self.species);
        eco.force_conditions(self.conditions);
        for modifier in self.mods {
            modifier(&mut eco);
        }
        eco
    }
}

/// A default individual of `species`, outside any ecosystem.
#[allow(dead_code)]
pub fn plant(species: Species) -> Plant {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    lifecycle::spawn_plant(species, &SpeciesTable::default(), &mut rng)
        .expect("species is not a plant")
}

#[allow(dead_code)]
pub fn animal(species: Species) -> Animal {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    lifecycle::spawn_animal(species, &SpeciesTable::default(), &mut rng)
        .expect("species is not an animal")
}

/// Like [`plant`] but already at full size.
#[allow(dead_code)]
pub fn mature_plant(species: Species) -> Plant {
    let mut p = plant(species);
    p.vitals.current_size = p.vitals.max_size;
    p
}

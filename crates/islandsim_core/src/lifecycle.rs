use crate::species::{Preset, SpeciesTable};
use islandsim_data::{Animal, Organism, Plant, Species, Vitals};
use rand::Rng;
use uuid::Uuid;

/// Primitives every organism shares: growing, dying and the liveness check.
pub trait Lifeform {
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Kingdom-specific liveness; never true again once it turns false.
    fn is_alive(&self) -> bool;

    /// Grows by `grow_rate`, capped at `max_size`. Dead organisms keep their size.
    fn grow(&mut self) -> f64 {
        if self.is_alive() {
            let vitals = self.vitals_mut();
            vitals.current_size = (vitals.current_size * (1.0 + vitals.grow_rate))
                .min(vitals.max_size)
                .max(0.0);
        }
        self.vitals().current_size
    }

    fn die(&mut self) {
        self.vitals_mut().alive = false;
    }

    fn age_one_day(&mut self) {
        let vitals = self.vitals_mut();
        vitals.age = vitals.age.saturating_add(1);
    }
}

impl Lifeform for Plant {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn is_alive(&self) -> bool {
        self.vitals.alive && self.vitals.current_size >= self.vitals.min_size
    }
}

impl Lifeform for Animal {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn is_alive(&self) -> bool {
        self.vitals.alive && self.health > 0.0 && self.vitals.current_size > 0.0
    }
}

/// Creates a default individual of `species` with a fresh id drawn from `rng`.
///
/// This is the only constructor for organisms of a given species; offspring
/// and plant expansions both go through it, keyed by the parent's species.
pub fn spawn<R: Rng + ?Sized>(species: Species, table: &SpeciesTable, rng: &mut R) -> Organism {
    let id = Uuid::from_u128(rng.gen::<u128>());
    match table.preset(species) {
        Preset::Flora(preset) => Organism::Flora(preset.instantiate(species, id)),
        Preset::Fauna(preset) => Organism::Fauna(preset.instantiate(species, id)),
    }
}

/// Plant-only variant of [`spawn`]; `None` when `species` is an animal.
pub fn spawn_plant<R: Rng + ?Sized>(
    species: Species,
    table: &SpeciesTable,
    rng: &mut R,
) -> Option<Plant> {
    match spawn(species, table, rng) {
        Organism::Flora(plant) => Some(plant),
        Organism::Fauna(_) => None,
    }
}

/// Animal-only variant of [`spawn`]; `None` when `species` is a plant.
pub fn spawn_animal<R: Rng + ?Sized>(
    species: Species,
    table: &SpeciesTable,
    rng: &mut R,
) -> Option<Animal> {
    match spawn(species, table, rng) {
        Organism::Fauna(animal) => Some(animal),
        Organism::Flora(_) => None,
    }
}

/// Turns a fractional rate into a whole count: the integer part is
/// guaranteed and the fractional part is the chance of one more.
pub fn stochastic_count<R: Rng + ?Sized>(exact: f64, rng: &mut R) -> usize {
    let exact = exact.max(0.0);
    let guaranteed = exact.floor();
    let fractional = exact - guaranteed;
    let bonus = usize::from(rng.gen::<f64>() < fractional);
    guaranteed as usize + bonus
}

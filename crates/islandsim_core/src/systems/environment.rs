use crate::config::EcosystemConfig;
use crate::environment::Environment;
use crate::lifecycle::Lifeform;
use islandsim_data::{Animal, Plant, Species, Weather};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Organisms killed by a storm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StormCasualties {
    pub plant: Option<Species>,
    pub animal: Option<Species>,
}

impl StormCasualties {
    #[must_use]
    pub fn count(&self) -> usize {
        usize::from(self.plant.is_some()) + usize::from(self.animal.is_some())
    }
}

/// Puts every daily modifier back to neutral.
pub fn reset_modifiers(flora: &mut [Plant], fauna: &mut [Animal]) {
    for plant in flora.iter_mut() {
        plant.expansion_modifier = 1.0;
    }
    for animal in fauna.iter_mut() {
        animal.hunt_modifier = 1.0;
    }
}

/// Applies today's weather and temperature to the island.
///
/// Heat only touches animals that can hunt.
pub fn apply_effects<R: Rng + ?Sized>(
    env: &Environment,
    flora: &mut [Plant],
    fauna: &mut [Animal],
    rules: &EcosystemConfig,
    rng: &mut R,
) -> StormCasualties {
    let mut casualties = StormCasualties::default();

    match env.weather {
        Some(Weather::Windy) => {
            for plant in flora.iter_mut() {
                plant.expansion_modifier = rules.windy_expansion_modifier;
            }
        }
        Some(Weather::Storm) => {
            if let Some(plant) = flora.iter_mut().filter(|p| p.is_alive()).choose(rng) {
                plant.die();
                casualties.plant = Some(plant.species);
            }
            if let Some(animal) = fauna.iter_mut().filter(|a| a.is_alive()).choose(rng) {
                animal.die();
                casualties.animal = Some(animal.species);
            }
            if casualties.count() > 0 {
                tracing::info!(
                    plant = ?casualties.plant,
                    animal = ?casualties.animal,
                    "Storm casualties"
                );
            }
        }
        Some(Weather::Normal) | None => {}
    }

    if env.is_hot(rules) {
        for animal in fauna.iter_mut().filter(|a| a.can_hunt()) {
            animal.hunt_modifier = rules.heat_hunt_modifier;
        }
    }

    casualties
}

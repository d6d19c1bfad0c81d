//! Animal behavior: feeding, starvation and reproduction.

use crate::config::EcosystemConfig;
use crate::flora::FloraLogic;
use crate::lifecycle::{spawn_animal, stochastic_count, Lifeform};
use crate::species::SpeciesTable;
use islandsim_data::{Animal, Plant};
use rand::Rng;

/// Health never rises above this.
pub const MAX_HEALTH: f64 = 100.0;

/// Bite size taken from a plant on one forage.
pub const FORAGE_BITE: f64 = 1.0;

/// Result of a single feeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// The animal is dead or cannot perform this action.
    Idle,
    /// Nothing suitable to eat or catch.
    NoTarget,
    /// A target was picked but yielded nothing.
    Missed,
    Fed,
}

impl FeedOutcome {
    #[must_use]
    pub fn attempted(&self) -> bool {
        matches!(self, FeedOutcome::Missed | FeedOutcome::Fed)
    }
}

pub trait FaunaLogic {
    /// Restores health after a meal and clears hunger.
    fn heal(&mut self);

    /// Loses `damage` health, dying at zero.
    fn suffer(&mut self, damage: f64);

    /// One day of hunger; health drops once the grace period is over.
    fn starvation(&mut self, rules: &EcosystemConfig);

    /// Bites one uniformly chosen living plant.
    fn forage<R: Rng + ?Sized>(&mut self, flora: &mut [Plant], rng: &mut R) -> FeedOutcome;

    /// Chases one uniformly chosen living animal smaller than itself.
    ///
    /// `others` must not contain the hunter; callers split it out of the
    /// population slice. Self-harm is rolled whether or not the hunt lands.
    fn hunt<'a, I, R>(&mut self, others: I, rng: &mut R) -> FeedOutcome
    where
        I: IntoIterator<Item = &'a mut Animal>,
        R: Rng + ?Sized;

    /// Health and size decide; an animal lost earlier in the day still
    /// qualifies if it was healthy and grown when it fell.
    #[must_use]
    fn can_reproduce(&self, rules: &EcosystemConfig) -> bool;

    /// Newborns of the same species, built from the species table.
    fn reproduce<R: Rng + ?Sized>(
        &self,
        table: &SpeciesTable,
        rules: &EcosystemConfig,
        rng: &mut R,
    ) -> Vec<Animal>;
}

impl FaunaLogic for Animal {
    fn heal(&mut self) {
        self.health = (self.health + self.heal_effect).min(MAX_HEALTH);
        self.hunger = 0;
    }

    fn suffer(&mut self, damage: f64) {
        self.health = (self.health - damage).max(0.0);
        if self.health <= 0.0 {
            self.die();
        }
    }

    fn starvation(&mut self, rules: &EcosystemConfig) {
        self.hunger = self.hunger.saturating_add(1);
        if self.hunger > rules.hunger_grace_days {
            self.suffer(self.starve_rate * rules.starvation_multiplier);
        }
    }

    fn forage<R: Rng + ?Sized>(&mut self, flora: &mut [Plant], rng: &mut R) -> FeedOutcome {
        if !self.is_alive() {
            return FeedOutcome::Idle;
        }
        let living: Vec<usize> = flora
            .iter()
            .enumerate()
            .filter(|(_, plant)| plant.is_alive())
            .map(|(i, _)| i)
            .collect();
        if living.is_empty() {
            return FeedOutcome::NoTarget;
        }

        let target = living[rng.gen_range(0..living.len())];
        let eaten = flora[target].be_eaten(FORAGE_BITE, self.species);
        tracing::trace!(
            forager = %self.species,
            plant = %flora[target].species,
            eaten,
            "Forage"
        );
        if eaten > 0.0 {
            self.heal();
            FeedOutcome::Fed
        } else {
            FeedOutcome::Missed
        }
    }

    fn hunt<'a, I, R>(&mut self, others: I, rng: &mut R) -> FeedOutcome
    where
        I: IntoIterator<Item = &'a mut Animal>,
        R: Rng + ?Sized,
    {
        let Some(traits) = self.hunting else {
            return FeedOutcome::Idle;
        };
        if !self.is_alive() {
            return FeedOutcome::Idle;
        }

        let size = self.vitals.current_size;
        let mut prey: Vec<&mut Animal> = others
            .into_iter()
            .filter(|animal| animal.is_alive() && animal.vitals.current_size < size)
            .collect();
        if prey.is_empty() {
            return FeedOutcome::NoTarget;
        }

        let target = rng.gen_range(0..prey.len());
        let caught = rng.gen::<f64>() < traits.success_rate * self.hunt_modifier;
        if caught {
            self.heal();
            prey[target].die();
        }
        tracing::trace!(
            hunter = %self.species,
            prey = %prey[target].species,
            caught,
            "Hunt"
        );
        if rng.gen::<f64>() < traits.self_harm_rate {
            self.suffer(self.self_harm_effect);
        }

        if caught {
            FeedOutcome::Fed
        } else {
            FeedOutcome::Missed
        }
    }

    fn can_reproduce(&self, rules: &EcosystemConfig) -> bool {
        self.health > rules.reproduction_health
            && self.vitals.current_size >= self.vitals.max_size * rules.animal_maturity_fraction
    }

    fn reproduce<R: Rng + ?Sized>(
        &self,
        table: &SpeciesTable,
        rules: &EcosystemConfig,
        rng: &mut R,
    ) -> Vec<Animal> {
        if !self.can_reproduce(rules) {
            return Vec::new();
        }
        let litter = stochastic_count(self.reproduce_rate, rng);
        (0..litter)
            .filter_map(|_| spawn_animal(self.species, table, &mut *rng))
            .map(|mut baby| {
                baby.vitals.current_size = baby.vitals.min_size;
                baby.health = rules.newborn_health;
                baby
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::spawn_plant;
    use islandsim_data::Species;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn animal(species: Species) -> Animal {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        spawn_animal(species, &SpeciesTable::default(), &mut rng).unwrap()
    }

    fn plant(species: Species) -> Plant {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        spawn_plant(species, &SpeciesTable::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_starvation_grace_period() {
        let rules = EcosystemConfig::default();
        let mut rabbit = animal(Species::Rabbit);
        for _ in 0..3 {
            rabbit.starvation(&rules);
        }
        assert_eq!(rabbit.health, 80.0);
        assert_eq!(rabbit.hunger, 3);

        rabbit.starvation(&rules);
        assert!((rabbit.health - 78.5).abs() < 1e-9);
    }

    #[test]
    fn test_starvation_kills_at_zero_health() {
        let rules = EcosystemConfig::default();
        let mut rabbit = animal(Species::Rabbit);
        rabbit.hunger = 4;
        rabbit.health = 1.0;
        rabbit.starvation(&rules);
        assert!(!rabbit.is_alive());
        assert!(!rabbit.vitals.alive);
        assert_eq!(rabbit.health, 0.0);
    }

    #[test]
    fn test_starvation_kills_at_exact_threshold() {
        let rules = EcosystemConfig::default();
        let mut rabbit = animal(Species::Rabbit);
        rabbit.hunger = 4;
        rabbit.health = rabbit.starve_rate * rules.starvation_multiplier;
        rabbit.starvation(&rules);
        assert!(!rabbit.is_alive());
        assert_eq!(rabbit.health, 0.0);
    }

    #[test]
    fn test_heal_caps_at_max_health() {
        let mut leopard = animal(Species::Leopard);
        leopard.hunger = 5;
        leopard.heal();
        assert_eq!(leopard.health, MAX_HEALTH);
        assert_eq!(leopard.hunger, 0);
    }

    #[test]
    fn test_forage_on_empty_flora() {
        let mut rabbit = animal(Species::Rabbit);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rabbit.forage(&mut [], &mut rng), FeedOutcome::NoTarget);
    }

    #[test]
    fn test_forage_skips_dead_plants() {
        let mut rabbit = animal(Species::Rabbit);
        rabbit.hunger = 2;
        let mut dead = plant(Species::Grass);
        dead.die();
        let mut flora = vec![dead, plant(Species::Grass)];
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(rabbit.forage(&mut flora, &mut rng), FeedOutcome::Fed);
        assert_eq!(rabbit.hunger, 0);
        assert_eq!(rabbit.health, 88.0);
        assert!(!flora[1].is_alive());
    }

    #[test]
    fn test_forage_on_restricted_plant_misses() {
        let mut rabbit = animal(Species::Rabbit);
        rabbit.hunger = 2;
        let mut flora = vec![plant(Species::Eucalyptus)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(rabbit.forage(&mut flora, &mut rng), FeedOutcome::Missed);
        assert_eq!(rabbit.hunger, 2);
        assert_eq!(rabbit.health, 80.0);
    }

    #[test]
    fn test_herbivore_cannot_hunt() {
        let mut rabbit = animal(Species::Rabbit);
        let mut others = vec![animal(Species::Rabbit)];
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(rabbit.hunt(others.iter_mut(), &mut rng), FeedOutcome::Idle);
    }

    #[test]
    fn test_hunt_ignores_larger_prey() {
        let mut fox = animal(Species::Fox);
        let mut others = vec![animal(Species::Leopard), animal(Species::Fox)];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(fox.hunt(others.iter_mut(), &mut rng), FeedOutcome::NoTarget);
        assert!(others.iter().all(|a| a.is_alive()));
    }

    #[test]
    fn test_certain_hunt_kills_prey() {
        let mut leopard = animal(Species::Leopard);
        leopard.hunting = Some(islandsim_data::HuntTraits {
            success_rate: 1.0,
            self_harm_rate: 0.0,
        });
        leopard.hunger = 3;
        leopard.health = 50.0;
        let mut others = vec![animal(Species::Rabbit)];
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert_eq!(leopard.hunt(others.iter_mut(), &mut rng), FeedOutcome::Fed);
        assert!(!others[0].is_alive());
        assert_eq!(leopard.hunger, 0);
        assert_eq!(leopard.health, 60.0);
    }

    #[test]
    fn test_self_harm_applies_on_success() {
        let mut leopard = animal(Species::Leopard);
        leopard.hunting = Some(islandsim_data::HuntTraits {
            success_rate: 1.0,
            self_harm_rate: 1.0,
        });
        leopard.health = 50.0;
        let mut others = vec![animal(Species::Rabbit)];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        leopard.hunt(others.iter_mut(), &mut rng);
        // +10 heal, -5 self harm
        assert_eq!(leopard.health, 55.0);
    }

    #[test]
    fn test_zero_modifier_never_catches() {
        let mut leopard = animal(Species::Leopard);
        leopard.hunt_modifier = 0.0;
        let mut others = vec![animal(Species::Rabbit)];
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let outcome = leopard.hunt(others.iter_mut(), &mut rng);
            assert!(matches!(outcome, FeedOutcome::Missed | FeedOutcome::Idle));
        }
        assert!(others[0].is_alive());
    }

    #[test]
    fn test_young_animal_does_not_reproduce() {
        let rules = EcosystemConfig::default();
        let table = SpeciesTable::default();
        let rabbit = animal(Species::Rabbit);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(!rabbit.can_reproduce(&rules));
        assert!(rabbit.reproduce(&table, &rules, &mut rng).is_empty());
    }

    #[test]
    fn test_newborns_are_small_and_weak() {
        let rules = EcosystemConfig::default();
        let table = SpeciesTable::default();
        let mut koala = animal(Species::Koala);
        koala.vitals.current_size = koala.vitals.max_size;
        koala.health = 95.0;
        koala.reproduce_rate = 3.0;
        koala.vitals.age = 40;
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let babies = koala.reproduce(&table, &rules, &mut rng);
        assert_eq!(babies.len(), 3);
        for baby in &babies {
            assert_eq!(baby.species, Species::Koala);
            assert_eq!(baby.health, 50.0);
            assert_eq!(baby.vitals.current_size, baby.vitals.min_size);
            assert_eq!(baby.vitals.age, 0);
            // Tuning comes from the table, not the parent.
            assert_eq!(baby.reproduce_rate, table.koala.reproduce_rate);
            assert_ne!(baby.id, koala.id);
        }
    }

    #[test]
    fn test_fallen_parent_still_reproduces() {
        let rules = EcosystemConfig::default();
        let table = SpeciesTable::default();
        let mut fox = animal(Species::Fox);
        fox.vitals.current_size = fox.vitals.max_size;
        fox.reproduce_rate = 1.0;
        fox.die();
        assert!(fox.can_reproduce(&rules));
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let cubs = fox.reproduce(&table, &rules, &mut rng);
        assert_eq!(cubs.len(), 1);
        assert!(cubs[0].is_alive());
    }

    #[test]
    fn test_starved_animal_cannot_reproduce() {
        let rules = EcosystemConfig::default();
        let mut fox = animal(Species::Fox);
        fox.vitals.current_size = fox.vitals.max_size;
        fox.suffer(fox.health);
        assert!(!fox.can_reproduce(&rules));
    }
}

use super::Ecosystem;
use crate::flora::FloraLogic;
use crate::lifecycle::Lifeform;
use crate::systems::environment::{self as env_system, StormCasualties};
use crate::systems::{expansion, feeding};
use islandsim_data::StepSummary;

impl Ecosystem {
    /// Advances the island by one day.
    ///
    /// Phases run in a fixed order: age, reset modifiers, roll weather, apply
    /// weather, arbitrate plant expansion, grow and fruit, feed/starve/breed
    /// per animal, sweep the dead. No phase can fail; empty collections and a
    /// full island are ordinary states.
    pub fn simulate_step(&mut self) {
        self.day = self.day.saturating_add(1);
        self.summary = StepSummary {
            day: self.day,
            ..StepSummary::default()
        };

        self.age_organisms();
        self.reset_daily_modifiers();
        self.roll_environment();
        self.apply_environment_effects();
        self.arbitrate_expansion();
        self.grow_and_fruit();
        self.feed_starve_reproduce();
        self.sweep_dead();

        let s = &self.summary;
        tracing::debug!(
            day = self.day,
            weather = ?self.environment.weather,
            temperature = self.environment.temperature,
            free_area = s.free_area,
            spawned = s.plants_spawned,
            births = s.births,
            hunts = s.hunts_succeeded,
            flora = self.flora.len(),
            fauna = self.fauna.len(),
            "Day simulated"
        );
    }

    /// Every organism gets a day older, dead or alive.
    pub fn age_organisms(&mut self) {
        self.flora.iter_mut().for_each(|p| p.age_one_day());
        self.fauna.iter_mut().for_each(|a| a.age_one_day());
    }

    pub fn reset_daily_modifiers(&mut self) {
        env_system::reset_modifiers(&mut self.flora, &mut self.fauna);
    }

    /// Draws today's temperature and weather, unless they are pinned.
    pub fn roll_environment(&mut self) {
        self.environment.roll(&self.rules, &mut self.rng);
    }

    pub fn apply_environment_effects(&mut self) -> StormCasualties {
        let casualties = env_system::apply_effects(
            &self.environment,
            &mut self.flora,
            &mut self.fauna,
            &self.rules,
            &mut self.rng,
        );
        self.summary.storm_casualties += casualties.count();
        casualties
    }

    /// Land not yet covered by living plants.
    #[must_use]
    pub fn available_area(&self) -> f64 {
        expansion::available_area(self.capacity, &self.flora)
    }

    /// Serves today's expansion bids and plants the winners.
    ///
    /// Returns the number of new plants.
    pub fn arbitrate_expansion(&mut self) -> usize {
        let outcome = expansion::arbitrate(
            self.capacity,
            &self.flora,
            &self.rules,
            &self.species,
            &mut self.rng,
        );
        let spawned = outcome.spawned.len();
        self.summary.free_area = outcome.free_area_before;
        self.summary.expansion_requests += outcome.requests;
        self.summary.plants_spawned += spawned;
        for plant in outcome.spawned {
            self.add_organism(plant);
        }
        spawned
    }

    /// All plants grow first, then all fruit on their new size.
    pub fn grow_and_fruit(&mut self) {
        for plant in &mut self.flora {
            plant.grow();
        }
        for plant in &mut self.flora {
            plant.fruiting();
        }
        if self.rules.grow_fauna {
            for animal in &mut self.fauna {
                animal.grow();
            }
        }
    }

    /// Feeding, starvation and reproduction for every animal; newborns join
    /// the island once the whole scan is done.
    ///
    /// Returns the number of births.
    pub fn feed_starve_reproduce(&mut self) -> usize {
        let outcome = feeding::feed_starve_reproduce(
            &mut self.flora,
            &mut self.fauna,
            &self.rules,
            &self.species,
            &mut self.rng,
        );
        let births = outcome.offspring.len();
        self.summary.births += births;
        self.summary.forages_attempted += outcome.forages_attempted;
        self.summary.forages_succeeded += outcome.forages_succeeded;
        self.summary.hunts_attempted += outcome.hunts_attempted;
        self.summary.hunts_succeeded += outcome.hunts_succeeded;
        for baby in outcome.offspring {
            self.add_organism(baby);
        }
        births
    }

    /// Drops every organism that is no longer alive.
    ///
    /// Returns `(flora_removed, fauna_removed)`.
    pub fn sweep_dead(&mut self) -> (usize, usize) {
        let flora_before = self.flora.len();
        let fauna_before = self.fauna.len();
        self.flora.retain(|p| p.is_alive());
        self.fauna.retain(|a| a.is_alive());
        let removed = (
            flora_before - self.flora.len(),
            fauna_before - self.fauna.len(),
        );
        self.summary.flora_deaths += removed.0;
        self.summary.fauna_deaths += removed.1;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcosystemConfig;
    use islandsim_data::{Conditions, Species, Weather};

    fn calm(temperature: i32) -> Option<Conditions> {
        Some(Conditions {
            temperature,
            weather: Weather::Normal,
        })
    }

    #[test]
    fn test_day_and_age_advance() {
        let mut eco = Ecosystem::with_seed(100.0, 25, 1);
        eco.force_conditions(calm(25));
        eco.spawn_species(Species::Eucalyptus, 1);
        eco.spawn_species(Species::Leopard, 1);
        eco.simulate_step();
        eco.simulate_step();
        assert_eq!(eco.day, 2);
        assert_eq!(eco.last_summary().day, 2);
        assert_eq!(eco.flora[0].vitals.age, 2);
        assert_eq!(eco.fauna[0].vitals.age, 2);
        assert_eq!(eco.temperature(), 25);
        assert_eq!(eco.weather(), Some(Weather::Normal));
    }

    #[test]
    fn test_empty_island_steps_cleanly() {
        let mut eco = Ecosystem::with_seed(10_000.0, 25, 2);
        for _ in 0..10 {
            eco.simulate_step();
        }
        assert_eq!(eco.day, 10);
        assert!(eco.is_barren());
        assert_eq!(eco.last_summary().free_area, 10_000.0);
    }

    #[test]
    fn test_storm_casualties_are_swept() {
        let mut eco = Ecosystem::with_seed(100.0, 25, 3);
        eco.force_conditions(Some(Conditions {
            temperature: 25,
            weather: Weather::Storm,
        }));
        eco.spawn_species(Species::Eucalyptus, 1);
        eco.spawn_species(Species::Koala, 1);
        eco.simulate_step();
        let summary = eco.last_summary();
        assert_eq!(summary.storm_casualties, 2);
        assert!(eco.is_barren());
        assert_eq!(summary.flora_deaths, 1);
        assert_eq!(summary.fauna_deaths, 1);
    }

    #[test]
    fn test_modifiers_reset_each_morning() {
        let mut eco = Ecosystem::with_seed(100.0, 37, 4);
        eco.spawn_species(Species::Fox, 1);
        eco.force_conditions(calm(37));
        eco.reset_daily_modifiers();
        eco.roll_environment();
        eco.apply_environment_effects();
        assert_eq!(eco.fauna[0].hunt_modifier, 0.5);

        eco.force_conditions(calm(25));
        eco.reset_daily_modifiers();
        eco.roll_environment();
        eco.apply_environment_effects();
        assert_eq!(eco.fauna[0].hunt_modifier, 1.0);
    }

    #[test]
    fn test_expansion_joins_and_grows_same_day() {
        let mut eco = Ecosystem::with_seed(100.0, 25, 5);
        eco.force_conditions(calm(25));
        eco.spawn_species(Species::Grass, 1);
        eco.flora[0].vitals.current_size = 1.0;
        eco.flora[0].expand_rate = 2.0;
        eco.simulate_step();
        assert_eq!(eco.last_summary().plants_spawned, 2);
        assert_eq!(eco.flora.len(), 3);
        for plant in &eco.flora[1..] {
            assert_eq!(plant.habitat, Some(eco.id()));
            assert!((plant.vitals.current_size - 0.12).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fauna_grow_only_when_enabled() {
        let mut eco = Ecosystem::with_seed(100.0, 25, 6);
        eco.spawn_species(Species::Rabbit, 1);
        eco.grow_and_fruit();
        assert_eq!(eco.fauna[0].vitals.current_size, 0.2);

        let mut eco = Ecosystem::with_seed(100.0, 25, 6).with_rules(EcosystemConfig {
            grow_fauna: true,
            ..Default::default()
        });
        eco.spawn_species(Species::Rabbit, 1);
        eco.grow_and_fruit();
        assert!((eco.fauna[0].vitals.current_size - 0.24).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_reports_removed() {
        let mut eco = Ecosystem::with_seed(100.0, 25, 7);
        eco.spawn_species(Species::Grass, 3);
        eco.spawn_species(Species::Rabbit, 2);
        eco.flora[1].die();
        eco.fauna[0].health = 0.0;
        assert_eq!(eco.sweep_dead(), (1, 1));
        assert_eq!(eco.flora.len(), 2);
        assert_eq!(eco.fauna.len(), 1);
    }
}

//! Plant behavior: expansion bids, being eaten, and fruiting.

use crate::config::EcosystemConfig;
use crate::lifecycle::{stochastic_count, Lifeform};
use islandsim_data::{EdibilityRule, Plant, Species};
use rand::Rng;

pub trait FloraLogic {
    /// How many new same-species individuals this plant asks for today.
    ///
    /// A bid, not a grant: the ecosystem arbitrates it against free land.
    /// Only maturity gates the bid, so a plant lost earlier in the day still
    /// seeds the land it leaves behind.
    fn expansion_request<R: Rng + ?Sized>(&self, rules: &EcosystemConfig, rng: &mut R) -> usize;

    /// Lets `eater` take a bite of `amount`; returns how much was consumed.
    ///
    /// Zero means "not edible right now" and leaves the plant untouched.
    fn be_eaten(&mut self, amount: f64, eater: Species) -> f64;

    /// Refills the yield pool from current size. No-op for plants without one.
    fn fruiting(&mut self);
}

impl FloraLogic for Plant {
    fn expansion_request<R: Rng + ?Sized>(&self, rules: &EcosystemConfig, rng: &mut R) -> usize {
        if self.vitals.current_size < self.vitals.max_size * rules.plant_maturity_fraction {
            return 0;
        }
        stochastic_count(self.expand_rate * self.expansion_modifier, rng)
    }

    fn be_eaten(&mut self, amount: f64, eater: Species) -> f64 {
        if !self.is_alive() || amount <= 0.0 {
            return 0.0;
        }
        match &mut self.edibility {
            EdibilityRule::RestrictedTo { consumer } if *consumer != eater => return 0.0,
            EdibilityRule::YieldPool(pool) if pool.can_harvest() => {
                let eaten = (amount * pool.unit).min(pool.stock);
                pool.stock -= eaten;
                return eaten;
            }
            _ => {}
        }

        let eaten = amount.min(self.vitals.current_size);
        self.vitals.current_size -= eaten;
        if self.vitals.current_size < self.vitals.min_size {
            self.die();
        }
        eaten
    }

    fn fruiting(&mut self) {
        if !self.is_alive() {
            return;
        }
        let size = self.vitals.current_size;
        if let EdibilityRule::YieldPool(pool) = &mut self.edibility {
            if pool.bearing {
                // Whole fruits only.
                let grown = (size * pool.rate).floor();
                pool.stock = (pool.stock + grown).min(pool.max);
            }
        }
    }
}

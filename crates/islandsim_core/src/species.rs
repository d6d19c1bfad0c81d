//! Species presets.
//!
//! Species are data, not types: every concrete species is a row in the
//! [`SpeciesTable`], and all organisms of a species are built from that row.

use islandsim_data::{
    Animal, EdibilityRule, FeedingRole, HuntTraits, Plant, Species, Vitals, YieldPool,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tuning for one plant species.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FloraPreset {
    pub min_size: f64,
    pub max_size: f64,
    pub grow_rate: f64,
    pub expand_rate: f64,
    pub max_individual_area: f64,
    pub edibility: EdibilityRule,
}

impl FloraPreset {
    /// Builds a freshly sprouted individual of this preset.
    #[must_use]
    pub fn instantiate(&self, species: Species, id: Uuid) -> Plant {
        Plant {
            id,
            species,
            habitat: None,
            vitals: Vitals::newborn(self.min_size, self.max_size, self.grow_rate),
            expand_rate: self.expand_rate,
            max_individual_area: self.max_individual_area,
            expansion_modifier: 1.0,
            edibility: self.edibility.clone(),
        }
    }
}

/// Tuning for one animal species.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FaunaPreset {
    pub role: FeedingRole,
    pub min_size: f64,
    pub max_size: f64,
    pub grow_rate: f64,
    pub reproduce_rate: f64,
    pub starve_rate: f64,
    pub health: f64,
    pub self_harm_effect: f64,
    pub heal_effect: f64,
    pub hunting: Option<HuntTraits>,
}

impl FaunaPreset {
    #[must_use]
    pub fn instantiate(&self, species: Species, id: Uuid) -> Animal {
        Animal {
            id,
            species,
            habitat: None,
            vitals: Vitals::newborn(self.min_size, self.max_size, self.grow_rate),
            role: self.role,
            health: self.health,
            hunger: 0,
            reproduce_rate: self.reproduce_rate,
            starve_rate: self.starve_rate,
            self_harm_effect: self.self_harm_effect,
            heal_effect: self.heal_effect,
            hunt_modifier: 1.0,
            hunting: self.hunting,
        }
    }
}

/// A preset looked up by species, tagged by kingdom.
#[derive(Debug, Clone, Copy)]
pub enum Preset<'a> {
    Flora(&'a FloraPreset),
    Fauna(&'a FaunaPreset),
}

/// Preset row for every species. Each row can be overridden from config.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesTable {
    #[serde(default = "default_eucalyptus")]
    pub eucalyptus: FloraPreset,
    #[serde(default = "default_mango_tree")]
    pub mango_tree: FloraPreset,
    #[serde(default = "default_elderberry")]
    pub elderberry: FloraPreset,
    #[serde(default = "default_grass")]
    pub grass: FloraPreset,
    #[serde(default = "default_rabbit")]
    pub rabbit: FaunaPreset,
    #[serde(default = "default_koala")]
    pub koala: FaunaPreset,
    #[serde(default = "default_fox")]
    pub fox: FaunaPreset,
    #[serde(default = "default_leopard")]
    pub leopard: FaunaPreset,
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self {
            eucalyptus: default_eucalyptus(),
            mango_tree: default_mango_tree(),
            elderberry: default_elderberry(),
            grass: default_grass(),
            rabbit: default_rabbit(),
            koala: default_koala(),
            fox: default_fox(),
            leopard: default_leopard(),
        }
    }
}

impl SpeciesTable {
    #[must_use]
    pub fn preset(&self, species: Species) -> Preset<'_> {
        match species {
            Species::Eucalyptus => Preset::Flora(&self.eucalyptus),
            Species::MangoTree => Preset::Flora(&self.mango_tree),
            Species::Elderberry => Preset::Flora(&self.elderberry),
            Species::Grass => Preset::Flora(&self.grass),
            Species::Rabbit => Preset::Fauna(&self.rabbit),
            Species::Koala => Preset::Fauna(&self.koala),
            Species::Fox => Preset::Fauna(&self.fox),
            Species::Leopard => Preset::Fauna(&self.leopard),
        }
    }

    /// Plant preset for `species`, `None` for animals.
    #[must_use]
    pub fn flora(&self, species: Species) -> Option<&FloraPreset> {
        match self.preset(species) {
            Preset::Flora(preset) => Some(preset),
            Preset::Fauna(_) => None,
        }
    }

    /// Animal preset for `species`, `None` for plants.
    #[must_use]
    pub fn fauna(&self, species: Species) -> Option<&FaunaPreset> {
        match self.preset(species) {
            Preset::Fauna(preset) => Some(preset),
            Preset::Flora(_) => None,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for species in Species::ALL {
            let (min, max, grow) = match self.preset(species) {
                Preset::Flora(p) => {
                    anyhow::ensure!(
                        p.max_individual_area > 0.0,
                        "{species}: individual area must be positive"
                    );
                    anyhow::ensure!(
                        p.expand_rate >= 0.0,
                        "{species}: expand rate must be non-negative"
                    );
                    if let EdibilityRule::YieldPool(pool) = &p.edibility {
                        anyhow::ensure!(pool.unit > 0.0, "{species}: harvest unit must be positive");
                        anyhow::ensure!(
                            pool.rate >= 0.0 && pool.max >= 0.0,
                            "{species}: yield rate and max must be non-negative"
                        );
                    }
                    (p.min_size, p.max_size, p.grow_rate)
                }
                Preset::Fauna(p) => {
                    anyhow::ensure!(
                        p.health > 0.0 && p.health <= 100.0,
                        "{species}: health must be in (0, 100]"
                    );
                    anyhow::ensure!(
                        p.reproduce_rate >= 0.0,
                        "{species}: reproduce rate must be non-negative"
                    );
                    anyhow::ensure!(
                        p.role.can_hunt() == p.hunting.is_some(),
                        "{species}: hunting traits must be present exactly for hunting roles"
                    );
                    if let Some(hunt) = p.hunting {
                        anyhow::ensure!(
                            (0.0..=1.0).contains(&hunt.success_rate)
                                && (0.0..=1.0).contains(&hunt.self_harm_rate),
                            "{species}: hunt rates must be in [0.0, 1.0]"
                        );
                    }
                    (p.min_size, p.max_size, p.grow_rate)
                }
            };
            anyhow::ensure!(
                min > 0.0 && min <= max,
                "{species}: sizes must satisfy 0 < min <= max"
            );
            anyhow::ensure!(grow >= 0.0, "{species}: grow rate must be non-negative");
        }
        Ok(())
    }
}

fn default_eucalyptus() -> FloraPreset {
    FloraPreset {
        min_size: 2.0,
        max_size: 15.0,
        grow_rate: 0.2,
        expand_rate: 0.4,
        max_individual_area: 6.0,
        edibility: EdibilityRule::RestrictedTo {
            consumer: Species::Koala,
        },
    }
}

fn default_mango_tree() -> FloraPreset {
    FloraPreset {
        min_size: 5.0,
        max_size: 40.0,
        grow_rate: 0.1,
        expand_rate: 0.2,
        max_individual_area: 5.0,
        edibility: EdibilityRule::YieldPool(YieldPool::empty(0.15, 30.0, 2.0)),
    }
}

fn default_elderberry() -> FloraPreset {
    FloraPreset {
        min_size: 3.0,
        max_size: 12.0,
        grow_rate: 0.15,
        expand_rate: 0.3,
        max_individual_area: 4.0,
        edibility: EdibilityRule::YieldPool(YieldPool::empty(0.9, 75.0, 5.0)),
    }
}

fn default_grass() -> FloraPreset {
    FloraPreset {
        min_size: 0.1,
        max_size: 1.0,
        grow_rate: 0.2,
        expand_rate: 0.5,
        max_individual_area: 1.0,
        edibility: EdibilityRule::SizeLoss,
    }
}

fn default_rabbit() -> FaunaPreset {
    FaunaPreset {
        role: FeedingRole::Herbivore,
        min_size: 0.2,
        max_size: 0.5,
        grow_rate: 0.2,
        reproduce_rate: 0.1,
        starve_rate: 0.15,
        health: 80.0,
        self_harm_effect: 3.0,
        heal_effect: 8.0,
        hunting: None,
    }
}

fn default_koala() -> FaunaPreset {
    FaunaPreset {
        role: FeedingRole::Herbivore,
        min_size: 0.3,
        max_size: 1.2,
        grow_rate: 0.15,
        reproduce_rate: 0.09,
        starve_rate: 0.12,
        health: 70.0,
        self_harm_effect: 4.0,
        heal_effect: 9.0,
        hunting: None,
    }
}

fn default_fox() -> FaunaPreset {
    FaunaPreset {
        role: FeedingRole::Omnivore,
        min_size: 0.5,
        max_size: 3.0,
        grow_rate: 0.15,
        reproduce_rate: 0.05,
        starve_rate: 0.12,
        health: 90.0,
        self_harm_effect: 4.0,
        heal_effect: 9.0,
        hunting: Some(HuntTraits {
            success_rate: 0.5,
            self_harm_rate: 0.04,
        }),
    }
}

fn default_leopard() -> FaunaPreset {
    FaunaPreset {
        role: FeedingRole::Carnivore,
        min_size: 2.0,
        max_size: 5.0,
        grow_rate: 0.1,
        reproduce_rate: 0.03,
        starve_rate: 0.1,
        health: 100.0,
        self_harm_effect: 5.0,
        heal_effect: 10.0,
        hunting: Some(HuntTraits {
            success_rate: 0.6,
            self_harm_rate: 0.05,
        }),
    }
}

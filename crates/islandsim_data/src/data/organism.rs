use super::species::{FeedingRole, Kingdom, Species};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Size, age and life state shared by every organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub age: u32,
    pub min_size: f64,
    pub current_size: f64,
    pub max_size: f64,
    pub grow_rate: f64,
    /// Only ever flips from `true` to `false`.
    pub alive: bool,
}

impl Vitals {
    /// Fresh vitals for a newly created organism, starting at minimum size.
    #[must_use]
    pub fn newborn(min_size: f64, max_size: f64, grow_rate: f64) -> Self {
        Self {
            age: 0,
            min_size,
            current_size: min_size,
            max_size,
            grow_rate,
            alive: true,
        }
    }
}

/// Renewable fruit or berry stock that feeds animals without shrinking the plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPool {
    /// Whether the plant currently produces anything.
    pub bearing: bool,
    pub stock: f64,
    /// Stock gained per unit of plant size on each fruiting pass.
    pub rate: f64,
    pub max: f64,
    /// Minimum harvest; one bite drains this many units.
    pub unit: f64,
}

impl YieldPool {
    #[must_use]
    pub fn empty(rate: f64, max: f64, unit: f64) -> Self {
        Self {
            bearing: true,
            stock: 0.0,
            rate,
            max,
            unit,
        }
    }

    #[must_use]
    pub fn can_harvest(&self) -> bool {
        self.stock >= self.unit
    }
}

/// What happens to a plant when an animal eats from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdibilityRule {
    /// Eating removes size directly.
    SizeLoss,
    /// Eating drains the yield pool first and only falls back to size loss
    /// when the pool is below one harvest unit.
    YieldPool(YieldPool),
    /// Only the named consumer may eat; everyone else gets nothing.
    RestrictedTo { consumer: Species },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: Uuid,
    pub species: Species,
    /// Id of the ecosystem that owns this plant, set on insertion.
    pub habitat: Option<Uuid>,
    pub vitals: Vitals,
    pub expand_rate: f64,
    /// Land footprint of one individual.
    pub max_individual_area: f64,
    /// Daily multiplier on `expand_rate`; reset to 1.0 every morning.
    pub expansion_modifier: f64,
    pub edibility: EdibilityRule,
}

impl Plant {
    #[must_use]
    pub fn yield_pool(&self) -> Option<&YieldPool> {
        match &self.edibility {
            EdibilityRule::YieldPool(pool) => Some(pool),
            _ => None,
        }
    }

    /// Current fruit or berry stock, zero for plants without a pool.
    #[must_use]
    pub fn yield_stock(&self) -> f64 {
        self.yield_pool().map_or(0.0, |pool| pool.stock)
    }
}

/// Hunting parameters carried by carnivores and omnivores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HuntTraits {
    pub success_rate: f64,
    pub self_harm_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: Uuid,
    pub species: Species,
    /// Id of the ecosystem that owns this animal, set on insertion.
    pub habitat: Option<Uuid>,
    pub vitals: Vitals,
    pub role: FeedingRole,
    /// Kept within `[0, 100]`.
    pub health: f64,
    /// Consecutive days without a successful feed.
    pub hunger: u32,
    pub reproduce_rate: f64,
    pub starve_rate: f64,
    pub self_harm_effect: f64,
    pub heal_effect: f64,
    /// Daily multiplier on hunt success; reset to 1.0 every morning.
    pub hunt_modifier: f64,
    pub hunting: Option<HuntTraits>,
}

impl Animal {
    #[must_use]
    pub fn can_hunt(&self) -> bool {
        self.hunting.is_some()
    }
}

/// Any member of the ecosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Organism {
    Flora(Plant),
    Fauna(Animal),
}

impl Organism {
    #[must_use]
    pub fn species(&self) -> Species {
        match self {
            Organism::Flora(p) => p.species,
            Organism::Fauna(a) => a.species,
        }
    }

    #[must_use]
    pub fn kingdom(&self) -> Kingdom {
        match self {
            Organism::Flora(_) => Kingdom::Flora,
            Organism::Fauna(_) => Kingdom::Fauna,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Organism::Flora(p) => p.id,
            Organism::Fauna(a) => a.id,
        }
    }

    #[must_use]
    pub fn vitals(&self) -> &Vitals {
        match self {
            Organism::Flora(p) => &p.vitals,
            Organism::Fauna(a) => &a.vitals,
        }
    }
}

impl From<Plant> for Organism {
    fn from(plant: Plant) -> Self {
        Organism::Flora(plant)
    }
}

impl From<Animal> for Organism {
    fn from(animal: Animal) -> Self {
        Organism::Fauna(animal)
    }
}

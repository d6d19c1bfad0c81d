use crate::config::EcosystemConfig;
use crate::flora::FloraLogic;
use crate::lifecycle::{spawn_plant, Lifeform};
use crate::species::SpeciesTable;
use islandsim_data::{Plant, Species};
use rand::seq::SliceRandom;
use rand::Rng;

/// Land not covered by living plants. Never negative.
#[must_use]
pub fn available_area(capacity: f64, flora: &[Plant]) -> f64 {
    let used: f64 = flora
        .iter()
        .filter(|p| p.is_alive())
        .map(|p| p.max_individual_area)
        .sum();
    (capacity - used).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bid {
    species: Species,
    area: f64,
    requested: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionOutcome {
    /// New plants, not yet attached to any ecosystem.
    pub spawned: Vec<Plant>,
    /// Plants that asked for land today.
    pub requests: usize,
    pub free_area_before: f64,
    pub free_area_after: f64,
}

/// Grants expansion bids against the free land pool.
///
/// Bids are served in shuffled order so no species or age gets priority.
/// Each bid gets at most what fits in the remaining area, and serving stops
/// once the pool is exhausted.
pub fn arbitrate<R: Rng + ?Sized>(
    capacity: f64,
    flora: &[Plant],
    rules: &EcosystemConfig,
    table: &SpeciesTable,
    rng: &mut R,
) -> ExpansionOutcome {
    let free_area_before = available_area(capacity, flora);

    let mut bids: Vec<Bid> = Vec::new();
    for plant in flora {
        let requested = plant.expansion_request(rules, rng);
        if requested > 0 {
            bids.push(Bid {
                species: plant.species,
                area: plant.max_individual_area,
                requested,
            });
        }
    }
    bids.shuffle(rng);

    let mut free = free_area_before;
    let mut spawned = Vec::new();
    for bid in &bids {
        if free <= 0.0 {
            break;
        }
        let fits = (free / bid.area).floor() as usize;
        let granted = bid.requested.min(fits);
        if granted == 0 {
            continue;
        }
        free -= granted as f64 * bid.area;
        spawned.extend((0..granted).filter_map(|_| spawn_plant(bid.species, table, &mut *rng)));
    }

    ExpansionOutcome {
        spawned,
        requests: bids.len(),
        free_area_before,
        free_area_after: free.max(0.0),
    }
}

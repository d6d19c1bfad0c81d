use crate::environment::Environment;
use islandsim_data::{Animal, Census, Plant, Species};
use std::collections::BTreeMap;

/// Head count of both collections. Every species gets an entry, extinct
/// ones included, so reports keep a stable shape from day to day.
#[must_use]
pub fn census(day: u32, env: &Environment, flora: &[Plant], fauna: &[Animal]) -> Census {
    let mut species_counts: BTreeMap<Species, usize> =
        Species::ALL.into_iter().map(|s| (s, 0)).collect();
    for species in flora
        .iter()
        .map(|p| p.species)
        .chain(fauna.iter().map(|a| a.species))
    {
        *species_counts.entry(species).or_insert(0) += 1;
    }

    Census {
        day,
        temperature: env.temperature,
        weather: env.weather,
        flora_total: flora.len(),
        fauna_total: fauna.len(),
        species_counts,
    }
}

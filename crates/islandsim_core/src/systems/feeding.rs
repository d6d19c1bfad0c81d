use crate::config::EcosystemConfig;
use crate::fauna::{FaunaLogic, FeedOutcome};
use crate::species::SpeciesTable;
use islandsim_data::{Animal, FeedingRole, Plant};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Forage,
    Hunt,
}

fn choose_action<R: Rng + ?Sized>(
    role: FeedingRole,
    rules: &EcosystemConfig,
    rng: &mut R,
) -> Action {
    match role {
        FeedingRole::Herbivore => Action::Forage,
        FeedingRole::Carnivore => Action::Hunt,
        FeedingRole::Omnivore => {
            if rng.gen::<f64>() < rules.omnivore_forage_chance {
                Action::Forage
            } else {
                Action::Hunt
            }
        }
    }
}

/// What happened during one day of feeding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedingOutcome {
    /// Newborns, not yet attached to any ecosystem.
    pub offspring: Vec<Animal>,
    pub forages_attempted: usize,
    pub forages_succeeded: usize,
    pub hunts_attempted: usize,
    pub hunts_succeeded: usize,
}

impl FeedingOutcome {
    fn record(&mut self, action: Action, outcome: FeedOutcome) {
        let (attempted, succeeded) = match action {
            Action::Forage => (&mut self.forages_attempted, &mut self.forages_succeeded),
            Action::Hunt => (&mut self.hunts_attempted, &mut self.hunts_succeeded),
        };
        if outcome.attempted() {
            *attempted += 1;
        }
        if outcome == FeedOutcome::Fed {
            *succeeded += 1;
        }
    }
}

/// Runs feed, starve and reproduce for each animal in collection order.
///
/// The three steps are interleaved per animal, so prey killed by an earlier
/// hunter never gets to eat. Every animal still starves and may breed, dead or
/// alive; offspring are returned rather than appended and only join the
/// island after the whole scan.
pub fn feed_starve_reproduce<R: Rng + ?Sized>(
    flora: &mut [Plant],
    fauna: &mut [Animal],
    rules: &EcosystemConfig,
    table: &SpeciesTable,
    rng: &mut R,
) -> FeedingOutcome {
    let mut outcome = FeedingOutcome::default();

    for i in 0..fauna.len() {
        let (before, rest) = fauna.split_at_mut(i);
        let Some((animal, after)) = rest.split_first_mut() else {
            break;
        };

        let action = choose_action(animal.role, rules, rng);
        let fed = match action {
            Action::Forage => animal.forage(flora, rng),
            Action::Hunt => animal.hunt(before.iter_mut().chain(after.iter_mut()), rng),
        };
        outcome.record(action, fed);

        animal.starvation(rules);
        outcome.offspring.extend(animal.reproduce(table, rules, rng));
    }

    outcome
}

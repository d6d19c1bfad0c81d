use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad category an organism belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kingdom {
    Flora,
    Fauna,
}

/// How an animal looks for food each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedingRole {
    /// Forages plants only.
    Herbivore,
    /// Hunts smaller animals only.
    Carnivore,
    /// Flips a coin every day between foraging and hunting.
    Omnivore,
}

impl FeedingRole {
    #[must_use]
    pub fn can_hunt(&self) -> bool {
        matches!(self, FeedingRole::Carnivore | FeedingRole::Omnivore)
    }

    #[must_use]
    pub fn can_forage(&self) -> bool {
        matches!(self, FeedingRole::Herbivore | FeedingRole::Omnivore)
    }
}

/// Every concrete species living on the island.
///
/// Species differ only in their numeric presets, which are looked up from a
/// species table rather than encoded as distinct types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Eucalyptus,
    MangoTree,
    Elderberry,
    Grass,
    Rabbit,
    Koala,
    Fox,
    Leopard,
}

impl Species {
    pub const FLORA: [Species; 4] = [
        Species::Eucalyptus,
        Species::MangoTree,
        Species::Elderberry,
        Species::Grass,
    ];

    pub const FAUNA: [Species; 4] = [
        Species::Rabbit,
        Species::Koala,
        Species::Fox,
        Species::Leopard,
    ];

    pub const ALL: [Species; 8] = [
        Species::Eucalyptus,
        Species::MangoTree,
        Species::Elderberry,
        Species::Grass,
        Species::Rabbit,
        Species::Koala,
        Species::Fox,
        Species::Leopard,
    ];

    #[must_use]
    pub fn kingdom(&self) -> Kingdom {
        match self {
            Species::Eucalyptus | Species::MangoTree | Species::Elderberry | Species::Grass => {
                Kingdom::Flora
            }
            Species::Rabbit | Species::Koala | Species::Fox | Species::Leopard => Kingdom::Fauna,
        }
    }

    /// Human readable name used in reports.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Eucalyptus => "Eucalyptus",
            Species::MangoTree => "Mango",
            Species::Elderberry => "Elderberry",
            Species::Grass => "Grass",
            Species::Rabbit => "Rabbit",
            Species::Koala => "Koala",
            Species::Fox => "Fox",
            Species::Leopard => "Leopard",
        }
    }

    /// Snake-case key used in config files and on the command line.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Species::Eucalyptus => "eucalyptus",
            Species::MangoTree => "mango_tree",
            Species::Elderberry => "elderberry",
            Species::Grass => "grass",
            Species::Rabbit => "rabbit",
            Species::Koala => "koala",
            Species::Fox => "fox",
            Species::Leopard => "leopard",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a species name does not match any known species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpecies(pub String);

impl fmt::Display for UnknownSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown species '{}'", self.0)
    }
}

impl std::error::Error for UnknownSpecies {}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "mango" => return Ok(Species::MangoTree),
            "berry" => return Ok(Species::Elderberry),
            _ => {}
        }
        Species::ALL
            .into_iter()
            .find(|species| species.key() == normalized)
            .ok_or_else(|| UnknownSpecies(s.to_string()))
    }
}

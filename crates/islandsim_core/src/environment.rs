use crate::config::{EcosystemConfig, WeatherRoll};
use islandsim_data::{Conditions, Weather};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Temperature and weather of the island.
///
/// `weather` stays `None` until the first day is simulated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Environment {
    pub temperature: i32,
    pub weather: Option<Weather>,
    /// When set, the daily roll is skipped and these values are used.
    pub forced: Option<Conditions>,
}

impl Environment {
    #[must_use]
    pub fn new(initial_temperature: i32) -> Self {
        Self {
            temperature: initial_temperature,
            weather: None,
            forced: None,
        }
    }

    /// Resamples temperature and weather for a new day.
    pub fn roll<R: Rng + ?Sized>(&mut self, rules: &EcosystemConfig, rng: &mut R) {
        let conditions = match self.forced {
            Some(forced) => forced,
            None => Conditions {
                temperature: rng.gen_range(rules.min_temperature..rules.max_temperature),
                weather: roll_weather(rules, rng),
            },
        };
        self.temperature = conditions.temperature;
        self.weather = Some(conditions.weather);
    }

    #[must_use]
    pub fn conditions(&self) -> Option<Conditions> {
        self.weather.map(|weather| Conditions {
            temperature: self.temperature,
            weather,
        })
    }

    #[must_use]
    pub fn is_hot(&self, rules: &EcosystemConfig) -> bool {
        self.temperature >= rules.heat_threshold
    }
}

/// Draws one day's weather according to the configured roll.
pub fn roll_weather<R: Rng + ?Sized>(rules: &EcosystemConfig, rng: &mut R) -> Weather {
    let windy = rules.windy_chance;
    let storm_band = windy + rules.storm_chance;
    match rules.weather_roll {
        WeatherRoll::SingleDraw => {
            let r = rng.gen::<f64>();
            if r < windy {
                Weather::Windy
            } else if r < storm_band {
                Weather::Storm
            } else {
                Weather::Normal
            }
        }
        WeatherRoll::IndependentDraws => {
            if rng.gen::<f64>() < windy {
                return Weather::Windy;
            }
            let r = rng.gen::<f64>();
            if windy < r && r < storm_band {
                Weather::Storm
            } else {
                Weather::Normal
            }
        }
    }
}

//! Run-wide metrics collection for the simulation.
//!
//! Provides structured logging and population tracking across days.

use islandsim_data::{Census, Species, StepSummary};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Accumulates counters over a whole simulation run.
pub struct Metrics {
    days: AtomicU64,
    births: AtomicU64,
    plants_spawned: AtomicU64,
    deaths: AtomicU64,
    storm_casualties: AtomicU64,
    peaks: Mutex<BTreeMap<Species, usize>>,
    extinct: Mutex<BTreeSet<Species>>,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Metrics {
    /// Creates a collector that logs a progress line every `log_interval` days.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            days: AtomicU64::new(0),
            births: AtomicU64::new(0),
            plants_spawned: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            storm_casualties: AtomicU64::new(0),
            peaks: Mutex::new(BTreeMap::new()),
            extinct: Mutex::new(BTreeSet::new()),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Seeds peak populations from the starting census.
    pub fn record_start(&self, census: &Census) {
        let mut peaks = self.peaks.lock().unwrap_or_else(|e| e.into_inner());
        for (&species, &count) in &census.species_counts {
            let peak = peaks.entry(species).or_insert(0);
            *peak = (*peak).max(count);
        }
    }

    /// Records one completed day.
    pub fn record_day(&self, census: &Census, summary: &StepSummary) {
        self.days.fetch_add(1, Ordering::Relaxed);
        self.births.fetch_add(summary.births as u64, Ordering::Relaxed);
        self.plants_spawned
            .fetch_add(summary.plants_spawned as u64, Ordering::Relaxed);
        self.deaths.fetch_add(
            (summary.flora_deaths + summary.fauna_deaths) as u64,
            Ordering::Relaxed,
        );
        self.storm_casualties
            .fetch_add(summary.storm_casualties as u64, Ordering::Relaxed);

        {
            let mut peaks = self.peaks.lock().unwrap_or_else(|e| e.into_inner());
            let mut extinct = self.extinct.lock().unwrap_or_else(|e| e.into_inner());
            for (&species, &count) in &census.species_counts {
                let peak = peaks.entry(species).or_insert(0);
                *peak = (*peak).max(count);
                if count == 0 && *peak > 0 && extinct.insert(species) {
                    tracing::warn!(species = %species, day = census.day, "Species extinct");
                }
            }
        }

        let days = self.days.load(Ordering::Relaxed);
        if days.is_multiple_of(self.log_interval) {
            tracing::info!(
                day = census.day,
                flora = census.flora_total,
                fauna = census.fauna_total,
                births = summary.births,
                spawned = summary.plants_spawned,
                "Simulation day"
            );
        }
    }

    #[must_use]
    pub fn days(&self) -> u64 {
        self.days.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn peak(&self, species: Species) -> usize {
        let peaks = self.peaks.lock().unwrap_or_else(|e| e.into_inner());
        peaks.get(&species).copied().unwrap_or(0)
    }

    /// Species that were seen alive and later died out, in species order.
    #[must_use]
    pub fn extinctions(&self) -> Vec<Species> {
        let extinct = self.extinct.lock().unwrap_or_else(|e| e.into_inner());
        extinct.iter().copied().collect()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the run totals.
    pub fn log_summary(&self) {
        tracing::info!(
            days = self.days(),
            births = self.births(),
            plants_spawned = self.plants_spawned.load(Ordering::Relaxed),
            deaths = self.deaths(),
            storm_casualties = self.storm_casualties.load(Ordering::Relaxed),
            extinctions = self.extinctions().len(),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Simulation finished"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

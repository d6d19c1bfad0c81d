use crate::app::error::Result;
use crate::app::pause::PauseSignal;
use crate::app::report::{Reporter, RunOutcome};
use crate::app::settings;
use islandsim_core::config::{AppConfig, RunMode};
use islandsim_core::{Ecosystem, Metrics};
use std::io::Write;

/// Drives an [`Ecosystem`] day by day: step, report, honor the pause flag,
/// then wait out the speed delay.
pub struct SimulationRunner<W: Write> {
    config: AppConfig,
    ecosystem: Ecosystem,
    metrics: Metrics,
    pause: PauseSignal,
    reporter: Reporter<W>,
}

impl<W: Write> SimulationRunner<W> {
    /// Validates `config` and builds the populated island.
    pub fn new(config: AppConfig, pause: PauseSignal, out: W) -> Result<Self> {
        settings::validate(&config)?;
        let ecosystem = Ecosystem::from_config(&config);
        let metrics = Metrics::new(config.run.log_interval);
        metrics.record_start(&ecosystem.census());
        let reporter = Reporter::new(config.run.format, out);
        Ok(Self {
            config,
            ecosystem,
            metrics,
            pause,
            reporter,
        })
    }

    #[must_use]
    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }

    /// Runs the configured number of rounds, stopping early once the island
    /// is empty.
    pub async fn run(&mut self) -> Result<RunOutcome> {
        let rounds = self.config.island.rounds;
        let delay = self.config.run.speed.delay();
        tracing::info!(
            rounds,
            capacity = self.ecosystem.capacity(),
            flora = self.ecosystem.flora.len(),
            fauna = self.ecosystem.fauna.len(),
            "Simulation starting"
        );

        let mut stopped_early = false;
        for _ in 0..rounds {
            self.ecosystem.simulate_step();
            let census = self.ecosystem.census();
            self.metrics.record_day(&census, &self.ecosystem.last_summary());

            if self.config.run.mode == RunMode::Step {
                self.reporter.day(&census)?;
            }

            if self.ecosystem.is_barren() {
                tracing::info!(day = self.ecosystem.day, "Island is empty, stopping early");
                stopped_early = self.ecosystem.day < rounds;
                break;
            }

            self.pause.wait_while_paused().await;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        let census = self.ecosystem.census();
        // Step mode has already shown the last day.
        if self.config.run.mode == RunMode::Auto {
            self.reporter.day(&census)?;
        }
        let outcome = RunOutcome {
            days: self.ecosystem.day,
            plants: census.flora_total,
            animals: census.fauna_total,
            stopped_early,
            extinct: self.metrics.extinctions(),
        };
        self.reporter.finished(&outcome)?;
        self.metrics.log_summary();
        Ok(outcome)
    }
}

//! Per-day and end-of-run reports, as text blocks or JSON lines.

use crate::app::error::Result;
use islandsim_core::config::ReportFormat;
use islandsim_data::{Census, Species};
use serde::Serialize;
use std::io::Write;

/// Closing tally of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub days: u32,
    pub plants: usize,
    pub animals: usize,
    /// Ran out of organisms before the configured number of rounds.
    pub stopped_early: bool,
    pub extinct: Vec<Species>,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonLine<'a> {
    Day(&'a Census),
    Finished(&'a RunOutcome),
}

fn joined(census: &Census, species: &[Species]) -> String {
    species
        .iter()
        .map(|s| format!("{}={}", s.display_name(), census.count(*s)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-line text block describing one day.
#[must_use]
pub fn render_text(census: &Census) -> String {
    let weather = census
        .weather
        .map_or_else(|| "none".to_string(), |w| w.to_string());
    format!(
        "Day {day}:\n\
         Weather = {weather}, Temperature = {temperature}\n  \
         Plants: {plants}\n  \
         Animals: {animals}\n  \
         Total: {flora} plants, {fauna} animals\n",
        day = census.day,
        temperature = census.temperature,
        plants = joined(census, &Species::FLORA),
        animals = joined(census, &Species::FAUNA),
        flora = census.flora_total,
        fauna = census.fauna_total,
    )
}

/// Writes reports to any sink in the configured format.
pub struct Reporter<W: Write> {
    format: ReportFormat,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(format: ReportFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn day(&mut self, census: &Census) -> Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(self.out, "{}", render_text(census))?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonLine::Day(census))?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn finished(&mut self, outcome: &RunOutcome) -> Result<()> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.out, "Simulation complete after {} days.", outcome.days)?;
                writeln!(
                    self.out,
                    "Final result: {} plants, {} animals",
                    outcome.plants, outcome.animals
                )?;
                if !outcome.extinct.is_empty() {
                    let names: Vec<&str> =
                        outcome.extinct.iter().map(|s| s.display_name()).collect();
                    writeln!(self.out, "Extinct: {}", names.join(", "))?;
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonLine::Finished(outcome))?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

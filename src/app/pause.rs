//! Cooperative pause between simulated days.
//!
//! The flag is only polled by the runner between steps, never by the engine.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// How often a paused runner re-checks the flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared pause flag; clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct PauseSignal {
    paused: Arc<AtomicBool>,
}

impl PauseSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&self) -> bool {
        let paused = !self.paused.fetch_xor(true, Ordering::SeqCst);
        if paused {
            tracing::info!("Simulation paused");
        } else {
            tracing::info!("Simulation resumed");
        }
        paused
    }

    /// Resolves once the flag is clear.
    pub async fn wait_while_paused(&self) {
        while self.is_paused() {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Starts a background thread that toggles the flag whenever a line
    /// reading `p` arrives on stdin. The thread ends with stdin.
    pub fn spawn_stdin_listener(&self) -> std::io::Result<JoinHandle<()>> {
        let signal = self.clone();
        std::thread::Builder::new()
            .name("pause-listener".into())
            .spawn(move || signal.listen(std::io::stdin().lock()))
    }

    /// Toggles on every `p` line read from `input` until it is exhausted.
    pub fn listen<R: BufRead>(&self, input: R) {
        for line in input.lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().eq_ignore_ascii_case("p") {
                let paused = self.toggle();
                eprintln!(
                    "{}",
                    if paused {
                        "Paused. Press 'p' + Enter to resume."
                    } else {
                        "Resumed."
                    }
                );
            }
        }
    }
}

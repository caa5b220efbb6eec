use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{MissedTickBehavior, interval};

use crate::probe::{ProbeResult, Prober};
use crate::round::run_round;
use crate::targets::load_targets;

/// Drives rounds: one immediately, then one per `interval` tick.
pub struct Scheduler {
    prober: Prober,
    targets_file: PathBuf,
    interval: Duration,
}

impl Scheduler {
    /// `interval` must be non-zero.
    pub fn new(prober: Prober, targets_file: PathBuf, interval: Duration) -> Self {
        Scheduler {
            prober,
            targets_file,
            interval,
        }
    }

    /// Run rounds forever. Rounds never overlap: a round that outlasts the interval
    /// delays the next one, and ticks missed meanwhile are not queued.
    pub async fn run(&self, sink: UnboundedSender<ProbeResult>) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // The first tick completes immediately.
            ticker.tick().await;
            self.run_once(&sink).await;
        }
    }

    /// Reload the target list and probe it once. A target list that cannot be read skips the round.
    pub async fn run_once(&self, sink: &UnboundedSender<ProbeResult>) -> usize {
        log::info!("Probing targets...");

        let targets = match load_targets(&self.targets_file).await {
            Ok(targets) => targets,
            Err(e) => {
                log::error!("Skipping round: {e}");
                return 0;
            }
        };

        let count = targets.len();
        let delivered = run_round(&self.prober, targets, sink).await;
        log::info!("Finished probing {count} targets");
        delivered
    }
}

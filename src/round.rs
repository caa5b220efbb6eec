use tokio::sync::mpsc::UnboundedSender;

use crate::probe::{ProbeResult, Prober, Target};

/// Probe every target concurrently, one task per target, and forward each result into `sink`.
/// Returns once every task has finished, with the number of results delivered.
pub async fn run_round(
    prober: &Prober,
    targets: Vec<Target>,
    sink: &UnboundedSender<ProbeResult>,
) -> usize {
    let mut handles = Vec::with_capacity(targets.len());

    for target in targets {
        let prober = prober.clone();
        let sink = sink.clone();

        let handle = tokio::spawn(async move {
            let result = prober.probe(&target).await;
            if sink.send(result).is_err() {
                log::error!("Result logger is gone, dropping result for {target}");
                return false;
            }
            true
        });

        handles.push(handle);
    }

    let mut delivered = 0;
    for handle in handles {
        match handle.await {
            Ok(true) => delivered += 1,
            Ok(false) => {}
            Err(e) => log::error!("Probe task failed: {e}"),
        }
    }

    delivered
}

use tokio::sync::mpsc;

pub mod config;
use config::load_config;
pub mod error;
use error::StartupError;
pub mod probe;
use probe::Prober;
pub mod result_log;
use result_log::{ResultLog, spawn_result_logger};
pub mod round;
pub mod scheduler;
use scheduler::Scheduler;
pub mod targets;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;

    let result_log = ResultLog::open(&config.log_file)?;
    log::info!("Logging results to {}", config.log_file.display());

    let prober = Prober::new(&config.probe)?;
    log::info!(
        "Probing targets from {} every {:?}",
        config.targets_file.display(),
        config.polling_interval
    );

    let (sender, receiver) = mpsc::unbounded_channel();
    let logger = spawn_result_logger(result_log, receiver);

    let scheduler = Scheduler::new(prober, config.targets_file, config.polling_interval);

    // Rounds never end on their own; Ctrl-C is the only exit we can intercept.
    // Dropping the scheduler future drops its sender; probes still in flight finish and the
    // logger drains everything before the file is closed.
    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => log::info!("Shutting down, waiting for pending results to be written"),
            Err(e) => {
                log::error!("Failed to listen for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = scheduler.run(sender) => {}
        _ = shutdown => {}
    }

    tokio::select! {
        written = logger => log::info!("{} results written this run", written?),
        _ = tokio::signal::ctrl_c() => {
            log::warn!("Second interrupt, exiting without draining");
            std::process::exit(130);
        }
    }

    Ok(())
}

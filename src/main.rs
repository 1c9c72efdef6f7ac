use dotenv::dotenv;
use std::time::Duration;
use ticker_snapshot::application::config::ScheduleConfig;
use ticker_snapshot::application::job::run_job;
use ticker_snapshot::application::scheduler::run_every;
use ticker_snapshot::utils::setup_logger;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logger();
    dotenv().ok();

    let interval_minutes = ScheduleConfig::from_env().interval_minutes;
    info!("Scheduling ticker snapshot every {} minutes", interval_minutes);

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
        }
    };

    run_every(Duration::from_secs(interval_minutes * 60), run_job, shutdown).await;
}

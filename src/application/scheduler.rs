use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Runs `job` every `period` until `shutdown` resolves
///
/// The first run starts immediately. A run longer than the period swallows the
/// ticks it overlaps. `shutdown` is watched while waiting for a tick and while
/// a run is in progress; an interrupted run is dropped where it stands.
///
/// # Returns
/// Number of runs started, including an interrupted one
pub async fn run_every<J, Fut, S>(period: Duration, mut job: J, shutdown: S) -> usize
where
    J: FnMut() -> Fut,
    Fut: Future<Output = ()>,
    S: Future,
{
    tokio::pin!(shutdown);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut runs = 0;

    loop {
        let ticked = tokio::select! {
            _ = ticker.tick() => true,
            _ = &mut shutdown => false,
        };
        if !ticked {
            info!("Shutdown requested, stopping after {} runs", runs);
            return runs;
        }

        runs += 1;
        let finished = tokio::select! {
            _ = job() => true,
            _ = &mut shutdown => false,
        };
        if !finished {
            info!("Shutdown requested during run {}, abandoning it", runs);
            return runs;
        }
    }
}

//! Periodic collection.
//!
//! Runs a collection immediately, then again on a fixed interval until
//! Ctrl-C. A failed run stops the loop and is returned to the caller.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::time::{interval, MissedTickBehavior};

use crate::library::CatalogFile;

use super::collect_once;

/// Interval used when none (or zero) is given
pub const DEFAULT_INTERVAL_HOURS: u64 = 24;

/// Longest accepted interval (about 100 years)
pub const MAX_INTERVAL_HOURS: u64 = 24 * 365 * 100;

/// Settings for a scheduled collection loop
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Hours between runs
    pub interval_hours: u64,

    /// Records generated per run
    pub count: usize,
}

impl ScheduleConfig {
    /// Build a schedule; a zero interval falls back to the default and
    /// longer intervals are capped at [`MAX_INTERVAL_HOURS`]
    pub fn new(interval_hours: u64, count: usize) -> Self {
        let interval_hours = match interval_hours {
            0 => DEFAULT_INTERVAL_HOURS,
            hours => hours.min(MAX_INTERVAL_HOURS),
        };
        Self {
            interval_hours,
            count,
        }
    }

    pub fn period(&self) -> Duration {
        let hours = self.interval_hours.clamp(1, MAX_INTERVAL_HOURS);
        Duration::from_secs(hours.saturating_mul(60 * 60))
    }
}

/// Collect now, then every `config.period()` until Ctrl-C
pub async fn run_scheduled(file: &CatalogFile, config: &ScheduleConfig) -> Result<()> {
    run_until(file, config, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await?;
    Ok(())
}

/// Same as [`run_scheduled`] with an arbitrary stop signal.
///
/// Returns the number of completed runs.
pub async fn run_until<F>(file: &CatalogFile, config: &ScheduleConfig, stop: F) -> Result<usize>
where
    F: Future<Output = ()>,
{
    tracing::info!(
        "Starting scheduled collection every {} hour(s)",
        config.interval_hours
    );

    let count = config.count;
    run_every(config.period(), stop, |_| async move {
        collect_once(file, count).await.map(|_| ())
    })
    .await
}

/// Run `job` immediately and then once per `period` until `stop` resolves.
///
/// The job receives the zero-based run number. The first error ends the
/// loop and is returned.
pub async fn run_every<S, J, Fut>(period: Duration, stop: S, mut job: J) -> Result<usize>
where
    S: Future<Output = ()>,
    J: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(stop);

    let mut runs = 0usize;
    loop {
        tokio::select! {
            biased;

            _ = ticker.tick() => {
                // The first tick completes immediately
                if runs > 0 {
                    tracing::info!("{} - starting scheduled collection", Local::now().format("%Y-%m-%d %H:%M:%S"));
                }
                job(runs)
                    .await
                    .with_context(|| format!("Scheduled collection #{} failed", runs + 1))?;
                runs += 1;
            }
            _ = &mut stop => {
                tracing::info!("Stopping scheduled collection after {} run(s)", runs);
                return Ok(runs);
            }
        }
    }
}

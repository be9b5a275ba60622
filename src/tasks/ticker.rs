//! Periodic countdown and prayer tickers

use std::{future::Future, sync::Arc, time::Duration};
use tokio::{sync::watch, time::MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Run `tick` now and then every `period` until `shutdown` flips to true
/// or its sender goes away.
async fn run_periodic<F>(name: &'static str, period: Duration, mut shutdown: watch::Receiver<bool>, mut tick: F)
where
    F: FnMut() -> Result<(), String>,
{
    info!("Starting {} ticker every {:?}", name, period);

    // The first tick of an interval completes immediately
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = tick() {
                    error!("{} tick failed: {}", name, e);
                }
            }

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("{} ticker stopped", name);
}

/// Background task refreshing the countdown slots
pub fn countdown_ticker_task(state: Arc<AppState>, shutdown: watch::Receiver<bool>) -> impl Future<Output = ()> {
    let period = state.settings.countdown_period;
    run_periodic("countdown", period, shutdown, move || {
        let result = state.tick_countdown()?;
        debug!("Countdown tick: {:?}", result);
        Ok(())
    })
}

/// Background task refreshing the active prayer card
pub fn prayer_ticker_task(state: Arc<AppState>, shutdown: watch::Receiver<bool>) -> impl Future<Output = ()> {
    let period = state.settings.prayer_period;
    run_periodic("prayer", period, shutdown, move || {
        state.tick_prayer()?;
        Ok(())
    })
}

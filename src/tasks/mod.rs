//! Background tasks module
//!
//! This module contains the periodic tickers that keep the page model current.

pub mod ticker;

use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, warn};

use crate::state::AppState;

// Re-export main functions
pub use ticker::{countdown_ticker_task, prayer_ticker_task};

/// Running countdown and prayer tickers
pub struct Tickers {
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

/// Spawn both tickers; each renders once immediately
pub fn spawn_tickers(state: Arc<AppState>) -> Tickers {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handles = vec![
        tokio::spawn(countdown_ticker_task(Arc::clone(&state), shutdown_rx.clone())),
        tokio::spawn(prayer_ticker_task(state, shutdown_rx)),
    ];

    Tickers { shutdown_tx, handles }
}

impl Tickers {
    /// Signal both tickers to stop and wait for them to finish
    pub async fn stop(self) {
        info!("Stopping tickers");
        if let Err(e) = self.shutdown_tx.send(true) {
            warn!("Failed to signal ticker shutdown: {}", e);
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!("Ticker task ended abnormally: {}", e);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handles.iter().all(JoinHandle::is_finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Local, TimeZone};
    use std::time::Duration;

    use crate::{
        config::BoardSettings,
        schedule::FixedClock,
        state::board::{PRAYER_CARD_CLASS, SECONDS_SLOT},
    };

    fn state() -> (Arc<AppState>, Arc<FixedClock>) {
        // Ten seconds before the target, in the maghrib window
        let now = Local.with_ymd_and_hms(2025, 2, 28, 23, 59, 50).single().unwrap();
        let clock = Arc::new(FixedClock::new(now));
        let state = AppState::new(BoardSettings::reference().unwrap(), clock.clone(), 8080, "127.0.0.1".into());
        (Arc::new(state), clock)
    }

    #[tokio::test(start_paused = true)]
    async fn tickers_render_immediately() {
        let (state, _clock) = state();
        let tickers = spawn_tickers(Arc::clone(&state));

        tokio::time::sleep(Duration::from_millis(10)).await;

        let board = state.get_board().unwrap();
        assert_eq!(board.text(SECONDS_SLOT), Some("10"));
        assert_eq!(board.active_ids(PRAYER_CARD_CLASS), vec!["prayer-isya"]);

        tickers.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_follows_period() {
        let (state, clock) = state();
        let tickers = spawn_tickers(Arc::clone(&state));
        tokio::time::sleep(Duration::from_millis(10)).await;

        clock.advance(ChronoDuration::seconds(1));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(state.get_board().unwrap().text(SECONDS_SLOT), Some("09"));

        clock.advance(ChronoDuration::seconds(20));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(state.countdown_tx.borrow().is_some_and(|r| r.is_arrived()));

        tickers.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn prayer_ticker_waits_a_full_period() {
        let (state, clock) = state();
        let tickers = spawn_tickers(Arc::clone(&state));
        tokio::time::sleep(Duration::from_millis(10)).await;

        // 00:00:30, before subuh; not picked up until the next minute tick
        clock.advance(ChronoDuration::seconds(40));
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(state.get_board().unwrap().active_ids(PRAYER_CARD_CLASS), vec!["prayer-isya"]);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(state.get_board().unwrap().active_ids(PRAYER_CARD_CLASS).is_empty());

        tickers.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_both_tasks() {
        let (state, _clock) = state();
        let tickers = spawn_tickers(Arc::clone(&state));
        assert!(!tickers.is_finished());

        let stopped = tokio::time::timeout(Duration::from_secs(5), tickers.stop()).await;
        assert!(stopped.is_ok());
    }
}

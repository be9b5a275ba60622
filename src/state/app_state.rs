//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Local};
use rand::Rng;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    config::BoardSettings,
    effects,
    render::{mark_active_prayer, render_countdown},
    schedule::{minutes_since_midnight, Clock, CountdownResult},
    surface::Surface,
};
use super::Board;

/// Main application state holding the page model and the fixed schedule
pub struct AppState {
    /// Fixed startup values (target, prayer table, periods)
    pub settings: BoardSettings,
    /// The page model every ticker and effect renders into
    pub board: Arc<Mutex<Board>>,
    pub clock: Arc<dyn Clock>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last tick tracking, in clock time
    pub last_countdown_tick: Arc<Mutex<Option<DateTime<Local>>>>,
    pub last_prayer_tick: Arc<Mutex<Option<DateTime<Local>>>>,
    /// Channel for countdown results, `None` until the first tick
    pub countdown_tx: watch::Sender<Option<CountdownResult>>,
    /// Channel for the active prayer window
    pub prayer_tx: watch::Sender<Option<String>>,
    /// Keep the receivers alive to prevent channel closure
    pub _countdown_rx: watch::Receiver<Option<CountdownResult>>,
    pub _prayer_rx: watch::Receiver<Option<String>>,
}

impl AppState {
    /// Create a new AppState with the standard page layout
    pub fn new(settings: BoardSettings, clock: Arc<dyn Clock>, port: u16, host: String) -> Self {
        let (countdown_tx, countdown_rx) = watch::channel(None);
        let (prayer_tx, prayer_rx) = watch::channel(None);
        let board = Board::page(&settings.prayers, settings.feature_cards);

        Self {
            settings,
            board: Arc::new(Mutex::new(board)),
            clock,
            start_time: Instant::now(),
            port,
            host,
            last_countdown_tick: Arc::new(Mutex::new(None)),
            last_prayer_tick: Arc::new(Mutex::new(None)),
            countdown_tx,
            prayer_tx,
            _countdown_rx: countdown_rx,
            _prayer_rx: prayer_rx,
        }
    }

    /// Run a closure against the locked page model
    pub fn with_board<T, F>(&self, f: F) -> Result<T, String>
    where
        F: FnOnce(&mut Board) -> T,
    {
        let mut board = self.board.lock()
            .map_err(|e| format!("Failed to lock board: {}", e))?;
        Ok(f(&mut board))
    }

    /// Get a snapshot of the page model
    pub fn get_board(&self) -> Result<Board, String> {
        self.with_board(|board| board.clone())
    }

    /// Generate the decorative layers and wire the static affordances
    pub fn decorate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(), String> {
        let settings = &self.settings;
        let reduced_motion = settings.reduced_motion;

        let (stars, particles, focusable) = self.with_board(|board| {
            let stars = effects::create_stars(board, rng, settings.stars, reduced_motion);
            let particles = effects::create_particles(board, rng, settings.particles, reduced_motion);
            if reduced_motion {
                effects::reveal_all(board);
            }
            if !effects::init_smooth_scroll(board) {
                debug!("Scroll indicator or features section missing, smooth scroll not wired");
            }
            (stars, particles, effects::init_keyboard_nav(board))
        })?;

        info!("Decorated page: {} stars, {} particles, {} focusable cards", stars, particles, focusable);
        Ok(())
    }

    /// Current countdown for the clock's now, without touching the board
    pub fn current_countdown(&self) -> CountdownResult {
        self.settings.countdown.compute(self.clock.now())
    }

    /// Current prayer window for the clock's now, without touching the board
    pub fn current_prayer(&self) -> Option<String> {
        let minutes = minutes_since_midnight(self.clock.now().naive_local().time());
        self.settings.prayers.locate(minutes).map(str::to_string)
    }

    /// Recompute the countdown from the clock and render it
    pub fn tick_countdown(&self) -> Result<CountdownResult, String> {
        let now = self.clock.now();
        let result = self.settings.countdown.compute(now);

        let rendered = self.with_board(|board| {
            render_countdown(board, &result, &self.settings.arrived_label)
        })?;
        if !rendered {
            debug!("Countdown not rendered, display slots missing");
        }

        if let Ok(mut last) = self.last_countdown_tick.lock() {
            *last = Some(now);
        }

        // Only notify watchers when the value actually moves
        self.countdown_tx.send_if_modified(|current| {
            if current.as_ref() == Some(&result) {
                false
            } else {
                *current = Some(result);
                true
            }
        });

        Ok(result)
    }

    /// Locate the active prayer window from the clock and mark its card
    pub fn tick_prayer(&self) -> Result<Option<String>, String> {
        let now = self.clock.now();
        let active = self.settings.prayers
            .locate(minutes_since_midnight(now.naive_local().time()))
            .map(str::to_string);

        let flagged = self.with_board(|board| {
            mark_active_prayer(board, &self.settings.prayers, active.as_deref())
        })?;
        debug!("Prayer tick at {}: active={:?}, flagged={}", now, active, flagged);

        if let Ok(mut last) = self.last_prayer_tick.lock() {
            *last = Some(now);
        }

        let previous = self.prayer_tx.borrow().clone();
        if previous != active {
            info!("Active prayer window changed: {:?} -> {:?}", previous, active);
            if let Err(e) = self.prayer_tx.send(active.clone()) {
                warn!("Failed to send prayer update: {}", e);
            }
        }

        Ok(active)
    }

    /// Start revealing a feature card that became visible.
    /// Returns the delay before it shows, or `None` if nothing to do.
    pub fn begin_reveal(&self, card_id: &str, ratio: f64) -> Result<Option<Duration>, String> {
        self.with_board(|board| effects::begin_reveal(board, card_id, ratio))
    }

    /// Finish a reveal after its delay
    pub fn finish_reveal(&self, card_id: &str) -> Result<bool, String> {
        self.with_board(|board| board.set_class(card_id, effects::VISIBLE_CLASS, true))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get the clock times of the last countdown and prayer ticks
    pub fn get_last_ticks(&self) -> (Option<DateTime<Local>>, Option<DateTime<Local>>) {
        let countdown = self.last_countdown_tick.lock().ok().and_then(|t| *t);
        let prayer = self.last_prayer_tick.lock().ok().and_then(|t| *t);
        (countdown, prayer)
    }
}

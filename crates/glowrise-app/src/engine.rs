//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the alarm state, the message channel, the ticker task,
//! the shutdown signal and the event broadcaster. Both front ends feed it
//! messages and render from `engine.state`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::ResolvedConfig;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::ticker::{self, TICK_INTERVAL};

const CHANNEL_CAPACITY: usize = 256;
const TICKER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StateSnapshot {
    percent: u8,
    ringing: bool,
    held_on: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let clock = &state.alarm_clock;
        Self {
            percent: clock.percent(),
            ringing: clock.is_ringing(),
            held_on: clock.is_held_on(),
        }
    }
}

/// Orchestration engine for Glow Rise.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, ticker, stdin).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    clock: Arc<dyn Clock>,

    ticker: Option<JoinHandle<()>>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine on the host's local clock.
    pub fn new(config: ResolvedConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an Engine reading time from `clock`.
    ///
    /// Spawns the signal handler and evaluates brightness once so the first
    /// frame is accurate. The ticker starts separately via
    /// [`Engine::start_ticker`].
    pub fn with_clock(config: ResolvedConfig, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        info!(
            "Starting with alarm {} ({} preset, {:.0}s pre-glow)",
            config.alarm,
            config.preset,
            config.profile.window_secs()
        );
        let state = AppState::new(config.profile, config.preset, config.alarm, now);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            clock,
            ticker: None,
            event_tx,
        };
        engine.process_message(Message::Refresh);
        engine
    }

    /// Start the once-per-second ticker. Calling it again is a no-op.
    pub fn start_ticker(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        self.ticker = Some(ticker::spawn_ticker(
            self.clock.clone(),
            TICK_INTERVAL,
            self.msg_tx.clone(),
            self.shutdown_rx.clone(),
        ));
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Messages other than ticks are stamped with a fresh clock reading so
    /// user controls act on the current time rather than the last tick.
    pub fn process_message(&mut self, msg: Message) {
        if !matches!(msg, Message::Tick { .. }) {
            self.state.now = self.clock.now();
        }

        let pre = StateSnapshot::capture(&self.state);

        for action in process::process_message(&mut self.state, msg) {
            self.emit(action.into());
        }

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Initiate shutdown: notify subscribers, stop background tasks.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let _ = self.shutdown_tx.send(true);

        if let Some(handle) = self.ticker.take() {
            match tokio::time::timeout(TICKER_SHUTDOWN_TIMEOUT, handle).await {
                Ok(Ok(())) => debug!("Ticker cleaned up"),
                Ok(Err(e)) => warn!("Ticker task panicked: {}", e),
                Err(_) => warn!("Ticker cleanup timed out"),
            }
        }
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre != post {
            self.emit(EngineEvent::BrightnessChanged {
                brightness: self.state.alarm_clock.brightness(),
                percent: post.percent,
                ringing: post.ringing,
                held_on: post.held_on,
            });
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ManualClock, MockClock};
    use chrono::{NaiveDate, NaiveDateTime};
    use glowrise_core::AlarmTime;
    use tokio::sync::broadcast::error::TryRecvError;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn engine_at(clock: &ManualClock) -> Engine {
        Engine::with_clock(ResolvedConfig::default(), Arc::new(clock.clone()))
    }

    fn drain(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => return events,
            }
        }
    }

    #[tokio::test]
    async fn test_engine_new_evaluates_immediately() {
        let clock = ManualClock::new(at(6, 29, 45));
        let engine = engine_at(&clock);

        assert_eq!(engine.state.now, at(6, 29, 45));
        assert_eq!(engine.state.reading.unwrap().percent(), 53);
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_engine_reads_clock_through_trait() {
        let mut clock = MockClock::new();
        clock.expect_now().returning(|| at(5, 0, 0));
        let engine = Engine::with_clock(ResolvedConfig::default(), Arc::new(clock));

        assert_eq!(engine.state.now, at(5, 0, 0));
        assert_eq!(engine.state.alarm_clock.percent(), 5);
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let clock = ManualClock::new(at(6, 0, 0));
        let mut engine = engine_at(&clock);
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_drains_queued_messages() {
        let clock = ManualClock::new(at(6, 0, 0));
        let mut engine = engine_at(&clock);
        let tx = engine.msg_sender();

        tx.send(Message::Tick { now: at(6, 29, 45) }).await.unwrap();
        tx.send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_engine_emits_ringing_then_brightness() {
        let clock = ManualClock::new(at(6, 29, 0));
        let mut engine = engine_at(&clock);
        let mut rx = engine.subscribe();

        clock.set(at(6, 30, 0));
        engine.process_message(Message::Tick { now: at(6, 30, 0) });

        let events = drain(&mut rx);
        assert_eq!(
            events[0],
            EngineEvent::RingingStarted {
                alarm: AlarmTime::new(6, 30).unwrap(),
                at: at(6, 30, 0)
            }
        );
        assert!(matches!(
            events[1],
            EngineEvent::BrightnessChanged {
                percent: 100,
                ringing: true,
                held_on: true,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_user_controls_use_fresh_clock_reading() {
        let clock = ManualClock::new(at(6, 29, 0));
        let mut engine = engine_at(&clock);
        engine.process_message(Message::Tick { now: at(6, 30, 0) });

        clock.set(at(6, 33, 10));
        engine.process_message(Message::Snooze);

        assert_eq!(engine.state.now, at(6, 33, 10));
        assert_eq!(
            engine.state.alarm_clock.alarm(),
            AlarmTime::new(6, 38).unwrap()
        );
    }

    #[tokio::test]
    async fn test_unchanged_state_emits_nothing() {
        let clock = ManualClock::new(at(3, 0, 0));
        let mut engine = engine_at(&clock);
        let mut rx = engine.subscribe();

        engine.process_message(Message::Tick { now: at(3, 0, 1) });

        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_receives_shutdown_event() {
        let clock = ManualClock::new(at(6, 0, 0));
        let mut engine = engine_at(&clock);
        let mut rx = engine.subscribe();

        engine.shutdown().await;

        assert_eq!(rx.recv().await.unwrap(), EngineEvent::Shutdown);
        assert!(*engine.shutdown_receiver().borrow());
    }

    #[tokio::test]
    async fn test_no_subscribers_no_error() {
        let clock = ManualClock::new(at(6, 0, 0));
        let mut engine = engine_at(&clock);
        engine.process_message(Message::Tick { now: at(6, 30, 0) });
        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_feeds_engine_and_stops_on_shutdown() {
        let clock = ManualClock::new(at(6, 29, 45));
        let mut engine = engine_at(&clock);
        engine.start_ticker();
        engine.start_ticker();

        let msg = engine.msg_rx.recv().await.unwrap();
        assert_eq!(msg, Message::Tick { now: at(6, 29, 45) });
        engine.process_message(msg);

        engine.shutdown().await;
        assert!(engine.ticker.is_none());
    }
}

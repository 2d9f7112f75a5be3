//! Periodic wall clock ticks
//!
//! One task reads the [`Clock`] every second and feeds `Message::Tick` into
//! the engine channel. A tick is fully delivered before the next interval is
//! observed, and intervals missed meanwhile are skipped rather than bursted.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::clock::Clock;
use crate::message::Message;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn the ticker. It stops when `shutdown_rx` turns `true` (or its sender
/// is dropped) or when the message channel closes.
pub fn spawn_ticker(
    clock: Arc<dyn Clock>,
    period: Duration,
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = wait_for_shutdown(&mut shutdown_rx) => break,
            }

            let tick = Message::Tick { now: clock.now() };
            tokio::select! {
                sent = tx.send(tick) => {
                    if sent.is_err() {
                        debug!("Message channel closed, stopping ticker");
                        break;
                    }
                }
                _ = wait_for_shutdown(&mut shutdown_rx) => break,
            }
        }

        debug!("Ticker stopped");
    })
}

async fn wait_for_shutdown(shutdown_rx: &mut watch::Receiver<bool>) {
    // Err means the sender is gone, which is a shutdown too
    let _ = shutdown_rx.wait_for(|stop| *stop).await;
}

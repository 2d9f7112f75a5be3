//! Headless mode runner - event loop without the terminal UI
//!
//! Ticks drive `tick` lines on stdout; stdin lines become alarm controls.

use std::io::BufRead;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use glowrise_app::config::ResolvedConfig;
use glowrise_app::{Engine, EngineEvent, Message};
use glowrise_core::prelude::*;
use glowrise_core::AlarmTime;

use super::HeadlessEvent;

/// Run in headless mode until `quit`, end of stdin or a signal.
pub async fn run_headless(config: ResolvedConfig) -> Result<()> {
    info!("Glow Rise starting in HEADLESS mode");

    let mut engine = Engine::new(config);
    let mut events = engine.subscribe();

    HeadlessEvent::started(&engine.state).emit();
    HeadlessEvent::tick(&engine.state).emit();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        read_stdin_blocking(stdin_tx);
    });

    engine.start_ticker();

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown().await;
    flush_engine_events(&mut events);

    info!("Glow Rise headless mode exiting");
    result
}

async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    while !engine.should_quit() {
        let Some(msg) = engine.msg_rx.recv().await else {
            info!("Message channel closed");
            break;
        };

        let is_tick = matches!(msg, Message::Tick { .. });
        engine.process_message(msg);
        flush_engine_events(events);

        if is_tick {
            HeadlessEvent::tick(&engine.state).emit();
        }
    }

    Ok(())
}

fn flush_engine_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(line) = HeadlessEvent::from_engine_event(&event) {
                    line.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read commands line by line until EOF, which counts as `quit`.
fn read_stdin_blocking(msg_tx: mpsc::Sender<Message>) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(msg)) => {
                let quit = msg == Message::Quit;
                if msg_tx.blocking_send(msg).is_err() || quit {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Rejected stdin command: {}", e);
                command_error(&e).emit();
            }
        }
    }

    let _ = msg_tx.blocking_send(Message::Quit);
}

/// `error` line for a rejected stdin command.
fn command_error(e: &Error) -> HeadlessEvent {
    HeadlessEvent::error(e.to_string(), !e.is_recoverable())
}

/// Parse one stdin line into a message.
///
/// Blank lines yield `Ok(None)`. Commands are case-insensitive.
pub fn parse_command(line: &str) -> Result<Option<Message>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let msg = match command.to_ascii_lowercase().as_str() {
        "snooze" => Message::Snooze,
        "dismiss" => Message::Dismiss,
        "stop" => Message::Stop,
        "quit" | "exit" => Message::Quit,
        "set" => {
            let time = words.next().unwrap_or_default();
            Message::SetAlarmTime(time.parse::<AlarmTime>()?)
        }
        _ => return Err(Error::unknown_command(line.trim())),
    };
    Ok(Some(msg))
}

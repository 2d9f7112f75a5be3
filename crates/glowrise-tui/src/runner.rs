//! Main TUI runner - entry point and event loop

use std::time::Instant;

use glowrise_app::config::ResolvedConfig;
use glowrise_app::Engine;
use glowrise_core::prelude::*;

use crate::{event, render, terminal};

/// Run the terminal UI until the user quits or a signal arrives.
pub async fn run(config: ResolvedConfig) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut engine = Engine::new(config);
    engine.start_ticker();
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let started = Instant::now();

    while !engine.should_quit() {
        // Ticks, signals and anything else queued since the last frame
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        let pulse_ms = started.elapsed().as_millis() as u64;
        terminal
            .draw(|frame| render::view(frame, &engine.state, pulse_ms))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}

//! Glow Rise - a wake-up light alarm clock for the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use glow_rise::headless::HeadlessEvent;
use glowrise_app::config::{self, CliOverrides};
use glowrise_core::{logging, AlarmTime, Preset};

/// Glow Rise - wake up to a light that brightens before the alarm
#[derive(Parser, Debug)]
#[command(name = "glowrise", version)]
#[command(about = "A wake-up light alarm clock for the terminal", long_about = None)]
struct Args {
    /// Alarm time of day, 24-hour
    #[arg(long, value_name = "HH:MM")]
    alarm: Option<AlarmTime>,

    /// Glow variant: quick, sunrise or classic
    #[arg(long)]
    preset: Option<Preset>,

    /// Length of the pre-glow ramp in seconds
    #[arg(long, value_name = "SECS")]
    window_secs: Option<u64>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, commands on stdin)
    #[arg(long)]
    headless: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let Some(path) = args.config.clone().or_else(config::default_config_path) else {
            color_eyre::eyre::bail!("No config directory on this platform; pass --config PATH");
        };
        if config::init_config_file(&path)? {
            eprintln!("Wrote {}", path.display());
        } else {
            eprintln!("{} already exists, left untouched", path.display());
        }
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let overrides = CliOverrides {
        alarm: args.alarm,
        preset: args.preset,
        window_secs: args.window_secs,
    };
    let resolved = match config::load_settings_from(args.config.as_deref())
        .and_then(|settings| config::resolve(&settings, &overrides))
    {
        Ok(resolved) => resolved,
        Err(e) => {
            if args.headless {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            return Err(e.into());
        }
    };

    if args.headless {
        glow_rise::run_headless(resolved).await?;
    } else {
        glow_rise::run_tui(resolved).await?;
    }
    Ok(())
}

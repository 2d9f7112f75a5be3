//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use glowrise_core::prelude::*;
use glowrise_core::GlowProfile;

use super::types::{CliOverrides, ResolvedConfig, Settings};

pub const CONFIG_DIR: &str = "glow-rise";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# Glow Rise configuration

[alarm]
# 24-hour HH:MM
time = "06:30"

[glow]
# quick | sunrise | classic
preset = "quick"
# Uncomment to override the preset
# window_secs = 30
# min_brightness = 5.0
# max_brightness = 100.0
# hold_until_stopped = true
# snooze_minutes = 5
# palette = "amber"
"#;

/// `$XDG_CONFIG_HOME/glow-rise/config.toml` (platform equivalent elsewhere).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults. An unreadable or malformed file is logged
/// and also yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path, or the default location when `None`.
///
/// Unlike the default location, an explicitly named file must exist.
pub fn load_settings_from(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::config_not_found(path)),
        Some(path) => Ok(load_settings(path)),
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}

/// Merge file settings with command-line overrides and validate the result.
pub fn resolve(settings: &Settings, overrides: &CliOverrides) -> Result<ResolvedConfig> {
    let glow = &settings.glow;
    let preset = overrides.preset.unwrap_or(glow.preset);
    let mut profile = GlowProfile::from_preset(preset);

    if let Some(secs) = overrides.window_secs.or(glow.window_secs) {
        profile.pre_glow_window = Duration::from_secs(secs);
    }
    if let Some(min) = glow.min_brightness {
        profile.min_brightness = min;
    }
    if let Some(max) = glow.max_brightness {
        profile.max_brightness = max;
    }
    if let Some(hold) = glow.hold_until_stopped {
        profile.hold_until_stopped = hold;
    }
    if let Some(minutes) = glow.snooze_minutes {
        profile.snooze = minutes
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                Error::config_invalid(format!("snooze_minutes ({minutes}) is out of range"))
            })?;
    }
    if let Some(palette) = glow.palette {
        profile.palette = palette;
    }

    profile.validate()?;

    Ok(ResolvedConfig {
        alarm: overrides.alarm.unwrap_or(settings.alarm.time),
        preset,
        profile,
    })
}

/// Write a commented default config to `config_path` unless one exists.
///
/// Returns `false` when a file was already present.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowrise_core::{AlarmTime, Palette, Preset};
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.alarm.time, AlarmTime::new(6, 30).unwrap());
        assert_eq!(settings.glow.preset, Preset::Quick);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        let config = r#"
[alarm]
time = "07:15"

[glow]
preset = "sunrise"
min_brightness = 10.0
snooze_minutes = 9
palette = "amber"
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.alarm.time, AlarmTime::new(7, 15).unwrap());
        assert_eq!(settings.glow.preset, Preset::Sunrise);
        assert_eq!(settings.glow.min_brightness, Some(10.0));
        assert_eq!(settings.glow.snooze_minutes, Some(9));
        assert_eq!(settings.glow.palette, Some(Palette::Amber));
        assert_eq!(settings.glow.window_secs, None);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_bad_alarm_time_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[alarm]\ntime = \"25:00\"\n").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = load_settings_from(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_defaults_to_quick_preset() {
        let resolved = resolve(&Settings::default(), &CliOverrides::default()).unwrap();
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.profile.window_secs(), 30.0);
    }

    #[test]
    fn test_resolve_cli_wins_over_file() {
        let mut settings = Settings::default();
        settings.alarm.time = AlarmTime::new(7, 0).unwrap();
        settings.glow.preset = Preset::Classic;
        settings.glow.window_secs = Some(120);

        let overrides = CliOverrides {
            alarm: Some(AlarmTime::new(5, 45).unwrap()),
            preset: Some(Preset::Sunrise),
            window_secs: Some(600),
        };
        let resolved = resolve(&settings, &overrides).unwrap();

        assert_eq!(resolved.alarm, AlarmTime::new(5, 45).unwrap());
        assert_eq!(resolved.preset, Preset::Sunrise);
        assert_eq!(resolved.profile.window_secs(), 600.0);
        assert!(resolved.profile.hold_until_stopped);
    }

    #[test]
    fn test_resolve_file_overrides_preset_fields() {
        let mut settings = Settings::default();
        settings.glow.preset = Preset::Sunrise;
        settings.glow.window_secs = Some(120);
        settings.glow.hold_until_stopped = Some(false);
        settings.glow.snooze_minutes = Some(10);
        settings.glow.palette = Some(Palette::Amber);

        let resolved = resolve(&settings, &CliOverrides::default()).unwrap();

        assert_eq!(resolved.profile.window_secs(), 120.0);
        assert!(!resolved.profile.hold_until_stopped);
        assert_eq!(resolved.profile.snooze, Duration::from_secs(600));
        assert_eq!(resolved.profile.palette, Palette::Amber);
    }

    #[test]
    fn test_resolve_rejects_invalid_profile() {
        let mut settings = Settings::default();
        settings.glow.min_brightness = Some(90.0);
        settings.glow.max_brightness = Some(40.0);

        let err = resolve(&settings, &CliOverrides::default()).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_rejects_overflowing_snooze_minutes() {
        let mut settings = Settings::default();
        settings.glow.snooze_minutes = Some(u64::MAX / 10);

        let err = resolve(&settings, &CliOverrides::default()).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_resolve_rejects_snooze_over_a_day() {
        let mut settings = Settings::default();
        settings.glow.snooze_minutes = Some(24 * 60 + 1);
        assert!(resolve(&settings, &CliOverrides::default()).is_err());

        settings.glow.snooze_minutes = Some(24 * 60);
        assert!(resolve(&settings, &CliOverrides::default()).is_ok());
    }

    #[test]
    fn test_resolve_rejects_huge_window() {
        let overrides = CliOverrides {
            window_secs: Some(u64::MAX),
            ..Default::default()
        };
        let err = resolve(&Settings::default(), &overrides).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_resolve_rejects_zero_window() {
        let overrides = CliOverrides {
            window_secs: Some(0),
            ..Default::default()
        };
        assert!(resolve(&Settings::default(), &overrides).is_err());
    }

    #[test]
    fn test_init_config_file_reports_io_failure() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config_file(&blocker.join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_init_config_file_writes_parseable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_DIR).join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial]
    fn test_default_config_path_follows_xdg() {
        let temp = tempdir().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", temp.path());

        let path = default_config_path().unwrap();

        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(path, temp.path().join("glow-rise").join("config.toml"));
    }
}

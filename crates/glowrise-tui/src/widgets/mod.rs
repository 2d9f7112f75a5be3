//! Custom widget components

mod alarm_picker;
mod brightness_gauge;
mod bulb;
mod controls;
mod digital_clock;
mod header;
mod room;
mod sleeper;

pub use alarm_picker::{format_countdown, AlarmPicker};
pub use brightness_gauge::BrightnessGauge;
pub use bulb::Bulb;
pub use controls::AlarmControls;
pub use digital_clock::DigitalClock;
pub use header::MainHeader;
pub use room::Room;
pub use sleeper::SleeperFigure;

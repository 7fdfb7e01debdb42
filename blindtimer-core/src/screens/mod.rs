//! Screens and the screen manager
//!
//! ```text
//!  SmallBlind ──▶ RoundLength ──▶ Mode ──▶ Active ◀──▶ Volume
//!      ▲                                    │  ▲
//!      └──────────── New Game ──────────────┘  └──▶ GameLogs
//! ```
//!
//! Every screen is a long-lived value owned by [`ScreenManager`]. Input
//! handlers never switch screens themselves; they return an [`Action`]
//! and the manager carries out the transition once the handler is done.

pub mod active;
pub mod logs;
pub mod manager;
pub mod mode;
pub mod overlay;
pub mod setup;
pub mod value;
pub mod volume;

use core::fmt::{self, Write};

use blindtimer_hal::KvStore;
use blindtimer_protocol::MAX_TEXT_LEN;
use heapless::String;

use crate::config::TimerConfig;
use crate::game::GameSession;
use crate::traits::{Audio, DisplaySurface};

pub use active::ActiveGameScreen;
pub use logs::GameLogsScreen;
pub use manager::ScreenManager;
pub use mode::ModeScreen;
pub use overlay::InfoOverlay;
pub use setup::{RoundLengthScreen, SmallBlindScreen};
pub use value::{RangedValue, Step};
pub use volume::{load_volume, VolumeScreen};

/// Screen identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    SmallBlind,
    RoundLength,
    Mode,
    Active,
    Volume,
    GameLogs,
}

/// What a screen asks for after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    None,
    /// Switch to another screen
    Goto(ScreenId),
    /// Shut the device down
    PowerOff,
}

/// Everything a screen may touch while handling one event
pub struct ScreenContext<'a> {
    pub game: &'a mut GameSession,
    pub display: &'a mut dyn DisplaySurface,
    pub audio: &'a mut dyn Audio,
    pub store: &'a mut dyn KvStore,
    pub config: &'a TimerConfig,
    /// Time of the current main-loop pass
    pub now_ms: u32,
}

/// Behaviour shared by all screens
pub trait Screen {
    /// Screen became active: reset local state and fill the display
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>);

    /// Screen is being left: hide everything it showed
    fn on_exit(&mut self, _ctx: &mut ScreenContext<'_>) {}

    /// Dial turned by `delta` detents
    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action;

    /// Button short press
    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action;

    /// Info key pressed
    fn handle_info(&mut self, _ctx: &mut ScreenContext<'_>) -> Action {
        Action::None
    }

    /// Called once per main-loop pass
    fn tick(&mut self, _ctx: &mut ScreenContext<'_>) -> Action {
        Action::None
    }

    /// An overlay is capturing input
    fn is_modal_blocking(&self) -> bool {
        false
    }
}

/// Text for a single widget
pub type Label = String<MAX_TEXT_LEN>;

/// Format into a [`Label`], cutting off whatever does not fit
pub fn label(args: fmt::Arguments<'_>) -> Label {
    let mut text = Label::new();
    let _ = text.write_fmt(args);
    text
}

/// `M:SS`, or `H:MM:SS` once there are hours
pub fn clock(seconds: u32) -> Label {
    let (hours, minutes, secs) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if hours > 0 {
        label(format_args!("{}:{:02}:{:02}", hours, minutes, secs))
    } else {
        label(format_args!("{}:{:02}", minutes, secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_format() {
        assert_eq!(clock(0).as_str(), "0:00");
        assert_eq!(clock(65).as_str(), "1:05");
        assert_eq!(clock(3599).as_str(), "59:59");
        assert_eq!(clock(3725).as_str(), "1:02:05");
    }

    #[test]
    fn test_label_truncates() {
        let long = label(format_args!("{}", "x".repeat(40)));
        assert!(long.len() <= MAX_TEXT_LEN);
    }
}

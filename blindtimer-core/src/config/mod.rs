//! Configuration
//!
//! Compile-time defaults for timing, game rules and setup ranges, plus the
//! [`TimerConfig`] subset a board may override at start-up.

pub mod tones;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Button debounce window (ms)
pub const DEBOUNCE_MS: u32 = 100;

/// Hold time after which a press becomes a long press (ms)
pub const LONG_PRESS_MS: u32 = 2000;

/// Countdown granularity of the active game (ms)
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Blind step; every small blind is a multiple of this
pub const BLIND_STEP: u32 = 25;

/// Ceiling for the small blind
pub const MAX_BLIND: u32 = 9999;

/// Chips each player starts with
pub const STARTING_STACK: u32 = 2000;

/// Session defaults applied at power-on and on every new game
pub const DEFAULT_SMALL_BLIND: u32 = 25;
pub const DEFAULT_ROUND_MINUTES: u32 = 15;
pub const DEFAULT_MULTIPLIER: f32 = 1.5;

/// Sessions kept in the persisted log
pub const MAX_LOGGED_GAMES: usize = 50;

/// Volume range and fallback
pub const VOLUME_MIN: u8 = 0;
pub const VOLUME_MAX: u8 = 10;
pub const DEFAULT_VOLUME: u8 = 5;

/// Small blind setup screen range
pub const SMALL_BLIND_MIN: i32 = 25;
pub const SMALL_BLIND_MAX: i32 = 200;
pub const SMALL_BLIND_STEP: i32 = 25;

/// Round length setup screen range (minutes)
pub const ROUND_MINUTES_MIN: i32 = 5;
pub const ROUND_MINUTES_MAX: i32 = 45;
pub const ROUND_MINUTES_STEP: i32 = 5;
pub const ROUND_MINUTES_INITIAL: i32 = 10;

/// Longest round a session accepts; the log keeps minutes in one byte
pub const MAX_ROUND_MINUTES: u32 = u8::MAX as u32;

/// Bounds on the displayed rounds estimate
pub const ESTIMATE_MIN_ROUNDS: u32 = 3;
pub const ESTIMATE_MAX_ROUNDS: u32 = 15;

/// Board-tunable settings
///
/// `Default` yields the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Button debounce window (ms)
    pub debounce_ms: u32,
    /// Long press threshold (ms)
    pub long_press_ms: u32,
    /// Starting stack used by the game length estimate
    pub starting_stack: u32,
    /// Volume used when none is stored
    pub default_volume: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            long_press_ms: LONG_PRESS_MS,
            starting_stack: STARTING_STACK,
            default_volume: DEFAULT_VOLUME,
        }
    }
}

impl TimerConfig {
    /// Replace out-of-range values with defaults
    ///
    /// A long press threshold at or below the debounce window could never
    /// be told apart from a short press.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.long_press_ms <= self.debounce_ms {
            warn!("long_press_ms must exceed debounce_ms, using defaults");
            self.debounce_ms = defaults.debounce_ms;
            self.long_press_ms = defaults.long_press_ms;
        }
        if self.starting_stack == 0 {
            self.starting_stack = defaults.starting_stack;
        }
        if self.default_volume > VOLUME_MAX {
            self.default_volume = VOLUME_MAX;
        }
        self
    }
}

//! Board tunables from timer.toml
//!
//! build.rs validates timer.toml and writes its values as constants.

use blindtimer_core::config::TimerConfig;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/timer_config.rs"));
}

/// Timer configuration compiled into this build
pub fn timer_config() -> TimerConfig {
    TimerConfig {
        debounce_ms: generated::DEBOUNCE_MS,
        long_press_ms: generated::LONG_PRESS_MS,
        starting_stack: generated::STARTING_STACK,
        default_volume: generated::DEFAULT_VOLUME,
    }
}

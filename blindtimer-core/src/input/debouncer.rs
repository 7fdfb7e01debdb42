//! Button debouncer with short/long press classification
//!
//! Timestamps are `u32` milliseconds compared with `wrapping_sub`, so the
//! debouncer keeps working across the ~49 day counter wrap.

use crate::config::{DEBOUNCE_MS, LONG_PRESS_MS};

/// Press classification produced on the debounced signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Released before the long-press threshold
    ShortPress,
    /// Held past the long-press threshold (fires while still held)
    LongPress,
}

/// Debounces a raw pressed/released level
///
/// A raw change is accepted only after the new level has been stable for
/// the whole debounce window. The long-press clock starts at the debounced
/// press, not the raw one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    debounce_ms: u32,
    long_press_ms: u32,
    /// Debounced level (true = pressed)
    stable: bool,
    /// Raw level seen on the previous sample
    last_raw: bool,
    /// When the raw level last changed
    last_change_ms: u32,
    /// When the debounced press began
    press_start_ms: u32,
    /// Long press already reported for this hold
    long_fired: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS, LONG_PRESS_MS)
    }
}

impl Debouncer {
    /// Create a debouncer in the released state
    pub fn new(debounce_ms: u32, long_press_ms: u32) -> Self {
        Self {
            debounce_ms,
            long_press_ms,
            stable: false,
            last_raw: false,
            last_change_ms: 0,
            press_start_ms: 0,
            long_fired: false,
        }
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample
    ///
    /// Returns at most one event per call.
    pub fn update(&mut self, raw_pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        if raw_pressed != self.last_raw {
            self.last_raw = raw_pressed;
            self.last_change_ms = now_ms;
        }

        if raw_pressed != self.stable
            && now_ms.wrapping_sub(self.last_change_ms) >= self.debounce_ms
        {
            self.stable = raw_pressed;
            return self.on_edge(now_ms);
        }

        if self.stable && !self.long_fired {
            let held = now_ms.wrapping_sub(self.press_start_ms);
            if held >= self.long_press_ms {
                self.long_fired = true;
                debug!("Long press after {} ms", held);
                return Some(ButtonEvent::LongPress);
            }
        }

        None
    }

    fn on_edge(&mut self, now_ms: u32) -> Option<ButtonEvent> {
        if self.stable {
            self.press_start_ms = now_ms;
            self.long_fired = false;
            None
        } else if self.long_fired {
            None
        } else {
            Some(ButtonEvent::ShortPress)
        }
    }
}

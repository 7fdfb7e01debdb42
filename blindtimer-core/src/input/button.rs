//! Debounced push-button on a GPIO pin

use blindtimer_hal::InputPin;

use super::debouncer::{ButtonEvent, Debouncer};

/// A push-button read through an [`InputPin`]
pub struct Button<P: InputPin> {
    pin: P,
    active_low: bool,
    debouncer: Debouncer,
}

impl<P: InputPin> Button<P> {
    /// Wrap a pin; `active_low` for buttons wired to ground with a pull-up
    pub fn new(pin: P, active_low: bool, debouncer: Debouncer) -> Self {
        Self {
            pin,
            active_low,
            debouncer,
        }
    }

    /// Raw (undebounced) pressed level
    pub fn raw_pressed(&self) -> bool {
        if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }

    /// Sample the pin once
    pub fn poll(&mut self, now_ms: u32) -> Option<ButtonEvent> {
        let raw = self.raw_pressed();
        self.debouncer.update(raw, now_ms)
    }

    /// Debounced pressed level
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}

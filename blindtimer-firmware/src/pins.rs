//! GPIO wrappers for the core pin traits

use embassy_rp::gpio::{Input, Output};

use blindtimer_hal::{InputPin, OutputPin};

/// Push-button input
pub struct KeyPin(Input<'static>);

impl KeyPin {
    pub fn new(input: Input<'static>) -> Self {
        Self(input)
    }
}

impl InputPin for KeyPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Regulator hold line
pub struct LatchPin(Output<'static>);

impl LatchPin {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl OutputPin for LatchPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

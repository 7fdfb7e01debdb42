//! Power control

use blindtimer_hal::OutputPin;

/// Trait for the power-off collaborator
pub trait PowerControl {
    /// Cut power to the device
    ///
    /// On real hardware this does not return in any useful sense: the
    /// regulator drops and the MCU browns out.
    fn power_off(&mut self);
}

/// Soft power latch
///
/// The power button turns the regulator on; firmware holds it on through
/// an output pin and releases the pin to switch off.
pub struct PowerLatch<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> PowerLatch<P> {
    /// Take the hold pin and assert it
    pub fn new(mut pin: P) -> Self {
        pin.set_high();
        Self { pin }
    }

    /// Whether the regulator is currently held on
    pub fn is_held(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl<P: OutputPin> PowerControl for PowerLatch<P> {
    fn power_off(&mut self) {
        info!("Releasing power latch");
        self.pin.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_latch_holds_until_power_off() {
        let mut latch = PowerLatch::new(MockPin::new(false));
        assert!(latch.is_held());

        latch.power_off();
        assert!(!latch.is_held());
    }
}

//! Application-level input events

use super::debouncer::ButtonEvent;

/// Clean input delivered to the screen layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Dial turned by a signed number of detents (positive = clockwise)
    Rotate(i32),
    /// Button short press
    Click,
    /// Button held past the long-press threshold
    LongPress,
    /// Info key pressed
    Info,
}

impl From<ButtonEvent> for InputEvent {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::ShortPress => InputEvent::Click,
            ButtonEvent::LongPress => InputEvent::LongPress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_events_map() {
        assert_eq!(InputEvent::from(ButtonEvent::ShortPress), InputEvent::Click);
        assert_eq!(
            InputEvent::from(ButtonEvent::LongPress),
            InputEvent::LongPress
        );
    }
}

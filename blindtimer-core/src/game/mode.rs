//! Named blind progression modes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How fast blinds grow from round to round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlindMode {
    /// +50% per round
    #[default]
    Standard,
    /// Double per round
    Turbo,
    /// +25% per round
    Relaxed,
}

impl BlindMode {
    /// Selection order on the mode screen
    pub const ALL: [BlindMode; 3] = [BlindMode::Standard, BlindMode::Turbo, BlindMode::Relaxed];

    pub fn multiplier(self) -> f32 {
        match self {
            BlindMode::Standard => 1.5,
            BlindMode::Turbo => 2.0,
            BlindMode::Relaxed => 1.25,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlindMode::Standard => "STANDARD",
            BlindMode::Turbo => "TURBO",
            BlindMode::Relaxed => "RELAXED",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BlindMode::Standard => "Blinds +50%/round",
            BlindMode::Turbo => "Blinds double/round",
            BlindMode::Relaxed => "Blinds +25%/round",
        }
    }

    /// Classify an arbitrary multiplier
    ///
    /// 1.9-2.1 is Turbo, 1.2-1.3 is Relaxed, anything else Standard.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if (1.9..=2.1).contains(&multiplier) {
            BlindMode::Turbo
        } else if (1.2..=1.3).contains(&multiplier) {
            BlindMode::Relaxed
        } else {
            BlindMode::Standard
        }
    }

    /// Persisted byte value
    pub fn as_u8(self) -> u8 {
        match self {
            BlindMode::Standard => 0,
            BlindMode::Turbo => 1,
            BlindMode::Relaxed => 2,
        }
    }

    /// Decode a persisted byte; unknown values read as Standard
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => BlindMode::Turbo,
            2 => BlindMode::Relaxed,
            _ => BlindMode::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_bands() {
        assert_eq!(BlindMode::from_multiplier(2.0), BlindMode::Turbo);
        assert_eq!(BlindMode::from_multiplier(1.95), BlindMode::Turbo);
        assert_eq!(BlindMode::from_multiplier(1.25), BlindMode::Relaxed);
        assert_eq!(BlindMode::from_multiplier(1.5), BlindMode::Standard);
        assert_eq!(BlindMode::from_multiplier(1.75), BlindMode::Standard);
        assert_eq!(BlindMode::from_multiplier(3.0), BlindMode::Standard);
    }

    #[test]
    fn test_every_mode_classifies_as_itself() {
        for mode in BlindMode::ALL {
            assert_eq!(BlindMode::from_multiplier(mode.multiplier()), mode);
            assert_eq!(BlindMode::from_u8(mode.as_u8()), mode);
        }
    }

    #[test]
    fn test_unknown_byte_reads_as_standard() {
        assert_eq!(BlindMode::from_u8(9), BlindMode::Standard);
    }
}

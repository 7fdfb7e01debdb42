//! Buzzer trait

/// A single beep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Pitch in Hz
    pub frequency_hz: u16,
    /// Length in milliseconds
    pub duration_ms: u16,
}

impl Tone {
    pub const fn new(frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Trait for the audio collaborator
///
/// `play_tone` queues a tone and returns immediately; tones queued back to
/// back play in order.
pub trait Audio {
    /// Queue a tone
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u16);

    /// Set output volume on the 0-10 scale
    fn set_volume(&mut self, level: u8);
}

/// Helper trait for playing [`Tone`] constants
pub trait AudioExt: Audio {
    fn play(&mut self, tone: Tone) {
        self.play_tone(tone.frequency_hz, tone.duration_ms);
    }

    fn play_all(&mut self, tones: &[Tone]) {
        for &tone in tones {
            self.play(tone);
        }
    }
}

impl<T: Audio + ?Sized> AudioExt for T {}

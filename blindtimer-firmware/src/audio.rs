//! Buzzer front end
//!
//! Queues tones for the buzzer task so the main loop never waits on
//! playback.

use defmt::*;
use portable_atomic::Ordering;

use blindtimer_core::config::VOLUME_MAX;
use blindtimer_core::traits::{Audio, Tone};

use crate::channels::{TONE_CHANNEL, VOLUME};

pub struct ChannelAudio;

impl Audio for ChannelAudio {
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u16) {
        let tone = Tone::new(frequency_hz, duration_ms);
        if TONE_CHANNEL.try_send(tone).is_err() {
            debug!("Tone queue full, dropping {:?}", tone);
        }
    }

    fn set_volume(&mut self, level: u8) {
        VOLUME.store(level.min(VOLUME_MAX), Ordering::Relaxed);
    }
}

//! Inter-task communication channels
//!
//! The main loop owns the application; these channels carry work to and
//! from the tasks that own the hardware.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;
use portable_atomic::AtomicU8;

use blindtimer_core::config::DEFAULT_VOLUME;
use blindtimer_core::traits::Tone;
use blindtimer_protocol::MAX_FRAME_SIZE;

/// Encoder detents not yet picked up by the main loop
const ENCODER_CHANNEL_SIZE: usize = 16;

/// Tones waiting for the buzzer
const TONE_CHANNEL_SIZE: usize = 16;

/// Encoded frames waiting for the panel UART
///
/// A full screen change is about a dozen frames.
const PANEL_CHANNEL_SIZE: usize = 32;

/// One encoded panel frame
pub type PanelFrame = Vec<u8, MAX_FRAME_SIZE>;

/// Encoder detents, +1 clockwise and -1 counter-clockwise
pub static ENCODER_STEPS: Channel<CriticalSectionRawMutex, i8, ENCODER_CHANNEL_SIZE> =
    Channel::new();

/// Tones queued by the application, played in order
pub static TONE_CHANNEL: Channel<CriticalSectionRawMutex, Tone, TONE_CHANNEL_SIZE> =
    Channel::new();

/// Frames queued by the application for the round display
pub static PANEL_CHANNEL: Channel<CriticalSectionRawMutex, PanelFrame, PANEL_CHANNEL_SIZE> =
    Channel::new();

/// Buzzer volume on the 0-10 scale
pub static VOLUME: AtomicU8 = AtomicU8::new(DEFAULT_VOLUME);

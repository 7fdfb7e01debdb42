//! Buzzer task
//!
//! Plays queued tones one after another on a PWM-driven piezo.

use defmt::*;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Timer};
use portable_atomic::Ordering;

use blindtimer_core::config::VOLUME_MAX;
use blindtimer_core::traits::Tone;

use crate::channels::{TONE_CHANNEL, VOLUME};

/// RP2040 system clock
const SYS_CLOCK_HZ: u32 = 125_000_000;

/// PWM clock divider; 125MHz / 64 keeps audible tones within a u16 top
const PWM_DIVIDER: u8 = 64;

/// Silence between consecutive tones (ms)
const TONE_GAP_MS: u64 = 20;

/// Counter top for `frequency_hz`
fn pwm_top(frequency_hz: u16) -> u16 {
    let counter_hz = SYS_CLOCK_HZ / PWM_DIVIDER as u32;
    (counter_hz / frequency_hz.max(1) as u32)
        .saturating_sub(1)
        .min(u16::MAX as u32) as u16
}

/// Compare value for `volume`; full volume is a 50% square wave
fn pwm_compare(top: u16, volume: u8) -> u16 {
    let volume = volume.min(VOLUME_MAX) as u32;
    ((top as u32 + 1) * volume / (2 * VOLUME_MAX as u32)) as u16
}

/// Buzzer task - drains the tone queue
#[embassy_executor::task]
pub async fn buzzer_task(mut pwm: Pwm<'static>) {
    info!("Buzzer task started");

    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = PWM_DIVIDER.into();
    pwm_config.compare_a = 0;
    pwm.set_config(&pwm_config);

    loop {
        let tone: Tone = TONE_CHANNEL.receive().await;
        let volume = VOLUME.load(Ordering::Relaxed);
        trace!("Tone {} Hz for {} ms at {}", tone.frequency_hz, tone.duration_ms, volume);

        // Volume 0 keeps the timing but stays silent
        if volume > 0 && tone.frequency_hz > 0 {
            pwm_config.top = pwm_top(tone.frequency_hz);
            pwm_config.compare_a = pwm_compare(pwm_config.top, volume);
            pwm.set_config(&pwm_config);
        }

        Timer::after(Duration::from_millis(tone.duration_ms as u64)).await;

        pwm_config.compare_a = 0;
        pwm.set_config(&pwm_config);
        Timer::after(Duration::from_millis(TONE_GAP_MS)).await;
    }
}

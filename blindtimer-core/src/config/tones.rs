//! Feedback tones
//!
//! Higher pitch means "more", lower pitch means "less" or "blocked".

use crate::traits::Tone;

/// Normal feedback duration for encoder steps (ms)
const STEP_MS: u16 = 60;

/// Value increased (E7)
pub const UP: Tone = Tone::new(2637, STEP_MS);
/// Value decreased (A6)
pub const DOWN: Tone = Tone::new(1760, STEP_MS);
/// Rotation hit a limit (D#6), slightly longer than a step
pub const BOUNDARY: Tone = Tone::new(1245, 80);

/// Small blind / round length confirmed (D7)
pub const CONFIRM_SETUP: Tone = Tone::new(2349, 120);
/// Progression mode confirmed, game starts (E7)
pub const CONFIRM_MODE: Tone = Tone::new(2637, 120);
/// Setting saved (C#7)
pub const CONFIRM_SETTINGS: Tone = Tone::new(2217, 100);

/// Overlay opened (F#7 then A7)
pub const OVERLAY_SHOW: [Tone; 2] = [Tone::new(2794, STEP_MS), Tone::new(3520, STEP_MS)];
/// Overlay closed (A6 then F6)
pub const OVERLAY_HIDE: [Tone; 2] = [Tone::new(1760, STEP_MS), Tone::new(1397, STEP_MS)];

/// Rising cue when a new round starts
pub const ROUND_TRANSITION: [Tone; 4] = [
    Tone::new(2093, 150),
    Tone::new(2217, 150),
    Tone::new(2349, 150),
    Tone::new(2489, 150),
];

/// Played right before the power latch is released (F#7 then C8)
pub const POWER_OFF: [Tone; 2] = [Tone::new(2960, 120), Tone::new(4186, 120)];

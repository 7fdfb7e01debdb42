//! Clamped, stepped values edited with the dial

use crate::config::tones;
use crate::traits::{Audio, AudioExt};

/// Outcome of turning the dial on a [`RangedValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Up,
    Down,
    /// Pushed past a limit; value unchanged
    Boundary,
    Unchanged,
}

impl Step {
    /// Play the matching feedback tone
    pub fn play(self, audio: &mut dyn Audio) {
        match self {
            Step::Up => audio.play(tones::UP),
            Step::Down => audio.play(tones::DOWN),
            Step::Boundary => audio.play(tones::BOUNDARY),
            Step::Unchanged => {}
        }
    }

    pub fn changed(self) -> bool {
        matches!(self, Step::Up | Step::Down)
    }
}

/// Integer moved in fixed steps inside `min..=max`, never wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangedValue {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl RangedValue {
    pub const fn new(initial: i32, min: i32, max: i32, step: i32) -> Self {
        Self {
            value: initial,
            min,
            max,
            step,
        }
    }

    pub fn get(&self) -> i32 {
        self.value
    }

    /// Set directly, clamped into range
    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Move by `delta` steps
    ///
    /// Multi-detent deltas add up. A move that reaches past a limit stops
    /// at the limit; it only counts as a boundary hit when the value could
    /// not move at all.
    pub fn step_by(&mut self, delta: i32) -> Step {
        if delta == 0 {
            return Step::Unchanged;
        }
        let target = self.value.saturating_add(delta.saturating_mul(self.step));
        let next = target.clamp(self.min, self.max);
        if next > self.value {
            self.value = next;
            Step::Up
        } else if next < self.value {
            self.value = next;
            Step::Down
        } else if next != target {
            Step::Boundary
        } else {
            Step::Unchanged
        }
    }
}

//! Game session state
//!
//! The single authoritative record of blinds, round, countdown and play
//! time. Every mutator validates its input; invalid values are dropped
//! and the previous value is kept.

use crate::config::{
    DEFAULT_MULTIPLIER, DEFAULT_ROUND_MINUTES, DEFAULT_SMALL_BLIND, MAX_BLIND,
    MAX_ROUND_MINUTES,
};

/// State of the game in progress
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    small_blind: u32,
    big_blind: u32,
    /// Small blind at the moment the game started
    starting_small_blind: u32,
    round_minutes: u32,
    blind_multiplier: f32,
    current_round: u32,
    seconds_remaining: u32,
    total_game_seconds: u32,
    total_paused_seconds: u32,
    /// Set only while paused
    pause_started_at: Option<u32>,
    max_round_reached: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session with power-on defaults
    pub const fn new() -> Self {
        Self {
            small_blind: DEFAULT_SMALL_BLIND,
            big_blind: DEFAULT_SMALL_BLIND * 2,
            starting_small_blind: DEFAULT_SMALL_BLIND,
            round_minutes: DEFAULT_ROUND_MINUTES,
            blind_multiplier: DEFAULT_MULTIPLIER,
            current_round: 1,
            seconds_remaining: 0,
            total_game_seconds: 0,
            total_paused_seconds: 0,
            pause_started_at: None,
            max_round_reached: 1,
        }
    }

    /// Back to defaults for a new game
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    pub fn starting_small_blind(&self) -> u32 {
        self.starting_small_blind
    }

    pub fn round_minutes(&self) -> u32 {
        self.round_minutes
    }

    pub fn blind_multiplier(&self) -> f32 {
        self.blind_multiplier
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn total_game_seconds(&self) -> u32 {
        self.total_game_seconds
    }

    pub fn total_paused_seconds(&self) -> u32 {
        self.total_paused_seconds
    }

    pub fn max_round_reached(&self) -> u32 {
        self.max_round_reached
    }

    /// Length of one round in seconds
    pub fn round_seconds(&self) -> u32 {
        self.round_minutes * 60
    }

    /// Set the small blind; the big blind follows at twice the value
    pub fn set_small_blind(&mut self, value: i32) {
        match u32::try_from(value) {
            Ok(v) if v > 0 && v <= MAX_BLIND => {
                self.small_blind = v;
                self.big_blind = v * 2;
            }
            _ => warn!("Rejected small blind {}", value),
        }
    }

    /// Set the round length in minutes (1 to [`MAX_ROUND_MINUTES`])
    pub fn set_round_minutes(&mut self, minutes: i32) {
        match u32::try_from(minutes) {
            Ok(m) if m > 0 && m <= MAX_ROUND_MINUTES => self.round_minutes = m,
            _ => warn!("Rejected round minutes {}", minutes),
        }
    }

    /// Set the per-round blind growth factor (must exceed 1.0)
    pub fn set_blind_multiplier(&mut self, multiplier: f32) {
        if multiplier.is_finite() && multiplier > 1.0 {
            self.blind_multiplier = multiplier;
        } else {
            warn!("Rejected blind multiplier {}", multiplier);
        }
    }

    /// Set the current round, raising the high-water mark if needed
    pub fn set_current_round(&mut self, round: i32) {
        match u32::try_from(round) {
            Ok(r) if r > 0 => {
                self.current_round = r;
                self.max_round_reached = self.max_round_reached.max(r);
            }
            _ => warn!("Rejected round {}", round),
        }
    }

    /// Set the seconds left in the current round
    pub fn set_seconds_remaining(&mut self, seconds: i32) {
        match u32::try_from(seconds) {
            Ok(s) => self.seconds_remaining = s,
            Err(_) => warn!("Rejected seconds remaining {}", seconds),
        }
    }

    /// Start the countdown for a freshly configured game
    pub fn start(&mut self, now_ms: u32) {
        self.starting_small_blind = self.small_blind;
        self.seconds_remaining = self.round_seconds();
        self.total_game_seconds = 0;
        self.total_paused_seconds = 0;
        self.pause_started_at = None;
        info!(
            "Game started at {} ms: SB={}, BB={}, {} min rounds",
            now_ms, self.small_blind, self.big_blind, self.round_minutes
        );
    }

    /// Count one second of play off the round timer
    ///
    /// Returns the new seconds remaining.
    pub fn tick_second(&mut self) -> u32 {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.total_game_seconds = self.total_game_seconds.saturating_add(1);
        self.seconds_remaining
    }

    pub fn is_paused(&self) -> bool {
        self.pause_started_at.is_some()
    }

    /// Begin a pause; no-op if already paused
    pub fn pause(&mut self, now_ms: u32) {
        if self.pause_started_at.is_none() {
            self.pause_started_at = Some(now_ms);
        }
    }

    /// End a pause and add its length to the paused total
    pub fn resume(&mut self, now_ms: u32) {
        if let Some(started) = self.pause_started_at.take() {
            let paused_s = now_ms.wrapping_sub(started) / 1000;
            self.total_paused_seconds = self.total_paused_seconds.saturating_add(paused_s);
            debug!("Resumed after {} s pause", paused_s);
        }
    }

    /// Milliseconds spent in the current pause, if paused
    pub fn pause_elapsed_ms(&self, now_ms: u32) -> Option<u32> {
        self.pause_started_at
            .map(|started| now_ms.wrapping_sub(started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let game = GameSession::new();
        assert_eq!(game.small_blind(), 25);
        assert_eq!(game.big_blind(), 50);
        assert_eq!(game.round_minutes(), 15);
        assert_eq!(game.blind_multiplier(), 1.5);
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.max_round_reached(), 1);
        assert!(!game.is_paused());
    }

    #[test]
    fn test_invalid_setters_keep_previous_values() {
        let mut game = GameSession::new();
        game.set_small_blind(100);
        game.set_small_blind(0);
        game.set_small_blind(-25);
        assert_eq!(game.small_blind(), 100);
        assert_eq!(game.big_blind(), 200);

        game.set_round_minutes(0);
        assert_eq!(game.round_minutes(), 15);

        game.set_blind_multiplier(1.0);
        game.set_blind_multiplier(f32::NAN);
        game.set_blind_multiplier(0.5);
        assert_eq!(game.blind_multiplier(), 1.5);

        game.set_current_round(0);
        assert_eq!(game.current_round(), 1);

        game.set_seconds_remaining(-1);
        assert_eq!(game.seconds_remaining(), 0);
    }

    #[test]
    fn test_oversized_round_length_is_rejected() {
        let mut game = GameSession::new();
        game.set_round_minutes(i32::MAX);
        game.set_round_minutes(256);
        assert_eq!(game.round_minutes(), 15);

        game.set_round_minutes(255);
        game.start(0);
        assert_eq!(game.seconds_remaining(), 255 * 60);
    }

    #[test]
    fn test_round_high_water_mark() {
        let mut game = GameSession::new();
        game.set_current_round(4);
        game.set_current_round(2);
        assert_eq!(game.current_round(), 2);
        assert_eq!(game.max_round_reached(), 4);

        game.reset();
        assert_eq!(game.max_round_reached(), 1);
    }

    #[test]
    fn test_start_seeds_countdown() {
        let mut game = GameSession::new();
        game.set_round_minutes(20);
        game.set_small_blind(75);
        game.start(0);
        assert_eq!(game.seconds_remaining(), 1200);
        assert_eq!(game.starting_small_blind(), 75);
        assert_eq!(game.tick_second(), 1199);
        assert_eq!(game.total_game_seconds(), 1);
    }

    #[test]
    fn test_pause_accumulates_whole_seconds() {
        let mut game = GameSession::new();
        game.pause(10_000);
        game.pause(12_000);
        assert!(game.is_paused());
        assert_eq!(game.pause_elapsed_ms(13_000), Some(3_000));

        game.resume(14_500);
        assert!(!game.is_paused());
        assert_eq!(game.total_paused_seconds(), 4);

        game.resume(20_000);
        assert_eq!(game.total_paused_seconds(), 4);
    }

    #[test]
    fn test_pause_at_time_zero_is_a_pause() {
        let mut game = GameSession::new();
        game.pause(0);
        assert!(game.is_paused());
        game.resume(2_000);
        assert_eq!(game.total_paused_seconds(), 2);
    }

    proptest! {
        #[test]
        fn prop_big_blind_is_twice_small_blind(values in proptest::collection::vec(-100i32..20_000, 1..20)) {
            let mut game = GameSession::new();
            for v in values {
                game.set_small_blind(v);
                prop_assert_eq!(game.big_blind(), 2 * game.small_blind());
            }
        }
    }
}

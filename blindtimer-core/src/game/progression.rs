//! Round progression
//!
//! Blind growth between rounds and the game length estimate built on it.
//! All arithmetic stays in whole chips except the one multiply.

use crate::config::{BLIND_STEP, ESTIMATE_MAX_ROUNDS, ESTIMATE_MIN_ROUNDS, MAX_BLIND};

use super::session::GameSession;

/// Small blind for the round after one played at `prev`
///
/// `prev * multiplier` rounded to the nearest blind step (halves round
/// up), at least the next whole step above `prev`, never above
/// [`MAX_BLIND`].
pub fn next_small_blind(prev: u32, multiplier: f32) -> u32 {
    let step = BLIND_STEP as f32;
    let target = prev as f32 * multiplier;
    // Float-to-int `as` saturates, so a huge target cannot wrap
    let rounded = (((target + step / 2.0) / step) as u32).saturating_mul(BLIND_STEP);
    let floor = (prev / BLIND_STEP).saturating_add(1).saturating_mul(BLIND_STEP);
    rounded.max(floor).min(MAX_BLIND)
}

/// Result of a round advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundAdvance {
    pub round: u32,
    pub small_blind: u32,
    pub big_blind: u32,
}

/// Move the session into its next round
///
/// Raises the blinds, restarts the round timer and bumps the round
/// counter (and with it the high-water mark).
pub fn advance_round(game: &mut GameSession) -> RoundAdvance {
    let next_blind = next_small_blind(game.small_blind(), game.blind_multiplier());
    let next_round = game.current_round().saturating_add(1);

    game.set_current_round(next_round as i32);
    game.set_small_blind(next_blind as i32);
    game.set_seconds_remaining(game.round_seconds() as i32);

    info!(
        "Advanced to round {}: SB={}, BB={}",
        game.current_round(),
        game.small_blind(),
        game.big_blind()
    );

    RoundAdvance {
        round: game.current_round(),
        small_blind: game.small_blind(),
        big_blind: game.big_blind(),
    }
}

/// Rounds until the small blind reaches the endgame threshold
///
/// The threshold is a quarter of `starting_stack`. The count is clamped
/// to a displayable range so near-1.0 multipliers stay sensible.
pub fn estimate_rounds(small_blind: u32, multiplier: f32, starting_stack: u32) -> u32 {
    let threshold = starting_stack / 4;
    let mut blind = small_blind;
    let mut rounds = 0;
    while blind < threshold && rounds < ESTIMATE_MAX_ROUNDS {
        blind = next_small_blind(blind, multiplier);
        rounds += 1;
    }
    rounds.clamp(ESTIMATE_MIN_ROUNDS, ESTIMATE_MAX_ROUNDS)
}

/// Estimated total game length in minutes
pub fn estimate_minutes(game: &GameSession, multiplier: f32, starting_stack: u32) -> u32 {
    estimate_rounds(game.small_blind(), multiplier, starting_stack) * game.round_minutes()
}

//! Game state and round progression

pub mod mode;
pub mod progression;
pub mod session;

pub use mode::BlindMode;
pub use progression::{advance_round, estimate_minutes, estimate_rounds, next_small_blind, RoundAdvance};
pub use session::GameSession;

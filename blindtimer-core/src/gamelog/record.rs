//! Session log record and its packed layout
//!
//! ```text
//! offset  size  field
//!      0     4  game_number        (u32 LE)
//!      4     4  game_seconds       (u32 LE)
//!      8     4  paused_seconds     (u32 LE)
//!     12     2  max_round          (u16 LE)
//!     14     1  starting_small_blind
//!     15     1  round_minutes
//!     16     1  blind_mode         (0 standard, 1 turbo, 2 relaxed)
//!     17     3  reserved, zero
//! ```

use crate::game::{BlindMode, GameSession};

/// Bytes per packed record
pub const RECORD_SIZE: usize = 20;

/// Summary of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionLogRecord {
    pub game_number: u32,
    pub game_seconds: u32,
    pub paused_seconds: u32,
    pub max_round: u16,
    pub starting_small_blind: u8,
    pub round_minutes: u8,
    pub blind_mode: BlindMode,
}

impl SessionLogRecord {
    /// Snapshot a session under the given game number
    ///
    /// Values wider than their field saturate.
    pub fn from_session(game_number: u32, game: &GameSession) -> Self {
        Self {
            game_number,
            game_seconds: game.total_game_seconds(),
            paused_seconds: game.total_paused_seconds(),
            max_round: u16::try_from(game.max_round_reached()).unwrap_or(u16::MAX),
            starting_small_blind: u8::try_from(game.starting_small_blind()).unwrap_or(u8::MAX),
            round_minutes: u8::try_from(game.round_minutes()).unwrap_or(u8::MAX),
            blind_mode: BlindMode::from_multiplier(game.blind_multiplier()),
        }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.game_number.to_le_bytes());
        out[4..8].copy_from_slice(&self.game_seconds.to_le_bytes());
        out[8..12].copy_from_slice(&self.paused_seconds.to_le_bytes());
        out[12..14].copy_from_slice(&self.max_round.to_le_bytes());
        out[14] = self.starting_small_blind;
        out[15] = self.round_minutes;
        out[16] = self.blind_mode.as_u8();
        out
    }

    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let u32_at = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Self {
            game_number: u32_at(0),
            game_seconds: u32_at(4),
            paused_seconds: u32_at(8),
            max_round: u16::from_le_bytes([bytes[12], bytes[13]]),
            starting_small_blind: bytes[14],
            round_minutes: bytes[15],
            blind_mode: BlindMode::from_u8(bytes[16]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let record = SessionLogRecord {
            game_number: 0x0403_0201,
            game_seconds: 3_725,
            paused_seconds: 90,
            max_round: 0x0102,
            starting_small_blind: 50,
            round_minutes: 20,
            blind_mode: BlindMode::Relaxed,
        };
        let bytes = record.to_bytes();

        assert_eq!(&bytes[0..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[4..8], &3_725u32.to_le_bytes());
        assert_eq!(&bytes[12..14], &[0x02, 0x01]);
        assert_eq!(bytes[14], 50);
        assert_eq!(bytes[15], 20);
        assert_eq!(bytes[16], 2);
        assert_eq!(&bytes[17..], &[0, 0, 0]);
        assert_eq!(SessionLogRecord::from_bytes(&bytes), record);
    }

    #[test]
    fn test_from_session_derives_mode_and_saturates() {
        let mut game = GameSession::new();
        game.set_small_blind(300);
        game.set_blind_multiplier(2.0);
        game.start(0);
        game.set_small_blind(600);
        game.set_current_round(70_000);

        let record = SessionLogRecord::from_session(7, &game);
        assert_eq!(record.game_number, 7);
        assert_eq!(record.starting_small_blind, u8::MAX);
        assert_eq!(record.max_round, u16::MAX);
        assert_eq!(record.round_minutes, 15);
        assert_eq!(record.blind_mode, BlindMode::Turbo);
    }
}

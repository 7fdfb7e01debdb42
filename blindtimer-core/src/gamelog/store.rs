//! Persisted session log
//!
//! Records live in one blob, oldest first, at most [`MAX_LOGGED_GAMES`]
//! of them. When the log is full the oldest record is dropped before the
//! new one is appended. Game numbers come from a separate lifetime
//! counter so they keep increasing after records are evicted.

use blindtimer_hal::{KvStore, StorageError, StorageKey};
use heapless::Vec;

use crate::config::MAX_LOGGED_GAMES;
use crate::game::GameSession;

use super::record::{SessionLogRecord, RECORD_SIZE};

/// Largest blob the log ever writes
pub const LOG_BLOB_SIZE: usize = MAX_LOGGED_GAMES * RECORD_SIZE;

/// Loaded session records, oldest first
pub type SessionLog = Vec<SessionLogRecord, MAX_LOGGED_GAMES>;

/// Session log failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogError {
    /// The key-value store failed
    Storage(StorageError),
    /// Stored data does not decode as a session log
    Corrupted,
}

impl From<StorageError> for LogError {
    fn from(err: StorageError) -> Self {
        LogError::Storage(err)
    }
}

/// Session log on top of a [`KvStore`]
pub struct SessionLogStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionLogStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read every stored record
    ///
    /// A missing blob is an empty log. A trailing partial record is
    /// dropped.
    pub fn try_load(&mut self) -> Result<SessionLog, LogError> {
        let mut buf = [0u8; LOG_BLOB_SIZE];
        let len = match self.store.get_blob(StorageKey::GameLog, &mut buf) {
            Ok(len) => len,
            Err(StorageError::NotFound) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if len % RECORD_SIZE != 0 {
            warn!("Session log has {} stray bytes", len % RECORD_SIZE);
        }

        let mut games = Vec::new();
        for chunk in buf[..len].chunks_exact(RECORD_SIZE) {
            let bytes: &[u8; RECORD_SIZE] = chunk.try_into().map_err(|_| LogError::Corrupted)?;
            games
                .push(SessionLogRecord::from_bytes(bytes))
                .map_err(|_| LogError::Corrupted)?;
        }
        Ok(games)
    }

    /// Up to `max_count` records in storage order (oldest first)
    ///
    /// An unreadable store yields an empty list.
    pub fn load_games(&mut self, max_count: usize) -> SessionLog {
        match self.try_load() {
            Ok(mut games) => {
                games.truncate(max_count);
                debug!("Loaded {} session records", games.len());
                games
            }
            Err(err) => {
                warn!("Session log unavailable: {}", err);
                Vec::new()
            }
        }
    }

    /// Lifetime number of saved games (0 when never written)
    pub fn total_game_count(&mut self) -> u32 {
        match self.store.get_u32(StorageKey::GameCount) {
            Ok(count) => count,
            Err(StorageError::NotFound) => 0,
            Err(err) => {
                warn!("Game counter unreadable: {}", err);
                0
            }
        }
    }

    /// Append a record for `game` and return it
    ///
    /// The counter is written before the blob. If the blob write then
    /// fails, the number is used up but no record claims it, which keeps
    /// numbers unique.
    pub fn try_save(&mut self, game: &GameSession) -> Result<SessionLogRecord, LogError> {
        let mut games = self.try_load()?;

        let counter = match self.store.get_u32(StorageKey::GameCount) {
            Ok(count) => count,
            Err(StorageError::NotFound) => 0,
            Err(err) => return Err(err.into()),
        };
        // A lost counter must not reuse numbers still in the log
        let last = games.last().map_or(0, |record| record.game_number);
        let game_number = counter.max(last).saturating_add(1);

        let record = SessionLogRecord::from_session(game_number, game);
        if games.is_full() {
            let evicted = games.remove(0);
            debug!("Evicted game #{}", evicted.game_number);
        }
        games.push(record).map_err(|_| LogError::Corrupted)?;

        let mut buf = [0u8; LOG_BLOB_SIZE];
        for (slot, stored) in buf.chunks_exact_mut(RECORD_SIZE).zip(games.iter()) {
            slot.copy_from_slice(&stored.to_bytes());
        }

        self.store.set_u32(StorageKey::GameCount, game_number)?;
        self.store
            .set_blob(StorageKey::GameLog, &buf[..games.len() * RECORD_SIZE])?;

        info!(
            "Saved game #{}: {} s played, {} s paused, round {}",
            record.game_number, record.game_seconds, record.paused_seconds, record.max_round
        );
        Ok(record)
    }

    /// Append a record for `game`, reporting only success
    pub fn save_current_game(&mut self, game: &GameSession) -> bool {
        match self.try_save(game) {
            Ok(_) => true,
            Err(err) => {
                warn!("Failed to save game: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryKvStore;
    use proptest::prelude::*;

    fn played(seconds: u32) -> GameSession {
        let mut game = GameSession::new();
        game.start(0);
        for _ in 0..seconds {
            game.tick_second();
        }
        game
    }

    fn numbers(games: &SessionLog) -> std::vec::Vec<u32> {
        games.iter().map(|record| record.game_number).collect()
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let mut log = SessionLogStore::new(MemoryKvStore::new());
        assert!(log.load_games(MAX_LOGGED_GAMES).is_empty());
        assert_eq!(log.total_game_count(), 0);
    }

    #[test]
    fn test_saves_in_order() {
        let mut log = SessionLogStore::new(MemoryKvStore::new());
        for seconds in [30, 60, 90] {
            assert!(log.save_current_game(&played(seconds)));
        }

        let games = log.load_games(MAX_LOGGED_GAMES);
        assert_eq!(numbers(&games), [1, 2, 3]);
        assert_eq!(games[2].game_seconds, 90);
        assert_eq!(log.total_game_count(), 3);
    }

    #[test]
    fn test_load_games_limits_count() {
        let mut log = SessionLogStore::new(MemoryKvStore::new());
        for _ in 0..4 {
            log.save_current_game(&played(1));
        }
        assert_eq!(numbers(&log.load_games(2)), [1, 2]);
    }

    #[test]
    fn test_full_log_evicts_oldest() {
        let mut log = SessionLogStore::new(MemoryKvStore::new());
        for _ in 0..MAX_LOGGED_GAMES + 1 {
            assert!(log.save_current_game(&played(5)));
        }

        let games = log.load_games(MAX_LOGGED_GAMES);
        assert_eq!(games.len(), MAX_LOGGED_GAMES);
        assert_eq!(games[0].game_number, 2);
        assert_eq!(games[MAX_LOGGED_GAMES - 1].game_number, 51);
        assert_eq!(log.total_game_count(), 51);
    }

    #[test]
    fn test_counter_write_failure_fails_save() {
        let mut store = MemoryKvStore::new();
        store.fail_writes_to(StorageKey::GameCount);
        let mut log = SessionLogStore::new(store);

        assert!(!log.save_current_game(&played(5)));
        assert!(log.load_games(MAX_LOGGED_GAMES).is_empty());
    }

    #[test]
    fn test_blob_write_failure_fails_save_and_skips_number() {
        let mut log = SessionLogStore::new(MemoryKvStore::new());
        log.save_current_game(&played(5));

        let mut store = log.into_inner();
        store.fail_writes_to(StorageKey::GameLog);
        let mut log = SessionLogStore::new(store);
        assert_eq!(
            log.try_save(&played(5)),
            Err(LogError::Storage(StorageError::Storage))
        );

        let mut store = log.into_inner();
        store.clear_failures();
        let mut log = SessionLogStore::new(store);
        assert!(log.save_current_game(&played(5)));
        assert_eq!(numbers(&log.load_games(MAX_LOGGED_GAMES)), [1, 3]);
    }

    #[test]
    fn test_unreadable_log_is_not_overwritten() {
        let mut store = MemoryKvStore::new();
        store.set_blob(StorageKey::GameLog, &[0xAB; RECORD_SIZE]).unwrap();
        store.fail_reads_of(StorageKey::GameLog);
        let mut log = SessionLogStore::new(store);

        assert!(log.load_games(MAX_LOGGED_GAMES).is_empty());
        assert!(!log.save_current_game(&played(5)));

        let mut store = log.into_inner();
        store.clear_failures();
        let mut buf = [0u8; RECORD_SIZE];
        assert_eq!(store.get_blob(StorageKey::GameLog, &mut buf), Ok(RECORD_SIZE));
        assert_eq!(buf, [0xAB; RECORD_SIZE]);
    }

    #[test]
    fn test_lost_counter_does_not_reuse_numbers() {
        let mut log = SessionLogStore::new(MemoryKvStore::new());
        log.save_current_game(&played(5));
        log.save_current_game(&played(5));

        let mut store = log.into_inner();
        store.remove(StorageKey::GameCount);
        let mut log = SessionLogStore::new(store);
        assert_eq!(log.try_save(&played(5)).map(|r| r.game_number), Ok(3));
    }

    #[test]
    fn test_trailing_partial_record_is_dropped() {
        let mut store = MemoryKvStore::new();
        let record = SessionLogRecord::from_session(9, &played(5));
        let mut blob = std::vec::Vec::from(record.to_bytes());
        blob.extend_from_slice(&[1, 2, 3]);
        store.set_blob(StorageKey::GameLog, &blob).unwrap();

        let mut log = SessionLogStore::new(store);
        assert_eq!(numbers(&log.load_games(MAX_LOGGED_GAMES)), [9]);
    }

    #[test]
    fn test_paused_time_is_recorded() {
        let mut game = played(10);
        game.pause(10_000);
        game.resume(75_000);

        let mut log = SessionLogStore::new(MemoryKvStore::new());
        let record = log.try_save(&game).unwrap();
        assert_eq!(record.game_seconds, 10);
        assert_eq!(record.paused_seconds, 65);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_log_keeps_latest_in_order(saves in 1usize..80) {
            let mut log = SessionLogStore::new(MemoryKvStore::new());
            for _ in 0..saves {
                prop_assert!(log.save_current_game(&played(1)));
            }

            let games = log.load_games(MAX_LOGGED_GAMES);
            let expected = saves.min(MAX_LOGGED_GAMES);
            prop_assert_eq!(games.len(), expected);
            prop_assert!(games.windows(2).all(|w| w[0].game_number < w[1].game_number));
            prop_assert_eq!(games[expected - 1].game_number as usize, saves);
            prop_assert_eq!(games[0].game_number as usize, saves - expected + 1);
        }
    }
}

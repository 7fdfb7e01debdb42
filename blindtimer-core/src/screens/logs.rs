//! Session log viewer
//!
//! Most recent game first, one page of rows at a time.

use crate::config::{tones, MAX_LOGGED_GAMES};
use crate::gamelog::{SessionLog, SessionLogRecord, SessionLogStore};
use crate::traits::{AudioExt, DisplayExt, WidgetId};

use super::value::RangedValue;
use super::{clock, label, Action, Label, Screen, ScreenContext, ScreenId};

/// Rows on one page
pub const ROWS_PER_PAGE: usize = 5;

pub struct GameLogsScreen {
    /// Valid records, oldest first
    records: SessionLog,
    page: RangedValue,
}

impl Default for GameLogsScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// `#N: M:SS / M:SS R<round>` (played / paused)
pub fn format_row(record: &SessionLogRecord) -> Label {
    label(format_args!(
        "#{}: {} / {} R{}",
        record.game_number,
        clock(record.game_seconds),
        clock(record.paused_seconds),
        record.max_round
    ))
}

impl GameLogsScreen {
    pub const fn new() -> Self {
        Self {
            records: SessionLog::new(),
            page: RangedValue::new(0, 0, 0, 1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(ROWS_PER_PAGE)
    }

    /// Zero-based page on screen
    pub fn page(&self) -> usize {
        self.page.get() as usize
    }

    fn render(&self, ctx: &mut ScreenContext<'_>) {
        if self.records.is_empty() {
            ctx.display.show_text(WidgetId::Title, "Game Logs");
            ctx.display.show_text(WidgetId::LogRow(0), "No games logged yet");
            for row in 1..ROWS_PER_PAGE {
                ctx.display.set_visible(WidgetId::LogRow(row as u8), false);
            }
            return;
        }

        let title = label(format_args!(
            "Game Logs {}/{}",
            self.page() + 1,
            self.page_count()
        ));
        ctx.display.show_text(WidgetId::Title, &title);

        // Row 0 of page 0 is the newest record
        let newest_first = self.records.iter().rev();
        let mut page_rows = newest_first.skip(self.page() * ROWS_PER_PAGE);
        for row in 0..ROWS_PER_PAGE {
            let widget = WidgetId::LogRow(row as u8);
            match page_rows.next() {
                Some(record) => ctx.display.show_text(widget, &format_row(record)),
                None => ctx.display.set_visible(widget, false),
            }
        }
    }
}

impl Screen for GameLogsScreen {
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        let loaded = SessionLogStore::new(&mut *ctx.store).load_games(MAX_LOGGED_GAMES);
        self.records.clear();
        for record in loaded.iter().filter(|r| r.game_number != 0) {
            // Cannot overflow: same capacity as the loaded log
            let _ = self.records.push(*record);
        }
        let last_page = self.page_count().saturating_sub(1) as i32;
        self.page = RangedValue::new(0, 0, last_page, 1);
        debug!(
            "Showing {} of {} session records",
            self.records.len(),
            loaded.len()
        );
        self.render(ctx);
    }

    fn on_exit(&mut self, ctx: &mut ScreenContext<'_>) {
        ctx.display.set_visible(WidgetId::Title, false);
        for row in 0..ROWS_PER_PAGE {
            ctx.display.set_visible(WidgetId::LogRow(row as u8), false);
        }
    }

    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        if self.records.is_empty() {
            return Action::None;
        }
        let step = self.page.step_by(delta);
        step.play(ctx.audio);
        if step.changed() {
            self.render(ctx);
        }
        Action::None
    }

    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        ctx.audio.play_all(&tones::OVERLAY_HIDE);
        Action::Goto(ScreenId::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BlindMode, GameSession};
    use crate::mock::{Harness, MemoryKvStore};
    use blindtimer_hal::{KvStore, StorageKey};
    use std::vec;

    fn harness_with_games(count: usize) -> Harness {
        let mut h = Harness::new();
        let mut log = SessionLogStore::new(&mut h.store);
        for _ in 0..count {
            log.save_current_game(&GameSession::new());
        }
        h
    }

    #[test]
    fn test_row_format() {
        let record = SessionLogRecord {
            game_number: 12,
            game_seconds: 3_725,
            paused_seconds: 95,
            max_round: 6,
            starting_small_blind: 25,
            round_minutes: 15,
            blind_mode: BlindMode::Standard,
        };
        assert_eq!(format_row(&record).as_str(), "#12: 1:02:05 / 1:35 R6");
    }

    #[test]
    fn test_empty_log() {
        let mut h = Harness::new();
        let mut screen = GameLogsScreen::new();
        screen.on_enter(&mut h.ctx(0));

        assert_eq!(h.display.text(WidgetId::Title), Some("Game Logs"));
        assert_eq!(h.display.text(WidgetId::LogRow(0)), Some("No games logged yet"));
        screen.handle_encoder(1, &mut h.ctx(0));
        assert!(h.audio.take().is_empty());
    }

    #[test]
    fn test_newest_first_with_pages() {
        let mut h = harness_with_games(7);
        let mut screen = GameLogsScreen::new();
        screen.on_enter(&mut h.ctx(0));

        assert_eq!(h.display.text(WidgetId::Title), Some("Game Logs 1/2"));
        assert!(h.display.text(WidgetId::LogRow(0)).unwrap().starts_with("#7:"));
        assert!(h.display.text(WidgetId::LogRow(4)).unwrap().starts_with("#3:"));

        screen.handle_encoder(1, &mut h.ctx(0));
        assert_eq!(h.display.text(WidgetId::Title), Some("Game Logs 2/2"));
        assert!(h.display.text(WidgetId::LogRow(1)).unwrap().starts_with("#1:"));
        assert!(!h.display.is_visible(WidgetId::LogRow(2)));

        screen.handle_encoder(1, &mut h.ctx(0));
        assert_eq!(screen.page(), 1);
        assert_eq!(h.audio.take(), vec![tones::UP, tones::BOUNDARY]);
    }

    #[test]
    fn test_skips_unnumbered_records() {
        let mut store = MemoryKvStore::new();
        let blank = SessionLogRecord::from_session(0, &GameSession::new());
        let real = SessionLogRecord::from_session(4, &GameSession::new());
        let mut blob = std::vec::Vec::new();
        blob.extend_from_slice(&blank.to_bytes());
        blob.extend_from_slice(&real.to_bytes());
        store.set_blob(StorageKey::GameLog, &blob).unwrap();

        let mut h = Harness {
            store,
            ..Harness::new()
        };
        let mut screen = GameLogsScreen::new();
        screen.on_enter(&mut h.ctx(0));
        assert_eq!(screen.page_count(), 1);
        assert!(h.display.text(WidgetId::LogRow(0)).unwrap().starts_with("#4:"));
        assert!(!h.display.is_visible(WidgetId::LogRow(1)));
    }

    #[test]
    fn test_click_returns_to_game() {
        let mut h = harness_with_games(1);
        let mut screen = GameLogsScreen::new();
        screen.on_enter(&mut h.ctx(0));
        assert_eq!(
            screen.handle_click(&mut h.ctx(0)),
            Action::Goto(ScreenId::Active)
        );
        assert_eq!(h.audio.take(), tones::OVERLAY_HIDE.to_vec());
    }
}

//! In-memory collaborators for host tests

use std::cell::Cell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use blindtimer_hal::{InputPin, KvStore, OutputPin, StorageError, StorageKey};

use crate::config::TimerConfig;
use crate::game::GameSession;
use crate::screens::ScreenContext;
use crate::traits::{Audio, DisplaySurface, PowerControl, Tone, WidgetId};

/// Pin whose level is shared with the test through [`MockPin::level`]
pub struct MockPin {
    level: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(high)),
        }
    }

    /// Handle for driving or inspecting the level after the pin is moved
    pub fn level(&self) -> Rc<Cell<bool>> {
        self.level.clone()
    }
}

impl InputPin for MockPin {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.level.set(true);
    }

    fn set_low(&mut self) {
        self.level.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.level.get()
    }
}

/// Key-value store in a `Vec`, with per-key failure injection
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Vec<(StorageKey, Vec<u8>)>,
    failing_reads: Vec<StorageKey>,
    failing_writes: Vec<StorageKey>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads of `key` fail with [`StorageError::Storage`]
    pub fn fail_reads_of(&mut self, key: StorageKey) {
        self.failing_reads.push(key);
    }

    /// Writes to `key` fail with [`StorageError::Storage`]
    pub fn fail_writes_to(&mut self, key: StorageKey) {
        self.failing_writes.push(key);
    }

    pub fn clear_failures(&mut self) {
        self.failing_reads.clear();
        self.failing_writes.clear();
    }

    pub fn remove(&mut self, key: StorageKey) {
        self.entries.retain(|(k, _)| *k != key);
    }
}

impl KvStore for MemoryKvStore {
    fn get_blob(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        if self.failing_reads.contains(&key) {
            return Err(StorageError::Storage);
        }
        let (_, data) = self
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .ok_or(StorageError::NotFound)?;
        if buffer.len() < data.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn set_blob(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        if self.failing_writes.contains(&key) {
            return Err(StorageError::Storage);
        }
        self.remove(key);
        self.entries.push((key, data.to_vec()));
        Ok(())
    }
}

/// Display that remembers the latest text and visibility of each widget
#[derive(Default)]
pub struct RecordingDisplay {
    texts: Vec<(WidgetId, String)>,
    visible: Vec<(WidgetId, bool)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, widget: WidgetId) -> Option<&str> {
        self.texts
            .iter()
            .find(|(w, _)| *w == widget)
            .map(|(_, text)| text.as_str())
    }

    /// Widgets never touched count as hidden
    pub fn is_visible(&self, widget: WidgetId) -> bool {
        self.visible
            .iter()
            .find(|(w, _)| *w == widget)
            .is_some_and(|(_, shown)| *shown)
    }
}

impl DisplaySurface for RecordingDisplay {
    fn set_text(&mut self, widget: WidgetId, text: &str) {
        self.texts.retain(|(w, _)| *w != widget);
        self.texts.push((widget, text.to_string()));
    }

    fn set_visible(&mut self, widget: WidgetId, visible: bool) {
        self.visible.retain(|(w, _)| *w != widget);
        self.visible.push((widget, visible));
    }
}

/// Audio that records every tone and the last volume
#[derive(Default)]
pub struct RecordingAudio {
    pub tones: Vec<Tone>,
    pub volume: Option<u8>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tones played since the last call
    pub fn take(&mut self) -> Vec<Tone> {
        core::mem::take(&mut self.tones)
    }
}

impl Audio for RecordingAudio {
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u16) {
        self.tones.push(Tone::new(frequency_hz, duration_ms));
    }

    fn set_volume(&mut self, level: u8) {
        self.volume = Some(level);
    }
}

/// Power control that counts power-off requests
#[derive(Default)]
pub struct RecordingPower {
    pub power_off_calls: u32,
}

impl PowerControl for RecordingPower {
    fn power_off(&mut self) {
        self.power_off_calls += 1;
    }
}

/// Owned collaborators for driving screens in tests
#[derive(Default)]
pub struct Harness {
    pub game: GameSession,
    pub display: RecordingDisplay,
    pub audio: RecordingAudio,
    pub store: MemoryKvStore,
    pub config: TimerConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow everything as a screen context at `now_ms`
    pub fn ctx(&mut self, now_ms: u32) -> ScreenContext<'_> {
        ScreenContext {
            game: &mut self.game,
            display: &mut self.display,
            audio: &mut self.audio,
            store: &mut self.store,
            config: &self.config,
            now_ms,
        }
    }
}

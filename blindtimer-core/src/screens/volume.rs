//! Volume setting screen

use blindtimer_hal::{KvStore, StorageError, StorageKey};

use crate::config::{tones, VOLUME_MAX, VOLUME_MIN};
use crate::traits::{AudioExt, DisplayExt, WidgetId};

use super::value::RangedValue;
use super::{label, Action, Screen, ScreenContext, ScreenId};

/// Stored volume, or `default` when missing or unreadable
pub fn load_volume(store: &mut dyn KvStore, default: u8) -> u8 {
    match store.get_u8(StorageKey::Volume) {
        Ok(level) => level.min(VOLUME_MAX),
        Err(StorageError::NotFound) => default,
        Err(err) => {
            warn!("Volume unreadable ({}), using {}", err, default);
            default
        }
    }
}

pub struct VolumeScreen {
    value: RangedValue,
}

impl Default for VolumeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeScreen {
    pub const fn new() -> Self {
        Self {
            value: RangedValue::new(0, VOLUME_MIN as i32, VOLUME_MAX as i32, 1),
        }
    }

    pub fn level(&self) -> u8 {
        self.value.get() as u8
    }
}

impl Screen for VolumeScreen {
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        let level = load_volume(ctx.store, ctx.config.default_volume);
        self.value.set(level as i32);
        ctx.display.show_text(WidgetId::Title, "Volume");
        ctx.display
            .show_text(WidgetId::Value, &label(format_args!("{}", level)));
        ctx.display.show_text(WidgetId::Prompt, "Push to save");
    }

    fn on_exit(&mut self, ctx: &mut ScreenContext<'_>) {
        ctx.display
            .hide_all(&[WidgetId::Title, WidgetId::Value, WidgetId::Prompt]);
    }

    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        let step = self.value.step_by(delta);
        if step.changed() {
            // New level is audible on the feedback tone itself
            ctx.audio.set_volume(self.level());
            ctx.display
                .set_text(WidgetId::Value, &label(format_args!("{}", self.level())));
        }
        step.play(ctx.audio);
        Action::None
    }

    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        let level = self.level();
        match ctx.store.set_u8(StorageKey::Volume, level) {
            Ok(()) => info!("Volume {} saved", level),
            Err(err) => warn!("Volume not saved: {}", err),
        }
        ctx.audio.play(tones::CONFIRM_SETTINGS);
        Action::Goto(ScreenId::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Harness, MemoryKvStore};
    use std::vec;

    #[test]
    fn test_load_volume_fallbacks() {
        let mut store = MemoryKvStore::new();
        assert_eq!(load_volume(&mut store, 5), 5);

        store.set_u8(StorageKey::Volume, 42).unwrap();
        assert_eq!(load_volume(&mut store, 5), VOLUME_MAX);

        store.set_blob(StorageKey::Volume, &[1, 2]).unwrap();
        assert_eq!(load_volume(&mut store, 3), 3);
    }

    #[test]
    fn test_adjust_applies_and_saves() {
        let mut h = Harness::new();
        h.store.set_u8(StorageKey::Volume, 9).unwrap();
        let mut screen = VolumeScreen::new();
        screen.on_enter(&mut h.ctx(0));
        assert_eq!(screen.level(), 9);

        screen.handle_encoder(1, &mut h.ctx(0));
        screen.handle_encoder(1, &mut h.ctx(0));
        assert_eq!(screen.level(), 10);
        assert_eq!(h.audio.volume, Some(10));
        assert_eq!(h.audio.take(), vec![tones::UP, tones::BOUNDARY]);

        assert_eq!(
            screen.handle_click(&mut h.ctx(0)),
            Action::Goto(ScreenId::Active)
        );
        assert_eq!(h.store.get_u8(StorageKey::Volume), Ok(10));
        assert_eq!(h.audio.take(), vec![tones::CONFIRM_SETTINGS]);
    }

    #[test]
    fn test_save_failure_still_returns() {
        let mut h = Harness::new();
        h.store.fail_writes_to(StorageKey::Volume);
        let mut screen = VolumeScreen::new();
        screen.on_enter(&mut h.ctx(0));
        assert_eq!(screen.level(), 5);
        assert_eq!(
            screen.handle_click(&mut h.ctx(0)),
            Action::Goto(ScreenId::Active)
        );
    }
}

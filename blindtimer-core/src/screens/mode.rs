//! Blind progression mode screen
//!
//! Last setup step. Shows the mode name, what it does, and a rough game
//! length for the blinds and round length already chosen. Confirming
//! starts the game clock.

use crate::config::tones;
use crate::game::{estimate_minutes, estimate_rounds, BlindMode};
use crate::traits::{AudioExt, DisplayExt, WidgetId};

use super::overlay::InfoOverlay;
use super::{label, Action, Label, Screen, ScreenContext, ScreenId};

const MODE_WIDGETS: [WidgetId; 5] = [
    WidgetId::Title,
    WidgetId::Value,
    WidgetId::Caption,
    WidgetId::Detail,
    WidgetId::Prompt,
];

pub struct ModeScreen {
    index: usize,
    info: InfoOverlay,
}

impl Default for ModeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeScreen {
    pub const fn new() -> Self {
        Self {
            index: 0,
            info: InfoOverlay::new("How fast blinds grow each round. Estimate assumes 2000 chip stacks."),
        }
    }

    pub fn selected(&self) -> BlindMode {
        BlindMode::ALL[self.index]
    }

    fn refresh(&self, ctx: &mut ScreenContext<'_>) {
        let mode = self.selected();
        ctx.display.set_text(WidgetId::Value, mode.name());
        ctx.display.set_text(WidgetId::Caption, mode.description());
        let estimate = estimate_line(ctx, mode);
        ctx.display.set_text(WidgetId::Detail, &estimate);
    }
}

/// `~N rounds / H:MM` for the chosen mode
fn estimate_line(ctx: &ScreenContext<'_>, mode: BlindMode) -> Label {
    let stack = ctx.config.starting_stack;
    let rounds = estimate_rounds(ctx.game.small_blind(), mode.multiplier(), stack);
    let minutes = estimate_minutes(ctx.game, mode.multiplier(), stack);
    label(format_args!(
        "~{} rounds / {}:{:02}",
        rounds,
        minutes / 60,
        minutes % 60
    ))
}

impl Screen for ModeScreen {
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        self.index = 0;
        self.info.dismiss(ctx);
        ctx.display.show_text(WidgetId::Title, "Progression");
        ctx.display.show_text(WidgetId::Prompt, "Push to start");
        self.refresh(ctx);
        for widget in [WidgetId::Value, WidgetId::Caption, WidgetId::Detail] {
            ctx.display.set_visible(widget, true);
        }
    }

    fn on_exit(&mut self, ctx: &mut ScreenContext<'_>) {
        self.info.dismiss(ctx);
        ctx.display.hide_all(&MODE_WIDGETS);
    }

    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        if delta == 0 || self.is_modal_blocking() {
            return Action::None;
        }
        let count = BlindMode::ALL.len() as i32;
        self.index = (self.index as i32 + delta.rem_euclid(count)).rem_euclid(count) as usize;
        ctx.audio
            .play(if delta > 0 { tones::UP } else { tones::DOWN });
        debug!("Mode -> {}", self.selected());
        self.refresh(ctx);
        Action::None
    }

    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        if self.info.is_open() {
            self.info.close(ctx);
            return Action::None;
        }
        let mode = self.selected();
        ctx.game.set_blind_multiplier(mode.multiplier());
        ctx.game.start(ctx.now_ms);
        ctx.audio.play(tones::CONFIRM_MODE);
        info!("Mode {} confirmed", mode);
        Action::Goto(ScreenId::Active)
    }

    fn handle_info(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        self.info.toggle(ctx);
        Action::None
    }

    fn is_modal_blocking(&self) -> bool {
        self.info.is_open()
    }
}

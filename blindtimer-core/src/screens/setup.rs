//! Small blind and round length setup screens

use crate::config::{
    tones, ROUND_MINUTES_INITIAL, ROUND_MINUTES_MAX, ROUND_MINUTES_MIN, ROUND_MINUTES_STEP,
    SMALL_BLIND_MAX, SMALL_BLIND_MIN, SMALL_BLIND_STEP,
};
use crate::traits::{AudioExt, DisplayExt, WidgetId};

use super::overlay::InfoOverlay;
use super::value::RangedValue;
use super::{label, Action, Screen, ScreenContext, ScreenId};

/// Widgets the setup screens draw on
const SETUP_WIDGETS: [WidgetId; 4] = [
    WidgetId::Title,
    WidgetId::Value,
    WidgetId::Caption,
    WidgetId::Prompt,
];

const PROMPT: &str = "Push to confirm";

/// First setup step: the opening small blind
pub struct SmallBlindScreen {
    value: RangedValue,
    info: InfoOverlay,
}

impl Default for SmallBlindScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SmallBlindScreen {
    pub const fn new() -> Self {
        Self {
            value: RangedValue::new(SMALL_BLIND_MIN, SMALL_BLIND_MIN, SMALL_BLIND_MAX, SMALL_BLIND_STEP),
            info: InfoOverlay::new("Blind paid by the player left of the dealer. Big blind is twice this."),
        }
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }

    fn refresh(&self, ctx: &mut ScreenContext<'_>) {
        let small = self.value.get();
        ctx.display
            .set_text(WidgetId::Value, &label(format_args!("{}", small)));
        ctx.display
            .set_text(WidgetId::Caption, &label(format_args!("Big blind {}", small * 2)));
    }
}

impl Screen for SmallBlindScreen {
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        self.value.set(SMALL_BLIND_MIN);
        self.info.dismiss(ctx);
        ctx.display.show_text(WidgetId::Title, "Starting small blind");
        ctx.display.show_text(WidgetId::Prompt, PROMPT);
        self.refresh(ctx);
        ctx.display.set_visible(WidgetId::Value, true);
        ctx.display.set_visible(WidgetId::Caption, true);
    }

    fn on_exit(&mut self, ctx: &mut ScreenContext<'_>) {
        self.info.dismiss(ctx);
        ctx.display.hide_all(&SETUP_WIDGETS);
    }

    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        if self.is_modal_blocking() {
            return Action::None;
        }
        let step = self.value.step_by(delta);
        step.play(ctx.audio);
        if step.changed() {
            debug!("Small blind -> {}", self.value.get());
            self.refresh(ctx);
        }
        Action::None
    }

    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        if self.info.is_open() {
            self.info.close(ctx);
            return Action::None;
        }
        ctx.game.set_small_blind(self.value.get());
        ctx.audio.play(tones::CONFIRM_SETUP);
        ctx.audio.play(tones::CONFIRM_SETUP);
        info!("Small blind set to {}", ctx.game.small_blind());
        Action::Goto(ScreenId::RoundLength)
    }

    fn handle_info(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        self.info.toggle(ctx);
        Action::None
    }

    fn is_modal_blocking(&self) -> bool {
        self.info.is_open()
    }
}

/// Second setup step: minutes per round
pub struct RoundLengthScreen {
    value: RangedValue,
    info: InfoOverlay,
}

impl Default for RoundLengthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundLengthScreen {
    pub const fn new() -> Self {
        Self {
            value: RangedValue::new(
                ROUND_MINUTES_INITIAL,
                ROUND_MINUTES_MIN,
                ROUND_MINUTES_MAX,
                ROUND_MINUTES_STEP,
            ),
            info: InfoOverlay::new("Blinds go up each time this many minutes pass."),
        }
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }
}

impl Screen for RoundLengthScreen {
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        self.value.set(ROUND_MINUTES_INITIAL);
        self.info.dismiss(ctx);
        ctx.display.show_text(WidgetId::Title, "Mins between rounds");
        ctx.display
            .show_text(WidgetId::Value, &label(format_args!("{}", self.value.get())));
        ctx.display.show_text(WidgetId::Caption, "minutes");
        ctx.display.show_text(WidgetId::Prompt, PROMPT);
    }

    fn on_exit(&mut self, ctx: &mut ScreenContext<'_>) {
        self.info.dismiss(ctx);
        ctx.display.hide_all(&SETUP_WIDGETS);
    }

    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        if self.is_modal_blocking() {
            return Action::None;
        }
        let step = self.value.step_by(delta);
        step.play(ctx.audio);
        if step.changed() {
            ctx.display
                .set_text(WidgetId::Value, &label(format_args!("{}", self.value.get())));
        }
        Action::None
    }

    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        if self.info.is_open() {
            self.info.close(ctx);
            return Action::None;
        }
        ctx.game.set_round_minutes(self.value.get());
        ctx.audio.play(tones::CONFIRM_SETUP);
        info!("Round length set to {} min", ctx.game.round_minutes());
        Action::Goto(ScreenId::Mode)
    }

    fn handle_info(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        self.info.toggle(ctx);
        Action::None
    }

    fn is_modal_blocking(&self) -> bool {
        self.info.is_open()
    }
}

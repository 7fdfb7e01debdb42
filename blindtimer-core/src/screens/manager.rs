//! Screen manager
//!
//! Owns every screen, tracks which one is current, and routes input to
//! it. Transitions requested by a handler run after that handler has
//! returned, with the old screen's `on_exit` finished before the new
//! screen's `on_enter` starts.

use super::{
    Action, ActiveGameScreen, GameLogsScreen, ModeScreen, RoundLengthScreen, Screen,
    ScreenContext, ScreenId, SmallBlindScreen, VolumeScreen,
};

pub struct ScreenManager {
    current: Option<ScreenId>,
    small_blind: SmallBlindScreen,
    round_length: RoundLengthScreen,
    mode: ModeScreen,
    active: ActiveGameScreen,
    volume: VolumeScreen,
    logs: GameLogsScreen,
}

impl Default for ScreenManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenManager {
    /// Manager with no screen active yet
    pub const fn new() -> Self {
        Self {
            current: None,
            small_blind: SmallBlindScreen::new(),
            round_length: RoundLengthScreen::new(),
            mode: ModeScreen::new(),
            active: ActiveGameScreen::new(),
            volume: VolumeScreen::new(),
            logs: GameLogsScreen::new(),
        }
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.current
    }

    fn screen(&self, id: ScreenId) -> &dyn Screen {
        match id {
            ScreenId::SmallBlind => &self.small_blind,
            ScreenId::RoundLength => &self.round_length,
            ScreenId::Mode => &self.mode,
            ScreenId::Active => &self.active,
            ScreenId::Volume => &self.volume,
            ScreenId::GameLogs => &self.logs,
        }
    }

    fn screen_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::SmallBlind => &mut self.small_blind,
            ScreenId::RoundLength => &mut self.round_length,
            ScreenId::Mode => &mut self.mode,
            ScreenId::Active => &mut self.active,
            ScreenId::Volume => &mut self.volume,
            ScreenId::GameLogs => &mut self.logs,
        }
    }

    /// Make `next` the current screen
    ///
    /// Switching to the screen already shown is ignored.
    pub fn transition_to(&mut self, next: ScreenId, ctx: &mut ScreenContext<'_>) {
        if self.current == Some(next) {
            warn!("Already on {}, ignoring transition", next);
            return;
        }

        if let Some(previous) = self.current {
            info!("Screen {} -> {}", previous, next);
            self.screen_mut(previous).on_exit(ctx);
        } else {
            info!("Screen -> {}", next);
        }

        self.current = Some(next);
        self.screen_mut(next).on_enter(ctx);
    }

    /// Whether the current screen has an overlay capturing input
    pub fn is_modal_blocking(&self) -> bool {
        self.current
            .is_some_and(|id| self.screen(id).is_modal_blocking())
    }

    pub fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        self.dispatch(ctx, |screen, ctx| screen.handle_encoder(delta, ctx))
    }

    pub fn handle_button_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        self.dispatch(ctx, |screen, ctx| screen.handle_click(ctx))
    }

    pub fn handle_info(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        self.dispatch(ctx, |screen, ctx| screen.handle_info(ctx))
    }

    pub fn tick(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        self.dispatch(ctx, |screen, ctx| screen.tick(ctx))
    }

    /// Run one handler on the current screen, then carry out any
    /// transition it asked for
    ///
    /// Returns [`Action::PowerOff`] for the caller to act on, otherwise
    /// [`Action::None`].
    fn dispatch<F>(&mut self, ctx: &mut ScreenContext<'_>, handler: F) -> Action
    where
        F: FnOnce(&mut dyn Screen, &mut ScreenContext<'_>) -> Action,
    {
        let Some(id) = self.current else {
            return Action::None;
        };
        match handler(self.screen_mut(id), ctx) {
            Action::Goto(next) => {
                self.transition_to(next, ctx);
                Action::None
            }
            other => other,
        }
    }
}

//! Active game screen
//!
//! Runs the round countdown and advances rounds when it expires. A click
//! pauses the game and opens the menu, which captures the dial until an
//! item is chosen.

use crate::config::{tones, TICK_INTERVAL_MS};
use crate::game::advance_round;
use crate::gamelog::SessionLogStore;
use crate::traits::{AudioExt, DisplayExt, WidgetId};

use super::value::RangedValue;
use super::{clock, label, Action, Screen, ScreenContext, ScreenId};

/// Pause menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Resume,
    SkipRound,
    Volume,
    NewGame,
    PowerOff,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Resume,
        MenuItem::SkipRound,
        MenuItem::Volume,
        MenuItem::NewGame,
        MenuItem::PowerOff,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Resume => "Resume",
            MenuItem::SkipRound => "Skip Round",
            MenuItem::Volume => "Volume",
            MenuItem::NewGame => "New Game",
            MenuItem::PowerOff => "Power Off",
        }
    }
}

/// Countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveState {
    Running,
    /// Menu open, countdown frozen
    Paused,
}

const GAME_WIDGETS: [WidgetId; 5] = [
    WidgetId::Title,
    WidgetId::SmallBlind,
    WidgetId::BigBlind,
    WidgetId::TimerMinutes,
    WidgetId::TimerSeconds,
];

pub struct ActiveGameScreen {
    state: ActiveState,
    cursor: RangedValue,
    last_tick_ms: u32,
    /// Pause length last written to the paused note (s)
    shown_pause_s: Option<u32>,
}

impl Default for ActiveGameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveGameScreen {
    pub const fn new() -> Self {
        Self {
            state: ActiveState::Running,
            cursor: RangedValue::new(0, 0, MenuItem::ALL.len() as i32 - 1, 1),
            last_tick_ms: 0,
            shown_pause_s: None,
        }
    }

    pub fn state(&self) -> ActiveState {
        self.state
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.cursor.get() as usize]
    }

    fn draw_round(&self, ctx: &mut ScreenContext<'_>) {
        let game = &*ctx.game;
        let title = label(format_args!("Round {}", game.current_round()));
        let small = label(format_args!("{}", game.small_blind()));
        let big = label(format_args!("{}", game.big_blind()));
        ctx.display.show_text(WidgetId::Title, &title);
        ctx.display.show_text(WidgetId::SmallBlind, &small);
        ctx.display.show_text(WidgetId::BigBlind, &big);
        self.draw_timer(ctx);
    }

    fn draw_timer(&self, ctx: &mut ScreenContext<'_>) {
        let remaining = ctx.game.seconds_remaining();
        let minutes = label(format_args!("{:02}", remaining / 60));
        let seconds = label(format_args!("{:02}", remaining % 60));
        ctx.display.show_text(WidgetId::TimerMinutes, &minutes);
        ctx.display.show_text(WidgetId::TimerSeconds, &seconds);
    }

    fn draw_menu(&self, ctx: &mut ScreenContext<'_>) {
        let selected = self.selected();
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let text = if *item == selected {
                label(format_args!("> {}", item.label()))
            } else {
                label(format_args!("{}", item.label()))
            };
            ctx.display.show_text(WidgetId::MenuItem(i as u8), &text);
        }
    }

    fn draw_pause_note(&mut self, ctx: &mut ScreenContext<'_>) {
        let paused_s = ctx.game.pause_elapsed_ms(ctx.now_ms).unwrap_or(0) / 1000;
        if self.shown_pause_s == Some(paused_s) {
            return;
        }
        self.shown_pause_s = Some(paused_s);
        let note = label(format_args!("Paused {}", clock(paused_s)));
        ctx.display.show_text(WidgetId::PausedNote, &note);
    }

    fn hide_menu(&self, ctx: &mut ScreenContext<'_>) {
        ctx.display
            .hide_all(&[WidgetId::MenuOverlay, WidgetId::PausedNote]);
        for i in 0..MenuItem::ALL.len() {
            ctx.display.set_visible(WidgetId::MenuItem(i as u8), false);
        }
    }

    fn pause(&mut self, ctx: &mut ScreenContext<'_>) {
        ctx.game.pause(ctx.now_ms);
        self.state = ActiveState::Paused;
        self.cursor.set(0);
        self.shown_pause_s = None;
        ctx.display.set_visible(WidgetId::MenuOverlay, true);
        self.draw_menu(ctx);
        self.draw_pause_note(ctx);
        ctx.audio.play_all(&tones::OVERLAY_SHOW);
        info!("Game paused in round {}", ctx.game.current_round());
    }

    /// Close the menu and fold the pause into the paused total
    fn leave_pause(&mut self, ctx: &mut ScreenContext<'_>) {
        ctx.game.resume(ctx.now_ms);
        self.state = ActiveState::Running;
        self.last_tick_ms = ctx.now_ms;
        self.hide_menu(ctx);
    }

    fn advance(&mut self, ctx: &mut ScreenContext<'_>) {
        advance_round(ctx.game);
        self.draw_round(ctx);
        ctx.audio.play_all(&tones::ROUND_TRANSITION);
    }

    fn run_menu_item(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        let item = self.selected();
        debug!("Menu item {}", item);
        match item {
            MenuItem::Resume => {
                self.leave_pause(ctx);
                ctx.audio.play_all(&tones::OVERLAY_HIDE);
                info!("Game resumed");
                Action::None
            }
            MenuItem::SkipRound => {
                self.leave_pause(ctx);
                self.advance(ctx);
                Action::None
            }
            MenuItem::Volume => {
                self.leave_pause(ctx);
                Action::Goto(ScreenId::Volume)
            }
            MenuItem::NewGame => {
                self.leave_pause(ctx);
                let saved = SessionLogStore::new(&mut *ctx.store).save_current_game(ctx.game);
                if !saved {
                    warn!("Starting a new game without logging the last one");
                }
                ctx.game.reset();
                Action::Goto(ScreenId::SmallBlind)
            }
            MenuItem::PowerOff => Action::PowerOff,
        }
    }
}

impl Screen for ActiveGameScreen {
    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        self.state = ActiveState::Running;
        self.last_tick_ms = ctx.now_ms;
        self.hide_menu(ctx);
        self.draw_round(ctx);
        info!(
            "Round {}: SB={}, BB={}, {} s left",
            ctx.game.current_round(),
            ctx.game.small_blind(),
            ctx.game.big_blind(),
            ctx.game.seconds_remaining()
        );
    }

    fn on_exit(&mut self, ctx: &mut ScreenContext<'_>) {
        if self.state == ActiveState::Paused {
            self.leave_pause(ctx);
        }
        self.hide_menu(ctx);
        ctx.display.hide_all(&GAME_WIDGETS);
    }

    fn handle_encoder(&mut self, delta: i32, ctx: &mut ScreenContext<'_>) -> Action {
        if self.state == ActiveState::Running {
            return Action::None;
        }
        let step = self.cursor.step_by(delta);
        step.play(ctx.audio);
        if step.changed() {
            self.draw_menu(ctx);
        }
        Action::None
    }

    fn handle_click(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        match self.state {
            ActiveState::Running => {
                self.pause(ctx);
                Action::None
            }
            ActiveState::Paused => self.run_menu_item(ctx),
        }
    }

    fn handle_info(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        if self.state == ActiveState::Running {
            return Action::None;
        }
        self.leave_pause(ctx);
        ctx.audio.play_all(&tones::OVERLAY_SHOW);
        Action::Goto(ScreenId::GameLogs)
    }

    fn tick(&mut self, ctx: &mut ScreenContext<'_>) -> Action {
        if self.state == ActiveState::Paused {
            self.draw_pause_note(ctx);
            return Action::None;
        }

        let elapsed = ctx.now_ms.wrapping_sub(self.last_tick_ms);
        if elapsed < TICK_INTERVAL_MS {
            return Action::None;
        }
        // One second per pass; resync instead of bursting after a stall
        self.last_tick_ms = if elapsed >= 2 * TICK_INTERVAL_MS {
            ctx.now_ms
        } else {
            self.last_tick_ms.wrapping_add(TICK_INTERVAL_MS)
        };

        if ctx.game.tick_second() == 0 {
            info!("Round {} complete", ctx.game.current_round());
            self.advance(ctx);
        } else {
            self.draw_timer(ctx);
        }
        Action::None
    }

    fn is_modal_blocking(&self) -> bool {
        self.state == ActiveState::Paused
    }
}

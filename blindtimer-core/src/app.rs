//! Application context
//!
//! Owns the game session, the screen manager and every board
//! collaborator. The firmware calls [`AppContext::poll`] once per
//! main-loop pass; all input for that pass is routed to the current
//! screen before the screen's tick runs, so a click can never race a
//! round expiry from the same pass.

use blindtimer_hal::{InputPin, KvStore};
use heapless::Vec;

use crate::config::{tones, TimerConfig};
use crate::game::GameSession;
use crate::input::{Button, ButtonEvent, Debouncer, InputEvent};
use crate::screens::{load_volume, Action, ScreenContext, ScreenId, ScreenManager};
use crate::traits::{Audio, AudioExt, DisplaySurface, PowerControl};

/// Board collaborators handed to [`AppContext::new`]
pub struct Board<D, A, S, P, K> {
    pub display: D,
    pub audio: A,
    pub store: S,
    pub power: P,
    /// Main push-button, active low
    pub button: K,
    /// Info key next to the dial, active low
    pub info_key: K,
}

pub struct AppContext<D, A, S, P, K>
where
    D: DisplaySurface,
    A: Audio,
    S: KvStore,
    P: PowerControl,
    K: InputPin,
{
    config: TimerConfig,
    game: GameSession,
    manager: ScreenManager,
    display: D,
    audio: A,
    store: S,
    power: P,
    button: Button<K>,
    info_key: Button<K>,
    halted: bool,
}

impl<D, A, S, P, K> AppContext<D, A, S, P, K>
where
    D: DisplaySurface,
    A: Audio,
    S: KvStore,
    P: PowerControl,
    K: InputPin,
{
    pub fn new(board: Board<D, A, S, P, K>, config: TimerConfig) -> Self {
        let config = config.sanitized();
        let debouncer = Debouncer::new(config.debounce_ms, config.long_press_ms);
        Self {
            config,
            game: GameSession::new(),
            manager: ScreenManager::new(),
            display: board.display,
            audio: board.audio,
            store: board.store,
            power: board.power,
            button: Button::new(board.button, true, debouncer.clone()),
            info_key: Button::new(board.info_key, true, debouncer),
            halted: false,
        }
    }

    /// Apply the stored volume and show the first setup screen
    pub fn start(&mut self, now_ms: u32) {
        let volume = load_volume(&mut self.store, self.config.default_volume);
        self.audio.set_volume(volume);
        info!("Starting with volume {}", volume);
        self.route(now_ms, |manager, ctx| {
            manager.transition_to(ScreenId::SmallBlind, ctx);
            Action::None
        });
    }

    /// One main-loop pass
    ///
    /// Samples both keys, routes dial rotation and key events, then
    /// ticks the current screen. Returns `false` once the device has
    /// powered off.
    pub fn poll(&mut self, now_ms: u32, encoder_delta: i32) -> bool {
        if self.halted {
            return false;
        }

        let mut events: Vec<InputEvent, 3> = Vec::new();
        if encoder_delta != 0 {
            let _ = events.push(InputEvent::Rotate(encoder_delta));
        }
        if let Some(event) = self.button.poll(now_ms) {
            let _ = events.push(event.into());
        }
        // Only a short press of the info key means anything
        if let Some(ButtonEvent::ShortPress) = self.info_key.poll(now_ms) {
            let _ = events.push(InputEvent::Info);
        }

        for event in events {
            if self.handle_event(event, now_ms) == Action::PowerOff {
                self.shut_down();
                return false;
            }
        }

        if self.route(now_ms, |manager, ctx| manager.tick(ctx)) == Action::PowerOff {
            self.shut_down();
            return false;
        }
        true
    }

    /// Route one input event
    ///
    /// A long press powers off from any screen; the caller acts on the
    /// returned [`Action::PowerOff`].
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u32) -> Action {
        debug!("Input {}", event);
        match event {
            InputEvent::LongPress => {
                info!("Long press, powering off");
                Action::PowerOff
            }
            InputEvent::Click => self.route(now_ms, |manager, ctx| manager.handle_button_click(ctx)),
            InputEvent::Rotate(delta) => {
                self.route(now_ms, |manager, ctx| manager.handle_encoder(delta, ctx))
            }
            InputEvent::Info => self.route(now_ms, |manager, ctx| manager.handle_info(ctx)),
        }
    }

    /// Play the power-off chirp and release the power latch
    pub fn shut_down(&mut self) {
        if self.halted {
            return;
        }
        info!("Powering off");
        self.audio.play_all(&tones::POWER_OFF);
        self.power.power_off();
        self.halted = true;
    }

    fn route<F>(&mut self, now_ms: u32, f: F) -> Action
    where
        F: FnOnce(&mut ScreenManager, &mut ScreenContext<'_>) -> Action,
    {
        let mut ctx = ScreenContext {
            game: &mut self.game,
            display: &mut self.display,
            audio: &mut self.audio,
            store: &mut self.store,
            config: &self.config,
            now_ms,
        };
        f(&mut self.manager, &mut ctx)
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn game(&self) -> &GameSession {
        &self.game
    }

    pub fn current_screen(&self) -> Option<ScreenId> {
        self.manager.current()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn power(&self) -> &P {
        &self.power
    }
}

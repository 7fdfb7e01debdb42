//! Rotary encoder task
//!
//! Decodes the dial's quadrature signals into detents. Uses a state
//! machine for reliable decoding with noise rejection.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::channels::ENCODER_STEPS;

/// Pin sampling period
const POLL_INTERVAL_MS: u64 = 2;

/// Encoder state machine states
#[derive(Clone, Copy, PartialEq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature encoder decoder
pub struct Encoder {
    a: Input<'static>,
    b: Input<'static>,
    state: State,
    last_a: bool,
    last_b: bool,
}

impl Encoder {
    pub fn new(a: Input<'static>, b: Input<'static>) -> Self {
        let last_a = a.is_high();
        let last_b = b.is_high();

        Self {
            a,
            b,
            state: State::Idle,
            last_a,
            last_b,
        }
    }

    /// Sample both pins, returning a detent when one completes
    pub async fn poll(&mut self) -> Option<i8> {
        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;

        let a = self.a.is_high();
        let b = self.b.is_high();

        if a == self.last_a && b == self.last_b {
            return None;
        }

        self.last_a = a;
        self.last_b = b;
        self.decode(a, b)
    }

    /// Advance the state machine
    ///
    /// Both lines idle high between detents. Clockwise, A falls before B;
    /// counter-clockwise, B falls first. A detent completes when either
    /// line rises again after both were low. Returning to (1,1) early is
    /// treated as bounce.
    fn decode(&mut self, a: bool, b: bool) -> Option<i8> {
        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 | State::CcwStep1 => {
                if !a && !b {
                    self.state = match self.state {
                        State::CwStep1 => State::CwStep2,
                        _ => State::CcwStep2,
                    };
                } else if a && b {
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 if a || b => {
                self.state = State::Idle;
                Some(1)
            }
            State::CcwStep2 if a || b => {
                self.state = State::Idle;
                Some(-1)
            }
            State::CwStep2 | State::CcwStep2 => None,
        }
    }
}

/// Encoder task - forwards detents to the main loop
#[embassy_executor::task]
pub async fn encoder_task(mut encoder: Encoder) {
    info!("Encoder task started");

    loop {
        if let Some(step) = encoder.poll().await {
            trace!("Detent {}", step);
            if ENCODER_STEPS.try_send(step).is_err() {
                warn!("Encoder channel full, dropping detent");
            }
        }
    }
}

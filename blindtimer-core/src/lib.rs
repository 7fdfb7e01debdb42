//! Board-agnostic core logic for the poker blind timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button debouncing with short/long press classification
//! - Game session state with validated mutators
//! - Round progression (blind growth, round timer reset)
//! - Persisted session log (fixed-capacity FIFO of finished games)
//! - Screens and the screen manager that routes input to them
//! - Collaborator traits for the display, buzzer and power latch
//!
//! The firmware owns one [`app::AppContext`] and drives it from its main
//! loop with the current time, the raw button level and any encoder
//! deltas collected since the last pass.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod game;
pub mod gamelog;
pub mod input;
pub mod screens;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

//! Round display panel link protocol
//!
//! The timer's main board drives the round display panel over UART. The
//! panel keeps every widget pre-built; the board only changes widget text
//! and visibility, so the whole link is two commands plus a clear.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–64B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod messages;
pub mod widgets;

pub use frame::{Frame, FrameError, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{PanelMessage, MAX_TEXT_LEN};
pub use widgets::WidgetId;

//! Collaborator traits
//!
//! These traits define the interface between the application logic and
//! the board's display, buzzer and power hardware.

pub mod audio;
pub mod display;
pub mod power;

pub use audio::{Audio, AudioExt, Tone};
pub use display::{DisplayExt, DisplaySurface, WidgetId};
pub use power::{PowerControl, PowerLatch};

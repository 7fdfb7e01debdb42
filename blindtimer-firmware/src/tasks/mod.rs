//! Embassy async tasks
//!
//! Each task owns one piece of hardware and talks to the main loop
//! through the channels in [`crate::channels`].

pub mod buzzer;
pub mod display_tx;
pub mod encoder;

pub use buzzer::buzzer_task;
pub use display_tx::display_tx_task;
pub use encoder::{encoder_task, Encoder};

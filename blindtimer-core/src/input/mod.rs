//! Input pipeline
//!
//! Raw button levels are debounced and classified here. Rotation arrives
//! already decoded as signed detent counts.

pub mod button;
pub mod debouncer;
pub mod events;

pub use button::Button;
pub use debouncer::{ButtonEvent, Debouncer};
pub use events::InputEvent;

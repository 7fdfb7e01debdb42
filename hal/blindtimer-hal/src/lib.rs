//! Blindtimer Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the blind timer
//! core needs from a board: digital pins for the button and power latch,
//! and a persistent key-value store for settings and the session log.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  blindtimer-firmware (RP2040 board)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blindtimer-core (screens, game, log)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blindtimer-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`storage::KvStore`] - Persistent key-value storage

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod storage;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use storage::{KvStore, StorageError, StorageKey, STORE_NAMESPACE};

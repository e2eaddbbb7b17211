//! cyd-panel Hardware Abstraction Layer
//!
//! This crate defines the small set of collaborator traits the display and
//! touch drivers are written against. A board crate implements them once
//! (or wraps its embedded-hal types with the adapters in [`eh`]) and hands
//! the resulting values to the drivers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (screens, polling loop)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │    Ili9341    │       │    Xpt2046    │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cyd-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 / board support       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::Transport`] - Duplex byte transport
//! - [`gpio::OutputLine`] - Digital output line
//! - [`clock::Clock`] - Monotonic millisecond clock with blocking sleep

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod eh;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::{NoLine, OutputLine};
pub use spi::Transport;

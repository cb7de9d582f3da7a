#![cfg_attr(not(feature = "std"), no_std)]
//! Single-player Battleship ocean: a 10x10 board, a fixed fleet of ten ships
//! placed at random with a one-cell gap between them, shot resolution and
//! sink tracking.
//!
//! The engine (`Board`, `Ship` and friends) is `no_std`. The `std` feature adds
//! logging setup and the text display used by the binaries.

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use ship::*;

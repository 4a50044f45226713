//! # Connect Four
//!
//! A console Connect Four game for two players, or one player against a
//! computer opponent that drops disks into random legal columns.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, gravity drop, four-in-a-row, game state
//! - [`player`] — Players and their move sources (human, random)
//! - [`session`] — Turn controller and the play-again loop
//! - [`console`] — Display/input contract and the terminal implementation
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod player;
pub mod session;

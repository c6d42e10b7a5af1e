//! # Tic Tac Toe
//!
//! A terminal Tic-Tac-Toe game: human vs human or human vs a greedy one-ply
//! AI, with an append-only log of past results. The UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, symbols, turn state machine
//! - [`player`] — Human and AI players, and the factory that builds them
//! - [`results`] — Append-only result log
//! - [`ui`] — Terminal UI: start screen, board, rematch prompt
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod results;
pub mod ui;

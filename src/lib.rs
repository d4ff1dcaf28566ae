//! # Connect Four Minimax
//!
//! Connect Four on a configurable grid, with a depth-limited minimax engine
//! (alpha-beta pruned) choosing moves for automated players.
//!
//! ## Modules
//!
//! - [`game`] — Grid, run detection and window scanning, match turn loop
//! - [`ai`] — Agents, position heuristic with pluggable strategies, search
//! - [`scoreboard`] — Outcome counters and their JSON persistence
//! - [`ui`] — Terminal UI for playing matches
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod scoreboard;
pub mod ui;

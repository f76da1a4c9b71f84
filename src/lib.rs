//! Dino Rush: a side-scrolling endless runner.
//!
//! The simulation (sprites, obstacles, player, board) is host-agnostic and
//! talks to the outside world only through the traits in [`host`]. The
//! binary plugs in a crossterm terminal host.

pub mod auth;
pub mod background;
pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod host;
pub mod obstacle;
pub mod player;
pub mod resources;
pub mod scores;
pub mod screens;
pub mod shop;
pub mod sprite;

pub use error::{GameError, Result};

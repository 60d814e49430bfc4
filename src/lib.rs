//! Core rules and terminal front end for a falling-block puzzle game.
//!
//! The [`game`] module holds everything with rules in it and has no terminal
//! dependencies; [`input`] and [`ui`] adapt it to crossterm and ratatui.

pub mod constants;
pub mod game;
pub mod input;
pub mod storage;
pub mod ui;

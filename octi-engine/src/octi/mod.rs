//! Reference implementation of the Octi rules.
//!
//! Pods race across a 6x7 board toward the opposing base. A pod may step to any
//! adjacent empty cell or jump an adjacent pod, capturing it if it is an enemy.
//! Reaching an opposing base cell, taking the last enemy pod, or leaving the
//! opponent without an action wins the game.

mod action;
mod state;

pub use action::*;
pub use state::*;

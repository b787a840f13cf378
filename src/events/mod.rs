//! Event handling module for keyboard and mouse events.
//!
//! Handlers translate crossterm events into Actions; they never touch state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;

//! Keyboard navigation between the input field and rendered suggestions
//!
//! The state machine is a pure function of (state, key, guards); the app applies the
//! returned effects to the input field and the list highlight.

pub mod keybindings;
mod nav_state;
mod submission;

pub use keybindings::nav_key;
pub use nav_state::{Focus, NavEffect, NavGuards, NavKey, NavigationState, Transition, transition};
pub use submission::resolve_submission;

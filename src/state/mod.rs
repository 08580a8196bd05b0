//! Session state management module.
//!
//! This module contains the orchestrator for the browsing session, including:
//! - Main `State` struct that holds collections, inputs and the detail overlay
//! - Navigation types (DisplayMode, Focus, View)
//! - User-visible error messages

mod detail;
mod error;
mod navigation;

pub use detail::Detail;
pub use error::StateError;
pub use navigation::{DisplayMode, Focus, View, CATEGORIES};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

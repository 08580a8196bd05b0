//! Reusable UI widget helpers.
//!
//! This module contains the styling utilities shared by the render modules.

pub mod styling;

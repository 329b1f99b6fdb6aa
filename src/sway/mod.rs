//! Sway-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, powered by
//! `swaymsg` and the companion workspace-swap script.
//!
//! Nothing outside this module should reference sway directly.

pub mod wm;

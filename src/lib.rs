//! **swaycycle** — cycle the focused sway workspace.
//!
//! Each invocation reads the window manager's workspace list once, finds
//! the focused workspace, steps one position forward (`next`) or backward
//! (`prev`) with wraparound, and hands the chosen workspace name to an
//! external swap helper.  Nothing is cached between invocations.
//!
//! # Architecture
//!
//! The crate is organised around one core trait:
//!
//! * [`traits::WindowManager`] — abstracts the workspace query and the swap
//!   so the cycling logic in [`cycle`] is not coupled to any compositor.
//!
//! The concrete implementation lives in [`sway`] (`swaymsg` plus the swap
//! helper script).

pub mod command;
pub mod config;
pub mod cycle;
pub mod sway;
pub mod traits;

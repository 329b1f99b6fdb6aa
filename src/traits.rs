//! Core trait that decouples swaycycle from any specific window manager.
//!
//! The [`WorkspaceCycler`](crate::cycle::WorkspaceCycler) only depends on
//! this abstraction; the sway backend and the test doubles implement it.

use crate::command::WorkspaceInfo;

/// Abstraction over a window manager that can list its workspaces and be
/// asked to bring one of them to the focused output.
///
/// An implementation might shell out to `swaymsg` and a helper script, or
/// it might be a recording stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return every workspace, in the order the window manager reports them.
    ///
    /// That order is authoritative for index arithmetic.
    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, Self::Error>;

    /// Hand `name` to whatever performs the actual workspace swap.
    fn swap_workspace(&self, name: &str) -> Result<(), Self::Error>;
}

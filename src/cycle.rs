//! The orchestrator that ties the workspace list, the index arithmetic and
//! the window manager together.
//!
//! [`WorkspaceCycler`] performs exactly one query and at most one swap per
//! [`cycle`](WorkspaceCycler::cycle) call.  The workspace list is never
//! cached: every call reads it fresh and discards it afterwards.

use crate::command::{Direction, WorkspaceInfo};
use crate::traits::WindowManager;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Possible errors from the cycler.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),

    /// The window manager reported an empty workspace list.
    #[error("window manager reported no workspaces")]
    NoWorkspaces,

    /// No workspace in the list is marked as focused.
    #[error("no focused workspace")]
    NoFocusedWorkspace,
}

/// Which workspaces take part in the cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleScope {
    /// Every workspace the window manager reports, regardless of output.
    #[default]
    All,
    /// Only the workspaces on the focused workspace's output.
    Output,
}

/// Index of the focused workspace, if any.
pub fn focused_index(workspaces: &[WorkspaceInfo]) -> Option<usize> {
    workspaces.iter().position(|w| w.focused)
}

/// The workspaces assigned to `output`, in list order.
pub fn output_workspaces<'a>(workspaces: &'a [WorkspaceInfo], output: &str) -> Vec<&'a WorkspaceInfo> {
    workspaces.iter().filter(|w| w.output == output).collect()
}

/// Step `index` once in `direction`, wrapping around a list of `len`
/// entries.
///
/// `len` must be non-zero.
pub fn target_index(len: usize, index: usize, direction: Direction) -> usize {
    (index as isize + direction.step()).rem_euclid(len as isize) as usize
}

/// Pick the workspace that should receive focus next.
pub fn select_target(
    workspaces: &[WorkspaceInfo],
    direction: Direction,
    scope: CycleScope,
) -> Result<&WorkspaceInfo, CycleError> {
    if workspaces.is_empty() {
        return Err(CycleError::NoWorkspaces);
    }
    let focused = focused_index(workspaces).ok_or(CycleError::NoFocusedWorkspace)?;
    let current = &workspaces[focused];

    let candidates: Vec<&WorkspaceInfo> = match scope {
        CycleScope::All => workspaces.iter().collect(),
        CycleScope::Output => output_workspaces(workspaces, &current.output),
    };

    // The focused workspace is always among the candidates, so the list is
    // non-empty and the lookup cannot miss.
    let index = candidates
        .iter()
        .position(|w| w.focused)
        .ok_or(CycleError::NoFocusedWorkspace)?;
    let target = target_index(candidates.len(), index, direction);
    debug!(
        "focused {:?} at {}/{} ({:?} scope), target index {}",
        current.name,
        index,
        candidates.len(),
        scope,
        target
    );
    Ok(candidates[target])
}

/// Cycles the focused workspace through the window manager's list.
///
/// The cycler is generic over any [`WindowManager`] implementation, making
/// it independent of sway or any other concrete backend.
///
/// # Typical usage
///
/// ```ignore
/// let cycler = WorkspaceCycler::new(SwayWm::new(query, helper));
/// cycler.cycle(Direction::Next)?;
/// ```
pub struct WorkspaceCycler<W: WindowManager> {
    wm: W,
    scope: CycleScope,
}

impl<W: WindowManager> WorkspaceCycler<W> {
    /// Create a new cycler over every workspace ([`CycleScope::All`]).
    pub fn new(wm: W) -> Self {
        Self {
            wm,
            scope: CycleScope::All,
        }
    }

    /// Restrict or widen the set of workspaces taking part in the cycle.
    pub fn set_scope(&mut self, scope: CycleScope) {
        self.scope = scope;
    }

    /// Query the workspace list, compute the target and ask the window
    /// manager to swap to it.
    ///
    /// Returns the name handed to the window manager.  If no workspace is
    /// focused the swap is never attempted.
    pub fn cycle(&self, direction: Direction) -> Result<String, CycleError> {
        let workspaces = self
            .wm
            .workspaces()
            .map_err(|e| CycleError::WindowManager(e.to_string()))?;
        debug!("window manager reported {} workspace(s)", workspaces.len());

        let target = select_target(&workspaces, direction, self.scope)?;
        info!("cycling {} to workspace {:?}", direction, target.name);

        self.wm
            .swap_workspace(&target.name)
            .map_err(|e| CycleError::WindowManager(e.to_string()))?;
        Ok(target.name.clone())
    }
}

//! Commands and types used throughout swaycycle.
//!
//! This module defines the vocabulary that all components share:
//! [`Direction`] describes which way to cycle, [`WorkspaceInfo`] is one
//! entry of the window manager's workspace list, and [`parse_args`] turns
//! the raw command line into a [`Direction`].

use serde::Deserialize;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

/// Direction to cycle through the workspace list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Signed offset applied to the focused workspace's index.
    pub fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Prev => write!(f, "prev"),
        }
    }
}

/// Error returned when a string is neither `next` nor `prev`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {0:?}")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Only the exact literals are accepted; `Next` or ` next` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Direction::Next),
            "prev" => Ok(Direction::Prev),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// One workspace as reported by the window manager.
///
/// Only the fields swaycycle needs are kept; everything else in sway's
/// `get_workspaces` reply (`num`, `rect`, `visible`, …) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkspaceInfo {
    /// Workspace name, passed verbatim to the swap helper.
    pub name: String,
    /// Name of the output (display) the workspace is currently on.
    pub output: String,
    /// `true` for the single workspace that has input focus.
    pub focused: bool,
}

/// The command line did not consist of exactly one valid direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid usage of {program}")]
pub struct UsageError {
    program: String,
}

impl UsageError {
    /// The line printed before exiting with status 1.
    pub fn usage_line(&self) -> String {
        format!("usage: {} [workspace]", self.program)
    }
}

/// Parse the full argument vector (program name first).
///
/// Exactly one argument must follow the program name and it must be
/// `next` or `prev`.  Arguments that are not valid UTF-8 never match.
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Direction, UsageError> {
    let program = args
        .first()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    match args {
        [_, direction] => direction
            .as_ref()
            .to_str()
            .and_then(|d| d.parse::<Direction>().ok())
            .ok_or(UsageError { program }),
        _ => Err(UsageError { program }),
    }
}

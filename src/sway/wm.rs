//! [`WindowManager`] implementation backed by sway.
//!
//! The workspace list comes from a query command (by default
//! `swaymsg -t get_workspaces`) that prints a JSON array.  Swapping is
//! delegated to a helper executable that receives the target workspace name
//! as its only argument.  Both are plain child processes; neither call has
//! a timeout.

use crate::command::WorkspaceInfo;
use crate::traits::WindowManager;
use log::{debug, warn};
use std::path::PathBuf;
use std::process::Command;

/// Query used when the configuration does not override it.
pub const DEFAULT_QUERY: [&str; 3] = ["swaymsg", "-t", "get_workspaces"];

/// File name of the swap helper, looked up next to the running executable.
pub const HELPER_NAME: &str = "sway-swap-workspaces.sh";

/// Sway-backed window manager.
pub struct SwayWm {
    query: Vec<String>,
    helper: PathBuf,
}

/// Errors that can occur when talking to sway or the helper.
#[derive(Debug, thiserror::Error)]
#[error("sway error: {0}")]
pub struct SwayWmError(String);

impl SwayWm {
    /// Create a new handle.
    ///
    /// `query` is the argv of the workspace query; `helper` is the path of
    /// the swap helper.  Nothing is spawned until a trait method is called.
    pub fn new(query: Vec<String>, helper: PathBuf) -> Self {
        Self { query, helper }
    }

    /// Run the query command and return its stdout.
    fn run_query(&self) -> Result<String, SwayWmError> {
        let (program, args) = self
            .query
            .split_first()
            .ok_or_else(|| SwayWmError("empty query command".into()))?;
        debug!("running query {:?}", self.query);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| SwayWmError(format!("spawn {}: {}", program, e)))?;

        if !output.status.success() {
            return Err(SwayWmError(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| SwayWmError(format!("utf-8: {}", e)))
    }
}

/// [`DEFAULT_QUERY`] as an owned argv.
pub fn default_query() -> Vec<String> {
    DEFAULT_QUERY.iter().map(|s| s.to_string()).collect()
}

/// `<directory of the running executable>/sway-swap-workspaces.sh`.
///
/// `current_exe` resolves symlinks on Linux, so a symlinked install finds
/// the helper next to the link target, not next to the link.
pub fn default_helper_path() -> Result<PathBuf, SwayWmError> {
    let exe = std::env::current_exe()
        .map_err(|e| SwayWmError(format!("locate executable: {}", e)))?;
    let dir = exe
        .parent()
        .ok_or_else(|| SwayWmError(format!("{} has no parent directory", exe.display())))?;
    Ok(dir.join(HELPER_NAME))
}

/// Parse the JSON array printed by `swaymsg -t get_workspaces`.
pub fn parse_workspaces(json: &str) -> Result<Vec<WorkspaceInfo>, SwayWmError> {
    serde_json::from_str(json).map_err(|e| SwayWmError(format!("parse: {}", e)))
}

//  WindowManager implementation

impl WindowManager for SwayWm {
    type Error = SwayWmError;

    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, Self::Error> {
        parse_workspaces(&self.run_query()?)
    }

    fn swap_workspace(&self, name: &str) -> Result<(), Self::Error> {
        debug!("running {} {:?}", self.helper.display(), name);
        let status = Command::new(&self.helper)
            .arg(name)
            .status()
            .map_err(|e| SwayWmError(format!("spawn {}: {}", self.helper.display(), e)))?;
        // The helper owns the swap; its exit status is reported, not acted on.
        if !status.success() {
            warn!("{} exited with {}", self.helper.display(), status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWAY_REPLY: &str = r#"[
        {"id": 3, "type": "workspace", "num": 1, "name": "1", "visible": true,
         "focused": false, "urgent": false, "output": "eDP-1",
         "rect": {"x": 0, "y": 0, "width": 1920, "height": 1080}},
        {"id": 7, "type": "workspace", "num": 2, "name": "2: web", "visible": true,
         "focused": true, "urgent": false, "output": "DP-1",
         "rect": {"x": 1920, "y": 0, "width": 2560, "height": 1440}}
    ]"#;

    fn printf_query(json: &str) -> Vec<String> {
        vec!["printf".into(), "%s".into(), json.into()]
    }

    #[test]
    fn parse_sway_reply_keeps_order() {
        let ws = parse_workspaces(SWAY_REPLY).unwrap();
        assert_eq!(ws.len(), 2);
        assert_eq!(ws[0].name, "1");
        assert_eq!(ws[0].output, "eDP-1");
        assert!(!ws[0].focused);
        assert_eq!(ws[1].name, "2: web");
        assert!(ws[1].focused);
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_workspaces(r#"{"name": "1"}"#).unwrap_err();
        assert!(err.to_string().starts_with("sway error: parse:"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_workspaces("not json").is_err());
    }

    #[test]
    fn workspaces_reads_query_stdout() {
        let wm = SwayWm::new(printf_query(SWAY_REPLY), PathBuf::from("true"));
        let ws = wm.workspaces().unwrap();
        assert_eq!(ws.len(), 2);
        assert!(ws[1].focused);
    }

    #[test]
    fn failing_query_is_an_error() {
        let wm = SwayWm::new(vec!["false".into()], PathBuf::from("true"));
        let err = wm.workspaces().unwrap_err();
        assert!(err.to_string().contains("false exited with"));
    }

    #[test]
    fn missing_query_program_is_an_error() {
        let wm = SwayWm::new(
            vec!["swaycycle-no-such-query-program".into()],
            PathBuf::from("true"),
        );
        assert!(wm.workspaces().is_err());
    }

    #[test]
    fn empty_query_is_an_error() {
        let wm = SwayWm::new(Vec::new(), PathBuf::from("true"));
        assert_eq!(
            wm.workspaces().unwrap_err().to_string(),
            "sway error: empty query command"
        );
    }

    /// Write an executable `sh` helper that records `$#:$1` into `record`.
    fn recording_helper(tag: &str) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let script = dir.join(format!("swaycycle-helper-{}-{}.sh", tag, pid));
        let record = dir.join(format!("swaycycle-helper-{}-{}.out", tag, pid));
        let _ = std::fs::remove_file(&record);
        let body = format!(
            "#!/bin/sh\nprintf '%s:%s' \"$#\" \"$1\" >> '{}'\n",
            record.display()
        );
        // Written by a child `sh` so no write handle is ever open in this
        // process when the script is executed.
        let status = Command::new("sh")
            .args(["-c", "printf '%s' \"$1\" > \"$2\"", "sh"])
            .arg(&body)
            .arg(&script)
            .status()
            .unwrap();
        assert!(status.success());
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        (script, record)
    }

    #[test]
    fn swap_passes_name_as_sole_argument() {
        let (script, record) = recording_helper("swap");
        let wm = SwayWm::new(default_query(), script.clone());
        wm.swap_workspace("2: web").unwrap();
        let recorded = std::fs::read_to_string(&record).unwrap();
        let _ = std::fs::remove_file(&script);
        let _ = std::fs::remove_file(&record);
        assert_eq!(recorded, "1:2: web");
    }

    #[test]
    fn swap_runs_helper() {
        let wm = SwayWm::new(default_query(), PathBuf::from("true"));
        wm.swap_workspace("3").unwrap();
    }

    #[test]
    fn helper_exit_status_is_not_an_error() {
        let wm = SwayWm::new(default_query(), PathBuf::from("false"));
        wm.swap_workspace("3").unwrap();
    }

    #[test]
    fn missing_helper_is_an_error() {
        let wm = SwayWm::new(
            default_query(),
            PathBuf::from("/nonexistent/sway-swap-workspaces.sh"),
        );
        assert!(wm.swap_workspace("3").is_err());
    }

    #[test]
    fn default_helper_sits_next_to_executable() {
        let helper = default_helper_path().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(helper.parent(), exe.parent());
        assert_eq!(helper.file_name().unwrap(), HELPER_NAME);
    }

    #[test]
    fn default_query_is_swaymsg() {
        assert_eq!(default_query(), ["swaymsg", "-t", "get_workspaces"]);
    }
}

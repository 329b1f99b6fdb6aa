//! Entry point for **swaycycle**.
//!
//! `swaycycle next` / `swaycycle prev` validates its single argument before
//! anything else, then performs one workspace query and one helper call.

use log::{error, info, warn};
use std::ffi::OsString;
use swaycycle::command::parse_args;
use swaycycle::config::Config;
use swaycycle::cycle::WorkspaceCycler;
use swaycycle::sway::wm::{default_helper_path, SwayWm};

/// Resolve the config directory (`$XDG_CONFIG_HOME/swaycycle`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("swaycycle")
}

/// Try to load the config from `$XDG_CONFIG_HOME/swaycycle/config.json`,
/// falling back to compiled-in defaults.
///
/// A missing file is normal; a file that exists but does not load is
/// reported, since its settings are being ignored.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    if !path.exists() {
        info!("no config file at {}, using defaults", path.display());
        return Config::default();
    }
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            warn!("ignoring config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Build the sway backend from the configuration.
fn build_wm(config: &Config) -> Result<SwayWm, swaycycle::sway::wm::SwayWmError> {
    let helper = match &config.helper {
        Some(path) => path.clone(),
        None => default_helper_path()?,
    };
    Ok(SwayWm::new(config.query_command.clone(), helper))
}

fn main() {
    env_logger::init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let direction = match parse_args(&args[..]) {
        Ok(d) => d,
        Err(e) => {
            println!("{}", e.usage_line());
            std::process::exit(1);
        }
    };

    let config = load_config();

    let wm = match build_wm(&config) {
        Ok(wm) => wm,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut cycler = WorkspaceCycler::new(wm);
    cycler.set_scope(config.scope);

    if let Err(e) = cycler.cycle(direction) {
        error!("failed to cycle {}: {}", direction, e);
        std::process::exit(1);
    }
}

//! Filesystem locations for logs and configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "AGORA_CONFIG_PATH";

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("agora.log")
}

#[cfg(windows)]
fn data_local_dir_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    var_os("LOCALAPPDATA")
        .or_else(|| var_os("APPDATA"))
        .map(PathBuf::from)
}

#[cfg(not(windows))]
fn data_local_dir_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    var_os("XDG_DATA_HOME").map(PathBuf::from).or_else(|| {
        var_os("HOME").map(|home| {
            let home = PathBuf::from(home);
            #[cfg(target_os = "macos")]
            {
                home.join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                home.join(".local").join("share")
            }
        })
    })
}

/// Local application data directory for the current platform.
#[must_use]
pub fn data_local_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    data_local_dir_from(&mut var_os)
}

fn config_path_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> PathBuf {
    if let Some(explicit) = var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(explicit);
    }
    data_local_dir_from(var_os)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agora")
        .join("config.json")
}

/// Where the config file lives: `$AGORA_CONFIG_PATH`, else
/// `<data dir>/agora/config.json`.
#[must_use]
pub fn config_path() -> PathBuf {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_path_from(&mut var_os)
}

// Stashboard platform abstraction
// Provides the platform-specific config path for the local store.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific location at compile time.

use std::path::PathBuf;

/// Returns the platform-specific configuration directory for Stashboard.
///
/// - **Linux**: `~/.config/stashboard` (or `$XDG_CONFIG_HOME/stashboard`)
/// - **macOS**: `~/Library/Application Support/Stashboard`
/// - **Windows**: `%APPDATA%/Stashboard`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir().join(".config"))
            .join("stashboard")
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library/Application Support/Stashboard")
    }
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(home_dir)
            .join("Stashboard")
    }
}

fn home_dir() -> PathBuf {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

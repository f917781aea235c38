//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Default log directory for `--log-dir` without a value.
///
/// - Linux: `~/.cache/skirmish/logs` (or `$XDG_CACHE_HOME/skirmish/logs`)
/// - macOS: `~/Library/Caches/skirmish/logs`
/// - Windows: `%LOCALAPPDATA%\skirmish\logs`
/// - Fallback: `/tmp/skirmish/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/skirmish"))
        .join("logs")
}

/// Content directory used when neither `--data` nor `SKIRMISH_DATA_DIR` is set.
///
/// Tries the repository layout relative to the executable (`target/<profile>/`),
/// then relative to the current directory.
pub fn default_data_dir() -> PathBuf {
    const RELATIVE: &str = "crates/game/content/data";

    let from_exe = std::env::current_exe().ok().and_then(|exe| {
        exe.parent()
            .and_then(|p| p.parent())
            .and_then(|p| p.parent())
            .map(|root| root.join(RELATIVE))
    });
    match from_exe {
        Some(dir) if dir.exists() => dir,
        _ => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(RELATIVE),
    }
}

//! Where textgrid keeps its config file and logs
//!
//! Resolution order for the base directory:
//! 1. `$TEXTGRID_CONFIG_DIR`, used as-is
//! 2. `$XDG_CONFIG_HOME/textgrid` (Unix/macOS)
//! 3. `~/.config/textgrid` (Unix/macOS) or `%APPDATA%\textgrid` (Windows)

use std::{env, ffi::OsString, fs, path::PathBuf};

const APP_DIR: &str = "textgrid";

/// Environment variable that points textgrid at a different config directory
pub const CONFIG_DIR_ENV: &str = "TEXTGRID_CONFIG_DIR";

/// File name prefix of the daily rolling log (`render.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "render.log";

/// Pick the config directory from an explicit override, the platform base
/// directory, or the home directory, in that order
fn resolve_config_dir(
    override_dir: Option<OsString>,
    base_dir: Option<OsString>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    base_dir
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|h| h.join(".config")))
        .map(|base| base.join(APP_DIR))
}

/// Base config directory for textgrid
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA");
    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME");

    resolve_config_dir(env::var_os(CONFIG_DIR_ENV), base, dirs::home_dir())
}

/// Layout defaults: `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Rolling render logs: `<config dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return its path
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve_config_dir(
            Some("/tmp/grids".into()),
            Some("/xdg".into()),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(dir, Some(PathBuf::from("/tmp/grids")));
    }

    #[test]
    fn test_base_dir_gets_app_subdirectory() {
        let dir = resolve_config_dir(None, Some("/xdg".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/xdg/textgrid")));
    }

    #[test]
    fn test_home_fallback() {
        let dir = resolve_config_dir(Some("".into()), None, Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/textgrid")));
    }

    #[test]
    fn test_nothing_to_resolve() {
        assert_eq!(resolve_config_dir(None, None, None), None);
    }
}

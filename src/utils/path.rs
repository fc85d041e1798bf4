use std::path::{Path, PathBuf};

const APP_DIR: &str = "voicebros";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (platform config dir, falling back to ~/.config)
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| get_home_dir().join(".config"))
        .join(APP_DIR)
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the log directory path (platform cache dir, falling back to home)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join(APP_DIR)
}

/// Expand a leading `~` to the home directory
///
/// Relative paths are left relative so asset directories resolve against
/// the working directory, the way the game is usually launched.
pub fn expand_path(path: &Path) -> PathBuf {
    let home_dir = get_home_dir();

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home_dir,
        Ok(rest) => home_dir.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = get_home_dir();
        assert_eq!(expand_path(Path::new("~")), home);
        assert_eq!(expand_path(Path::new("~/games/assets")), home.join("games/assets"));
    }

    #[test]
    fn test_expand_leaves_other_paths() {
        assert_eq!(expand_path(Path::new("assets")), PathBuf::from("assets"));
        assert_eq!(expand_path(Path::new("/opt/assets")), PathBuf::from("/opt/assets"));
    }

    #[test]
    fn test_config_path_is_in_app_dir() {
        let path = get_config_path();
        assert!(path.ends_with("voicebros/config.toml"));
    }
}

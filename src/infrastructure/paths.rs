//! Path helpers for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Sandbox mount point of the host's home (or launch) directory.
const HOST_ROOT: &str = "/host";

/// Directory for the plugin's trace files:
/// `/host/.local/share/zellij/zroster`, which is
/// `~/.local/share/zellij/zroster` when Zellij was started from home.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("zroster")
}

/// Maps `~` and `~/...` onto the sandbox's `/host` mount; other paths are
/// returned unchanged.
///
/// ```
/// use zroster::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zroster.toml"), "/etc/zroster.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

//! Path helpers.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use url::Url;

static CASE_SENSITIVE: Lazy<bool> = Lazy::new(probe_case_sensitivity);

/// Whether the file system holding the running executable distinguishes
/// case. Probed once per process.
pub fn is_case_sensitive() -> bool {
    *CASE_SENSITIVE
}

fn probe_case_sensitivity() -> bool {
    if cfg!(windows) {
        return false;
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            log::debug!("cannot locate current executable, assuming case sensitivity: {}", e);
            return true;
        }
    };

    let spelled = exe.to_string_lossy();
    let upper = PathBuf::from(spelled.to_uppercase());
    let lower = PathBuf::from(spelled.to_lowercase());
    !(upper.is_file() && lower.is_file())
}

/// Whether `child` lies under `parent`, component-wise.
pub fn is_parent(parent: &Path, child: &Path) -> bool {
    is_parent_with(parent, child, is_case_sensitive())
}

fn is_parent_with(parent: &Path, child: &Path, case_sensitive: bool) -> bool {
    if case_sensitive {
        return child.starts_with(parent);
    }
    let parent = PathBuf::from(parent.to_string_lossy().to_lowercase());
    let child = PathBuf::from(child.to_string_lossy().to_lowercase());
    child.starts_with(parent)
}

/// Upper-cases a leading drive letter (`c:\src` becomes `C:\src`).
pub fn normalize_drive_letter(path: &str) -> String {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic() => {
            let mut normalized = String::with_capacity(path.len());
            normalized.push(drive.to_ascii_uppercase());
            normalized.push_str(&path[1..]);
            normalized
        }
        _ => path.to_string(),
    }
}

/// File system path of a `file:` URI. `None` for any other scheme.
pub fn uri_to_file_path(uri: &Url) -> Option<PathBuf> {
    if uri.scheme() != "file" {
        return None;
    }
    uri.to_file_path().ok()
}

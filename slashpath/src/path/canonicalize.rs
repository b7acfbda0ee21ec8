//! Path canonicalization.
//!
//! Canonicalization is purely textual. It never touches the filesystem:
//! - Backslashes are converted to forward slashes
//! - Repeated separators are collapsed
//! - `.` segments are removed
//! - `..` segments are collapsed with the preceding segment where possible

use crate::path::root::{has_drive_prefix, split_root};

/// Canonicalize a path string.
///
/// Leading `..` segments of relative paths are kept, since they climb above
/// an unknown origin. On absolute paths they are dropped, because nothing
/// lies above the root.
///
/// Canonicalizing a canonical path returns it unchanged, with one exception:
/// when collapsing `..` leaves a relative path whose first segment looks
/// like a bare drive (`x/../C:` gives `C:`), a second pass reads that
/// segment as a drive root and returns `C:/`.
///
/// # Examples
///
/// ```
/// use slashpath::path::canonicalize;
///
/// assert_eq!(canonicalize("\\webmozart\\puli\\..\\css\\style.css"), "/webmozart/css/style.css");
/// assert_eq!(canonicalize("../css/./style.css"), "../css/style.css");
/// assert_eq!(canonicalize("/../css"), "/css");
/// assert_eq!(canonicalize("C:"), "C:/");
/// assert_eq!(canonicalize("."), "");
/// ```
#[must_use]
pub fn canonicalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let path = path.replace('\\', "/");
    let (root, remainder) = split_root(&path);
    let mut segments: Vec<&str> = Vec::new();

    for segment in remainder.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                let collapsible = segments.last().is_some_and(|last| *last != "..");
                if collapsible {
                    segments.pop();
                } else if !root.is_absolute() {
                    segments.push(segment);
                }
            }
            _ => segments.push(segment),
        }
    }

    format!("{root}{}", segments.join("/"))
}

/// Return the directory part of a path in canonical form.
///
/// Unlike a plain `dirname`, the root is returned when the root itself is
/// passed (`C:` gives `C:/`), and a relative path without separators gives
/// an empty string rather than `.`.
///
/// # Examples
///
/// ```
/// use slashpath::path::get_directory;
///
/// assert_eq!(get_directory("/webmozart/puli/style.css"), "/webmozart/puli");
/// assert_eq!(get_directory("C:\\webmozart"), "C:/");
/// assert_eq!(get_directory("webmozart"), "");
/// ```
#[must_use]
pub fn get_directory(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let canonical = canonicalize(path);

    match canonical.rfind('/') {
        None => String::new(),
        Some(0) => "/".to_string(),
        Some(2) if has_drive_prefix(&canonical) => canonical[..3].to_string(),
        Some(pos) => canonical[..pos].to_string(),
    }
}

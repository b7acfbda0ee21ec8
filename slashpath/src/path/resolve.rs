//! Conversion between absolute and relative paths.
//!
//! Both conversions canonicalize their result. Roots are compared exactly,
//! so `C:/` and `D:/` (or `C:/` and `/`) can never be combined.

use crate::error::{Error, Result};
use crate::path::canonicalize::canonicalize;
use crate::path::root::split_root;

/// Turn a relative path into an absolute path.
///
/// The relative path is appended to `base_path` and the result is
/// canonicalized. A path that is already absolute is canonicalized and
/// returned as long as its root equals the root of `base_path`.
///
/// # Errors
///
/// Returns an error if:
/// - `base_path` is not absolute (`BasePathNotAbsolute`)
/// - `path` is absolute with a different root than `base_path` (`RootMismatch`)
///
/// # Examples
///
/// ```
/// use slashpath::path::make_absolute;
///
/// let absolute = make_absolute("../style.css", "/webmozart/puli/css").unwrap();
/// assert_eq!(absolute, "/webmozart/puli/style.css");
/// assert_eq!(make_absolute("C:/style.css", "C:/webmozart/puli").unwrap(), "C:/style.css");
/// assert!(make_absolute("C:/style.css", "/webmozart/puli").is_err());
/// assert!(make_absolute("style.css", "webmozart/puli").is_err());
/// ```
pub fn make_absolute(path: &str, base_path: &str) -> Result<String> {
    let (base_root, _) = split_root(base_path);

    if !base_root.is_absolute() {
        log::debug!("Rejecting relative base path {base_path:?} for {path:?}");
        return Err(Error::BasePathNotAbsolute {
            base_path: base_path.to_string(),
        });
    }

    let (root, _) = split_root(path);

    if root.is_absolute() {
        if root != base_root {
            log::debug!("Roots of {path:?} and {base_path:?} differ");
            return Err(Error::RootMismatch {
                path: path.to_string(),
                base_path: base_path.to_string(),
                root: root.to_string(),
                base_root: base_root.to_string(),
            });
        }

        return Ok(canonicalize(path));
    }

    Ok(canonicalize(&format!("{base_path}/{path}")))
}

/// Turn a path into a path relative to `base_path`.
///
/// If `path` is relative and `base_path` absolute, `path` is assumed to be
/// relative to `base_path` already and is returned canonicalized. If both
/// are relative, they are assumed to be relative to the same directory.
/// Segments are compared case-sensitively.
///
/// # Errors
///
/// Returns an error if:
/// - `path` is absolute and `base_path` is relative (`RelativeBasePath`)
/// - Both are absolute with different roots (`RootMismatch`)
///
/// # Examples
///
/// ```
/// use slashpath::path::make_relative;
///
/// assert_eq!(make_relative("/webmozart/style.css", "/webmozart/puli").unwrap(), "../style.css");
/// assert_eq!(make_relative("style.css", "/webmozart/puli/css").unwrap(), "style.css");
/// assert_eq!(make_relative("style.css", "webmozart/puli/css").unwrap(), "../../../style.css");
/// assert!(make_relative("/webmozart/style.css", "webmozart/puli").is_err());
/// ```
pub fn make_relative(path: &str, base_path: &str) -> Result<String> {
    let path = canonicalize(path);
    let base_path = canonicalize(base_path);

    let (root, relative_path) = split_root(&path);
    let (base_root, relative_base_path) = split_root(&base_path);

    match (root.is_absolute(), base_root.is_absolute()) {
        (false, true) => return Ok(relative_path.to_string()),
        (true, false) => {
            log::debug!("Cannot relativize absolute {path:?} against relative {base_path:?}");
            return Err(Error::RelativeBasePath { path, base_path });
        }
        (true, true) if root != base_root => {
            log::debug!("Roots of {path:?} and {base_path:?} differ");
            return Err(Error::RootMismatch {
                root: root.to_string(),
                base_root: base_root.to_string(),
                path,
                base_path,
            });
        }
        _ => {}
    }

    if relative_base_path.is_empty() {
        return Ok(relative_path.to_string());
    }

    let segments: Vec<&str> = relative_path.split('/').collect();
    let base_segments: Vec<&str> = relative_base_path.split('/').collect();

    let common = base_segments
        .iter()
        .zip(&segments)
        .take_while(|(base, segment)| base == segment)
        .count();

    let mut relative = "../".repeat(base_segments.len() - common);
    relative.push_str(&segments[common..].join("/"));

    Ok(relative)
}

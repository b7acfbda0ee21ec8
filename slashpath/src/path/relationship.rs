//! Base path relationships between paths.
//!
//! This module answers two questions about canonicalized paths: what is the
//! deepest directory shared by a set of paths, and does one path contain
//! another. Comparisons are segment-aware, so `/base/path` is not a base
//! path of `/base/path-foo`.

use crate::path::canonicalize::canonicalize;
use crate::path::root::split_root;

/// Check if `base` equals `path` or is one of its leading segment runs.
///
/// Equivalent to `format!("{path}/").starts_with(&format!("{base}/"))`.
fn is_segment_prefix(base: &str, path: &str) -> bool {
    path.strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Drop the last segment of a root-less path, like `dirname` but yielding
/// an empty string instead of `.`.
fn parent(path: &str) -> &str {
    path.rfind('/').map_or("", |pos| &path[..pos])
}

/// Return the longest common base path of a set of paths.
///
/// Paths are canonicalized before they are compared. When the paths share
/// nothing but their root, the root is returned.
///
/// Returns `None` if the paths have different roots (for example `C:/` and
/// `D:/`, or `/` and `C:/`), and for an empty set of paths. An empty set
/// has no root at all, so no path can be a base of it; an empty string
/// would instead claim a common relative base. A shared root of `/` is
/// `Some("/")`, not `None`.
///
/// # Examples
///
/// ```
/// use slashpath::path::get_longest_common_base_path;
///
/// assert_eq!(
///     get_longest_common_base_path(["/webmozart/css/style.css", "/webmozart/css/.."]),
///     Some("/webmozart".to_string())
/// );
/// assert_eq!(
///     get_longest_common_base_path(["/webmozart/css/style.css", "/puli/css/.."]),
///     Some("/".to_string())
/// );
/// assert_eq!(
///     get_longest_common_base_path(["C:/webmozart/css/style.css", "D:/webmozart/css/.."]),
///     None
/// );
/// ```
#[must_use]
pub fn get_longest_common_base_path<I, S>(paths: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paths = paths.into_iter();

    let first = canonicalize(paths.next()?.as_ref());
    let (root, mut base_path) = split_root(&first);

    for path in paths {
        let path = canonicalize(path.as_ref());
        let (path_root, relative_path) = split_root(&path);

        if path_root != root {
            log::trace!("No common base path: {path:?} is not under root {root:?}");
            return None;
        }

        while !base_path.is_empty() && !is_segment_prefix(base_path, relative_path) {
            base_path = parent(base_path);
        }
    }

    Some(format!("{root}{base_path}"))
}

/// Check whether `base_path` is a base path of `of_path`.
///
/// A path is a base path of itself. Both paths are canonicalized before the
/// comparison, and trailing separators are ignored.
///
/// # Examples
///
/// ```
/// use slashpath::path::is_base_path;
///
/// assert!(is_base_path("/webmozart", "/webmozart/css"));
/// assert!(is_base_path("/webmozart", "/webmozart"));
/// assert!(!is_base_path("/webmozart", "/webmozart/.."));
/// assert!(!is_base_path("/webmozart", "/puli"));
/// ```
#[must_use]
pub fn is_base_path(base_path: &str, of_path: &str) -> bool {
    let base_path = canonicalize(base_path);
    let of_path = canonicalize(of_path);

    // The root "/" must not become "//", which would never match.
    let base_path = format!("{}/", base_path.trim_end_matches('/'));

    format!("{of_path}/").starts_with(&base_path)
}

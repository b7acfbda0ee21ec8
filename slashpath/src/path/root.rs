//! Root classification for path strings.
//!
//! Every root-sensitive operation in this crate goes through [`split_root`],
//! so that `/`, `\`, `C:`, `C:/` and `C:\` are recognized identically
//! everywhere.

use std::fmt;

/// The root of a path string.
///
/// A root is what remains fixed when `..` segments are collapsed. Its
/// canonical text always ends in `/`, except for the empty root of relative
/// paths.
///
/// # Examples
///
/// ```
/// use slashpath::path::Root;
///
/// assert_eq!(Root::Relative.to_string(), "");
/// assert_eq!(Root::Unix.to_string(), "/");
/// assert_eq!(Root::Drive('C').to_string(), "C:/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    /// No root: the path is relative (or empty).
    Relative,

    /// A UNIX root, written `/` or `\`.
    Unix,

    /// A Windows drive root such as `C:/`. Drive letters are compared
    /// case-sensitively.
    Drive(char),
}

impl Root {
    /// Check if this root makes a path absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::path::Root;
    ///
    /// assert!(Root::Unix.is_absolute());
    /// assert!(Root::Drive('D').is_absolute());
    /// assert!(!Root::Relative.is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(self) -> bool {
        !matches!(self, Self::Relative)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative => Ok(()),
            Self::Unix => f.write_str("/"),
            Self::Drive(letter) => write!(f, "{letter}:/"),
        }
    }
}

/// Split a path string into its root and the remainder after the root.
///
/// Both separator styles are recognized. The remainder is a subslice of the
/// input and is not normalized in any way.
///
/// A drive letter that is not followed by a separator (`C:foo`) is not a
/// root; such paths are treated as relative.
///
/// # Examples
///
/// ```
/// use slashpath::path::{split_root, Root};
///
/// assert_eq!(split_root("/css/style.css"), (Root::Unix, "css/style.css"));
/// assert_eq!(split_root("C:\\css"), (Root::Drive('C'), "css"));
/// assert_eq!(split_root("C:"), (Root::Drive('C'), ""));
/// assert_eq!(split_root("C:css"), (Root::Relative, "C:css"));
/// assert_eq!(split_root("css"), (Root::Relative, "css"));
/// ```
#[must_use]
pub fn split_root(path: &str) -> (Root, &str) {
    let bytes = path.as_bytes();

    match bytes {
        [] => (Root::Relative, ""),
        [b'/' | b'\\', ..] => (Root::Unix, &path[1..]),
        [letter, b':'] if letter.is_ascii_alphabetic() => (Root::Drive(char::from(*letter)), ""),
        [letter, b':', b'/' | b'\\', ..] if letter.is_ascii_alphabetic() => {
            (Root::Drive(char::from(*letter)), &path[3..])
        }
        _ => (Root::Relative, path),
    }
}

/// Return the root directory of a path in canonical form.
///
/// Returns an empty string for relative and empty paths.
///
/// # Examples
///
/// ```
/// use slashpath::path::get_root;
///
/// assert_eq!(get_root("\\css\\style.css"), "/");
/// assert_eq!(get_root("D:\\css"), "D:/");
/// assert_eq!(get_root("C:"), "C:/");
/// assert_eq!(get_root("css/style.css"), "");
/// ```
#[must_use]
pub fn get_root(path: &str) -> String {
    split_root(path).0.to_string()
}

/// Check whether a path is absolute.
///
/// A path is absolute if it starts with a separator or with a drive root
/// (`C:`, `C:/` or `C:\`). The empty path is not absolute.
///
/// # Examples
///
/// ```
/// use slashpath::path::is_absolute;
///
/// assert!(is_absolute("/css/style.css"));
/// assert!(is_absolute("E:\\css\\style.css"));
/// assert!(is_absolute("C:"));
/// assert!(!is_absolute("C:css/style.css"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    split_root(path).0.is_absolute()
}

/// Check whether a path is relative. The empty path is relative.
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !is_absolute(path)
}

/// Check whether a path refers to the local filesystem rather than a URL.
///
/// # Examples
///
/// ```
/// use slashpath::path::is_local;
///
/// assert!(is_local("/bg.png"));
/// assert!(is_local("bg.png"));
/// assert!(!is_local("http://example.com/bg.png"));
/// assert!(!is_local(""));
/// ```
#[must_use]
pub fn is_local(path: &str) -> bool {
    !path.is_empty() && !path.contains("://")
}

/// Check if a canonical path starts with a drive-letter pattern (`C:`).
pub(crate) fn has_drive_prefix(path: &str) -> bool {
    match path.as_bytes() {
        [letter, b':', ..] => letter.is_ascii_alphabetic(),
        _ => false,
    }
}

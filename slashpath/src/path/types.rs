//! Core types for path handling.
//!
//! This module defines [`CanonicalPath`], an owned path string that is
//! guaranteed to be in canonical form.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::canonicalize::{canonicalize, get_directory};
use crate::path::filename::{get_extension, get_filename};
use crate::path::root::{split_root, Root};

/// A path string in canonical form.
///
/// The wrapped string is always the output of [`canonicalize`]: forward
/// slashes only, no `.` segments, and `..` segments collapsed as far as
/// possible. Construction never fails.
///
/// Serializes as a plain string. Deserialization canonicalizes its input,
/// so a value read from a config file or wire format upholds the same
/// invariant.
///
/// # Examples
///
/// ```
/// use slashpath::path::{CanonicalPath, Root};
///
/// let path = CanonicalPath::new("C:\\webmozart\\puli\\..\\style.css");
/// assert_eq!(path.as_str(), "C:/webmozart/style.css");
/// assert_eq!(path.root(), Root::Drive('C'));
/// assert!(path.is_absolute());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Canonicalize a path string.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::path::CanonicalPath;
    ///
    /// assert_eq!(CanonicalPath::new("../css/./style.css").as_str(), "../css/style.css");
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(canonicalize(path.as_ref()))
    }

    /// Get the canonical path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the root of the path.
    #[must_use]
    pub fn root(&self) -> Root {
        split_root(&self.0).0
    }

    /// Check if the path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root().is_absolute()
    }

    /// Get the directory part of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::path::CanonicalPath;
    ///
    /// let path = CanonicalPath::new("/webmozart/puli/style.css");
    /// assert_eq!(path.directory().as_str(), "/webmozart/puli");
    /// ```
    #[must_use]
    pub fn directory(&self) -> Self {
        Self(get_directory(&self.0))
    }

    /// Get the last component of the path.
    #[must_use]
    pub fn file_name(&self) -> String {
        get_filename(&self.0)
    }

    /// Get the extension of the last component, without its dot.
    #[must_use]
    pub fn extension(&self) -> String {
        get_extension(&self.0, false)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CanonicalPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for CanonicalPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.0
    }
}

impl FromStr for CanonicalPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

//! String-level path handling for UNIX and Windows conventions.
//!
//! Every function in this module works on path strings only. Nothing here
//! touches the filesystem, and every function is pure, so all of them can be
//! called concurrently from any thread.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! A path's root is `/` (written `/` or `\`), a drive root such as `C:/`
//! (written `C:`, `C:/` or `C:\`), or empty for relative paths. All root
//! detection goes through [`split_root`].
//!
//! ## Canonicalization
//!
//! [`canonicalize`] converts backslashes to forward slashes, removes `.`
//! segments and collapses `..` segments. Most other functions canonicalize
//! their input first and return canonical paths.
//!
//! # Examples
//!
//! ```
//! use slashpath::path;
//!
//! assert_eq!(path::canonicalize("css/../style.css"), "style.css");
//! assert_eq!(path::get_directory("/webmozart/puli/style.css"), "/webmozart/puli");
//!
//! let absolute = path::make_absolute("../style.css", "/webmozart/puli/css").unwrap();
//! assert_eq!(absolute, "/webmozart/puli/style.css");
//! assert_eq!(path::make_relative(&absolute, "/webmozart/puli/css").unwrap(), "../style.css");
//! ```
//!
//! # Base Paths
//!
//! ```
//! use slashpath::path::{get_longest_common_base_path, is_base_path};
//!
//! let base = get_longest_common_base_path(["/base/path/foo", "/base/path", "/base/path/bar"]);
//! assert_eq!(base.as_deref(), Some("/base/path"));
//!
//! assert!(is_base_path("/base/path", "/base/path/sub"));
//! assert!(!is_base_path("/base/path/di", "/base/path/dir"));
//! ```

pub mod canonicalize;
pub mod filename;
pub mod relationship;
pub mod resolve;
pub mod root;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the operations at module level
pub use canonicalize::{canonicalize, get_directory};
pub use filename::{
    change_extension, get_extension, get_filename, get_filename_without_extension, has_extension,
};
pub use relationship::{get_longest_common_base_path, is_base_path};
pub use resolve::{make_absolute, make_relative};
pub use root::{get_root, is_absolute, is_local, is_relative, split_root, Root};
pub use types::CanonicalPath;

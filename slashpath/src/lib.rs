#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # slashpath
//!
//! A library for manipulating path and URL strings without touching the
//! filesystem.
//!
//! Paths written with UNIX (`/`) or Windows (`\`, `C:`) conventions are
//! handled uniformly: every function that returns a path returns it in
//! canonical form, with forward slashes only and `.`/`..` segments collapsed.
//!
//! ## Core Items
//!
//! - [`path`]: canonicalization, root/directory/filename/extension helpers,
//!   absolute/relative conversion and base path computation
//! - [`url`]: relative paths between URLs on the same host
//! - [`CanonicalPath`] and [`Root`]: typed canonical paths and roots
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use slashpath::{canonicalize, make_absolute, make_relative};
//!
//! assert_eq!(canonicalize("\\webmozart\\puli\\..\\css\\style.css"), "/webmozart/css/style.css");
//!
//! let absolute = make_absolute("css/style.css", "C:\\webmozart\\puli").unwrap();
//! assert_eq!(absolute, "C:/webmozart/puli/css/style.css");
//!
//! let relative = make_relative("/webmozart/style.css", "/webmozart/puli").unwrap();
//! assert_eq!(relative, "../style.css");
//! ```

pub mod error;
pub mod path;
pub mod url;

// Re-export key items at crate root for convenience
pub use error::{Error, Result};
pub use path::{
    canonicalize, change_extension, get_directory, get_extension, get_filename,
    get_filename_without_extension, get_longest_common_base_path, get_root, has_extension,
    is_absolute, is_base_path, is_local, is_relative, make_absolute, make_relative, split_root,
    CanonicalPath, Root,
};

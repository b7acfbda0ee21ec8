//! Error types for the slashpath library.
//!
//! Every failure in this crate is an invalid-argument condition: the caller
//! passed a path or URL that cannot be combined with the other argument.
//! Errors are raised before any work is done and carry the offending values,
//! using `thiserror` for the `Display` implementations.

use thiserror::Error;

/// Result type alias for operations that may fail with a slashpath error.
///
/// # Examples
///
/// ```
/// use slashpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/webmozart/puli".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the slashpath library.
///
/// All variants describe an argument that was rejected. See
/// [`Error::argument`] for the name of the argument at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A base path that must be absolute was relative or empty.
    #[error("the base path \"{base_path}\" is not an absolute path")]
    BasePathNotAbsolute {
        /// The rejected base path.
        base_path: String,
    },

    /// Two absolute paths live under different roots.
    #[error(
        "the path \"{path}\" cannot be resolved against \"{base_path}\", \
         because their roots are different (\"{root}\" and \"{base_root}\")"
    )]
    RootMismatch {
        /// The path being converted.
        path: String,
        /// The base path it was converted against.
        base_path: String,
        /// The root of `path`.
        root: String,
        /// The root of `base_path`.
        base_root: String,
    },

    /// An absolute path cannot be made relative to a relative base path.
    #[error(
        "the absolute path \"{path}\" cannot be made relative to the relative \
         path \"{base_path}\"; provide an absolute base path instead"
    )]
    RelativeBasePath {
        /// The absolute path being converted.
        path: String,
        /// The relative base path.
        base_path: String,
    },

    /// A URL argument has no `scheme://` prefix.
    #[error("invalid {argument} \"{value}\": missing \"://\" after the scheme")]
    InvalidUrl {
        /// Name of the rejected argument (`url` or `base_url`).
        argument: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Two URLs point at different schemes or authorities.
    #[error("domain \"{domain}\" doesn't equal base domain \"{base_domain}\"")]
    DomainMismatch {
        /// `scheme://authority` of the URL.
        domain: String,
        /// `scheme://authority` of the base URL.
        base_domain: String,
    },
}

impl Error {
    /// Name of the argument that caused the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::Error;
    ///
    /// let err = Error::BasePathNotAbsolute { base_path: "css".to_string() };
    /// assert_eq!(err.argument(), "base_path");
    /// ```
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::BasePathNotAbsolute { .. } | Self::RelativeBasePath { .. } => "base_path",
            Self::RootMismatch { .. } => "path",
            Self::InvalidUrl { argument, .. } => *argument,
            Self::DomainMismatch { .. } => "url",
        }
    }

    /// Check if the error is an invalid-argument condition.
    ///
    /// This is true for every variant; the method exists so callers can
    /// match on the error kind without enumerating variants.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::BasePathNotAbsolute { .. }
                | Self::RootMismatch { .. }
                | Self::RelativeBasePath { .. }
                | Self::InvalidUrl { .. }
                | Self::DomainMismatch { .. }
        )
    }
}

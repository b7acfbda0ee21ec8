//! URL handling built on top of the path functions.
//!
//! A URL is split into its root (`scheme://authority`) and its path. Only
//! the path takes part in path arithmetic; the roots must match exactly.
//! No further URL parsing is done: query strings and fragments are treated
//! as part of the path.

use crate::error::{Error, Result};
use crate::path;

/// Split a URL into `scheme://authority` and the path that follows it.
///
/// A URL without a path gets `/` as its path.
fn split<'a>(url: &'a str, argument: &'static str) -> Result<(&'a str, &'a str)> {
    let Some(scheme_end) = url.find("://") else {
        log::debug!("Rejecting {argument} {url:?}: no scheme separator");
        return Err(Error::InvalidUrl {
            argument,
            value: url.to_string(),
        });
    };

    let authority_start = scheme_end + "://".len();

    Ok(match url[authority_start..].find('/') {
        Some(pos) => url.split_at(authority_start + pos),
        None => (url, "/"),
    })
}

/// Turn a URL into a path relative to a base URL.
///
/// Both URLs must share the same scheme and authority. The result is a
/// canonical relative path, as returned by [`path::make_relative`].
///
/// # Errors
///
/// Returns an error if:
/// - Either argument has no `scheme://` prefix (`InvalidUrl`)
/// - The scheme or authority differ (`DomainMismatch`)
///
/// # Examples
///
/// ```
/// use slashpath::url;
///
/// let relative = url::make_relative(
///     "http://example.com/webmozart/css/style.css",
///     "http://example.com/webmozart/puli",
/// ).unwrap();
/// assert_eq!(relative, "../css/style.css");
///
/// assert!(url::make_relative("http://example.com/a", "http://example2.com/b").is_err());
/// ```
pub fn make_relative(url: &str, base_url: &str) -> Result<String> {
    let (root, url_path) = split(url, "url")?;
    let (base_root, base_path) = split(base_url, "base_url")?;

    if root != base_root {
        log::debug!("Domains of {url:?} and {base_url:?} differ");
        return Err(Error::DomainMismatch {
            domain: root.to_string(),
            base_domain: base_root.to_string(),
        });
    }

    path::make_relative(url_path, base_path)
}

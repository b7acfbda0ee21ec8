//! Common test utilities for integration tests.
//!
//! Most fixtures are written with forward slashes; the helpers here derive
//! the Windows-style spellings so every case is exercised with both
//! separator conventions.

/// Rewrite every forward slash in a path as a backslash.
#[allow(dead_code)]
#[must_use]
pub fn backslashed(path: &str) -> String {
    path.replace('/', "\\")
}

/// Return the path in both separator styles.
///
/// The forward-slash spelling comes first.
#[allow(dead_code)]
#[must_use]
pub fn both_separators(path: &str) -> [String; 2] {
    [path.to_string(), backslashed(path)]
}

/// Prefix a path with a URL root when it is absolute.
///
/// Relative paths are returned unchanged.
#[allow(dead_code)]
#[must_use]
pub fn with_domain(path: &str, domain: &str) -> String {
    if path.starts_with('/') {
        format!("{domain}{path}")
    } else {
        path.to_string()
    }
}

/// Absolute path triples `(base_path, relative_path, absolute_path)` that
/// convert in both directions.
#[allow(dead_code)]
pub const ROUND_TRIPS: &[(&str, &str, &str)] = &[
    (
        "/webmozart/puli",
        "css/style.css",
        "/webmozart/puli/css/style.css",
    ),
    (
        "/webmozart/puli",
        "../css/style.css",
        "/webmozart/css/style.css",
    ),
    ("/webmozart/puli", "../../css/style.css", "/css/style.css"),
    ("/", "css/style.css", "/css/style.css"),
    ("C:", "css/style.css", "C:/css/style.css"),
    ("C:/", "css/style.css", "C:/css/style.css"),
];

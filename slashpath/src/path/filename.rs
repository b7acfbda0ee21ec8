//! Filename and extension helpers.
//!
//! These functions look only at the last component of a path. They accept
//! both separator styles and do not canonicalize their input, so the
//! directory part of the path passes through untouched.

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Return the last component of a path, ignoring trailing separators.
fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Return the extension of a filename without its dot.
fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) => &filename[pos + 1..],
        None => "",
    }
}

/// Return the filename from a file path.
///
/// # Examples
///
/// ```
/// use slashpath::path::get_filename;
///
/// assert_eq!(get_filename("/webmozart/puli/style.css"), "style.css");
/// assert_eq!(get_filename("C:\\webmozart\\puli\\"), "puli");
/// assert_eq!(get_filename(""), "");
/// ```
#[must_use]
pub fn get_filename(path: &str) -> String {
    file_name(path).to_string()
}

/// Return the filename without its extension.
///
/// With `extension` set, only that extension is cut off, and only if the
/// filename actually ends with it; the extension may be given with or
/// without its leading dot. Without `extension`, the last `.`-delimited
/// component is removed. A dotfile such as `.htaccess` keeps its name.
///
/// # Examples
///
/// ```
/// use slashpath::path::get_filename_without_extension;
///
/// assert_eq!(get_filename_without_extension("/webmozart/style.css", None), "style");
/// assert_eq!(get_filename_without_extension("/webmozart/style.css", Some(".css")), "style");
/// assert_eq!(get_filename_without_extension("/webmozart/style.css", Some("js")), "style.css");
/// ```
#[must_use]
pub fn get_filename_without_extension(path: &str, extension: Option<&str>) -> String {
    let filename = file_name(path);

    let stem = match extension {
        Some(extension) => {
            let extension = extension.trim_start_matches('.');
            match filename.strip_suffix(extension) {
                Some(stem) if !extension.is_empty() && !stem.is_empty() => {
                    stem.trim_end_matches('.')
                }
                _ => filename,
            }
        }
        None => match filename.rfind('.') {
            Some(pos) if pos > 0 => &filename[..pos],
            _ => filename,
        },
    };

    stem.to_string()
}

/// Return the extension of a file path, without the leading dot.
///
/// Returns an empty string when the filename has no dot or ends with one.
/// With `force_lower_case`, the extension is lower-cased using full Unicode
/// case mapping.
///
/// # Examples
///
/// ```
/// use slashpath::path::get_extension;
///
/// assert_eq!(get_extension("/webmozart/style.CSS", false), "CSS");
/// assert_eq!(get_extension("/webmozart/style.CSS", true), "css");
/// assert_eq!(get_extension("/webmozart/style", false), "");
/// ```
#[must_use]
pub fn get_extension(path: &str, force_lower_case: bool) -> String {
    let extension = extension_of(file_name(path));

    if force_lower_case {
        extension.to_lowercase()
    } else {
        extension.to_string()
    }
}

/// Check whether a path has an extension.
///
/// With `extensions` unset, any non-empty extension counts. Otherwise the
/// actual extension must equal one of the candidates exactly; candidates may
/// carry a leading dot. `ignore_case` lower-cases both sides before
/// comparing.
///
/// # Examples
///
/// ```
/// use slashpath::path::has_extension;
///
/// assert!(has_extension("/webmozart/style.css", None, false));
/// assert!(has_extension("/webmozart/style.css", Some(&[".css"]), false));
/// assert!(has_extension("/webmozart/style.CSS", Some(&["js", "css"]), true));
/// assert!(!has_extension("/webmozart/style.CSS", Some(&["css"]), false));
/// ```
#[must_use]
pub fn has_extension(path: &str, extensions: Option<&[&str]>, ignore_case: bool) -> bool {
    if path.is_empty() {
        return false;
    }

    let actual = get_extension(path, ignore_case);

    let Some(extensions) = extensions else {
        return !actual.is_empty();
    };

    extensions.iter().any(|candidate| {
        let candidate = candidate.trim_start_matches('.');
        if ignore_case {
            candidate.to_lowercase() == actual
        } else {
            candidate == actual
        }
    })
}

/// Change the extension of a path.
///
/// `extension` may be given with or without its leading dot. A path that
/// ends in a separator names a directory and is returned unchanged. A path
/// without an extension gets one appended.
///
/// # Examples
///
/// ```
/// use slashpath::path::change_extension;
///
/// assert_eq!(change_extension("/webmozart/style.css", "js"), "/webmozart/style.js");
/// assert_eq!(change_extension("/webmozart/style", ".js"), "/webmozart/style.js");
/// assert_eq!(change_extension("/webmozart/style.", "js"), "/webmozart/style.js");
/// assert_eq!(change_extension("/webmozart/", "js"), "/webmozart/");
/// ```
#[must_use]
pub fn change_extension(path: &str, extension: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let extension = extension.trim_start_matches('.');

    if path.ends_with(is_separator) {
        return path.to_string();
    }

    let actual = extension_of(file_name(path));

    if actual.is_empty() {
        let dot = if path.ends_with('.') { "" } else { "." };
        return format!("{path}{dot}{extension}");
    }

    format!("{}{extension}", &path[..path.len() - actual.len()])
}

//! Property-based tests for path handling.
//!
//! Note: The canonicalize module already has lightweight property tests.
//! This module runs the slower cross-operation properties.

use super::canonicalize::{canonicalize, get_directory};
use super::relationship::{get_longest_common_base_path, is_base_path};
use super::resolve::{make_absolute, make_relative};
use super::root::{get_root, is_absolute, split_root};
use proptest::prelude::*;

// Strategy for generating path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn root_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("C:/"), Just("C:\\"), Just("D:/")]
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    (root_strategy(), prop::collection::vec(segment_strategy(), 0..8))
        .prop_map(|(root, parts)| format!("{root}{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => segment_strategy(),
            1 => Just(".".to_string()),
        ],
        1..8,
    )
    .prop_map(|parts| parts.join("\\"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Relativizing an absolutized path gives back the canonical relative path
    #[test]
    fn make_relative_inverts_make_absolute(
        base in absolute_path_strategy(),
        path in relative_path_strategy(),
    ) {
        let absolute = make_absolute(&path, &base).unwrap();
        prop_assert_eq!(make_relative(&absolute, &base).unwrap(), canonicalize(&path));
    }

    // make_absolute always yields an absolute path under the base's root
    #[test]
    fn make_absolute_keeps_base_root(
        base in absolute_path_strategy(),
        path in relative_path_strategy(),
    ) {
        let absolute = make_absolute(&path, &base).unwrap();
        prop_assert!(is_absolute(&absolute));
        prop_assert_eq!(get_root(&absolute), get_root(&base));
    }

    // Relative paths are rejected as base paths
    #[test]
    fn make_absolute_rejects_relative_base(
        base in relative_path_strategy(),
        path in relative_path_strategy(),
    ) {
        prop_assert!(make_absolute(&path, &base).is_err());
    }

    // The directory of a path is always one of its base paths
    #[test]
    fn directory_is_base_path(path in absolute_path_strategy()) {
        prop_assert!(is_base_path(&get_directory(&path), &path));
    }

    // The directory keeps the root of the path
    #[test]
    fn directory_keeps_root(path in absolute_path_strategy()) {
        prop_assert_eq!(split_root(&get_directory(&path)).0, split_root(&path).0);
    }

    // The common base path is a base path of every input
    #[test]
    fn common_base_path_contains_all(
        root in root_strategy(),
        tails in prop::collection::vec(prop::collection::vec(segment_strategy(), 0..5), 1..5),
    ) {
        let paths: Vec<String> = tails
            .iter()
            .map(|parts| format!("{root}{}", parts.join("/")))
            .collect();

        let base = get_longest_common_base_path(&paths).unwrap();
        for path in &paths {
            prop_assert!(is_base_path(&base, path), "{} is not a base of {}", base, path);
        }
    }

    // A path is a base path of itself
    #[test]
    fn is_base_path_reflexive(path in absolute_path_strategy()) {
        prop_assert!(is_base_path(&path, &path));
    }

    // Base path containment is transitive
    #[test]
    fn is_base_path_transitive(
        base in absolute_path_strategy(),
        a in segment_strategy(),
        b in segment_strategy(),
    ) {
        let middle = format!("{base}/{a}");
        let leaf = format!("{middle}/{b}");
        prop_assert!(is_base_path(&base, &middle));
        prop_assert!(is_base_path(&middle, &leaf));
        prop_assert!(is_base_path(&base, &leaf));
    }
}

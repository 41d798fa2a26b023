//! Property-based tests for extraction and transforms
//!
//! Covers:
//! 1. Single-line assignments keep source order
//! 2. Continued assignments are reassembled
//! 3. Undesired continuation blocks leave no trace
//! 4. Parsing is deterministic
//! 5. Extension split covers every entry exactly once

use mk2zig::extract::{extract, DesiredSet};
use mk2zig::line_source::LineSource;
use mk2zig::transform::{regroup_by_directory, split_by_extension};
use mk2zig::{FileLists, ParseMode};
use proptest::prelude::*;

fn parse(text: &str, desired: &[&str]) -> FileLists {
    let desired: DesiredSet = desired.iter().copied().collect();
    extract(LineSource::from_str(text), &desired, ParseMode::Lenient).unwrap()
}

fn token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_./-]{0,12}"
}

fn continued_block(key: &str, values: &[String]) -> String {
    let mut text = format!("{} = \\\n", key);
    for (i, value) in values.iter().enumerate() {
        if i + 1 < values.len() {
            text.push_str(&format!("    {} \\\n", value));
        } else {
            text.push_str(&format!("    {}\n", value));
        }
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_single_line_order(values in prop::collection::vec(token(), 1..20)) {
        let text: String = values
            .iter()
            .map(|v| format!("SRC += {}\n", v))
            .collect();

        let lists = parse(&text, &["SRC"]);

        prop_assert_eq!(lists.get("SRC").unwrap(), &values[..]);
    }

    #[test]
    fn prop_continuation_reassembly(values in prop::collection::vec(token(), 1..20)) {
        let text = continued_block("SRC", &values);

        let lists = parse(&text, &["SRC"]);

        prop_assert_eq!(lists.get("SRC").unwrap(), &values[..]);
    }

    #[test]
    fn prop_undesired_block_isolated(
        noise in prop::collection::vec(token(), 1..10),
        values in prop::collection::vec(token(), 1..10),
    ) {
        let text = format!(
            "{}{}",
            continued_block("OTHER", &noise),
            continued_block("SRC", &values)
        );

        let lists = parse(&text, &["SRC"]);

        prop_assert_eq!(lists.len(), 1);
        prop_assert_eq!(lists.get("SRC").unwrap(), &values[..]);
    }

    #[test]
    fn prop_parse_is_deterministic(
        lines in prop::collection::vec("[A-Z =+\\\\a-z.]{0,20}", 0..30),
    ) {
        let text = lines.join("\n");

        let first = parse(&text, &["A", "B", "AB"]);
        let second = parse(&text, &["A", "B", "AB"]);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extension_split_complete(
        entries in prop::collection::vec("[a-z]{1,6}\\.(c|cc|cpp|h|S)", 0..30),
    ) {
        let derived = split_by_extension(entries.clone(), "lib");

        let c = derived.get("lib_c").unwrap();
        let cpp = derived.get("lib_cpp").unwrap();

        prop_assert!(c.iter().all(|e| e.ends_with(".c")));
        prop_assert!(cpp.iter().all(|e| !e.ends_with(".c")));
        prop_assert_eq!(c.len() + cpp.len(), entries.len());

        let expected_c: Vec<String> = entries.iter().filter(|e| e.ends_with(".c")).cloned().collect();
        let expected_cpp: Vec<String> = entries.iter().filter(|e| !e.ends_with(".c")).cloned().collect();
        prop_assert_eq!(c, &expected_c[..]);
        prop_assert_eq!(cpp, &expected_cpp[..]);
    }

    #[test]
    fn prop_regroup_preserves_entry_count(
        entries in prop::collection::vec("(src|third_party)/(core|zlib-ng|cares)/[a-z]{1,8}\\.c", 0..30),
    ) {
        let derived = regroup_by_directory(entries.clone(), "lib").unwrap();

        prop_assert_eq!(derived.entry_count(), entries.len());
        prop_assert!(derived.names().all(|name| !name.contains('-')));
    }
}

#[test]
fn test_regroup_partition_example() {
    let entries = vec![
        "src/core/foo.c".to_string(),
        "src/core/bar.cc".to_string(),
        "src/util/baz.c".to_string(),
    ];

    let derived = regroup_by_directory(entries, "lib").unwrap();

    assert_eq!(
        derived.get("lib_src_core").unwrap(),
        &["foo.c".to_string(), "bar.cc".to_string()][..]
    );
    assert_eq!(derived.get("lib_src_util").unwrap(), &["baz.c".to_string()][..]);
}

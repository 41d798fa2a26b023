//! Derived list transforms
//!
//! - Regroup: `src/core/foo.c` with prefix `lib` goes to `lib_src_core`
//!   as `foo.c`
//! - Extension split: `.c` entries go to `<prefix>_c`, everything else to
//!   `<prefix>_cpp`

use crate::error::{ExtractError, Result};
use crate::extract::take_list;
use crate::file_lists::FileLists;
use tracing::debug;

/// A transform applied to one extracted list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformRule {
    /// Regroup by the first two path segments
    Regroup { list: String, prefix: String },
    /// Split into C and C++ lists by the `.c` suffix
    SplitExtension { list: String, prefix: String },
}

impl TransformRule {
    /// Name of the list this rule consumes
    pub fn list(&self) -> &str {
        match self {
            TransformRule::Regroup { list, .. } | TransformRule::SplitExtension { list, .. } => {
                list
            }
        }
    }

    /// Run the transform on the given entries
    pub fn apply(&self, entries: Vec<String>) -> Result<FileLists> {
        match self {
            TransformRule::Regroup { prefix, .. } => regroup_by_directory(entries, prefix),
            TransformRule::SplitExtension { prefix, .. } => {
                Ok(split_by_extension(entries, prefix))
            }
        }
    }
}

/// Group `A/B/F` entries under `<prefix>_<A>_<B>`, keeping only `F`
///
/// Hyphens in `B` become underscores. Entries with fewer than two `/` are
/// rejected.
pub fn regroup_by_directory(entries: Vec<String>, prefix: &str) -> Result<FileLists> {
    let mut derived = FileLists::new();
    for entry in entries {
        let mut parts = entry.splitn(3, '/');
        let (Some(top), Some(sub), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ExtractError::MalformedPath { entry });
        };
        let name = format!("{}_{}_{}", prefix, top, sub.replace('-', "_"));
        derived.append(&name, rest);
    }
    Ok(derived)
}

/// Split entries into `<prefix>_c` and `<prefix>_cpp`
///
/// Both lists are always present. Headers and unknown extensions land in
/// the `_cpp` list.
pub fn split_by_extension(entries: Vec<String>, prefix: &str) -> FileLists {
    let (c, cpp): (Vec<String>, Vec<String>) =
        entries.into_iter().partition(|entry| entry.ends_with(".c"));

    let mut derived = FileLists::new();
    derived.insert(format!("{}_c", prefix), c);
    derived.insert(format!("{}_cpp", prefix), cpp);
    derived
}

/// Apply rules in order, replacing each source list by its derived lists
pub fn apply_rules(mut lists: FileLists, rules: &[TransformRule]) -> Result<FileLists> {
    for rule in rules {
        let entries = take_list(&mut lists, rule.list())?;
        let derived = rule.apply(entries)?;
        debug!(
            list = rule.list(),
            derived = derived.len(),
            "applied transform"
        );
        lists.merge(derived);
    }
    Ok(lists)
}

//! List extraction: the caller-chosen set of variables and helpers to
//! pull lists out of a parsed mapping

use crate::error::{ExtractError, Result};
use crate::file_lists::FileLists;
use crate::parser::{AssignmentParser, ParseMode};
use std::collections::HashSet;
use std::io;

/// Variable names of interest for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredSet {
    names: HashSet<String>,
}

impl DesiredSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order, for logging and diagnostics
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for DesiredSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for DesiredSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// Parse a line stream and keep only the desired variables
pub fn extract<I>(lines: I, desired: &DesiredSet, mode: ParseMode) -> Result<FileLists>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    AssignmentParser::new(desired, mode).parse(lines)
}

/// Drop every list whose name is not desired
pub fn retain_desired(mut lists: FileLists, desired: &DesiredSet) -> FileLists {
    lists.retain(|name| desired.contains(name));
    lists
}

/// Pop a list that must be present
pub fn take_list(lists: &mut FileLists, name: &str) -> Result<Vec<String>> {
    lists.remove(name).ok_or_else(|| ExtractError::MissingList {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_source::LineSource;

    #[test]
    fn test_extract_from_line_source() {
        let source = LineSource::from_str("A = 1\nB = 2\nC = 3\n");
        let desired: DesiredSet = ["A", "C"].into_iter().collect();

        let lists = extract(source, &desired, ParseMode::Lenient).unwrap();

        assert_eq!(lists.names().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn test_extract_with_empty_desired_set() {
        let source = LineSource::from_str("A = 1\n");
        let lists = extract(source, &DesiredSet::default(), ParseMode::Lenient).unwrap();
        assert!(lists.is_empty());
    }

    #[test]
    fn test_retain_desired() {
        let mut lists = FileLists::new();
        lists.append("A", "1");
        lists.append("B", "2");
        let desired: DesiredSet = ["B"].into_iter().collect();

        let lists = retain_desired(lists, &desired);

        assert_eq!(lists.names().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_take_list_pops_once() {
        let mut lists = FileLists::new();
        lists.append("A", "1");

        assert_eq!(take_list(&mut lists, "A").unwrap(), vec!["1".to_string()]);
        assert!(matches!(
            take_list(&mut lists, "A"),
            Err(ExtractError::MissingList { name }) if name == "A"
        ));
    }

    #[test]
    fn test_desired_set_sorted() {
        let mut desired: DesiredSet = ["LIBZ_SRC", "LIBCARES_SRC"].into_iter().collect();
        desired.extend(["LIBGRPC_SRC"]);
        assert!(!desired.insert("LIBZ_SRC"));
        assert_eq!(
            desired.sorted(),
            vec!["LIBCARES_SRC", "LIBGRPC_SRC", "LIBZ_SRC"]
        );
        assert_eq!(desired.len(), 3);
    }
}

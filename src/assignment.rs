//! Assignment operator recognition for Makefile-style lines
//!
//! Supports:
//! - Append assignment: `NAME += value`
//! - Plain assignment: `NAME = value`
//!
//! Rules are tried top-down. `+=` comes first because its marker contains
//! the `=` character.

/// Trailing marker that continues a value on the next line
pub const CONTINUATION_MARKER: char = '\\';

/// Kind of assignment operator found on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `+=`
    Append,
    /// `=`
    Assign,
}

impl AssignOp {
    /// Textual marker of this operator
    pub fn marker(self) -> &'static str {
        match self {
            AssignOp::Append => "+=",
            AssignOp::Assign => "=",
        }
    }
}

/// Operator rules in precedence order
pub const ASSIGNMENT_RULES: [AssignOp; 2] = [AssignOp::Append, AssignOp::Assign];

/// A single `key <op> value` line, both sides trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub op: AssignOp,
}

/// Split a line into key and value at the first matching operator
///
/// Returns `None` when the line has no assignment operator at all.
pub fn split_assignment(line: &str) -> Option<Assignment<'_>> {
    ASSIGNMENT_RULES.iter().find_map(|&op| {
        line.split_once(op.marker()).map(|(key, value)| Assignment {
            key: key.trim(),
            value: value.trim(),
            op,
        })
    })
}

/// Strip a trailing continuation marker from an already trimmed value
///
/// Returns the remaining value (trimmed again) and whether the marker was
/// present.
pub fn strip_continuation(value: &str) -> (&str, bool) {
    match value.strip_suffix(CONTINUATION_MARKER) {
        Some(rest) => (rest.trim(), true),
        None => (value, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_assignment() {
        let a = split_assignment("FOO = a.c b.c").unwrap();
        assert_eq!(a.key, "FOO");
        assert_eq!(a.value, "a.c b.c");
        assert_eq!(a.op, AssignOp::Assign);
    }

    #[test]
    fn test_append_checked_before_plain() {
        let a = split_assignment("FOO += x.c").unwrap();
        assert_eq!(a.key, "FOO");
        assert_eq!(a.value, "x.c");
        assert_eq!(a.op, AssignOp::Append);
    }

    #[test]
    fn test_splits_at_first_occurrence() {
        let a = split_assignment("CFLAGS = -DVALUE=1").unwrap();
        assert_eq!(a.key, "CFLAGS");
        assert_eq!(a.value, "-DVALUE=1");
    }

    #[test]
    fn test_append_marker_anywhere_wins() {
        // `+=` anywhere on the line takes precedence over an earlier `=`
        let a = split_assignment("A = b += c").unwrap();
        assert_eq!(a.key, "A = b");
        assert_eq!(a.value, "c");
        assert_eq!(a.op, AssignOp::Append);
    }

    #[test]
    fn test_no_operator() {
        assert!(split_assignment("all: libgrpc.a").is_none());
        assert!(split_assignment("").is_none());
    }

    #[test]
    fn test_empty_value() {
        let a = split_assignment("EMPTY =").unwrap();
        assert_eq!(a.key, "EMPTY");
        assert_eq!(a.value, "");
    }

    #[test]
    fn test_strip_continuation() {
        assert_eq!(strip_continuation("a.c \\"), ("a.c", true));
        assert_eq!(strip_continuation("\\"), ("", true));
        assert_eq!(strip_continuation("a.c"), ("a.c", false));
    }
}

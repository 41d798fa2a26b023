//! Assignment parser with line continuation
//!
//! Rebuilds multi-line `NAME = a \` / `  b` assignments from a line stream.
//! Only variables in the desired set are kept; everything else, including
//! the continuation lines of undesired variables, is dropped.
//!
//! State machine:
//! - `NotContinuing` → `Continuing(key)` when a desired value ends in `\`
//! - `Continuing(key)` stays while lines end in `\`
//! - `Continuing(key)` → `NotContinuing` on the first line without `\`
//!
//! Lines following an undesired value that ends in `\` are tracked as
//! `Skipping`. They are still examined as fresh statements, but one without
//! an operator counts as part of the skipped value rather than as noise.
//!
//! A continuation still open at end of input is discarded.

use crate::assignment::{split_assignment, strip_continuation};
use crate::error::{ExtractError, Result};
use crate::extract::DesiredSet;
use crate::file_lists::FileLists;
use std::io;
use tracing::{debug, trace};

/// How lines that are neither assignments nor continuations are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Ignore them (comments, rules, recipes...)
    #[default]
    Lenient,
    /// Fail on any such line that is not blank or a `#` comment
    Strict,
}

/// Transient continuation state
#[derive(Debug, Clone, PartialEq, Eq)]
enum Continuation {
    NotContinuing,
    Continuing(String),
    Skipping,
}

/// Line-by-line parser accumulating desired variable lists
#[derive(Debug)]
pub struct AssignmentParser<'a> {
    desired: &'a DesiredSet,
    mode: ParseMode,
    state: Continuation,
    lists: FileLists,
    line_number: usize,
}

impl<'a> AssignmentParser<'a> {
    pub fn new(desired: &'a DesiredSet, mode: ParseMode) -> Self {
        Self {
            desired,
            mode,
            state: Continuation::NotContinuing,
            lists: FileLists::new(),
            line_number: 0,
        }
    }

    /// Feed one raw line
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;

        match std::mem::replace(&mut self.state, Continuation::NotContinuing) {
            Continuation::Continuing(key) => self.continue_value(key, line),
            Continuation::NotContinuing => self.start_assignment(line, false)?,
            Continuation::Skipping => self.start_assignment(line, true)?,
        }
        Ok(())
    }

    /// Consume a whole line stream and return the collected lists
    pub fn parse<I>(mut self, lines: I) -> Result<FileLists>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for line in lines {
            self.feed(&line?)?;
        }
        Ok(self.finish())
    }

    /// End of input; any open continuation is dropped
    pub fn finish(self) -> FileLists {
        if let Continuation::Continuing(key) = &self.state {
            debug!(key = %key, "input ended inside a continued assignment");
        }
        self.lists
    }

    fn start_assignment(&mut self, line: &str, after_skipped: bool) -> Result<()> {
        let Some(assignment) = split_assignment(line) else {
            if after_skipped {
                self.skip_value(line.trim());
                return Ok(());
            }
            return self.noise(line);
        };

        if !self.desired.contains(assignment.key) {
            trace!(key = assignment.key, line = self.line_number, "skipping undesired variable");
            self.skip_value(assignment.value);
            return Ok(());
        }

        let (value, continues) = strip_continuation(assignment.value);
        if continues {
            debug!(key = assignment.key, line = self.line_number, "entering continuation");
            self.state = Continuation::Continuing(assignment.key.to_string());
        }
        if !value.is_empty() {
            self.lists.append(assignment.key, value);
        }
        Ok(())
    }

    fn continue_value(&mut self, key: String, line: &str) {
        let (value, continues) = strip_continuation(line.trim());
        if !value.is_empty() {
            self.lists.append(&key, value);
        }
        if continues {
            self.state = Continuation::Continuing(key);
        } else {
            debug!(key = %key, line = self.line_number, "continuation ended");
        }
    }

    /// Keep skipping while an undesired value is continued
    fn skip_value(&mut self, value: &str) {
        if strip_continuation(value).1 {
            self.state = Continuation::Skipping;
        }
    }

    fn noise(&self, line: &str) -> Result<()> {
        let trimmed = line.trim();
        if self.mode == ParseMode::Strict && !trimmed.is_empty() && !trimmed.starts_with('#') {
            return Err(ExtractError::UnrecognizedLine {
                line_number: self.line_number,
                line: line.to_string(),
            });
        }
        trace!(line = self.line_number, "ignoring line without assignment");
        Ok(())
    }
}

//! End-to-end run: extract → transform → emit
//!
//! The mapping is owned by each stage in turn and handed on by value.

use crate::config::RunConfig;
use crate::emit::{Emitter, OutputFormat};
use crate::error::Result;
use crate::extract::{extract, DesiredSet};
use crate::file_lists::FileLists;
use crate::parser::ParseMode;
use crate::transform::{apply_rules, TransformRule};
use std::io::{self, Write};
use tracing::info;

/// Counts reported after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lists: usize,
    pub entries: usize,
}

/// Configured extraction pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    desired: DesiredSet,
    mode: ParseMode,
    rules: Vec<TransformRule>,
    format: OutputFormat,
    trace_names: bool,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self {
            desired: config.desired_set(),
            mode: config.parse_mode(),
            rules: config.rules(),
            format: config.format,
            trace_names: config.trace_names,
        }
    }

    /// Extract and transform, without emitting
    pub fn collect<I>(&self, lines: I) -> Result<FileLists>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let lists = extract(lines, &self.desired, self.mode)?;
        apply_rules(lists, &self.rules)
    }

    /// Run the whole pipeline, writing output to `out`
    ///
    /// `diagnostics` receives list names when name tracing is enabled.
    pub fn run<I, W>(
        &self,
        lines: I,
        out: &mut W,
        diagnostics: &mut dyn Write,
    ) -> Result<RunSummary>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write,
    {
        let lists = self.collect(lines)?;

        let mut emitter = Emitter::new(self.format);
        if self.trace_names {
            emitter = emitter.with_diagnostics(diagnostics);
        }
        emitter.emit(&lists, out)?;

        let summary = RunSummary {
            lists: lists.len(),
            entries: lists.entry_count(),
        };
        info!(lists = summary.lists, entries = summary.entries, "emitted lists");
        Ok(summary)
    }
}

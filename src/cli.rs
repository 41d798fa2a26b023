//! CLI argument parsing for mk2zig

use crate::config::{ListRule, Preset, RunConfig};
use crate::emit::OutputFormat;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mk2zig")]
#[command(version)]
#[command(
    about = "Extract Makefile variable lists and emit them as Zig array literals",
    long_about = None
)]
pub struct Cli {
    /// Makefile to read (stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Variable to extract (repeatable)
    #[arg(short = 'v', long = "var", value_name = "NAME")]
    pub variables: Vec<String>,

    /// Built-in variable set (grpc is used when no variable is given)
    #[arg(long = "preset", value_enum)]
    pub preset: Option<Preset>,

    /// Regroup LIST by its first two path segments into PREFIX_<dir>_<subdir>
    #[arg(long = "regroup", value_name = "LIST=PREFIX", value_parser = parse_list_rule)]
    pub regroup: Vec<ListRule>,

    /// Split LIST into PREFIX_c and PREFIX_cpp by the .c extension
    #[arg(long = "split-ext", value_name = "LIST=PREFIX", value_parser = parse_list_rule)]
    pub split_extension: Vec<ListRule>,

    /// Run configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Write each list name to stderr before its block
    #[arg(long = "trace-names")]
    pub trace_names: bool,

    /// Fail on lines that are not assignments, comments or blank
    #[arg(long = "strict")]
    pub strict: bool,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Input path, `None` meaning stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Build the run configuration: config file first, CLI values on top
    pub fn to_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        config.variables.extend(self.variables.iter().cloned());
        if self.preset.is_some() {
            config.preset = self.preset;
        }
        config.regroup.extend(self.regroup.iter().cloned());
        config.split_extension.extend(self.split_extension.iter().cloned());
        if let Some(format) = self.format {
            config.format = format;
        }
        config.trace_names |= self.trace_names;
        config.strict |= self.strict;

        config.validate()?;
        Ok(config)
    }
}

/// Parse a `LIST=PREFIX` argument
fn parse_list_rule(arg: &str) -> std::result::Result<ListRule, String> {
    match arg.split_once('=') {
        Some((list, prefix)) if !list.trim().is_empty() && !prefix.trim().is_empty() => {
            Ok(ListRule {
                list: list.trim().to_string(),
                prefix: prefix.trim().to_string(),
            })
        }
        _ => Err(format!("expected LIST=PREFIX, got '{}'", arg)),
    }
}

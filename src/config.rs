//! Run configuration (mk2zig.toml)
//!
//! # Example mk2zig.toml
//!
//! ```toml
//! variables = ["LIBGRPC_SRC", "LIBZ_SRC"]
//! strict = false
//! trace_names = true
//! format = "zig"
//!
//! [[regroup]]
//! list = "LIBGRPC_SRC"
//! prefix = "grpc"
//!
//! [[split_extension]]
//! list = "LIBZ_SRC"
//! prefix = "zlib"
//! ```
//!
//! Regroup rules run before extension-split rules, each group in file
//! order.

use crate::emit::OutputFormat;
use crate::extract::DesiredSet;
use crate::parser::ParseMode;
use crate::transform::TransformRule;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Built-in sets of variables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// gRPC core Makefile source and header lists
    #[default]
    Grpc,
}

impl Preset {
    pub fn variables(self) -> &'static [&'static str] {
        match self {
            Preset::Grpc => &[
                "LIBGRPC_SRC",
                "PUBLIC_HEADERS_C",
                "LIBBORINGSSL_SRC",
                "LIBCARES_SRC",
                "LIBZ_SRC",
            ],
        }
    }
}

/// `list` + `prefix` pair used by both transform kinds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListRule {
    pub list: String,
    pub prefix: String,
}

/// Complete settings for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Variables to extract
    pub variables: Vec<String>,

    /// Built-in variable set, added to `variables`
    pub preset: Option<Preset>,

    /// Fail on lines that are not assignments, comments or blank
    pub strict: bool,

    /// Write each list name to stderr before its block
    pub trace_names: bool,

    pub format: OutputFormat,

    /// Lists to regroup by their first two path segments
    pub regroup: Vec<ListRule>,

    /// Lists to split into `_c` / `_cpp`
    pub split_extension: Vec<ListRule>,
}

impl RunConfig {
    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Variables to extract
    ///
    /// Falls back to the default preset when nothing was selected.
    pub fn desired_set(&self) -> DesiredSet {
        let mut desired: DesiredSet = self.variables.iter().cloned().collect();
        match self.preset {
            Some(preset) => desired.extend(preset.variables().iter().copied()),
            None if desired.is_empty() => {
                desired.extend(Preset::default().variables().iter().copied())
            }
            None => {}
        }
        desired
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }

    /// Transform rules in execution order
    pub fn rules(&self) -> Vec<TransformRule> {
        let regroup = self.regroup.iter().map(|r| TransformRule::Regroup {
            list: r.list.clone(),
            prefix: r.prefix.clone(),
        });
        let split = self.split_extension.iter().map(|r| TransformRule::SplitExtension {
            list: r.list.clone(),
            prefix: r.prefix.clone(),
        });
        regroup.chain(split).collect()
    }

    /// Reject rules that can never apply and unsupported option combinations
    pub fn validate(&self) -> Result<()> {
        if self.trace_names && self.format != OutputFormat::Zig {
            bail!("Name tracing is only available with the zig output format");
        }
        let desired = self.desired_set();
        for rule in self.regroup.iter().chain(&self.split_extension) {
            if rule.prefix.is_empty() {
                bail!("Empty prefix for list {}", rule.list);
            }
            if !desired.contains(&rule.list) {
                bail!(
                    "Transform targets {} which is not an extracted variable",
                    rule.list
                );
            }
        }
        Ok(())
    }
}

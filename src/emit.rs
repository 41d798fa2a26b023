//! Output rendering for extracted lists
//!
//! Zig (default):
//!
//! ```text
//! pub const libz_src = .{
//!     "adler32.c",
//!     "crc32.c",
//! };
//! ```
//!
//! Entries are written verbatim; a `"` inside an entry is not escaped.

use crate::file_lists::FileLists;
use clap::ValueEnum;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::io::{self, Write};

/// Output format for the emitted lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Zig array literals (default)
    #[default]
    Zig,
    /// JSON object of name -> entries
    Json,
}

/// Writes lists to an output sink, optionally naming each block on a
/// diagnostic sink first
pub struct Emitter<'a> {
    format: OutputFormat,
    diagnostics: Option<&'a mut dyn Write>,
}

impl<'a> Emitter<'a> {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            diagnostics: None,
        }
    }

    /// Write each block's name to `sink` before the block itself
    pub fn with_diagnostics(mut self, sink: &'a mut dyn Write) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn emit<W: Write>(&mut self, lists: &FileLists, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Zig => self.emit_zig(lists, out),
            OutputFormat::Json => emit_json(lists, out),
        }
    }

    fn emit_zig<W: Write>(&mut self, lists: &FileLists, out: &mut W) -> io::Result<()> {
        for (name, entries) in lists.iter() {
            let name = name.to_lowercase();
            if let Some(diag) = self.diagnostics.as_mut() {
                writeln!(diag, "{}", name)?;
            }
            write_zig_block(&name, entries, out)?;
        }
        out.flush()
    }
}

/// Write one `pub const` declaration
pub fn write_zig_block<W: Write>(name: &str, entries: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "pub const {} = .{{", name)?;
    for entry in entries {
        writeln!(out, "    \"{}\",", entry)?;
    }
    writeln!(out, "}};")
}

/// Render lists as Zig source text
pub fn to_zig(lists: &FileLists) -> String {
    let mut buf = Vec::new();
    Emitter::new(OutputFormat::Zig)
        .emit(lists, &mut buf)
        .expect("writing to Vec");
    String::from_utf8_lossy(&buf).into_owned()
}

fn emit_json<W: Write>(lists: &FileLists, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &LowercaseLists(lists))?;
    writeln!(out)?;
    out.flush()
}

/// Serializes a mapping with lower-cased names, preserving list order
struct LowercaseLists<'a>(&'a FileLists);

impl Serialize for LowercaseLists<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, entries) in self.0.iter() {
            map.serialize_entry(&name.to_lowercase(), entries)?;
        }
        map.end()
    }
}

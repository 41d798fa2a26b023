//! mk2zig - Makefile variable lists to Zig array literals
//!
//! This library reads Makefile-style assignments (`=`, `+=`, `\` line
//! continuation), extracts a chosen set of variable lists, optionally
//! regroups or splits them, and renders each list as a `pub const` Zig
//! array for use from `build.zig`.

pub mod assignment;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod file_lists;
pub mod line_source;
pub mod parser;
pub mod pipeline;
pub mod transform;

pub use error::{ExtractError, Result};
pub use extract::DesiredSet;
pub use file_lists::FileLists;
pub use parser::ParseMode;
pub use transform::TransformRule;

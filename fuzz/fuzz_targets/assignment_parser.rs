#![no_main]

use libfuzzer_sys::fuzz_target;
use mk2zig::extract::{extract, DesiredSet};
use mk2zig::line_source::LineSource;
use mk2zig::ParseMode;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must surface as an error, never a panic
    let desired: DesiredSet = ["SRC", "LIBZ_SRC"].into_iter().collect();
    let _ = extract(LineSource::new(data), &desired, ParseMode::Lenient);
    let _ = extract(LineSource::new(data), &desired, ParseMode::Strict);
});

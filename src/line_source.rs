//! Line-oriented input for the assignment parser
//!
//! Wraps any buffered reader (stdin, a Makefile on disk, an in-memory
//! string) and yields its lines without the trailing newline. Exhaustion
//! simply ends the iteration.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

/// Ordered sequence of raw lines read from a text stream
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap an existing buffered reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineSource<BufReader<io::Stdin>> {
    /// Read lines from standard input
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl LineSource<BufReader<File>> {
    /// Read lines from a file on disk
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl LineSource<Cursor<String>> {
    /// Read lines from an in-memory string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::new(Cursor::new(text.to_string()))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

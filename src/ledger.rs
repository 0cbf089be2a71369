//! Append-only ledger pairing markup bodies with rendered filenames.
//!
//! Two companion text files are maintained: the formulas file accumulates
//! one serialized body per line, and the index file accumulates
//! `<line_number> <filename>` pairs pointing back into it. Line numbering
//! is 1-based and recovered from the existing formulas file on open, so the
//! index keeps tracking the exact line each body landed on across runs.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CircuitgenError, Result};

/// Writer over the two companion ledger files.
#[derive(Debug)]
pub struct Ledger {
    formulas: File,
    index: File,
    formulas_path: PathBuf,
    index_path: PathBuf,
    next_line: usize,
}

impl Ledger {
    /// Open (or create) both ledger files for appending.
    pub fn open(formulas_path: impl AsRef<Path>, index_path: impl AsRef<Path>) -> Result<Self> {
        let formulas_path = formulas_path.as_ref().to_path_buf();
        let index_path = index_path.as_ref().to_path_buf();

        let next_line = match std::fs::read_to_string(&formulas_path) {
            Ok(content) => content.lines().count() + 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 1,
            Err(e) => return Err(ledger_io(&formulas_path, e)),
        };

        let formulas = append_file(&formulas_path)?;
        let index = append_file(&index_path)?;

        Ok(Self {
            formulas,
            index,
            formulas_path,
            index_path,
            next_line,
        })
    }

    /// Append one body line and its filename, returning the 1-based line
    /// number the body was written at.
    pub fn append(&mut self, body: &str, filename: &str) -> Result<usize> {
        debug_assert!(!body.contains('\n'), "ledger bodies are single lines");

        writeln!(self.formulas, "{body}").map_err(|e| ledger_io(&self.formulas_path, e))?;
        writeln!(self.index, "{} {}", self.next_line, filename)
            .map_err(|e| ledger_io(&self.index_path, e))?;

        let line = self.next_line;
        self.next_line += 1;
        Ok(line)
    }

    /// The line number the next append will use.
    pub fn next_line(&self) -> usize {
        self.next_line
    }
}

fn append_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ledger_io(path, e))
}

fn ledger_io(path: &Path, source: std::io::Error) -> CircuitgenError {
    CircuitgenError::LedgerIo {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_numbers_lines_from_one() {
        let dir = tempfile::tempdir().unwrap();
        let formulas = dir.path().join("formulas.lst");
        let index = dir.path().join("index.lst");

        let mut ledger = Ledger::open(&formulas, &index).unwrap();
        assert_eq!(ledger.append("body one", "aaa").unwrap(), 1);
        assert_eq!(ledger.append("body two", "bbb").unwrap(), 2);
        drop(ledger);

        assert_eq!(
            std::fs::read_to_string(&formulas).unwrap(),
            "body one\nbody two\n"
        );
        assert_eq!(std::fs::read_to_string(&index).unwrap(), "1 aaa\n2 bbb\n");
    }

    #[test]
    fn test_reopen_continues_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let formulas = dir.path().join("formulas.lst");
        let index = dir.path().join("index.lst");

        let mut ledger = Ledger::open(&formulas, &index).unwrap();
        ledger.append("first", "aaa").unwrap();
        drop(ledger);

        let mut ledger = Ledger::open(&formulas, &index).unwrap();
        assert_eq!(ledger.next_line(), 2);
        assert_eq!(ledger.append("second", "bbb").unwrap(), 2);

        assert_eq!(std::fs::read_to_string(&index).unwrap(), "1 aaa\n2 bbb\n");
    }
}

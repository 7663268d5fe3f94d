//! Property extraction from xtb output files.

use crate::error::{ExtractError, Result};
use crate::parse::parse_fukui_row;
use crate::records::FukuiIndices;
use crate::scan::LineCursor;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref FUKUI_HEADER_RE: Regex =
        Regex::new(r"#\s+f\(\+\)\s+f\(-\)\s+f\(0\)").unwrap();
    static ref PRINTOUT_RE: Regex = Regex::new(r"Property Printout").unwrap();
}

/// One xtb output file, scanned per property request.
pub struct XtbLog {
    path: PathBuf,
}

impl XtbLog {
    /// Creates a handle over the output file at `path`.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fukui reactivity indices keyed by atom number.
    ///
    /// xtb fuses the atom number and element into one token (`12Cr`); the
    /// row parser splits them apart. Blank lines before the
    /// `Property Printout` terminator are not rows and are ignored.
    pub fn fukui_indices(&self) -> Result<BTreeMap<usize, FukuiIndices>> {
        let content = fs::read_to_string(&self.path)?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_match(&FUKUI_HEADER_RE)
            .ok_or(ExtractError::PropertyNotFound("Fukui indices"))?;
        let body = cursor
            .take_until(&PRINTOUT_RE)
            .ok_or(ExtractError::PropertyNotFound("Fukui indices"))?;
        let mut indices = BTreeMap::new();
        for line in body {
            if line.trim().is_empty() {
                continue;
            }
            match parse_fukui_row(line) {
                Some((atom_number, entry)) => {
                    indices.insert(atom_number, entry);
                }
                None => warn!("skipping malformed Fukui row: {}", line.trim()),
            }
        }
        if indices.is_empty() {
            return Err(ExtractError::PropertyNotFound("Fukui indices"));
        }
        Ok(indices)
    }
}

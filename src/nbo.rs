//! Bonding-analysis extraction from NBO7 sections of an output file.
//!
//! NBO7 runs as a linked module inside the host program, so its sections sit
//! between ordinary Gaussian output. [`NboAnalysis`] scans the same file as
//! [`GaussianLog`](crate::gaussian::GaussianLog) but only knows about the
//! bonding sections; obtain one through
//! [`GaussianLog::nbo`](crate::gaussian::GaussianLog::nbo).

use crate::error::{ExtractError, Result};
use crate::parse::{parse_npa_row, parse_perturbation_row, starts_with_orbital_index, NboAccumulator};
use crate::records::{NboOrbital, NpaEntry, PerturbationEntry};
use crate::scan::LineCursor;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    // NPA tables close with a full-width double rule; spacing is exact.
    static ref NPA_END_RE: Regex = Regex::new(r"={68}").unwrap();
    static ref NBO_DONE_RE: Regex = Regex::new(r"NBO analysis completed").unwrap();
    static ref NBO_SUMMARY_RE: Regex = Regex::new(r"NATURAL BOND ORBITALS").unwrap();
}

/// Extractor over the NBO7 sections of one output file.
pub struct NboAnalysis<'a> {
    path: &'a Path,
}

impl<'a> NboAnalysis<'a> {
    /// Creates an extractor over the NBO sections of the file at `path`.
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(self.path)?)
    }

    /// The complete NBO7 output block, one line per element.
    ///
    /// Spans from the ` NBO 7.0 ` banner (inclusive) to the
    /// `NBO analysis completed` line (exclusive). A file without the banner,
    /// or whose block never completes, reports
    /// [`ExtractError::PropertyNotFound`].
    pub fn raw_block(&self) -> Result<Vec<String>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        let banner = cursor
            .find_contains(" NBO 7.0 ")
            .ok_or(ExtractError::PropertyNotFound("NBO7 output"))?;
        let body = cursor
            .take_until(&NBO_DONE_RE)
            .ok_or(ExtractError::PropertyNotFound("NBO7 output"))?;
        let mut block = Vec::with_capacity(body.len() + 1);
        block.push(banner.to_string());
        block.extend(body.iter().map(|line| line.to_string()));
        Ok(block)
    }

    /// Natural population analysis rows, in table order.
    ///
    /// The table is printed in the order NBO emits atoms, which is assumed
    /// but not verified to be ascending atom number. Rows that fail the
    /// atom/number/five-float shape are skipped with a warning.
    pub fn natural_population(&self) -> Result<Vec<NpaEntry>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("Summary of Natural Population Analysis")
            .ok_or(ExtractError::PropertyNotFound("NPA analysis"))?;
        cursor.skip(5);
        let body = cursor
            .take_until(&NPA_END_RE)
            .ok_or(ExtractError::PropertyNotFound("NPA analysis"))?;
        let mut entries = Vec::new();
        for line in body {
            match parse_npa_row(line) {
                Some(entry) => entries.push(entry),
                None => warn!("skipping malformed NPA row: {}", line.trim()),
            }
        }
        if entries.is_empty() {
            return Err(ExtractError::PropertyNotFound("NPA analysis"));
        }
        Ok(entries)
    }

    /// Natural bond orbitals from the summary table, in encounter order.
    ///
    /// Delocalization lists that continue onto following lines are merged
    /// into the orbital they belong to; continuation lines never produce
    /// records of their own.
    pub fn natural_bond_orbitals(&self) -> Result<Vec<NboOrbital>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("NATURAL BOND ORBITALS (Summary):")
            .ok_or(ExtractError::PropertyNotFound("NBO orbitals summary"))?;
        cursor.skip(6);
        let body = cursor
            .take_until(&NBO_DONE_RE)
            .ok_or(ExtractError::PropertyNotFound("NBO orbitals summary"))?;
        let mut accumulator = NboAccumulator::new();
        for line in body {
            accumulator.push(line);
        }
        let orbitals = accumulator.finish();
        if orbitals.is_empty() {
            return Err(ExtractError::PropertyNotFound("NBO orbitals summary"));
        }
        Ok(orbitals)
    }

    /// Donor/acceptor interactions from the second-order perturbation table.
    ///
    /// Only lines opening with an orbital index carry data; threshold notes
    /// and unit headers between them are ignored. The table runs until the
    /// following `NATURAL BOND ORBITALS` section begins.
    pub fn perturbation_analysis(&self) -> Result<Vec<PerturbationEntry>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("SECOND ORDER PERTURBATION THEORY")
            .ok_or(ExtractError::PropertyNotFound("perturbation analysis"))?;
        cursor.skip(7);
        let body = cursor
            .take_until(&NBO_SUMMARY_RE)
            .ok_or(ExtractError::PropertyNotFound("perturbation analysis"))?;
        let mut entries = Vec::new();
        for line in body {
            if !starts_with_orbital_index(line) {
                continue;
            }
            match parse_perturbation_row(line) {
                Ok(entry) => entries.push(entry),
                Err(err) => warn!("skipping unparseable perturbation row: {}", err),
            }
        }
        if entries.is_empty() {
            return Err(ExtractError::PropertyNotFound("perturbation analysis"));
        }
        Ok(entries)
    }
}

//! Line-level record parsers.
//!
//! Each parser is a pure function from raw table text to a typed record; no
//! parser reads lines itself. Patterns are compiled once per process.
//!
//! The NBO summary table is the one place where a record can keep growing
//! after its own row: delocalization tags may continue on following lines
//! that carry no orbital index. [`NboAccumulator`] models that merge as an
//! explicit two-state machine (no record open yet / one record open) instead
//! of reaching back into an output collection.

use crate::elements;
use crate::error::{ExtractError, Result};
use crate::records::{
    FukuiIndices, HirshfeldEntry, NboDescriptor, NboOrbital, NboType, NpaEntry,
    PerturbationEntry, ShieldingTensor,
};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // Delocalization tag: digits, then a single lowercase letter in parens.
    static ref DELOC_RE: Regex = Regex::new(r"[0-9]+\([a-z]\)").unwrap();

    // A row carries its own orbital data only when it opens with an integer
    // index followed by a period.
    static ref ORBITAL_INDEX_RE: Regex = Regex::new(r"^[0-9]+\.(\s|$)").unwrap();

    // Two-letter element symbols can fuse with the preceding token, e.g.
    // "( 1)Cl" or "1-Cl". Both rewrites restore the separating space.
    static ref PAREN_CAP_RE: Regex = Regex::new(r"\)([A-Z])").unwrap();
    static ref HYPHEN_CAP_RE: Regex = Regex::new(r"([0-9]-)([A-Z])").unwrap();

    // Participant atom: element letters, then the atom number.
    static ref PARTICIPANT_RE: Regex = Regex::new(r"[A-Za-z]+\s*([0-9]+)").unwrap();

    static ref NPA_ROW_RE: Regex = Regex::new(
        r"^\s*([A-Z][a-z]?)\s*([0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)"
    ).unwrap();

    static ref PERTURBATION_ROW_RE: Regex = Regex::new(
        r"^([0-9]+)\.\s+(.*)\s+([0-9]+)\.\s+(.*)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s*$"
    ).unwrap();

    // Atom number, element, then Q-H, S-H, Dx, Dy, Dz, Q-CM5.
    static ref HIRSHFELD_ROW_RE: Regex = Regex::new(
        r"^\s*([0-9]+)\s+([A-Z][a-z]?)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s*$"
    ).unwrap();

    static ref NMR_HEADER_RE: Regex = Regex::new(
        r"^\s*([0-9]+)\s+([A-Z][a-z]?)\s+Isotropic\s*=\s*(-?[0-9]*\.[0-9]+)\s+Anisotropy\s*=\s*(-?[0-9]*\.[0-9]+)"
    ).unwrap();

    static ref NMR_COMPONENT_RE: Regex =
        Regex::new(r"([A-Z]{2})=\s*(-?[0-9]*\.[0-9]+)").unwrap();

    // xtb prints the atom number fused to the element, e.g. "12Cr".
    static ref FUKUI_ROW_RE: Regex = Regex::new(
        r"^\s*([0-9]+)([A-Za-z]{1,2})\s+(-?[0-9]*\.[0-9]+)\s+(-?[0-9]*\.[0-9]+)\s+(-?[0-9]*\.[0-9]+)"
    ).unwrap();
}

/// Rounds to the 5-decimal precision carried by coordinate tables.
pub(crate) fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// True when the trimmed line opens with an integer index and a period.
pub fn starts_with_orbital_index(line: &str) -> bool {
    ORBITAL_INDEX_RE.is_match(line.trim_start())
}

/// Parses one row of a `Coordinates (Angstroms)` table.
///
/// Layout: center number, atomic number, atomic type, then x, y, z. The
/// element is resolved through the atomic-number table and coordinates are
/// rounded to 5 decimals. Rows with fewer than six whitespace-separated
/// fields are rejected.
pub fn parse_geometry_row(line: &str) -> Result<(String, [f64; 3])> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(ExtractError::malformed("geometry", line));
    }
    let atomic_number: usize = fields[1]
        .parse()
        .map_err(|_| ExtractError::malformed("geometry", line))?;
    let mut coords = [0.0_f64; 3];
    for (slot, field) in coords.iter_mut().zip(&fields[3..6]) {
        let value: f64 = field
            .parse()
            .map_err(|_| ExtractError::malformed("geometry", line))?;
        *slot = round5(value);
    }
    Ok((elements::symbol(atomic_number).to_string(), coords))
}

/// Parses one natural population analysis row, `None` if the line does not
/// have the atom/number/five-float shape.
pub fn parse_npa_row(line: &str) -> Option<NpaEntry> {
    let caps = NPA_ROW_RE.captures(line)?;
    Some(NpaEntry {
        atom: caps[1].to_string(),
        atom_number: caps[2].parse().ok()?,
        natural_charge: caps[3].parse().ok()?,
        core_population: caps[4].parse().ok()?,
        valence_population: caps[5].parse().ok()?,
        rydberg_population: caps[6].parse().ok()?,
        total_population: caps[7].parse().ok()?,
    })
}

/// Outcome of classifying one NBO summary line.
#[derive(Debug, Clone, PartialEq)]
pub enum NboLine {
    /// The line carried a full orbital record
    Orbital(NboOrbital),
    /// The line carried only delocalization tags for the previous record
    Continuation(Vec<String>),
    /// Narrative or separator text with no orbital content
    Other,
}

/// Classifies and parses one line of the NBO summary table.
///
/// A line owns a record only when it opens with an orbital index. Lines
/// without an index but with delocalization tags are continuations of the
/// previous record; everything else is ignorable narrative.
pub fn parse_nbo_line(line: &str) -> Result<NboLine> {
    let trimmed = line.trim();
    let tags: Vec<String> = DELOC_RE
        .find_iter(trimmed)
        .map(|tag| tag.as_str().to_string())
        .collect();
    if !ORBITAL_INDEX_RE.is_match(trimmed) {
        if tags.is_empty() {
            return Ok(NboLine::Other);
        }
        return Ok(NboLine::Continuation(tags));
    }

    let spaced = PAREN_CAP_RE.replace_all(trimmed, ") $1");
    let spaced = HYPHEN_CAP_RE.replace_all(&spaced, "$1 $2");
    let normalized: String = spaced.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
    if !tags.is_empty() {
        // The delocalization list rides after the energy column.
        tokens.pop();
    }
    if tokens.len() < 5 {
        return Err(ExtractError::malformed("NBO summary", line));
    }

    let number: usize = tokens[0]
        .trim_end_matches('.')
        .parse()
        .map_err(|_| ExtractError::malformed("NBO summary", line))?;
    let nbo_type = NboType::from_code(tokens[1])
        .ok_or_else(|| ExtractError::malformed("NBO summary", line))?;
    let bond_order: usize = tokens[2]
        .parse()
        .map_err(|_| ExtractError::malformed("NBO summary", line))?;
    let occupancy: f64 = tokens[tokens.len() - 2]
        .parse()
        .map_err(|_| ExtractError::malformed("NBO summary", line))?;
    let energy: f64 = tokens[tokens.len() - 1]
        .parse()
        .map_err(|_| ExtractError::malformed("NBO summary", line))?;
    let participants = tokens[3..tokens.len() - 2]
        .iter()
        .filter_map(|token| token.trim_end_matches('-').parse::<usize>().ok())
        .collect();

    Ok(NboLine::Orbital(NboOrbital {
        number,
        descriptor: NboDescriptor {
            nbo_type,
            bond_order,
            participants,
        },
        occupancy,
        energy,
        delocalizations: tags,
    }))
}

/// Merges NBO summary lines into orbital records.
///
/// Two states: no record open yet, or exactly one record open and accepting
/// continuation tags. Tags arriving before any record are dropped with a
/// warning; unparseable indexed rows are skipped with a warning.
#[derive(Debug, Default)]
pub struct NboAccumulator {
    completed: Vec<NboOrbital>,
    current: Option<NboOrbital>,
}

impl NboAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw summary line.
    pub fn push(&mut self, line: &str) {
        match parse_nbo_line(line) {
            Ok(NboLine::Orbital(orbital)) => {
                if let Some(done) = self.current.take() {
                    self.completed.push(done);
                }
                self.current = Some(orbital);
            }
            Ok(NboLine::Continuation(tags)) => match self.current.as_mut() {
                Some(open) => open.delocalizations.extend(tags),
                None => warn!(
                    "delocalization tags before any orbital record, dropped: {}",
                    line.trim()
                ),
            },
            Ok(NboLine::Other) => {}
            Err(err) => warn!("skipping unparseable NBO summary row: {}", err),
        }
    }

    /// Closes the open record and returns all orbitals in encounter order.
    pub fn finish(mut self) -> Vec<NboOrbital> {
        if let Some(done) = self.current.take() {
            self.completed.push(done);
        }
        self.completed
    }
}

/// Parses the shared type / bond-order / participants grammar used by the
/// donor and acceptor halves of a perturbation row.
pub fn parse_nbo_descriptor(text: &str) -> Result<NboDescriptor> {
    let cleaned: String = text
        .chars()
        .map(|c| if matches!(c, '(' | ')') { ' ' } else { c })
        .collect();
    let mut tokens = cleaned.split_whitespace();
    let nbo_type = tokens
        .next()
        .and_then(NboType::from_code)
        .ok_or_else(|| ExtractError::malformed("NBO descriptor", text))?;
    let bond_order: usize = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ExtractError::malformed("NBO descriptor", text))?;
    let participants = PARTICIPANT_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    Ok(NboDescriptor {
        nbo_type,
        bond_order,
        participants,
    })
}

/// Parses one second-order perturbation row.
///
/// Shape: donor number and descriptor, acceptor number and descriptor, then
/// E(2), E(j)-E(i), and F(i,j). Descriptors do not repeat occupancy or
/// energy, so they parse through [`parse_nbo_descriptor`].
pub fn parse_perturbation_row(line: &str) -> Result<PerturbationEntry> {
    let trimmed = line.trim();
    let caps = PERTURBATION_ROW_RE
        .captures(trimmed)
        .ok_or_else(|| ExtractError::malformed("perturbation", line))?;
    let parse_number = |index: usize| -> Result<usize> {
        caps[index]
            .parse()
            .map_err(|_| ExtractError::malformed("perturbation", line))
    };
    let parse_value = |index: usize| -> Result<f64> {
        caps[index]
            .parse()
            .map_err(|_| ExtractError::malformed("perturbation", line))
    };
    Ok(PerturbationEntry {
        donor_orbital: parse_number(1)?,
        donor: parse_nbo_descriptor(caps[2].trim())?,
        acceptor_orbital: parse_number(3)?,
        acceptor: parse_nbo_descriptor(caps[4].trim())?,
        energy: parse_value(5)?,
        energy_difference: parse_value(6)?,
        fock_term: parse_value(7)?,
    })
}

/// Parses one Hirshfeld/CM5 charge row, `None` if the line does not have
/// the number/element/six-float shape (the trailing `Tot` row does not).
pub fn parse_hirshfeld_row(line: &str) -> Option<HirshfeldEntry> {
    let caps = HIRSHFELD_ROW_RE.captures(line)?;
    Some(HirshfeldEntry {
        atom_number: caps[1].parse().ok()?,
        element: caps[2].to_string(),
        hirshfeld_charge: caps[3].parse().ok()?,
        cm5_charge: caps[8].parse().ok()?,
    })
}

/// Parses a shielding-tensor atom header, `None` for non-header lines.
///
/// Returns the atom number together with a tensor whose component map is
/// still empty; the caller fills it from the following lines.
pub fn parse_nmr_header(line: &str) -> Option<(usize, ShieldingTensor)> {
    let caps = NMR_HEADER_RE.captures(line)?;
    Some((
        caps[1].parse().ok()?,
        ShieldingTensor {
            element: caps[2].to_string(),
            isotropic: caps[3].parse().ok()?,
            anisotropy: caps[4].parse().ok()?,
            components: HashMap::new(),
        },
    ))
}

/// Extracts every `CC= value` tensor-component pair from one line.
pub fn parse_nmr_components(line: &str) -> Vec<(String, f64)> {
    NMR_COMPONENT_RE
        .captures_iter(line)
        .filter_map(|caps| Some((caps[1].to_string(), caps[2].parse().ok()?)))
        .collect()
}

/// Parses one Fukui-index row, splitting the fused `12Cr` atom token,
/// `None` for lines that do not have the row shape.
pub fn parse_fukui_row(line: &str) -> Option<(usize, FukuiIndices)> {
    let caps = FUKUI_ROW_RE.captures(line)?;
    Some((
        caps[1].parse().ok()?,
        FukuiIndices {
            element: caps[2].to_string(),
            f_plus: caps[3].parse().ok()?,
            f_minus: caps[4].parse().ok()?,
            f_zero: caps[5].parse().ok()?,
        },
    ))
}

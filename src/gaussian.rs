//! Property extraction from Gaussian16 output files.
//!
//! [`GaussianLog`] holds the path to one output file and exposes one
//! operation per property. Every operation opens a fresh forward scan of the
//! file, so extractions are independent of each other and of call order; a
//! property whose section marker never appears reports
//! [`ExtractError::PropertyNotFound`] instead of an empty result.

use crate::error::{ExtractError, Result};
use crate::geometry::Geometry;
use crate::nbo::NboAnalysis;
use crate::parse::{
    parse_geometry_row, parse_hirshfeld_row, parse_nmr_components, parse_nmr_header,
};
use crate::records::{HirshfeldEntry, OrbitalEnergies, ShieldingTensor};
use crate::scan::{parse_float, LineCursor};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref FLOAT_RE: Regex = Regex::new(r"-?[0-9]+\.[0-9]+").unwrap();
}

/// One Gaussian16 output file, scanned per property request.
///
/// # Examples
///
/// ```no_run
/// use qclog::GaussianLog;
///
/// fn main() -> Result<(), qclog::ExtractError> {
///     let log = GaussianLog::open("water.log");
///     println!("{} atoms", log.number_of_atoms()?);
///     for (step, energy) in log.scf_energies()?.iter().enumerate() {
///         println!("step {:>3}: {:.8} Eh", step + 1, energy);
///     }
///     Ok(())
/// }
/// ```
pub struct GaussianLog {
    path: PathBuf,
}

impl GaussianLog {
    /// Creates a handle over the output file at `path`.
    ///
    /// The file is not read until a property is requested.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bonding-analysis extractor over the same output file.
    ///
    /// NBO7 sections live inside the Gaussian output, so the extractor scans
    /// the same file; it is a separate capability rather than part of this
    /// type because only runs with `pop=nbo7` produce those sections.
    pub fn nbo(&self) -> NboAnalysis<'_> {
        NboAnalysis::new(&self.path)
    }

    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Number of atoms in the molecule, from the `NAtoms=` line.
    pub fn number_of_atoms(&self) -> Result<usize> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        let line = cursor
            .find_contains("NAtoms=")
            .ok_or(ExtractError::PropertyNotFound("number of atoms"))?;
        line.split_whitespace()
            .nth(1)
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| ExtractError::malformed("atom count", line))
    }

    /// All SCF energies in file order, in Hartree.
    ///
    /// Optimizations print one `SCF Done` line per step; the last element is
    /// the energy of the final geometry.
    pub fn scf_energies(&self) -> Result<Vec<f64>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        let mut energies = Vec::new();
        while let Some(line) = cursor.find_contains("SCF Done") {
            match line.split_whitespace().nth(4).and_then(parse_float) {
                Some(energy) => energies.push(energy),
                None => warn!("skipping malformed SCF energy line: {}", line.trim()),
            }
        }
        if energies.is_empty() {
            return Err(ExtractError::PropertyNotFound("SCF energy"));
        }
        Ok(energies)
    }

    /// Gibbs free energies from every thermochemistry block, in file order.
    pub fn gibbs_free_energies(&self) -> Result<Vec<f64>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        let mut energies = Vec::new();
        while let Some(line) =
            cursor.find_contains("Sum of electronic and thermal Free Energies")
        {
            match FLOAT_RE.find(line).and_then(|m| parse_float(m.as_str())) {
                Some(energy) => energies.push(energy),
                None => warn!("skipping malformed free-energy line: {}", line.trim()),
            }
        }
        if energies.is_empty() {
            return Err(ExtractError::PropertyNotFound("Gibbs free energy"));
        }
        Ok(energies)
    }

    /// Dipole moment magnitude from the input-orientation multipole block.
    ///
    /// The value is printed in Fortran `D` exponent notation and normalized
    /// during parsing.
    pub fn dipole(&self) -> Result<f64> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("Electric dipole moment (input orientation)")
            .ok_or(ExtractError::PropertyNotFound("dipole moment"))?;
        cursor.skip(2);
        let line = cursor
            .advance()
            .ok_or(ExtractError::PropertyNotFound("dipole moment"))?;
        line.split_whitespace()
            .nth(1)
            .and_then(parse_float)
            .ok_or_else(|| ExtractError::malformed("dipole", line))
    }

    /// Isotropic and anisotropic dipole polarizability.
    pub fn polarizability(&self) -> Result<(f64, f64)> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("Dipole polarizability, Alpha (input orientation)")
            .ok_or(ExtractError::PropertyNotFound("dipole polarizability"))?;
        cursor.skip(3);
        let mut next_value = || -> Result<f64> {
            let line = cursor
                .advance()
                .ok_or(ExtractError::PropertyNotFound("dipole polarizability"))?;
            line.split_whitespace()
                .nth(1)
                .and_then(parse_float)
                .ok_or_else(|| ExtractError::malformed("polarizability", line))
        };
        let isotropic = next_value()?;
        let anisotropic = next_value()?;
        Ok((isotropic, anisotropic))
    }

    /// Occupied and virtual orbital eigenvalues from the SCF density
    /// population analysis.
    ///
    /// The eigenvalue lines alternate between occupied and virtual runs and
    /// end when a line of neither shape appears; values are kept strictly in
    /// apparition order, so [`OrbitalEnergies::homo`] and
    /// [`OrbitalEnergies::lumo`] follow from table order.
    pub fn orbital_energies(&self) -> Result<OrbitalEnergies> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("Population analysis using the SCF Density")
            .ok_or(ExtractError::PropertyNotFound("orbital energies"))?;
        cursor.skip(3);
        let mut energies = OrbitalEnergies::default();
        while let Some(line) = cursor.peek() {
            let bucket = if line.contains("Alpha  occ. eigenvalues") {
                &mut energies.occupied
            } else if line.contains("Alpha virt. eigenvalues") {
                &mut energies.virtuals
            } else {
                break;
            };
            for token in line.split_whitespace().skip(4) {
                match parse_float(token) {
                    Some(value) => bucket.push(value),
                    None => warn!("skipping malformed eigenvalue token: {}", token),
                }
            }
            cursor.advance();
        }
        if energies.occupied.is_empty() && energies.virtuals.is_empty() {
            return Err(ExtractError::PropertyNotFound("orbital energies"));
        }
        Ok(energies)
    }

    /// Every geometry printed in the output, in file order.
    ///
    /// Each `Coordinates (Angstroms)` table holds exactly the number of rows
    /// given by the `NAtoms=` line, so a row that fails to parse aborts the
    /// extraction with [`ExtractError::MalformedRecord`]; skipping it would
    /// silently misalign the remaining count. The last geometry is the
    /// final/converged one.
    pub fn geometries(&self) -> Result<Vec<Geometry>> {
        let num_atoms = self.number_of_atoms()?;
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        let mut geometries = Vec::new();
        while cursor.find_contains("Coordinates (Angstroms)").is_some() {
            cursor.skip(2);
            let rows = cursor.take_count(num_atoms);
            if rows.len() < num_atoms {
                return Err(ExtractError::malformed(
                    "geometry",
                    "coordinate table ends before the expected atom count",
                ));
            }
            let mut elements = Vec::with_capacity(num_atoms);
            let mut coords = Vec::with_capacity(num_atoms * 3);
            for row in rows {
                let (element, xyz) = parse_geometry_row(row)?;
                elements.push(element);
                coords.extend(xyz);
            }
            geometries.push(Geometry::new(elements, coords));
        }
        if geometries.is_empty() {
            return Err(ExtractError::PropertyNotFound("geometry"));
        }
        Ok(geometries)
    }

    /// Hirshfeld and CM5 partial charges, in table order.
    ///
    /// The table ends at the `Tot` summary row, which does not have the
    /// per-atom shape and is not a record.
    pub fn hirshfeld_charges(&self) -> Result<Vec<HirshfeldEntry>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("Hirshfeld charges, spin densities, dipoles, and CM5 charges")
            .ok_or(ExtractError::PropertyNotFound("Hirshfeld charges"))?;
        cursor.skip(1);
        let mut entries = Vec::new();
        while let Some(line) = cursor.peek() {
            match parse_hirshfeld_row(line) {
                Some(entry) => {
                    entries.push(entry);
                    cursor.advance();
                }
                None => break,
            }
        }
        if entries.is_empty() {
            return Err(ExtractError::PropertyNotFound("Hirshfeld charges"));
        }
        Ok(entries)
    }

    /// GIAO magnetic shielding tensors keyed by atom number.
    ///
    /// Each atom header is followed by four lines: three carrying `XX=`-style
    /// component pairs and one `Eigenvalues` line that contributes nothing.
    pub fn nmr_shielding_tensors(&self) -> Result<BTreeMap<usize, ShieldingTensor>> {
        let content = self.read()?;
        let mut cursor = LineCursor::new(&content);
        cursor
            .find_contains("SCF GIAO Magnetic shielding tensor")
            .ok_or(ExtractError::PropertyNotFound("NMR shielding tensors"))?;
        let mut tensors = BTreeMap::new();
        while let Some(line) = cursor.peek() {
            let (atom_number, mut tensor) = match parse_nmr_header(line) {
                Some(header) => header,
                None => break,
            };
            cursor.advance();
            for component_line in cursor.take_count(4) {
                if component_line.contains("Eigenvalues") {
                    continue;
                }
                for (code, value) in parse_nmr_components(component_line) {
                    tensor.components.insert(code, value);
                }
            }
            tensors.insert(atom_number, tensor);
        }
        if tensors.is_empty() {
            return Err(ExtractError::PropertyNotFound("NMR shielding tensors"));
        }
        Ok(tensors)
    }
}

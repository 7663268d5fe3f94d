#![deny(missing_docs)]

//! qclog - Structured Property Extraction from Quantum-Chemistry Output Files
//!
//! qclog pulls typed chemical and quantum-mechanical data out of the large,
//! loosely structured text logs written by Gaussian16, the NBO7 bonding
//! module, and xtb: atom counts, geometries, energies, orbital populations,
//! bonding analyses, perturbation interactions, magnetic tensors, and
//! reactivity indices.
//!
//! # Overview
//!
//! Quantum-chemistry outputs interleave narrative text with fixed-width
//! numeric tables whose presence and layout depend on which features were
//! requested in the run. Every extraction therefore follows the same shape:
//!
//! 1. **Locate** the section's textual marker in a forward scan of the file
//! 2. **Collect** the table body under the section's termination rule
//!    (a fixed row count, an explicit terminator line, or cessation when a
//!    line stops matching the row shape)
//! 3. **Parse** each raw line into a typed record, normalizing Fortran `D`
//!    exponent notation and resolving atomic numbers to element symbols
//!
//! Each property request opens its own scan, so extractions are independent
//! of one another and of call order. A property whose marker never appears
//! reports [`ExtractError::PropertyNotFound`] rather than an empty result:
//! a missing section means the feature was not requested in the calculation,
//! which is not the same as a zero-valued answer.
//!
//! # Supported Properties
//!
//! | Property | Source | Result |
//! |----------|--------|--------|
//! | Atom count | `NAtoms=` | `usize` |
//! | Geometries (one per step) | `Coordinates (Angstroms)` | `Vec<Geometry>` |
//! | SCF energies (one per step) | `SCF Done` | `Vec<f64>` |
//! | Gibbs free energies | thermochemistry blocks | `Vec<f64>` |
//! | Dipole moment | input-orientation multipoles | `f64` |
//! | Polarizability (iso, aniso) | input-orientation multipoles | `(f64, f64)` |
//! | Orbital eigenvalues | SCF density population analysis | [`records::OrbitalEnergies`] |
//! | Hirshfeld / CM5 charges | Hirshfeld population analysis | `Vec<HirshfeldEntry>` |
//! | NMR shielding tensors | GIAO magnetic shielding | `BTreeMap<usize, ShieldingTensor>` |
//! | Natural population analysis | NBO7 | `Vec<NpaEntry>` |
//! | Natural bond orbitals | NBO7 summary | `Vec<NboOrbital>` |
//! | Perturbation interactions | NBO7 second-order analysis | `Vec<PerturbationEntry>` |
//! | Fukui indices | xtb | `BTreeMap<usize, FukuiIndices>` |
//!
//! # Quick Start
//!
//! ```no_run
//! use qclog::{GaussianLog, io};
//! use std::path::Path;
//!
//! fn main() -> Result<(), qclog::ExtractError> {
//!     let log = GaussianLog::open("water.log");
//!
//!     println!("{} atoms", log.number_of_atoms()?);
//!     let energies = log.scf_energies()?;
//!     println!("final SCF energy: {:.8} Eh", energies[energies.len() - 1]);
//!
//!     // Export the converged geometry.
//!     let geometries = log.geometries()?;
//!     io::write_xyz(
//!         &geometries[geometries.len() - 1],
//!         "converged geometry",
//!         Path::new("water.xyz"),
//!     )?;
//!
//!     // Bonding analysis lives in the NBO7 sections of the same file.
//!     for entry in log.nbo().natural_population()? {
//!         println!("{:>2}{:<2}  {:+.5}", entry.atom_number, entry.atom, entry.natural_charge);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`gaussian`] - Gaussian16 document assembler, one operation per property
//! - [`nbo`] - NBO7 bonding-analysis extractor
//! - [`xtb`] - xtb document assembler
//! - [`scan`] - forward-only line cursor, section locating, table collection
//! - [`parse`] - line-level record parsers and continuation merging
//! - [`records`] - typed records for every extracted data kind
//! - [`geometry`] - molecular geometry storage
//! - [`elements`] - static periodic table
//! - [`io`] - XYZ geometry export/import
//! - [`error`] - the [`ExtractError`] taxonomy

/// Static periodic table
pub mod elements;
pub mod error;
pub mod gaussian;
pub mod geometry;
pub mod io;
pub mod nbo;
pub mod parse;
pub mod records;
pub mod scan;
pub mod xtb;

pub use error::ExtractError;
pub use gaussian::GaussianLog;
pub use geometry::Geometry;
pub use xtb::XtbLog;

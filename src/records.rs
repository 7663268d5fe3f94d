//! Typed records extracted from quantum-chemistry output tables.
//!
//! All records are plain value types built fresh per parse call; collections
//! preserve the order rows appear in the source tables. Atom-numbered tables
//! are assumed, but never verified, to be printed in ascending atom order.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One row of a natural population analysis table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpaEntry {
    /// Element symbol as printed in the table
    pub atom: String,
    /// 1-based atom number
    pub atom_number: usize,
    /// Natural partial charge
    pub natural_charge: f64,
    /// Core electron population
    pub core_population: f64,
    /// Valence electron population
    pub valence_population: f64,
    /// Rydberg electron population
    pub rydberg_population: f64,
    /// Total electron population
    pub total_population: f64,
}

/// Classification of a natural bond orbital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NboType {
    /// Core orbital (`CR`)
    Core,
    /// Lone pair (`LP`)
    LonePair,
    /// Bonding orbital (`BD`)
    Bond,
    /// Antibonding orbital (`BD*`)
    Antibond,
    /// Rydberg orbital (`RY`)
    Rydberg,
}

impl NboType {
    /// Parses the type code printed in NBO tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use qclog::records::NboType;
    ///
    /// assert_eq!(NboType::from_code("BD*"), Some(NboType::Antibond));
    /// assert_eq!(NboType::from_code("XX"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CR" => Some(NboType::Core),
            "LP" => Some(NboType::LonePair),
            "BD" => Some(NboType::Bond),
            "BD*" => Some(NboType::Antibond),
            "RY" => Some(NboType::Rydberg),
            _ => None,
        }
    }

    /// The code used for this type in NBO output.
    pub fn code(&self) -> &'static str {
        match self {
            NboType::Core => "CR",
            NboType::LonePair => "LP",
            NboType::Bond => "BD",
            NboType::Antibond => "BD*",
            NboType::Rydberg => "RY",
        }
    }
}

impl fmt::Display for NboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Type, bond-order index, and participant atoms of an orbital.
///
/// Shared between summary rows and the donor/acceptor halves of a
/// perturbation row, which print the same grammar without occupancy and
/// energy columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NboDescriptor {
    /// Orbital classification
    pub nbo_type: NboType,
    /// Bond-order index within the type (the parenthesized column)
    pub bond_order: usize,
    /// 1-based numbers of the participating atoms, in print order
    pub participants: Vec<usize>,
}

/// One natural bond orbital from the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NboOrbital {
    /// 1-based orbital number, unique within the summary
    pub number: usize,
    /// Type, bond order, and participants
    pub descriptor: NboDescriptor,
    /// Electron occupancy
    pub occupancy: f64,
    /// Orbital energy in Hartree
    pub energy: f64,
    /// Delocalization tags such as `12(g)`, in encounter order.
    ///
    /// Continuation lines following the orbital's own row append here.
    pub delocalizations: Vec<String>,
}

/// One donor/acceptor interaction from the second-order perturbation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerturbationEntry {
    /// 1-based donor orbital number
    pub donor_orbital: usize,
    /// Donor type, bond order, and participants
    pub donor: NboDescriptor,
    /// 1-based acceptor orbital number
    pub acceptor_orbital: usize,
    /// Acceptor type, bond order, and participants
    pub acceptor: NboDescriptor,
    /// Interaction energy E(2) in kcal/mol
    pub energy: f64,
    /// Orbital energy difference E(j)-E(i) in a.u.
    pub energy_difference: f64,
    /// Fock matrix element F(i,j) in a.u.
    pub fock_term: f64,
}

/// Hirshfeld and CM5 partial charges for one atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HirshfeldEntry {
    /// 1-based atom number
    pub atom_number: usize,
    /// Element symbol
    pub element: String,
    /// Hirshfeld charge (`Q-H` column)
    pub hirshfeld_charge: f64,
    /// CM5 charge (`Q-CM5` column)
    pub cm5_charge: f64,
}

/// Magnetic shielding tensor for one atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShieldingTensor {
    /// Element symbol
    pub element: String,
    /// Isotropic shielding in ppm
    pub isotropic: f64,
    /// Shielding anisotropy in ppm
    pub anisotropy: f64,
    /// Cartesian components keyed by their two-letter code (`XX`, `YX`, ...)
    pub components: HashMap<String, f64>,
}

/// Fukui reactivity indices for one atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FukuiIndices {
    /// Element symbol
    pub element: String,
    /// f(+) index for electrophilic attack
    pub f_plus: f64,
    /// f(-) index for nucleophilic attack
    pub f_minus: f64,
    /// f(0) index for radical attack
    pub f_zero: f64,
}

/// Molecular orbital eigenvalues in apparition order.
///
/// The lists are populated strictly in the order the eigenvalue lines appear
/// and are never re-sorted, so frontier orbitals follow from table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrbitalEnergies {
    /// Occupied orbital eigenvalues in Hartree
    pub occupied: Vec<f64>,
    /// Virtual orbital eigenvalues in Hartree
    pub virtuals: Vec<f64>,
}

impl OrbitalEnergies {
    /// Energy of the highest occupied molecular orbital, if any.
    pub fn homo(&self) -> Option<f64> {
        self.occupied.last().copied()
    }

    /// Energy of the lowest unoccupied molecular orbital, if any.
    pub fn lumo(&self) -> Option<f64> {
        self.virtuals.first().copied()
    }
}

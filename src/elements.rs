//! Static periodic table for resolving atomic numbers printed in log tables.
//!
//! Geometry tables identify atoms by atomic number, so the lookup is a flat
//! array indexed by atomic number. Entry 0 is the `Bq` ghost-atom placeholder
//! Gaussian uses for dummy centers. The table is process-wide, immutable, and
//! never touched at runtime.

/// Element symbols indexed by atomic number. Entry 0 is the `Bq` dummy atom.
pub const SYMBOLS: [&str; 119] = [
    "Bq", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn",
    "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb",
    "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm",
    "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta",
    "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At",
    "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
    "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Looks up the element symbol for an atomic number.
///
/// Atomic numbers outside the table resolve to `"X"`.
///
/// # Examples
///
/// ```
/// use qclog::elements::symbol;
///
/// assert_eq!(symbol(8), "O");
/// assert_eq!(symbol(0), "Bq");
/// assert_eq!(symbol(500), "X");
/// ```
pub fn symbol(atomic_number: usize) -> &'static str {
    SYMBOLS.get(atomic_number).copied().unwrap_or("X")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(symbol(1), "H");
        assert_eq!(symbol(6), "C");
        assert_eq!(symbol(17), "Cl");
        assert_eq!(symbol(118), "Og");
    }

    #[test]
    fn test_dummy_and_out_of_range() {
        assert_eq!(symbol(0), "Bq");
        assert_eq!(symbol(119), "X");
        assert_eq!(symbol(usize::MAX), "X");
    }
}

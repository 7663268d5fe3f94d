//! Molecular geometry records extracted from coordinate tables.

use nalgebra::DVector;

/// Molecular geometry: element symbols plus flat Cartesian coordinates.
///
/// Coordinates are in Angstroms, stored as [x1, y1, z1, x2, y2, z2, ...] and
/// carry the 5-decimal precision of the source tables. Atom order is the
/// order of the source table rows, so index 0 is the first printed atom.
///
/// # Examples
///
/// ```
/// use qclog::geometry::Geometry;
///
/// let elements = vec!["O".to_string(), "H".to_string(), "H".to_string()];
/// let coords = vec![0.0, 0.0, 0.11926, 0.0, 0.76324, -0.47705, 0.0, -0.76324, -0.47705];
/// let geometry = Geometry::new(elements, coords);
///
/// assert_eq!(geometry.num_atoms, 3);
/// assert_eq!(geometry.atom_symbol(0), "O");
/// assert_eq!(geometry.atom_coords(1), [0.0, 0.76324, -0.47705]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Chemical element symbols for each atom in order
    pub elements: Vec<String>,
    /// Flattened Cartesian coordinates in Angstroms
    pub coords: DVector<f64>,
    /// Number of atoms
    pub num_atoms: usize,
}

impl Geometry {
    /// Creates a geometry from an element list and flat coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() != elements.len() * 3`.
    pub fn new(elements: Vec<String>, coords: Vec<f64>) -> Self {
        let num_atoms = elements.len();
        assert_eq!(coords.len(), num_atoms * 3);
        Self {
            elements,
            coords: DVector::from_vec(coords),
            num_atoms,
        }
    }

    /// Cartesian coordinates of one atom.
    pub fn atom_coords(&self, atom_idx: usize) -> [f64; 3] {
        let i = atom_idx * 3;
        [self.coords[i], self.coords[i + 1], self.coords[i + 2]]
    }

    /// Element symbol of one atom.
    pub fn atom_symbol(&self, atom_idx: usize) -> &str {
        &self.elements[atom_idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_accessors() {
        let geometry = Geometry::new(
            vec!["C".to_string(), "H".to_string()],
            vec![0.0, 0.0, 0.0, 1.08999, 0.0, 0.0],
        );
        assert_eq!(geometry.num_atoms, 2);
        assert_eq!(geometry.atom_symbol(1), "H");
        assert_eq!(geometry.atom_coords(1), [1.08999, 0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        Geometry::new(vec!["C".to_string()], vec![0.0, 0.0]);
    }
}

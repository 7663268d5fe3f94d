use qclog::io;
use qclog::{ExtractError, GaussianLog};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Two-step water optimization with frequency, polarizability, NMR, and
/// Hirshfeld sections, trimmed to the lines the extractors look at.
const WATER_LOG: &str = r#" Entering Gaussian System, Link 0=g16
 %chk=water.chk
 ----------------------------------------------------------------------
 #p B3LYP/6-311+G(d,p) opt freq polar nmr=giao pop=hirshfeld
 ----------------------------------------------------------------------
 Symbolic Z-matrix:
 Charge =  0 Multiplicity = 1
 NAtoms=      3 NQM=        3 NQMF=       0 NMMI=      0 NMMIF=      0
                         Input orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000    0.119262
      2          1           0        0.000000    0.763239   -0.477047
      3          1           0        0.000000   -0.763239   -0.477047
 ---------------------------------------------------------------------
 Requested convergence on RMS density matrix=1.00D-08 within 128 cycles.
 SCF Done:  E(RB3LYP) =  -76.4589123401     A.U. after   11 cycles
 Step number   2 out of a maximum of  20
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000    0.118709
      2          1           0        0.000000    0.761426   -0.474838
      3          1           0        0.000000   -0.761426   -0.474838
 ---------------------------------------------------------------------
 SCF Done:  E(RB3LYP) =  -76.4589531203     A.U. after    9 cycles

 Population analysis using the SCF Density.

 **********************************************************************

 Alpha  occ. eigenvalues --  -19.12656  -1.01550  -0.53086  -0.38306  -0.30929
 Alpha virt. eigenvalues --    0.06757   0.15071   0.80035   0.85391
 Alpha virt. eigenvalues --    0.89114   0.92293
          Condensed to atoms (all electrons):

 Hirshfeld charges, spin densities, dipoles, and CM5 charges using IRadAn=      5:
              Q-H   S-H   Dx  Dy  Dz  Q-CM5
     1  O   -0.312629   0.000000   0.000000   0.000000  -0.129098  -0.660046
     2  H    0.156315   0.000000   0.000000   0.097193   0.064555   0.330023
     3  H    0.156315   0.000000   0.000000  -0.097193   0.064555   0.330023
       Tot  -0.000000   0.000000   0.000000   0.000000   0.000011  -0.000000

 - Thermochemistry -
 Temperature   298.150 Kelvin.  Pressure   1.00000 Atm.
 Sum of electronic and thermal Free Energies=            -76.445123

 SCF GIAO Magnetic shielding tensor (ppm):
      1  O    Isotropic =   323.5760   Anisotropy =    44.9091
   XX=   321.9660   YX=     0.0000   ZX=     0.0000
   XY=     0.0000   YY=   340.4188   ZY=     0.0000
   XZ=     0.0000   YZ=     0.0000   ZZ=   308.3432
   Eigenvalues:   308.3432   321.9660   340.4188
      2  H    Isotropic =    30.0144   Anisotropy =    19.7424
   XX=    23.0500   YX=     0.0000   ZX=     0.0000
   XY=     0.0000   YY=    43.1770   ZY=     0.0000
   XZ=     0.0000   YZ=     1.0200   ZZ=    24.0000
   Eigenvalues:    23.0500    24.0000    43.1770
      3  H    Isotropic =    30.0144   Anisotropy =    19.7424
   XX=    23.0500   YX=     0.0000   ZX=     0.0000
   XY=     0.0000   YY=    43.1770   ZY=     0.0000
   XZ=     0.0000   YZ=    -1.0200   ZZ=    24.0000
   Eigenvalues:    23.0500    24.0000    43.1770
 End of Minotr F.D. properties file

 Electric dipole moment (input orientation):
 ----------------------------------------------------------------------
                  au               Debye             10**-30 C m
   Tot        8.297587D-01     2.109110D+00     7.035086D+00
   x          0.000000D+00     0.000000D+00     0.000000D+00

 Dipole polarizability, Alpha (input orientation).
  Alpha : Dipole polarizability in the presence of a static electric field.
  Units = a.u.
 ----------------------------------------------------------------------
   iso        6.616342D+00     9.804016D-01     1.088942D+00
   aniso      9.279878D+00     1.375064D+00     1.527366D+00

 Normal termination of Gaussian 16
"#;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = PathBuf::from(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

#[test]
fn test_number_of_atoms() {
    let path = write_fixture("test_gaussian_natoms.log", WATER_LOG);
    let n = GaussianLog::open(&path).number_of_atoms().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(n, 3);
}

#[test]
fn test_number_of_atoms_missing_is_an_error() {
    let path = write_fixture(
        "test_gaussian_natoms_missing.log",
        " Entering Gaussian System, Link 0=g16\n Normal termination of Gaussian 16\n",
    );
    let result = GaussianLog::open(&path).number_of_atoms();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(ExtractError::PropertyNotFound("number of atoms"))
    ));
}

#[test]
fn test_scf_energies_in_file_order() {
    let path = write_fixture("test_gaussian_scf.log", WATER_LOG);
    let energies = GaussianLog::open(&path).scf_energies().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(energies, vec![-76.4589123401, -76.4589531203]);
}

#[test]
fn test_gibbs_free_energies() {
    let path = write_fixture("test_gaussian_gibbs.log", WATER_LOG);
    let energies = GaussianLog::open(&path).gibbs_free_energies().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(energies, vec![-76.445123]);
}

#[test]
fn test_geometries_one_per_step() {
    let path = write_fixture("test_gaussian_geometries.log", WATER_LOG);
    let geometries = GaussianLog::open(&path).geometries().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(geometries.len(), 2);
    for geometry in &geometries {
        assert_eq!(geometry.num_atoms, 3);
        assert_eq!(geometry.elements, vec!["O", "H", "H"]);
    }
    // First block, 5-decimal rounding applied.
    assert_eq!(geometries[0].atom_coords(1), [0.0, 0.76324, -0.47705]);
    // The last block is the converged geometry.
    assert_eq!(geometries[1].atom_coords(0), [0.0, 0.0, 0.11871]);
    assert_eq!(geometries[1].atom_coords(2), [0.0, -0.76143, -0.47484]);
}

#[test]
fn test_dipole_converts_fortran_exponent() {
    let path = write_fixture("test_gaussian_dipole.log", WATER_LOG);
    let dipole = GaussianLog::open(&path).dipole().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dipole, 0.8297587);
}

#[test]
fn test_polarizability() {
    let path = write_fixture("test_gaussian_polar.log", WATER_LOG);
    let (isotropic, anisotropic) = GaussianLog::open(&path).polarizability().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(isotropic, 6.616342);
    assert_eq!(anisotropic, 9.279878);
}

#[test]
fn test_orbital_energies_keep_apparition_order() {
    let path = write_fixture("test_gaussian_orbitals.log", WATER_LOG);
    let energies = GaussianLog::open(&path).orbital_energies().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(energies.occupied.len(), 5);
    assert_eq!(energies.virtuals.len(), 6);
    assert_eq!(energies.homo(), Some(-0.30929));
    assert_eq!(energies.lumo(), Some(0.06757));
}

#[test]
fn test_hirshfeld_charges_stop_at_total_row() {
    let path = write_fixture("test_gaussian_hirshfeld.log", WATER_LOG);
    let entries = GaussianLog::open(&path).hirshfeld_charges().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].element, "O");
    assert_eq!(entries[0].hirshfeld_charge, -0.312629);
    assert_eq!(entries[0].cm5_charge, -0.660046);
    assert_eq!(entries[2].atom_number, 3);
}

#[test]
fn test_nmr_tensors_skip_eigenvalue_lines() {
    let path = write_fixture("test_gaussian_nmr.log", WATER_LOG);
    let tensors = GaussianLog::open(&path).nmr_shielding_tensors().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(tensors.len(), 3);
    let oxygen = &tensors[&1];
    assert_eq!(oxygen.element, "O");
    assert_eq!(oxygen.isotropic, 323.576);
    assert_eq!(oxygen.anisotropy, 44.9091);
    // Three component lines with three pairs each; the Eigenvalues line
    // contributes nothing.
    assert_eq!(oxygen.components.len(), 9);
    assert_eq!(oxygen.components["XX"], 321.966);
    assert_eq!(oxygen.components["ZZ"], 308.3432);
    assert_eq!(tensors[&2].components["YZ"], 1.02);
    assert_eq!(tensors[&3].components["YZ"], -1.02);
}

#[test]
fn test_geometry_xyz_round_trip() {
    let log_path = write_fixture("test_gaussian_roundtrip.log", WATER_LOG);
    let geometries = GaussianLog::open(&log_path).geometries().unwrap();
    std::fs::remove_file(&log_path).unwrap();

    let last = &geometries[geometries.len() - 1];
    let xyz_path = Path::new("test_gaussian_roundtrip.xyz");
    io::write_xyz(last, "converged geometry", xyz_path).unwrap();
    let restored = io::read_xyz(xyz_path).unwrap();
    std::fs::remove_file(xyz_path).unwrap();

    assert_eq!(&restored, last);
}

//! qclog command-line interface.
//!
//! Thin orchestration layer over the library: picks the requested property,
//! runs the extraction, and prints the typed result. Property-not-found
//! conditions are reported to the user and exit with status 1.
//!
//! # Usage
//!
//! ```bash
//! # Number of atoms
//! qclog natoms water.log
//!
//! # Final geometry, written to an XYZ file
//! qclog geometry water.log water.xyz
//!
//! # Natural population analysis from the NBO7 sections
//! qclog npa water.log
//!
//! # Fukui indices from an xtb output
//! qclog fukui xtb.out
//! ```

use qclog::{io, ExtractError, GaussianLog, XtbLog};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .target(env_logger::Target::Stdout)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let command = args[1].as_str();
    let path = Path::new(&args[2]);
    let out_path = args.get(3).map(String::as_str);

    match run_command(command, path, out_path) {
        Ok(()) => {}
        Err(CommandError::UnknownCommand) => {
            eprintln!("Error: Unknown command: {}", command);
            print_usage(&args[0]);
            process::exit(1);
        }
        Err(CommandError::Extract(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

enum CommandError {
    UnknownCommand,
    Extract(ExtractError),
}

impl From<ExtractError> for CommandError {
    fn from(e: ExtractError) -> Self {
        CommandError::Extract(e)
    }
}

fn run_command(command: &str, path: &Path, out_path: Option<&str>) -> Result<(), CommandError> {
    match command {
        "natoms" => {
            println!("{}", GaussianLog::open(path).number_of_atoms()?);
        }
        "geometry" => {
            let geometries = GaussianLog::open(path).geometries()?;
            let last = &geometries[geometries.len() - 1];
            match out_path {
                Some(xyz) => {
                    let comment = format!("extracted from {}", path.display());
                    io::write_xyz(last, &comment, Path::new(xyz))?;
                    println!("Wrote {} atoms to {}", last.num_atoms, xyz);
                }
                None => {
                    for i in 0..last.num_atoms {
                        let [x, y, z] = last.atom_coords(i);
                        println!("{:<2}  {:>12.5}  {:>12.5}  {:>12.5}", last.atom_symbol(i), x, y, z);
                    }
                }
            }
        }
        "scf" => {
            for (step, energy) in GaussianLog::open(path).scf_energies()?.iter().enumerate() {
                println!("{:>4}  {:>16.8}", step + 1, energy);
            }
        }
        "gibbs" => {
            for (step, energy) in GaussianLog::open(path)
                .gibbs_free_energies()?
                .iter()
                .enumerate()
            {
                println!("{:>4}  {:>16.8}", step + 1, energy);
            }
        }
        "dipole" => {
            println!("{:.6}", GaussianLog::open(path).dipole()?);
        }
        "polarizability" => {
            let (isotropic, anisotropic) = GaussianLog::open(path).polarizability()?;
            println!("isotropic    {:>14.6}", isotropic);
            println!("anisotropic  {:>14.6}", anisotropic);
        }
        "orbitals" => {
            let energies = GaussianLog::open(path).orbital_energies()?;
            println!(
                "{} occupied, {} virtual orbitals",
                energies.occupied.len(),
                energies.virtuals.len()
            );
            if let Some(homo) = energies.homo() {
                println!("HOMO  {:>12.5} Eh", homo);
            }
            if let Some(lumo) = energies.lumo() {
                println!("LUMO  {:>12.5} Eh", lumo);
            }
        }
        "npa" => {
            println!(" Atom  No      Charge        Core     Valence     Rydberg       Total");
            for entry in GaussianLog::open(path).nbo().natural_population()? {
                println!(
                    "{:>5} {:>3}  {:>10.5}  {:>10.5}  {:>10.5}  {:>10.5}  {:>10.5}",
                    entry.atom,
                    entry.atom_number,
                    entry.natural_charge,
                    entry.core_population,
                    entry.valence_population,
                    entry.rydberg_population,
                    entry.total_population
                );
            }
        }
        "nbo" => {
            for orbital in GaussianLog::open(path).nbo().natural_bond_orbitals()? {
                let participants: Vec<String> = orbital
                    .descriptor
                    .participants
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                println!(
                    "{:>4}. {:<3} ({}) atoms {:<12} occ {:>8.5}  E {:>10.5}  deloc [{}]",
                    orbital.number,
                    orbital.descriptor.nbo_type,
                    orbital.descriptor.bond_order,
                    participants.join("-"),
                    orbital.occupancy,
                    orbital.energy,
                    orbital.delocalizations.join(",")
                );
            }
        }
        "perturbation" => {
            for entry in GaussianLog::open(path).nbo().perturbation_analysis()? {
                println!(
                    "{:>4}. {:<3} -> {:>4}. {:<3}   E(2) {:>7.2}  dE {:>6.2}  F {:>7.3}",
                    entry.donor_orbital,
                    entry.donor.nbo_type,
                    entry.acceptor_orbital,
                    entry.acceptor.nbo_type,
                    entry.energy,
                    entry.energy_difference,
                    entry.fock_term
                );
            }
        }
        "hirshfeld" => {
            println!(" No  Atom         Q-H       Q-CM5");
            for entry in GaussianLog::open(path).hirshfeld_charges()? {
                println!(
                    "{:>3}  {:<2}   {:>10.6}  {:>10.6}",
                    entry.atom_number, entry.element, entry.hirshfeld_charge, entry.cm5_charge
                );
            }
        }
        "nmr" => {
            for (atom_number, tensor) in GaussianLog::open(path).nmr_shielding_tensors()? {
                println!(
                    "{:>3} {:<2}  isotropic {:>10.4}  anisotropy {:>10.4}",
                    atom_number, tensor.element, tensor.isotropic, tensor.anisotropy
                );
            }
        }
        "fukui" => {
            println!(" No  Atom      f(+)      f(-)      f(0)");
            for (atom_number, entry) in XtbLog::open(path).fukui_indices()? {
                println!(
                    "{:>3}  {:<2}   {:>8.3}  {:>8.3}  {:>8.3}",
                    atom_number, entry.element, entry.f_plus, entry.f_minus, entry.f_zero
                );
            }
        }
        _ => return Err(CommandError::UnknownCommand),
    }
    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("qclog - property extraction from quantum-chemistry output files");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} <command> <output_file> [xyz_file]", program_name);
    eprintln!();
    eprintln!("Commands for Gaussian16 outputs:");
    eprintln!("  natoms           Number of atoms");
    eprintln!("  geometry         Final geometry; written to [xyz_file] when given");
    eprintln!("  scf              SCF energies per step (Hartree)");
    eprintln!("  gibbs            Gibbs free energies (Hartree)");
    eprintln!("  dipole           Dipole moment magnitude");
    eprintln!("  polarizability   Isotropic and anisotropic dipole polarizability");
    eprintln!("  orbitals         Orbital eigenvalue counts with HOMO/LUMO");
    eprintln!("  npa              Natural population analysis (NBO7)");
    eprintln!("  nbo              Natural bond orbital summary (NBO7)");
    eprintln!("  perturbation     Second-order perturbation analysis (NBO7)");
    eprintln!("  hirshfeld        Hirshfeld and CM5 charges");
    eprintln!("  nmr              GIAO magnetic shielding tensors");
    eprintln!();
    eprintln!("Commands for xtb outputs:");
    eprintln!("  fukui            Fukui reactivity indices");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} scf water.log", program_name);
    eprintln!("  {} geometry water.log water.xyz", program_name);
    eprintln!("  {} fukui xtb.out", program_name);
}

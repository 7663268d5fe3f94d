//! XYZ geometry file reading and writing.
//!
//! The XYZ format is a count line, a free-text comment line, and one
//! `Element X Y Z` row per atom. Coordinates are written at the 5-decimal
//! precision carried by [`Geometry`], so a write/read cycle reproduces the
//! geometry exactly.

use crate::error::{ExtractError, Result};
use crate::geometry::Geometry;
use crate::scan::LineCursor;
use std::fs;
use std::path::Path;

/// Writes a geometry to an XYZ file.
pub fn write_xyz(geometry: &Geometry, comment: &str, path: &Path) -> Result<()> {
    let mut content = format!("{}\n{}\n", geometry.num_atoms, comment);
    for i in 0..geometry.num_atoms {
        let [x, y, z] = geometry.atom_coords(i);
        content.push_str(&format!(
            "{}  {:.5}  {:.5}  {:.5}\n",
            geometry.atom_symbol(i),
            x,
            y,
            z
        ));
    }
    fs::write(path, content)?;
    Ok(())
}

/// Reads a geometry back from an XYZ file.
pub fn read_xyz(path: &Path) -> Result<Geometry> {
    let content = fs::read_to_string(path)?;
    let mut cursor = LineCursor::new(&content);
    let count_line = cursor
        .advance()
        .ok_or_else(|| ExtractError::malformed("XYZ", "empty file"))?;
    let num_atoms: usize = count_line
        .trim()
        .parse()
        .map_err(|_| ExtractError::malformed("XYZ", count_line))?;
    cursor.advance();
    let rows = cursor.take_count(num_atoms);
    if rows.len() < num_atoms {
        return Err(ExtractError::malformed(
            "XYZ",
            "file ends before the expected atom count",
        ));
    }
    let mut elements = Vec::with_capacity(num_atoms);
    let mut coords = Vec::with_capacity(num_atoms * 3);
    for row in rows {
        let fields: Vec<&str> = row.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(ExtractError::malformed("XYZ", row));
        }
        elements.push(fields[0].to_string());
        for field in &fields[1..4] {
            let value: f64 = field
                .parse()
                .map_err(|_| ExtractError::malformed("XYZ", row))?;
            coords.push(value);
        }
    }
    Ok(Geometry::new(elements, coords))
}

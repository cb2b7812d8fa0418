use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use crate::model::Molecule;

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

pub fn parse(path: &Path) -> io::Result<Molecule> {
    let file = File::open(path)?;
    let mut molecule = from_reader(io::BufReader::new(file))?;
    if molecule.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            molecule.name = stem.to_string_lossy().into_owned();
        }
    }
    Ok(molecule)
}

pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Molecule> {
    let mut lines = reader.lines();

    // 1. Number of Atoms
    let count_line = lines.next().ok_or_else(|| invalid("Empty XYZ file".into()))??;
    let n_atoms: usize = count_line
        .trim()
        .parse()
        .map_err(|_| invalid(format!("Invalid atom count {:?}", count_line.trim())))?;

    // 2. Comment line doubles as the molecule name
    let comment = lines.next().transpose()?.unwrap_or_default();
    let mut molecule = Molecule::new(comment.trim());

    // 3. Atoms
    for (i, line) in lines.enumerate() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 { continue; }

        let mut pos = [0.0; 3];
        for (k, axis) in ["x", "y", "z"].iter().enumerate() {
            pos[k] = parts[k + 1].parse().map_err(|_| {
                invalid(format!("Invalid {} on atom line {}: {:?}", axis, i + 1, parts[k + 1]))
            })?;
        }
        molecule.push(parts[0], pos);
    }

    if molecule.len() != n_atoms {
        log::warn!("XYZ header declares {} atoms, read {}", n_atoms, molecule.len());
    }
    Ok(molecule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_count_comment_and_rows() {
        let text = "3\nwater\nO 0.0 0.0 0.117\nH 0.0 0.757 -0.469\nH 0.0 -0.757 -0.469\n";
        let m = from_reader(Cursor::new(text)).unwrap();
        assert_eq!(m.name, "water");
        assert_eq!(m.len(), 3);
        assert_eq!(m.formula(), "H2O");
        assert!((m.atoms[1].position[1] - 0.757).abs() < 1e-12);
        // both hydrogens share one element record
        assert!(std::rc::Rc::ptr_eq(&m.atoms[1].element, &m.atoms[2].element));
    }

    #[test]
    fn short_rows_are_skipped() {
        let text = "2\n\nC 0 0 0\n\nC 1.5 0\nC 1.5 0 0 extra\n";
        let m = from_reader(Cursor::new(text)).unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn bad_count_is_invalid_data() {
        let err = from_reader(Cursor::new("three\n\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn bad_coordinate_is_invalid_data() {
        let err = from_reader(Cursor::new("1\nx\nC 0 zero 0\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn empty_input_is_invalid_data() {
        let err = from_reader(Cursor::new("")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}

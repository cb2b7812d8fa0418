// src/io/mod.rs
pub mod json;
pub mod xyz;

use crate::model::Molecule;
use std::io;
use std::path::Path;

pub fn load_molecule(path: &Path) -> io::Result<Molecule> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let molecule = match ext.as_str() {
        "xyz" => xyz::parse(path)?,
        "json" => json::parse(path)?,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unsupported molecule format: {:?}", path),
            ))
        }
    };

    log::info!(
        "Loaded {} ({}, {} atoms) from {:?}",
        molecule.name,
        molecule.formula(),
        molecule.len(),
        path
    );
    Ok(molecule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str, body: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("molspin-io-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn dispatches_on_extension() {
        let xyz = scratch("nh3.XYZ", "4\n\nN 0 0 0\nH 0.94 0 -0.38\nH -0.47 0.81 -0.38\nH -0.47 -0.81 -0.38\n");
        let m = load_molecule(&xyz).unwrap();
        assert_eq!(m.formula(), "H3N");
        // blank comment falls back to the file stem
        assert_eq!(m.name, "nh3");

        let json = scratch("h2.json", r#"{ "atoms": [ { "element": "H", "position": [0, 0, 0] }, { "element": "H", "position": [0.74, 0, 0] } ] }"#);
        assert_eq!(load_molecule(&json).unwrap().formula(), "H2");
    }

    #[test]
    fn unknown_extension_is_invalid_input() {
        let path = scratch("water.pdb", "");
        assert_eq!(load_molecule(&path).unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join("molspin-io-does-not-exist.xyz");
        assert_eq!(load_molecule(&path).unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}

// src/io/json.rs
// { "name": "...", "atoms": [ { "element": "C", "position": [x, y, z] } ] }

use crate::model::Molecule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct AtomRecord {
    pub element: String,
    pub position: [f64; 3],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoleculeFile {
    #[serde(default)]
    pub name: String,
    pub atoms: Vec<AtomRecord>,
}

impl From<MoleculeFile> for Molecule {
    fn from(file: MoleculeFile) -> Self {
        let mut molecule = Molecule::new(file.name);
        for atom in &file.atoms {
            molecule.push(atom.element.trim(), atom.position);
        }
        molecule
    }
}

pub fn from_str(text: &str) -> io::Result<Molecule> {
    let file: MoleculeFile = serde_json::from_str(text)?;
    Ok(file.into())
}

pub fn parse(path: &Path) -> io::Result<Molecule> {
    let text = fs::read_to_string(path)?;
    let mut molecule = from_str(&text)?;
    if molecule.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            molecule.name = stem.to_string_lossy().into_owned();
        }
    }
    Ok(molecule)
}

// src/model/samples.rs
//
// Small built-in molecules for the viewer when no file is given.
// Coordinates are in angstroms.

use super::molecule::Molecule;

pub fn water() -> Molecule {
    let mut m = Molecule::new("Water");
    m.push("O", [0.0, 0.0, 0.1173]);
    m.push("H", [0.0, 0.7572, -0.4692]);
    m.push("H", [0.0, -0.7572, -0.4692]);
    m
}

pub fn methane() -> Molecule {
    let mut m = Molecule::new("Methane");
    m.push("C", [0.0, 0.0, 0.0]);
    m.push("H", [0.6291, 0.6291, 0.6291]);
    m.push("H", [-0.6291, -0.6291, 0.6291]);
    m.push("H", [-0.6291, 0.6291, -0.6291]);
    m.push("H", [0.6291, -0.6291, -0.6291]);
    m
}

pub fn carbon_dioxide() -> Molecule {
    let mut m = Molecule::new("Carbon Dioxide");
    m.push("C", [0.0, 0.0, 0.0]);
    m.push("O", [1.16, 0.0, 0.0]);
    m.push("O", [-1.16, 0.0, 0.0]);
    m
}

pub fn ammonia() -> Molecule {
    let mut m = Molecule::new("Ammonia");
    m.push("N", [0.0, 0.0, 0.1106]);
    m.push("H", [0.0, 0.9377, -0.2581]);
    m.push("H", [0.8121, -0.4689, -0.2581]);
    m.push("H", [-0.8121, -0.4689, -0.2581]);
    m
}

pub fn ethanol() -> Molecule {
    let mut m = Molecule::new("Ethanol");
    m.push("C", [-1.1849, -0.3855, 0.0]);
    m.push("C", [0.0, 0.5548, 0.0]);
    m.push("O", [1.1956, -0.2134, 0.0]);
    m.push("H", [-2.1223, 0.1764, 0.0]);
    m.push("H", [-1.1549, -1.0303, 0.8838]);
    m.push("H", [-1.1549, -1.0303, -0.8838]);
    m.push("H", [-0.0355, 1.2010, 0.8829]);
    m.push("H", [-0.0355, 1.2010, -0.8829]);
    m.push("H", [1.9600, 0.3728, 0.0]);
    m
}

/// Looks a sample up by case-insensitive name.
pub fn by_name(name: &str) -> Option<Molecule> {
    match name.to_ascii_lowercase().as_str() {
        "water" | "h2o" => Some(water()),
        "methane" | "ch4" => Some(methane()),
        "carbon dioxide" | "co2" => Some(carbon_dioxide()),
        "ammonia" | "nh3" => Some(ammonia()),
        "ethanol" => Some(ethanol()),
        _ => None,
    }
}

// src/model/elements.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear RGB color, each component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Moves every channel toward white by `factor` (0 = unchanged, 1 = white).
    pub fn brighter(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::new(
            self.r + (1.0 - self.r) * f,
            self.g + (1.0 - self.g) * f,
            self.b + (1.0 - self.b) * f,
        )
        .clamped()
    }

    /// Scales every channel toward black by `factor` (0 = unchanged, 1 = black).
    pub fn darker(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::new(self.r * (1.0 - f), self.g * (1.0 - f), self.b * (1.0 - f)).clamped()
    }

    fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

/// Typed cache key for per-element resources.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(String);

impl ElementKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chemical element as the renderer sees it.
///
/// `radius` is in renderer units (picometre-like), the same units projected
/// positions end up in after scaling angstrom coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub symbol: String,
    pub radius: f64,
    pub color: Rgb,
}

impl Element {
    pub fn new(symbol: impl Into<String>, radius: f64, color: Rgb) -> Self {
        Self {
            symbol: symbol.into(),
            radius,
            color,
        }
    }

    /// Resolves a symbol against the built-in table. Unknown symbols get a
    /// loud magenta placeholder so they stand out on screen.
    pub fn from_symbol(symbol: &str) -> Self {
        match get_element_properties(symbol) {
            Some((radius, color)) => Self::new(symbol, radius, color),
            None => {
                log::warn!("Unknown element '{}', using placeholder", symbol);
                Self::new(symbol, UNKNOWN_RADIUS, UNKNOWN_COLOR)
            }
        }
    }

    pub fn key(&self) -> ElementKey {
        ElementKey(self.symbol.clone())
    }
}

const UNKNOWN_RADIUS: f64 = 100.0;
const UNKNOWN_COLOR: Rgb = Rgb::new(1.00, 0.08, 0.58);

/// Returns (covalent radius in pm, CPK color) for a symbol.
pub fn get_element_properties(symbol: &str) -> Option<(f64, Rgb)> {
    let props = match symbol {
        // --- Period 1 ---
        "H"  => (37.0, Rgb::new(1.00, 1.00, 1.00)),
        "He" => (32.0, Rgb::new(0.85, 1.00, 1.00)),

        // --- Period 2 ---
        "Li" => (134.0, Rgb::new(0.80, 0.50, 1.00)),
        "Be" => (90.0, Rgb::new(0.76, 1.00, 0.00)),
        "B"  => (82.0, Rgb::new(1.00, 0.70, 0.70)),
        "C"  => (77.0, Rgb::new(0.70, 0.70, 0.70)),
        "N"  => (75.0, Rgb::new(0.19, 0.31, 0.97)),
        "O"  => (73.0, Rgb::new(1.00, 0.05, 0.05)),
        "F"  => (71.0, Rgb::new(0.56, 0.88, 0.31)),
        "Ne" => (69.0, Rgb::new(0.70, 0.89, 0.96)),

        // --- Period 3 ---
        "Na" => (154.0, Rgb::new(0.67, 0.36, 0.95)),
        "Mg" => (130.0, Rgb::new(0.54, 1.00, 0.00)),
        "Al" => (118.0, Rgb::new(0.75, 0.65, 0.65)),
        "Si" => (111.0, Rgb::new(0.94, 0.78, 0.63)),
        "P"  => (106.0, Rgb::new(1.00, 0.50, 0.00)),
        "S"  => (102.0, Rgb::new(1.00, 1.00, 0.19)),
        "Cl" => (99.0, Rgb::new(0.12, 0.94, 0.12)),
        "Ar" => (97.0, Rgb::new(0.50, 0.82, 0.89)),

        // --- Period 4 (halogens and a few metals) ---
        "K"  => (196.0, Rgb::new(0.56, 0.25, 0.83)),
        "Ca" => (174.0, Rgb::new(0.24, 1.00, 0.00)),
        "Fe" => (125.0, Rgb::new(0.88, 0.40, 0.20)),
        "Cu" => (138.0, Rgb::new(0.78, 0.50, 0.20)),
        "Zn" => (131.0, Rgb::new(0.49, 0.50, 0.69)),
        "Br" => (114.0, Rgb::new(0.65, 0.16, 0.16)),

        // --- Period 5 ---
        "I"  => (133.0, Rgb::new(0.58, 0.00, 0.58)),

        _ => return None,
    };
    Some(props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brighter_moves_toward_white() {
        let c = Rgb::new(0.2, 0.4, 1.0).brighter(0.5);
        assert!((c.r - 0.6).abs() < 1e-12);
        assert!((c.g - 0.7).abs() < 1e-12);
        assert!((c.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn darker_scales_toward_black() {
        let c = Rgb::new(0.5, 1.0, 0.0).darker(0.4);
        assert!((c.r - 0.3).abs() < 1e-12);
        assert!((c.g - 0.6).abs() < 1e-12);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn factors_are_clamped() {
        assert_eq!(Rgb::new(0.3, 0.3, 0.3).brighter(7.0), Rgb::WHITE);
        assert_eq!(Rgb::new(0.3, 0.3, 0.3).darker(-1.0), Rgb::new(0.3, 0.3, 0.3));
    }

    #[test]
    fn unknown_symbol_gets_placeholder() {
        let e = Element::from_symbol("Xx");
        assert_eq!(e.symbol, "Xx");
        assert_eq!(e.radius, UNKNOWN_RADIUS);
        assert_eq!(e.color, UNKNOWN_COLOR);
    }

    #[test]
    fn key_is_symbol() {
        assert_eq!(Element::from_symbol("C").key().as_str(), "C");
        assert_ne!(Element::from_symbol("C").key(), Element::from_symbol("Cl").key());
    }
}

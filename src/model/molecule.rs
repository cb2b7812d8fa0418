use super::elements::Element;
use std::collections::BTreeMap;
use std::rc::Rc;

/// An atom as handed to the renderer: element plus a model-space
/// coordinate in angstroms.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceAtom {
    pub element: Rc<Element>,
    pub position: [f64; 3],
}

impl SourceAtom {
    pub fn new(element: Rc<Element>, position: [f64; 3]) -> Self {
        Self { element, position }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<SourceAtom>,
}

impl Molecule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atoms: Vec::new(),
        }
    }

    /// Appends an atom, sharing one `Element` per symbol across the molecule.
    pub fn push(&mut self, symbol: &str, position: [f64; 3]) {
        let element = self
            .atoms
            .iter()
            .find(|a| a.element.symbol == symbol)
            .map(|a| a.element.clone())
            .unwrap_or_else(|| Rc::new(Element::from_symbol(symbol)));
        self.atoms.push(SourceAtom::new(element, position));
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Element counts in alphabetical order, e.g. "C2H6O".
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.symbol.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(el, n)| if n == 1 { el.to_string() } else { format!("{}{}", el, n) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shares_elements() {
        let mut m = Molecule::new("water");
        m.push("O", [0.0, 0.0, 0.0]);
        m.push("H", [0.96, 0.0, 0.0]);
        m.push("H", [-0.24, 0.93, 0.0]);
        assert_eq!(m.len(), 3);
        assert!(Rc::ptr_eq(&m.atoms[1].element, &m.atoms[2].element));
    }

    #[test]
    fn formula_counts_elements() {
        let mut m = Molecule::new("ethanol");
        for s in ["C", "C", "O", "H", "H", "H", "H", "H", "H"] {
            m.push(s, [0.0; 3]);
        }
        assert_eq!(m.formula(), "C2H6O");
        assert_eq!(Molecule::new("empty").formula(), "");
    }
}

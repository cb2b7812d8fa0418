//src/model/mod.rs
pub mod elements;
pub mod molecule;
pub mod samples;

// Re-exports for cleaner imports
pub use elements::{Element, ElementKey, Rgb};
pub use molecule::{Molecule, SourceAtom};

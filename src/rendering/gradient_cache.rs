// src/rendering/gradient_cache.rs
// Per-scene shading cache, one gradient per element.

use super::primitives::ShadingGradient;
use crate::model::{Element, ElementKey};
use std::collections::HashMap;
use std::rc::Rc;

/// Cache statistics, mostly for debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Lazily built gradients keyed by element. Entries are immutable once
/// created; the cache lives as long as the scene that owns it.
#[derive(Debug, Default)]
pub struct GradientCache {
    cache: HashMap<ElementKey, Rc<ShadingGradient>>,
    hits: u64,
    misses: u64,
}

impl GradientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the element's gradient, building it on first use.
    pub fn get_or_insert(&mut self, element: &Element) -> Rc<ShadingGradient> {
        let key = element.key();
        if let Some(g) = self.cache.get(&key) {
            self.hits += 1;
            return g.clone();
        }

        self.misses += 1;
        log::debug!("Building shading gradient for {}", key);
        let gradient = Rc::new(ShadingGradient::for_element(element));
        self.cache.insert(key, gradient.clone());
        gradient
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_once_per_element() {
        let mut cache = GradientCache::new();
        let c = Element::from_symbol("C");
        let h = Element::from_symbol("H");

        let g1 = cache.get_or_insert(&c);
        let g2 = cache.get_or_insert(&c);
        let _ = cache.get_or_insert(&h);

        assert!(Rc::ptr_eq(&g1, &g2));
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 2,
                hits: 1,
                misses: 2
            }
        );
    }

    #[test]
    fn starts_empty() {
        let cache = GradientCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}

use indexmap::{IndexMap, map::Entry};

use crate::{CompiledPattern, Error};

/// Compiled patterns keyed by their raw notation, in insertion order.
///
/// This is the shape of a certification listing: many model number families,
/// queried with one (possibly partial) model number at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "Vec<CompiledPattern>", from = "Vec<CompiledPattern>")]
pub struct PatternSet {
    patterns: IndexMap<Box<str>, CompiledPattern, ahash::RandomState>,
}

impl PatternSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and add a notation. Adding the same notation twice returns the
    /// existing pattern.
    pub fn insert(&mut self, raw: &str) -> Result<&CompiledPattern, Error> {
        match self.patterns.entry(raw.into()) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let pattern = CompiledPattern::compile(raw)?;
                Ok(&*entry.insert(pattern))
            }
        }
    }

    /// Add an already compiled pattern, replacing any pattern with the same
    /// raw notation.
    pub fn insert_compiled(&mut self, pattern: CompiledPattern) -> Option<CompiledPattern> {
        self.patterns.insert(pattern.raw().into(), pattern)
    }

    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&CompiledPattern> {
        self.patterns.get(raw)
    }

    pub fn remove(&mut self, raw: &str) -> Option<CompiledPattern> {
        self.patterns.shift_remove(raw)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.values()
    }

    /// Every pattern that accepts `candidate` as a partial model number.
    pub fn matching<'a>(&'a self, candidate: &'a str) -> impl Iterator<Item = &'a CompiledPattern> + 'a {
        self.iter().filter(move |pattern| pattern.matches(candidate))
    }
}

impl FromIterator<CompiledPattern> for PatternSet {
    fn from_iter<T: IntoIterator<Item = CompiledPattern>>(iter: T) -> Self {
        let mut set = Self::default();
        for pattern in iter {
            set.insert_compiled(pattern);
        }
        set
    }
}

impl From<Vec<CompiledPattern>> for PatternSet {
    fn from(patterns: Vec<CompiledPattern>) -> Self {
        patterns.into_iter().collect()
    }
}

impl From<PatternSet> for Vec<CompiledPattern> {
    fn from(set: PatternSet) -> Self {
        set.patterns.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a CompiledPattern;
    type IntoIter = indexmap::map::Values<'a, Box<str>, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.values()
    }
}

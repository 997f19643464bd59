use mnr_parser::{FragmentKind, FragmentSequence};

use crate::Error;

/// A model number notation and the fragments it was rewritten into.
///
/// Compiling happens once; [`CompiledPattern::matches`] can then be called
/// any number of times, from any number of threads.
#[derive(Clone)]
pub struct CompiledPattern {
    raw: Box<str>,
    fragments: FragmentSequence,
    pattern: Box<str>,
    regex: Box<regex::Regex>,
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.fragments == other.fragments
    }
}

impl Eq for CompiledPattern {}

impl std::hash::Hash for CompiledPattern {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.fragments.hash(state);
    }
}

impl CompiledPattern {
    pub fn compile(raw: &str) -> Result<Self, Error> {
        let fragments = mnr_parser::rewrite(raw)?;
        let compiled = Self::from_parts(raw, fragments)?;
        tracing::debug!("Compiled {compiled}");
        Ok(compiled)
    }

    /// Replace this pattern with a newly compiled notation. On error, the
    /// pattern is left untouched.
    pub fn recompile(&mut self, raw: &str) -> Result<&mut Self, Error> {
        *self = Self::compile(raw)?;
        Ok(self)
    }

    /// Assemble a pattern from fragments that were produced earlier, e.g.
    /// when loading it from storage.
    pub fn from_parts(raw: &str, fragments: FragmentSequence) -> Result<Self, Error> {
        if raw.is_empty() {
            return Err(mnr_parser::Error::InvalidInput.into());
        }
        let regex = build_regex(&fragments)?;
        Ok(Self {
            raw: raw.into(),
            pattern: fragments.pattern().into_boxed_str(),
            fragments,
            regex: Box::new(regex),
        })
    }

    /// The notation as it was submitted.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical regex text.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &FragmentSequence {
        &self.fragments
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True if nothing precedes the equipment options, e.g. `+TDR`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True if `candidate`, which may be incomplete, is consistent with the
    /// start of this pattern. See [`crate::partial`].
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        crate::partial::matches(&self.fragments, candidate)
    }

    /// True if `candidate` is a complete model number of this family.
    #[inline]
    #[must_use]
    pub fn matches_exactly(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The anchored regex equivalent to the whole pattern.
    #[inline]
    #[must_use]
    pub fn regex(&self) -> &regex::Regex {
        &self.regex
    }
}

fn build_regex(fragments: &FragmentSequence) -> Result<regex::Regex, regex::Error> {
    let mut regex_pattern = String::from("^");
    for fragment in fragments {
        match fragment.kind() {
            FragmentKind::Literal(lit) => regex_pattern.push_str(&regex::escape(lit)),
            FragmentKind::OneOf(options) => {
                regex_pattern.push_str("(?:");
                for (i, option) in options.iter().enumerate() {
                    if i != 0 {
                        regex_pattern.push('|');
                    }
                    regex_pattern.push_str(&regex::escape(option));
                }
                regex_pattern.push(')');
            }
            // Wildcards and optional hyphens have no user text in them.
            _ => regex_pattern.push_str(fragment.pattern()),
        }
    }
    regex_pattern.push('$');

    regex::RegexBuilder::new(&regex_pattern).unicode(true).build()
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.raw, self.pattern)
    }
}

impl std::fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("raw", &self.raw)
            .field("fragments", &self.fragments)
            .finish_non_exhaustive()
    }
}

/// Plain-data form of a compiled pattern: the raw notation and its
/// fragments.
#[derive(serde::Deserialize)]
#[serde(rename = "CompiledPattern")]
struct CompiledPatternRepr {
    raw: String,
    fragments: FragmentSequence,
}

impl serde::Serialize for CompiledPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct as _;
        let mut state = serializer.serialize_struct("CompiledPattern", 2)?;
        state.serialize_field("raw", &*self.raw)?;
        state.serialize_field("fragments", &self.fragments)?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for CompiledPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CompiledPatternRepr::deserialize(deserializer)?;
        CompiledPattern::from_parts(&repr.raw, repr.fragments).map_err(serde::de::Error::custom)
    }
}

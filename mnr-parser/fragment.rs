use std::fmt::Write as _;

use crate::Error;

/// Pattern text of the `(*)` wildcard.
pub const BOUNDED_WILDCARD: &str = r"(\w{1,5})";
/// Pattern text of a trailing lone `*`.
pub const OPEN_WILDCARD: &str = r"\w+";

/// Minimum number of characters a fragment consumes.
///
/// Serialized as a plain integer, with `-1` standing in for `Unbounded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "i64", from = "i64")]
pub enum MinSize {
    Bounded(usize),
    /// The fragment can consume a varying number of characters (including
    /// none), so its length never decides a partial match.
    Unbounded,
}

impl MinSize {
    /// True if a remainder of `len` characters is too short to satisfy this
    /// fragment.
    #[inline]
    #[must_use]
    pub fn exceeds(self, len: usize) -> bool {
        matches!(self, MinSize::Bounded(n) if n > len)
    }
}

impl From<MinSize> for i64 {
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: MinSize) -> Self {
        match value {
            MinSize::Bounded(n) => n as i64,
            MinSize::Unbounded => -1,
        }
    }
}

impl From<i64> for MinSize {
    fn from(value: i64) -> Self {
        usize::try_from(value).map_or(MinSize::Unbounded, MinSize::Bounded)
    }
}

impl std::fmt::Display for MinSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MinSize::Bounded(n) => write!(f, "{n}"),
            MinSize::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// The shape of a fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A run of word characters, matched verbatim.
    Literal(String),
    /// `(a|b|...)`
    OneOf(Vec<String>),
    /// A number of single-character wildcards, `\w\w...`.
    AnyChars(usize),
    /// `\w+`
    OneOrMore,
    /// A number of optional hyphens, `-?-?...`.
    OptionalHyphens(usize),
    /// `(\w{1,5})`
    BoundedWildcard,
}

impl FragmentKind {
    /// Recover the shape of a fragment from its pattern text.
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        match pattern {
            "" => return None,
            BOUNDED_WILDCARD => return Some(Self::BoundedWildcard),
            OPEN_WILDCARD => return Some(Self::OneOrMore),
            _ => (),
        }

        if let Some(inner) = pattern
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Some(Self::OneOf(inner.split('|').map(ToOwned::to_owned).collect()));
        }

        if pattern.chars().all(crate::is_word_char) {
            return Some(Self::Literal(pattern.to_owned()));
        }

        let repeats = |unit: &str| {
            let count = pattern.len() / unit.len();
            (pattern.len() % unit.len() == 0 && pattern == unit.repeat(count)).then_some(count)
        };
        repeats(r"\w")
            .map(Self::AnyChars)
            .or_else(|| repeats("-?").map(Self::OptionalHyphens))
    }
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentKind::Literal(s) => f.write_str(s),
            FragmentKind::OneOf(one_of) => {
                f.write_char('(')?;
                for (i, s) in one_of.iter().enumerate() {
                    if i > 0 {
                        f.write_char('|')?;
                    }
                    f.write_str(s)?;
                }
                f.write_char(')')
            }
            FragmentKind::AnyChars(n) => (0..*n).try_for_each(|_| f.write_str(r"\w")),
            FragmentKind::OneOrMore => f.write_str(OPEN_WILDCARD),
            FragmentKind::OptionalHyphens(n) => (0..*n).try_for_each(|_| f.write_str("-?")),
            FragmentKind::BoundedWildcard => f.write_str(BOUNDED_WILDCARD),
        }
    }
}

/// One normalized piece of a compiled model number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "FragmentRepr", try_from = "FragmentRepr")]
pub struct Fragment {
    kind: FragmentKind,
    min_size: MinSize,
    pattern: Box<str>,
}

impl Fragment {
    #[must_use]
    pub fn new(kind: FragmentKind, min_size: MinSize) -> Self {
        let pattern = kind.to_string().into_boxed_str();
        Self {
            kind,
            min_size,
            pattern,
        }
    }

    /// The regex text of this fragment.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn min_size(&self) -> MinSize {
        self.min_size
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &FragmentKind {
        &self.kind
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Plain-data form of a fragment: its pattern text and minimum size.
#[derive(serde::Serialize, serde::Deserialize)]
struct FragmentRepr {
    pattern: String,
    min_size: MinSize,
}

impl From<Fragment> for FragmentRepr {
    fn from(fragment: Fragment) -> Self {
        FragmentRepr {
            pattern: fragment.pattern.into(),
            min_size: fragment.min_size,
        }
    }
}

impl TryFrom<FragmentRepr> for Fragment {
    type Error = Error;

    fn try_from(repr: FragmentRepr) -> Result<Self, Self::Error> {
        let kind = FragmentKind::from_pattern(&repr.pattern)
            .ok_or_else(|| Error::UnrecognizedFragment(repr.pattern.clone()))?;
        Ok(Fragment {
            kind,
            min_size: repr.min_size,
            pattern: repr.pattern.into_boxed_str(),
        })
    }
}

/// The ordered fragments of one compiled model number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FragmentSequence(Box<[Fragment]>);

impl FragmentSequence {
    /// The canonical regex text: every fragment's pattern, in order.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.0.iter().map(Fragment::pattern).collect()
    }
}

impl std::ops::Deref for FragmentSequence {
    type Target = [Fragment];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Fragment>> for FragmentSequence {
    #[inline]
    fn from(fragments: Vec<Fragment>) -> Self {
        Self(fragments.into_boxed_slice())
    }
}

impl FromIterator<Fragment> for FragmentSequence {
    fn from_iter<T: IntoIterator<Item = Fragment>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FragmentSequence {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_pattern() {
        assert_eq!(
            FragmentKind::from_pattern("ABC123"),
            Some(FragmentKind::Literal("ABC123".to_owned()))
        );
        assert_eq!(
            FragmentKind::from_pattern("(AB|CD|)"),
            Some(FragmentKind::OneOf(vec![
                "AB".to_owned(),
                "CD".to_owned(),
                String::new()
            ]))
        );
        assert_eq!(
            FragmentKind::from_pattern(r"\w\w\w"),
            Some(FragmentKind::AnyChars(3))
        );
        assert_eq!(FragmentKind::from_pattern(r"\w+"), Some(FragmentKind::OneOrMore));
        assert_eq!(
            FragmentKind::from_pattern("-?-?"),
            Some(FragmentKind::OptionalHyphens(2))
        );
        assert_eq!(
            FragmentKind::from_pattern(r"(\w{1,5})"),
            Some(FragmentKind::BoundedWildcard)
        );
        assert_eq!(FragmentKind::from_pattern(r"\w-?"), None);
        assert_eq!(FragmentKind::from_pattern(""), None);
    }

    #[test]
    fn min_size_sentinel() {
        assert_eq!(i64::from(MinSize::Unbounded), -1);
        assert_eq!(MinSize::from(-1), MinSize::Unbounded);
        assert_eq!(MinSize::from(3), MinSize::Bounded(3));
        assert!(MinSize::Bounded(3).exceeds(2));
        assert!(!MinSize::Bounded(3).exceeds(3));
        assert!(!MinSize::Unbounded.exceeds(0));
    }

    #[test]
    fn fragment_json() {
        let fragment = Fragment::new(FragmentKind::OptionalHyphens(2), MinSize::Unbounded);
        let json = serde_json::to_string(&fragment).unwrap();
        assert_eq!(json, r#"{"pattern":"-?-?","min_size":-1}"#);
        let back: Fragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fragment);

        let err = serde_json::from_str::<Fragment>(r#"{"pattern":"\\d+","min_size":1}"#);
        assert!(err.is_err());
    }
}

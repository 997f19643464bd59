/// Byte range within a raw model number notation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub start: Offset,
    pub end: Offset,
}

impl std::fmt::Debug for Span {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Offset(pub u32);

impl From<std::ops::Range<usize>> for Span {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: std::ops::Range<usize>) -> Self {
        Self {
            start: Offset(value.start as u32),
            end: Offset(value.end as u32),
        }
    }
}

impl From<Span> for std::ops::Range<usize> {
    #[inline]
    fn from(value: Span) -> Self {
        value.start.0 as usize..value.end.0 as usize
    }
}

#[must_use]
pub fn span(span: std::ops::Range<usize>) -> Span {
    span.into()
}

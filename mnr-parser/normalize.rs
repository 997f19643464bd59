use std::ops::Range;

use winnow::{
    Parser as _,
    combinator::{alt, terminated},
    token::take_while,
    ModalResult,
};

/// A raw notation after the equipment options are cut off and slashes are
/// folded into commas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    text: String,
    /// Length of the significant part of the raw notation.
    raw_len: usize,
    /// Byte range in the raw notation of a `123/456` pair that was rewritten
    /// to `(123,456)`.
    grouped: Option<Range<usize>>,
}

impl Normalized {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        // Anything after `+` lists equipment options.
        let significant = raw.split_once('+').map_or(raw, |(head, _)| head);

        let grouped = find_digit_pair(significant);
        let mut text = String::with_capacity(significant.len() + 2);
        if let Some(ref range) = grouped {
            text.push_str(&significant[..range.start]);
            text.push('(');
            text.push_str(&significant[range.clone()]);
            text.push(')');
            text.push_str(&significant[range.end..]);
        } else {
            text.push_str(significant);
        }

        Self {
            text: text.replace('/', ","),
            raw_len: significant.len(),
            grouped,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the raw notation before the first `+`.
    #[inline]
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Map a byte offset in the normalized text back to the raw notation.
    #[must_use]
    pub fn raw_offset(&self, offset: usize) -> usize {
        match self.grouped {
            // Past the closing paren.
            Some(ref range) if offset > range.end + 1 => offset - 2,
            // Past the opening paren.
            Some(ref range) if offset > range.start => offset - 1,
            _ => offset,
        }
    }
}

/// Finds the leftmost `\d{2,3}/\d{2,3}`.
fn find_digit_pair(text: &str) -> Option<Range<usize>> {
    text.char_indices().find_map(|(start, _)| {
        let mut input = &text[start..];
        let matched = digit_pair.parse_next(&mut input).ok()?;
        Some(start..start + matched.len())
    })
}

fn digit_pair<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        alt((
            terminated(take_while(3, is_digit), '/'),
            terminated(take_while(2, is_digit), '/'),
        )),
        take_while(2..=3, is_digit),
    )
        .take()
        .parse_next(input)
}

#[inline]
fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

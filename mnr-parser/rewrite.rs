use mnr_util::span;

use crate::{Error, FragmentSequence, Normalized, rules};

/// Number of consecutive attempts without progress before the notation is
/// considered malformed.
pub const MAX_STALLED_ATTEMPTS: usize = 3;

/// Rewrite a raw model number notation into its fragments.
///
/// The notation is consumed from left to right. On every step the rules in
/// [`rules::RULES`] are tried in order against the remaining text, and the
/// first one that applies emits a fragment and trims what it consumed.
///
/// ```text
/// '(A,C,D,E)36B'  ->  []
///          '36B'  ->  ['(A|C|D|E)']
///             ''  ->  ['(A|C|D|E)', '36B']
/// ```
pub fn rewrite(raw: &str) -> Result<FragmentSequence, Error> {
    if raw.is_empty() {
        return Err(Error::InvalidInput);
    }

    let normalized = Normalized::new(raw);
    let mut cursor = normalized.text();
    let mut fragments = Vec::new();
    let mut stalled = 0;

    while !cursor.is_empty() {
        if let Some((rule, fragment, rest)) = rules::apply_first(cursor) {
            tracing::trace!(rule = rule.name, fragment = fragment.pattern(), rest, "Applied rule");
            fragments.push(fragment);
            cursor = rest;
            stalled = 0;
            continue;
        }

        stalled += 1;
        if stalled >= MAX_STALLED_ATTEMPTS {
            break;
        }
    }

    if !cursor.is_empty() {
        let consumed = normalized.text().len() - cursor.len();
        return Err(Error::MalformedPattern {
            remaining: cursor.to_owned(),
            span: span(normalized.raw_offset(consumed)..normalized.raw_len()),
        });
    }

    tracing::debug!(raw, fragments = fragments.len(), "Rewrote model number");
    Ok(fragments.into())
}

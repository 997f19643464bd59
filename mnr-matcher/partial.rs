//! Matching incomplete model numbers against compiled fragments.
//!
//! A candidate is accepted when it could be the beginning of a model number
//! of the family. Fragments are consumed in order; whenever the candidate
//! runs out in the middle of a fragment, the leftover text only has to be
//! consistent with the start of that fragment:
//!
//! - a literal accepts any prefix of itself,
//! - an option group accepts any prefix of one of its options,
//! - a run of `\w` wildcards that is longer than the leftover text accepts
//!   it without looking any further.
//!
//! Fragments that can match text of different lengths (option groups,
//! optional hyphens and the open and bounded wildcards) are tried with every
//! length they can consume, so `(*)ABC` accepts `XYZABC` even though the
//! wildcard alone could have swallowed `XYZAB`.

use ahash::HashSet;
use mnr_parser::{Fragment, FragmentKind, is_word_char};

/// Returns true if `candidate` is consistent with the start of `fragments`.
///
/// Empty candidates never match. Text left over after the last fragment is
/// ignored.
#[must_use]
pub fn matches(fragments: &[Fragment], candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let mut walk = Walk {
        fragments,
        candidate,
        pending: vec![(0, 0)],
        visited: HashSet::default(),
    };
    walk.run()
}

/// Depth-first search over `(fragment index, byte offset)` states.
///
/// A state either accepts the candidate outright or leads to the states
/// reached by consuming the fragment in each possible way. Every state is
/// expanded at most once, so the work is bounded by the number of fragments
/// times the length of the candidate, and the stack depth doesn't grow with
/// either.
struct Walk<'a> {
    fragments: &'a [Fragment],
    candidate: &'a str,
    /// States still to expand. The last one is expanded first.
    pending: Vec<(usize, usize)>,
    visited: HashSet<(usize, usize)>,
}

impl Walk<'_> {
    fn run(&mut self) -> bool {
        while let Some((index, offset)) = self.pending.pop() {
            if self.visited.insert((index, offset)) && self.expand(index, offset) {
                return true;
            }
        }
        false
    }

    /// Returns true if the state accepts; otherwise queues its successors.
    fn expand(&mut self, index: usize, offset: usize) -> bool {
        let (fragments, candidate) = (self.fragments, self.candidate);
        let Some(fragment) = fragments.get(index) else {
            return true;
        };
        let remainder = &candidate[offset..];
        if remainder.is_empty() {
            // The candidate stops exactly at a fragment boundary.
            return true;
        }

        if fragment.min_size().exceeds(remainder.chars().count()) {
            self.too_short(index, offset, fragment, remainder)
        } else {
            self.advance(index, offset, fragment, remainder);
            false
        }
    }

    /// The remainder is shorter than the fragment's minimum size.
    fn too_short(&mut self, index: usize, offset: usize, fragment: &Fragment, remainder: &str) -> bool {
        match fragment.kind() {
            FragmentKind::Literal(literal) => {
                let accepted = literal.starts_with(remainder);
                tracing::trace!(literal = literal.as_str(), remainder, accepted, "Partial literal");
                accepted
            }
            FragmentKind::OneOf(options) => self.one_of(index, offset, options, remainder),
            _ => {
                tracing::trace!(
                    pattern = fragment.pattern(),
                    remainder,
                    "Inconclusive, accepting"
                );
                true
            }
        }
    }

    /// Queue every way `fragment` can consume the front of `remainder`.
    /// Longer consumptions are queued last, so they are tried first.
    fn advance(&mut self, index: usize, offset: usize, fragment: &Fragment, remainder: &str) {
        let next = index + 1;
        match fragment.kind() {
            FragmentKind::Literal(literal) => {
                if remainder.starts_with(literal.as_str()) {
                    self.pending.push((next, offset + literal.len()));
                }
            }
            FragmentKind::OneOf(options) => {
                // Every option fits, so none of them accepts on its own.
                self.one_of(index, offset, options, remainder);
            }
            FragmentKind::AnyChars(count) => {
                let run = word_run(remainder, *count);
                if run.len() == *count {
                    self.pending.extend(run.last().map(|len| (next, offset + len)));
                }
            }
            FragmentKind::OneOrMore => {
                let run = word_run(remainder, usize::MAX);
                self.pending.extend(run.iter().map(|len| (next, offset + len)));
            }
            FragmentKind::BoundedWildcard => {
                let run = word_run(remainder, 5);
                self.pending.extend(run.iter().map(|len| (next, offset + len)));
            }
            FragmentKind::OptionalHyphens(count) => {
                let hyphens = remainder
                    .bytes()
                    .take(*count)
                    .take_while(|&b| b == b'-')
                    .count();
                self.pending.extend((0..=hyphens).map(|len| (next, offset + len)));
            }
        }
    }

    /// Options longer than the remainder only need to start with it; shorter
    /// ones must be matched in full before moving on to the next fragment.
    fn one_of(&mut self, index: usize, offset: usize, options: &[String], remainder: &str) -> bool {
        let mut accepted = false;
        for option in options.iter().rev() {
            if option.len() > remainder.len() {
                accepted |= option.starts_with(remainder);
            } else if remainder.starts_with(option.as_str()) {
                self.pending.push((index + 1, offset + option.len()));
            }
        }
        accepted
    }
}

/// Byte lengths of the first 1, 2, ... up to `max` characters of `s`, for as
/// long as they are word characters.
fn word_run(s: &str, max: usize) -> Vec<usize> {
    s.char_indices()
        .take(max)
        .take_while(|&(_, ch)| is_word_char(ch))
        .map(|(i, ch)| i + ch.len_utf8())
        .collect()
}

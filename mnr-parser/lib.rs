//! Rewrites manufacturer model number notations into normalized regex
//! fragments.
//!
//! Model numbers are submitted in loose pseudo-regex notations such as
//! `AB/CD/EF123***` or `(AB,CD,EF)123*`. [`rewrite`] normalizes them into a
//! [`FragmentSequence`] where each [`Fragment`] is one regex piece together
//! with the minimum number of characters it consumes.

mod error;
mod fragment;
mod normalize;
pub mod rules;
mod rewrite;

pub use error::*;
pub use fragment::*;
pub use normalize::*;
pub use rewrite::*;

/// Characters matched by `\w`.
#[inline]
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

//! Compiled model number patterns and the partial matcher.
//!
//! A [`CompiledPattern`] answers whether a candidate model number, which may
//! be cut short, is consistent with the start of a compiled notation. This is
//! the reverse of an ordinary regex match: the pattern is longer than the
//! string, not the other way around.
//!
//! ```
//! let pattern = mnr_matcher::compile("*AB,CD123(X1,Y1,Z1)4*").unwrap();
//! assert_eq!(pattern.pattern(), r"\w(AB|CD)123(X1|Y1|Z1)4\w+");
//! assert!(pattern.matches("TAB123Z4X"));
//! assert!(pattern.matches("TAB12"));
//! assert!(!pattern.matches("TXY"));
//! ```

mod compiled;
mod error;
pub mod partial;
mod set;
mod shared;

pub use compiled::*;
pub use error::*;
pub use set::*;
pub use shared::*;

pub use mnr_parser::{Fragment, FragmentKind, FragmentSequence, MinSize};

/// Compile a raw model number notation.
#[inline]
pub fn compile(raw: &str) -> Result<CompiledPattern, Error> {
    CompiledPattern::compile(raw)
}

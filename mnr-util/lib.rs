mod diagnostic;
mod span;

pub use diagnostic::*;
pub use span::*;

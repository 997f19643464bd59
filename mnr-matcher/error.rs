use std::sync::Arc;

use mnr_util::{AsDiagnostic, Diagnostic, DiagnosticFileId, Span};

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] mnr_parser::Error),
    #[error(transparent)]
    Regex(Arc<regex::Error>),
}

impl From<regex::Error> for Error {
    #[inline]
    fn from(err: regex::Error) -> Self {
        Self::Regex(Arc::new(err))
    }
}

impl Error {
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(err) => err.span(),
            Error::Regex(_) => None,
        }
    }

    #[must_use]
    pub fn diagnostic_in(&self, file: DiagnosticFileId) -> Diagnostic {
        match self {
            Error::Parse(err) => err.diagnostic_in(file),
            Error::Regex(err) => Diagnostic::new("E0004").title(err),
        }
    }
}

impl AsDiagnostic for Error {
    #[inline]
    fn as_diagnostic(&self) -> Diagnostic {
        self.diagnostic_in(DiagnosticFileId(0))
    }
}

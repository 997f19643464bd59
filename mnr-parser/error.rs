use mnr_util::{
    AnnotateLevelExt as _, AsDiagnostic, Diagnostic, DiagnosticFileId, Level, Span,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no model number specified")]
    InvalidInput,
    /// No rule could make sense of the rest of the notation.
    #[error("could not parse the remaining input `{remaining}`")]
    MalformedPattern {
        /// The unconsumed notation, after normalization.
        remaining: String,
        /// Where the unconsumed notation starts in the raw notation.
        span: Span,
    },
    #[error("unrecognized fragment pattern `{0}`")]
    UnrecognizedFragment(String),
}

impl Error {
    /// Where in the raw notation the error occurred, if known.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::MalformedPattern { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// Build the diagnostic for this error, pointing into the source with the
    /// given ID.
    #[must_use]
    pub fn diagnostic_in(&self, file: DiagnosticFileId) -> Diagnostic {
        match self {
            Error::InvalidInput => Level::Error
                .diagnostic("E0001")
                .title(self)
                .footer("model numbers must be non-empty"),
            Error::MalformedPattern { span, .. } => Level::Error
                .diagnostic("E0002")
                .title("malformed model number")
                .snippet(file.snippet([
                    Level::Error.annotation(*span, "no rule matches from here")
                ]))
                .footer(
                    "expected a literal, an option list like `(A,B)` or `A/B`, `*`, `-`, or `(*)`",
                ),
            Error::UnrecognizedFragment(_) => Level::Error.diagnostic("E0003").title(self),
        }
    }
}

impl AsDiagnostic for Error {
    #[inline]
    fn as_diagnostic(&self) -> Diagnostic {
        self.diagnostic_in(DiagnosticFileId(0))
    }
}

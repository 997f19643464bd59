use mnr_matcher::{CompiledPattern, Error};
use mnr_util::{DiagnosticFileId, DiagnosticFileRepository};

/// Renderer that reports results as log events, using `tracing`.
///
/// Note that logging must be enabled for this to actually do anything.
pub struct LogRenderer;

impl LogRenderer {
    pub fn new() -> Self {
        LogRenderer
    }
}

impl super::Render for LogRenderer {
    fn compiled(&self, pattern: &CompiledPattern, show_fragments: bool) {
        tracing::info!(raw = pattern.raw(), pattern = pattern.pattern(), "Compiled");
        if show_fragments {
            for (index, fragment) in pattern.fragments().iter().enumerate() {
                tracing::info!(
                    raw = pattern.raw(),
                    index,
                    pattern = fragment.pattern(),
                    min_size = %fragment.min_size(),
                    "Fragment",
                );
            }
        }
    }

    fn matched(&self, pattern: &CompiledPattern, candidate: &str, partial: bool, exact: Option<bool>) {
        tracing::info!(
            raw = pattern.raw(),
            candidate,
            partial,
            exact = ?exact,
            "Checked candidate",
        );
    }

    fn filtered(&self, candidate: &str, matching: &[&CompiledPattern], total: usize) {
        for pattern in matching {
            tracing::info!(raw = pattern.raw(), candidate, "Match");
        }
        tracing::info!(candidate, matched = matching.len(), total, "Filtered");
    }

    fn error(&self, sources: &dyn DiagnosticFileRepository, file: DiagnosticFileId, error: &Error) {
        let origin = sources.get_source(file).map(|source| source.origin);
        tracing::error!(origin = ?origin, "Error: {error}");
    }
}

use std::sync::Arc;

mod json;
mod log;
mod text;

use mnr_matcher::{CompiledPattern, Error};
use mnr_util::{DiagnosticFileId, DiagnosticFileRepository};

use crate::OutputChoice;

#[derive(Clone, Copy, Debug)]
pub struct OutputSettings {
    pub output: OutputChoice,
}

/// Receives the results of a command as they are produced.
pub trait Render {
    /// A notation compiled successfully.
    fn compiled(&self, pattern: &CompiledPattern, show_fragments: bool);
    /// A candidate was checked against a pattern. `exact` is only present
    /// when the complete match was requested.
    fn matched(&self, pattern: &CompiledPattern, candidate: &str, partial: bool, exact: Option<bool>);
    /// The patterns of a list that accept `candidate`, out of `total`.
    fn filtered(&self, candidate: &str, matching: &[&CompiledPattern], total: usize);
    /// A notation could not be compiled. The notation is source `file` in
    /// `sources`.
    fn error(&self, sources: &dyn DiagnosticFileRepository, file: DiagnosticFileId, error: &Error);
}

pub fn make_renderer(settings: OutputSettings) -> Arc<dyn Render> {
    match settings.output {
        OutputChoice::Json => Arc::new(json::JsonRenderer::new()),
        OutputChoice::Log => Arc::new(log::LogRenderer::new()),
        OutputChoice::Auto | OutputChoice::Text => Arc::new(text::TextRenderer::new()),
    }
}

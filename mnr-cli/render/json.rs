use mnr_matcher::{CompiledPattern, Error, FragmentSequence};
use mnr_util::{DiagnosticFileId, DiagnosticFileRepository, Span};

/// One JSON object per line on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        JsonRenderer
    }
}

fn emit(value: &impl serde::Serialize) {
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = serde_json::to_writer(&mut stdout, value) {
        tracing::error!("Could not write JSON output: {err}");
        return;
    }
    println!();
}

impl super::Render for JsonRenderer {
    fn compiled(&self, pattern: &CompiledPattern, show_fragments: bool) {
        #[derive(serde::Serialize)]
        #[serde(tag = "type")]
        struct Compiled<'a> {
            raw: &'a str,
            pattern: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            fragments: Option<&'a FragmentSequence>,
        }
        emit(&Compiled {
            raw: pattern.raw(),
            pattern: pattern.pattern(),
            fragments: show_fragments.then(|| pattern.fragments()),
        });
    }

    fn matched(&self, pattern: &CompiledPattern, candidate: &str, partial: bool, exact: Option<bool>) {
        #[derive(serde::Serialize)]
        #[serde(tag = "type")]
        struct Matched<'a> {
            raw: &'a str,
            candidate: &'a str,
            partial: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            exact: Option<bool>,
        }
        emit(&Matched {
            raw: pattern.raw(),
            candidate,
            partial,
            exact,
        });
    }

    fn filtered(&self, candidate: &str, matching: &[&CompiledPattern], total: usize) {
        #[derive(serde::Serialize)]
        #[serde(tag = "type")]
        struct Filtered<'a> {
            candidate: &'a str,
            matching: Vec<&'a str>,
            total: usize,
        }
        emit(&Filtered {
            candidate,
            matching: matching.iter().map(|pattern| pattern.raw()).collect(),
            total,
        });
    }

    fn error(&self, sources: &dyn DiagnosticFileRepository, file: DiagnosticFileId, error: &Error) {
        #[derive(serde::Serialize)]
        #[serde(tag = "type")]
        struct Failed<'a> {
            origin: Option<&'a str>,
            raw: Option<&'a str>,
            message: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            span: Option<Span>,
        }
        let source = sources.get_source(file);
        emit(&Failed {
            origin: source.map(|source| source.origin),
            raw: source.map(|source| source.source),
            message: error.to_string(),
            span: error.span(),
        });
    }
}

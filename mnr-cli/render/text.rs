use mnr_matcher::{CompiledPattern, Error};
use mnr_util::{DiagnosticFileId, DiagnosticFileRepository};
use owo_colors::OwoColorize as _;

/// Human-readable output. Results go to stdout, diagnostics to stderr, both
/// through `anstream` so colors are stripped where unsupported.
pub struct TextRenderer {
    diagnostics: annotate_snippets::Renderer,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            diagnostics: annotate_snippets::Renderer::styled(),
        }
    }
}

impl super::Render for TextRenderer {
    fn compiled(&self, pattern: &CompiledPattern, show_fragments: bool) {
        anstream::println!("{} -> {}", pattern.raw().bold(), pattern.pattern().green());
        if show_fragments {
            for fragment in pattern.fragments() {
                anstream::println!(
                    "    {:<16} {}",
                    fragment.pattern(),
                    format!("min {}", fragment.min_size()).dimmed()
                );
            }
        }
    }

    fn matched(&self, pattern: &CompiledPattern, candidate: &str, partial: bool, exact: Option<bool>) {
        let verdict = match (partial, exact) {
            (_, Some(true)) => "exact match".green().to_string(),
            (true, _) => "match".green().to_string(),
            (false, _) => "no match".red().to_string(),
        };
        anstream::println!("{} {verdict} {}", candidate.bold(), pattern.raw().dimmed());
    }

    fn filtered(&self, candidate: &str, matching: &[&CompiledPattern], total: usize) {
        for pattern in matching {
            anstream::println!("{}", pattern.raw());
        }
        anstream::eprintln!(
            "{} {candidate} matched {} of {total} patterns",
            "Filtered".bright_green().bold(),
            matching.len()
        );
    }

    fn error(&self, sources: &dyn DiagnosticFileRepository, file: DiagnosticFileId, error: &Error) {
        let diagnostic = error.diagnostic_in(file);
        anstream::eprintln!("{}", diagnostic.display(sources, &self.diagnostics));
    }
}

use std::{borrow::Cow, ops::Range};

pub use annotate_snippets::Level;
use indexmap::IndexMap;

pub trait AnnotateLevelExt {
    #[must_use]
    fn diagnostic(self, id: &'static str) -> Diagnostic;
    #[must_use]
    fn annotation(
        self,
        span: impl Into<Range<usize>>,
        message: impl std::fmt::Display,
    ) -> DiagnosticAnnotation;
}

impl AnnotateLevelExt for Level {
    #[inline]
    fn diagnostic(self, id: &'static str) -> Diagnostic {
        Diagnostic {
            id,
            level: self,
            title: String::new(),
            snippets: vec![],
            footer: vec![],
        }
    }

    fn annotation(
        self,
        span: impl Into<Range<usize>>,
        message: impl std::fmt::Display,
    ) -> DiagnosticAnnotation {
        DiagnosticAnnotation {
            span: span.into(),
            level: self,
            message: message.to_string(),
        }
    }
}

/// An error paired with the sources its diagnostic refers to.
#[derive(Clone, Copy)]
pub struct Annotated<T, R> {
    pub repository: R,
    pub error: T,
}

impl<T: std::fmt::Debug, R> std::fmt::Debug for Annotated<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.error.fmt(f)
    }
}

impl<T: AsDiagnostic, R: DiagnosticFileRepository> std::fmt::Display for Annotated<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let renderer = annotate_snippets::Renderer::styled();
        self.error.display(&self.repository, &renderer).fmt(f)
    }
}

impl<T, R> std::error::Error for Annotated<T, R>
where
    T: AsDiagnostic + std::error::Error,
    R: DiagnosticFileRepository,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

/// An arbitrary ID for a source in a diagnostic. A single notation rendered
/// on its own is always source 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiagnosticFileId(pub u32);

impl DiagnosticFileId {
    #[must_use]
    pub fn snippet(
        self,
        annotations: impl IntoIterator<Item = DiagnosticAnnotation>,
    ) -> DiagnosticSnippet {
        DiagnosticSnippet {
            file_id: self,
            annotations: annotations.into_iter().collect(),
        }
    }
}

/// The text a diagnostic points into, and where it came from.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticSource<'a> {
    pub origin: &'a str,
    pub source: &'a str,
}

impl<'a> DiagnosticSource<'a> {
    #[inline]
    #[must_use]
    pub fn new(origin: &'a str, source: &'a str) -> Self {
        Self { origin, source }
    }
}

pub trait DiagnosticFileRepository {
    fn get_source(&self, id: DiagnosticFileId) -> Option<DiagnosticSource<'_>>;
}

/// Sources keyed by origin, e.g. one entry per line of a pattern list.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticFileSourceMap {
    map: IndexMap<String, String>,
}

impl DiagnosticFileSourceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn insert(&mut self, origin: String, source: String) -> DiagnosticFileId {
        let (index, _) = self.map.insert_full(origin, source);
        DiagnosticFileId(index as u32)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl DiagnosticFileRepository for DiagnosticFileSourceMap {
    #[inline]
    fn get_source(&self, id: DiagnosticFileId) -> Option<DiagnosticSource<'_>> {
        self.map
            .get_index(id.0 as usize)
            .map(|(origin, source)| DiagnosticSource { origin, source })
    }
}

impl DiagnosticFileRepository for DiagnosticSource<'_> {
    fn get_source(&self, id: DiagnosticFileId) -> Option<DiagnosticSource<'_>> {
        (id == DiagnosticFileId(0)).then_some(*self)
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub id: &'static str,
    pub level: Level,
    /// Title on the first line.
    pub title: String,
    /// Snippets and annotations.
    pub snippets: Vec<DiagnosticSnippet>,
    /// Help strings in the footer.
    pub footer: Vec<String>,
}

impl Diagnostic {
    #[inline]
    #[must_use]
    pub fn new(id: &'static str) -> Self {
        Level::Error.diagnostic(id)
    }

    #[must_use]
    pub fn title(mut self, title: impl std::fmt::Display) -> Self {
        self.title = title.to_string();
        self
    }

    #[must_use]
    pub fn snippet(mut self, snippet: DiagnosticSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl std::fmt::Display) -> Self {
        self.footer.push(footer.to_string());
        self
    }

    pub fn display<'a>(
        &'a self,
        source_files: &'a dyn DiagnosticFileRepository,
        renderer: &'a annotate_snippets::Renderer,
    ) -> impl std::fmt::Display + 'a {
        Rendered {
            diagnostic: Cow::Borrowed(self),
            source_files,
            renderer,
        }
    }
}

pub trait AsDiagnostic {
    fn as_diagnostic(&self) -> Diagnostic;

    fn display<'a>(
        &'a self,
        source_files: &'a dyn DiagnosticFileRepository,
        renderer: &'a annotate_snippets::Renderer,
    ) -> impl std::fmt::Display + 'a {
        Rendered {
            diagnostic: Cow::Owned(self.as_diagnostic()),
            source_files,
            renderer,
        }
    }

    fn into_diagnostic_error<R: DiagnosticFileRepository>(
        self,
        source_files: R,
    ) -> Annotated<Self, R>
    where
        Self: Sized,
    {
        Annotated {
            repository: source_files,
            error: self,
        }
    }
}

/// A diagnostic with everything needed to print it.
struct Rendered<'a> {
    diagnostic: Cow<'a, Diagnostic>,
    source_files: &'a dyn DiagnosticFileRepository,
    renderer: &'a annotate_snippets::Renderer,
}

impl std::fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let diag = &*self.diagnostic;
        // Snippets pointing at unknown sources are left out.
        let snippets = diag.snippets.iter().filter_map(|snippet| {
            let source = self.source_files.get_source(snippet.file_id)?;
            Some(
                annotate_snippets::Snippet::source(source.source)
                    .origin(source.origin)
                    .fold(true)
                    .annotations(snippet.annotations.iter().map(|annotation| {
                        annotation
                            .level
                            .span(annotation.span.clone())
                            .label(&annotation.message)
                    })),
            )
        });
        let message = diag
            .level
            .title(&diag.title)
            .id(diag.id)
            .snippets(snippets)
            .footers(diag.footer.iter().map(|footer| Level::Help.title(footer)));
        self.renderer.render(message).fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticSnippet {
    pub file_id: DiagnosticFileId,
    pub annotations: Vec<DiagnosticAnnotation>,
}

#[derive(Debug, Clone)]
pub struct DiagnosticAnnotation {
    pub span: Range<usize>,
    pub level: Level,
    pub message: String,
}

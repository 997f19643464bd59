mod render;

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use mnr_matcher::{CompiledPattern, PatternSet};
use mnr_util::{DiagnosticFileId, DiagnosticFileSourceMap, DiagnosticSource};

use render::{OutputSettings, Render};

#[derive(Debug, clap::Parser)]
#[command(version, about = "Compile and match pseudo-regex model numbers")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    #[clap(long, default_value = "auto", global = true)]
    pub color: ColorChoice,
    #[clap(long, default_value = "auto", global = true)]
    pub output_format: OutputChoice,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the regex that each notation compiles to.
    Compile {
        /// Model number notations, e.g. `AB/CD/EF123***`.
        #[clap(required = true)]
        raw: Vec<String>,
        /// Also list every fragment with its minimum size.
        #[clap(long)]
        fragments: bool,
    },
    /// Check (possibly partial) model numbers against a notation.
    Match {
        /// The model number notation.
        raw: String,
        /// Model numbers to check.
        #[clap(required = true)]
        candidates: Vec<String>,
        /// Also report whether each candidate is a complete model number of
        /// the family.
        #[clap(long)]
        exact: bool,
    },
    /// Print the notations in a file that accept a model number.
    Filter {
        /// File with one notation per line. Blank lines and lines starting
        /// with `#` are ignored.
        #[clap(long, short)]
        patterns: std::path::PathBuf,
        /// The (possibly partial) model number.
        candidate: String,
    },
}

/// Color mode.
#[derive(Clone, Copy, Default, Debug, clap::ValueEnum)]
pub enum ColorChoice {
    /// Check the current terminal and environment variables for color support.
    /// Color is disabled if `NO_COLOR` is set, and forced if `FORCE_COLOR` is
    /// set.
    #[default]
    Auto,
    /// Force color output, even if the output is not a terminal.
    Always,
    /// Do not use color output.
    Never,
}

/// Output format.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputChoice {
    /// Human-readable text.
    #[default]
    Auto,
    /// Human-readable text.
    Text,
    /// Emit results as log statements. Logging is enabled at the `info` level
    /// unless `MNR_LOG` says otherwise.
    Log,
    /// One JSON object per line on stdout. This also disables color output.
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.output_format);

    let color = match (args.color, args.output_format) {
        (_, OutputChoice::Json) | (ColorChoice::Never, _) => anstream::ColorChoice::Never,
        (ColorChoice::Always, _) => anstream::ColorChoice::Always,
        (ColorChoice::Auto, _) => anstream::ColorChoice::Auto,
    };
    color.write_global();

    let renderer = render::make_renderer(OutputSettings {
        output: args.output_format,
    });

    let success = match args.command {
        Command::Compile { raw, fragments } => compile(&*renderer, &raw, fragments),
        Command::Match {
            raw,
            candidates,
            exact,
        } => match_candidates(&*renderer, &raw, &candidates, exact),
        Command::Filter {
            patterns,
            candidate,
        } => filter(&*renderer, &patterns, &candidate)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(output: OutputChoice) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if output == OutputChoice::Log {
        "info"
    } else {
        "off"
    };
    let filter =
        EnvFilter::try_from_env("MNR_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compile(renderer: &dyn Render, raws: &[String], show_fragments: bool) -> bool {
    let mut success = true;
    for raw in raws {
        match CompiledPattern::compile(raw) {
            Ok(pattern) => renderer.compiled(&pattern, show_fragments),
            Err(err) => {
                renderer.error(&DiagnosticSource::new("<argument>", raw), DiagnosticFileId(0), &err);
                success = false;
            }
        }
    }
    success
}

fn match_candidates(renderer: &dyn Render, raw: &str, candidates: &[String], exact: bool) -> bool {
    let pattern = match CompiledPattern::compile(raw) {
        Ok(pattern) => pattern,
        Err(err) => {
            renderer.error(&DiagnosticSource::new("<argument>", raw), DiagnosticFileId(0), &err);
            return false;
        }
    };

    for candidate in candidates {
        let exact = exact.then(|| pattern.matches_exactly(candidate));
        renderer.matched(&pattern, candidate, pattern.matches(candidate), exact);
    }
    true
}

fn filter(renderer: &dyn Render, path: &std::path::Path, candidate: &str) -> anyhow::Result<bool> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!("Reading patterns from {}", path.display());

    let mut sources = DiagnosticFileSourceMap::new();
    let mut set = PatternSet::new();
    let mut success = true;
    for (lineno, line) in contents.lines().enumerate() {
        let raw = line.trim();
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        if let Err(err) = set.insert(raw) {
            let file = sources.insert(
                format!("{}:{}", path.display(), lineno + 1),
                raw.to_owned(),
            );
            renderer.error(&sources, file, &err);
            success = false;
        }
    }

    let matching = set.matching(candidate).collect::<Vec<_>>();
    renderer.filtered(candidate, &matching, set.len());
    Ok(success)
}

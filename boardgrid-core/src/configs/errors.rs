use std::{ops::Range, path::PathBuf};

use miette::{NamedSource, SourceSpan};

/// Everything that can go wrong while loading the board config.
#[derive(Debug, miette::Diagnostic, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read the config file {}", .path.display())]
    #[diagnostic(
        code(boardgrid::config::unreadable),
        help("Fix the file's permissions, or delete it to use the default board.")
    )]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] InvalidConfig),
    #[error("The config was loaded twice.")]
    #[diagnostic(
        code(boardgrid::config::already_initialized),
        help("`initialize_config` must only be called once, at startup.")
    )]
    AlreadyInitialized,
}

/// A `config.toml` that could not be parsed, pointing at the offending value.
///
/// Messages of the form `"<problem>, <hint>"` are split so the problem labels
/// the span and the hint becomes the help text.
#[derive(Debug, miette::Diagnostic, thiserror::Error)]
#[error("Invalid config file {path}")]
#[diagnostic(code(boardgrid::config::invalid), help("{}", self.hint))]
pub struct InvalidConfig {
    #[label("{}", self.problem)]
    at: SourceSpan,
    #[source_code]
    src: NamedSource<String>,
    path: String,
    problem: String,
    hint: String,
}

impl InvalidConfig {
    pub(crate) fn new(span: Range<usize>, path: String, contents: String, message: &str) -> Self {
        let (problem, hint) = match message.split_once(", ") {
            Some((problem, hint)) => (problem.trim(), hint.trim()),
            None => (message.trim(), "See the README for the valid keys."),
        };
        Self {
            at: (span.start, span.end - span.start).into(),
            src: NamedSource::new(&path, contents),
            path,
            problem: problem.to_string(),
            hint: hint.to_string(),
        }
    }

    /// The file the invalid config was read from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// What was wrong with the config, shown as the label under the span.
    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }
}

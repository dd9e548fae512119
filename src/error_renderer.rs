//! Error rendering for list scripts using ariadne
//!
//! Parse and runtime errors carry the byte span of the failing statement, so
//! they are shown as an annotated snippet of the script. Errors without a
//! span fall back to a single line.

use crate::script::Error;
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::{io::Write, ops::Range};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<script>" if not provided.
    pub filename: Option<&'a str>,
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use pdt::{List, render_error, script::Script};
///
/// let script = Script::parse("append 1; pop 3").unwrap();
/// if let Err(e) = script.run(&mut List::new(), &mut std::io::stdout(), false) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use pdt::{RenderConfig, render_error_to, script::Script};
///
/// let err = Script::parse("append one").unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("invalid integer `one`"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<script>");

    match error {
        Error::Parse { message, span, src } => {
            let note = "statements look like `append 1`, `insert 2 0` or `pop`";
            render_span(src, span, message, Some(note), writer, config, filename)
        }
        Error::Runtime { error, span, src } => {
            render_span(src, span, &error.to_string(), None, writer, config, filename)
        }
        Error::Io(err) => writeln!(writer, "I/O error: {err}"),
    }
}

fn render_span(
    src: &str,
    span: &Range<usize>,
    message: &str,
    help: Option<&str>,
    writer: &mut dyn Write,
    config: &RenderConfig,
    filename: &str,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(message)
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span.clone()))
                .with_message(message)
                .with_color(colors.next()),
        );

    if let Some(help) = help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(src)), &mut *writer)
}

//! Error handling utilities for the CLI.

use std::io::Write;

use nu_ansi_term::Color;
use pdt::{RenderConfig, render_error_to, script};
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// A list script failed; rendered as an annotated snippet.
    #[error("{error}")]
    Script {
        error: script::Error,
        /// Display name of the script for the report header.
        name: String,
    },

    #[error(transparent)]
    Core(#[from] pdt::Error),

    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn script(error: script::Error, name: &str) -> Self {
        CliError::Script {
            error,
            name: name.to_string(),
        }
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let mut stderr = std::io::stderr();
    render_to(&error, &mut stderr, no_color).ok();
    std::process::exit(1);
}

/// Writes the report for `error`, without exiting.
pub fn render_to(
    error: &CliError,
    writer: &mut dyn Write,
    no_color: bool,
) -> std::io::Result<()> {
    match error {
        CliError::Script { error, name } => {
            let config = RenderConfig {
                color: !no_color,
                filename: Some(name.as_str()),
                ..Default::default()
            };
            render_error_to(error, writer, &config)
        }
        other => {
            let label = if no_color {
                "error".to_string()
            } else {
                Color::Red.bold().paint("error").to_string()
            };
            writeln!(writer, "{label}: {other}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdt::script::Script;

    fn render_plain(error: &CliError) -> String {
        let mut buf = Vec::new();
        render_to(error, &mut buf, true).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn core_error_is_one_line() {
        let error = CliError::from(pdt::Error::IndexOutOfRange { index: 4, len: 2 });
        assert_eq!(
            render_plain(&error),
            "error: index 4 out of range for length 2\n"
        );
    }

    #[test]
    fn colored_label() {
        let error = CliError::Input("missing.pdt: not found".to_string());
        let mut buf = Vec::new();
        render_to(&error, &mut buf, false).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\u{1b}["), "{output:?}");
        assert!(output.ends_with(": missing.pdt: not found\n"), "{output:?}");
    }

    #[test]
    fn script_error_uses_name() {
        let error = Script::parse("push 1").unwrap_err();
        let output = render_plain(&CliError::script(error, "demo.pdt"));
        assert!(output.contains("demo.pdt:1:1"), "{output}");
        assert!(output.contains("unknown operation `push`"), "{output}");
    }
}

//! File input utilities.

use std::io::Read;

use pdt::{List, script};

use super::error::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> CliResult<(String, String)> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::Input(format!("<stdin>: {e}")))?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("{path}: {e}")))?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// Builds the starting list from an `--init` value such as `1,2,3`.
pub fn initial_list(init: Option<&str>) -> CliResult<List<i64>> {
    let Some(init) = init else {
        return Ok(List::new());
    };
    let values = script::parse_values(init).map_err(|e| CliError::Input(format!("--init: {e}")))?;
    Ok(List::from(values.as_slice()))
}

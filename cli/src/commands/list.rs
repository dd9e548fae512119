//! The `list` command - run an inline list script.

use std::io::Write;

use pdt::script::Script;

use crate::cli::{ListArgs, ScriptOptions};
use crate::common::CliResult;
use crate::common::error::CliError;
use crate::common::input::initial_list;

/// Run the list command.
pub fn run(args: ListArgs) -> CliResult<()> {
    let stdout = std::io::stdout();
    interpret_script(&args.script, "<inline>", &args.options, &mut stdout.lock())
}

/// Parses and runs `src`, then prints the final list.
///
/// Shared with the `run` command. `name` labels the script in error reports.
pub fn interpret_script(
    src: &str,
    name: &str,
    options: &ScriptOptions,
    out: &mut dyn Write,
) -> CliResult<()> {
    let script = Script::parse(src).map_err(|e| CliError::script(e, name))?;
    let mut list = initial_list(options.init.as_deref())?;
    tracing::debug!(
        statements = script.statements().len(),
        len = list.len(),
        "running script"
    );

    script
        .run(&mut list, out, options.verbose)
        .map_err(|e| CliError::script(e, name))?;
    writeln!(out, "{list}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(src: &str, init: Option<&str>) -> CliResult<String> {
        let options = ScriptOptions {
            init: init.map(str::to_string),
            verbose: false,
        };
        let mut out = Vec::new();
        interpret_script(src, "test", &options, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_statement_output_then_list() {
        assert_eq!(
            run_to_string("append 1; append 2; append 3; len; pop 1", None).unwrap(),
            "3\n2\n{1, 3}\n"
        );
    }

    #[test]
    fn starts_from_init() {
        assert_eq!(
            run_to_string("reverse", Some("1,2,3")).unwrap(),
            "{3, 2, 1}\n"
        );
    }

    #[test]
    fn errors_carry_script_name() {
        let err = run_to_string("at 0", None).unwrap_err();
        assert!(matches!(err, CliError::Script { ref name, .. } if name == "test"));
    }
}

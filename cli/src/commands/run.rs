//! The `run` command - run a list script file.

use crate::cli::RunArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

use super::list::interpret_script;

/// Run the run command.
pub fn run(args: RunArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.file)?;
    let stdout = std::io::stdout();
    interpret_script(&content, &display_name, &args.options, &mut stdout.lock())
}

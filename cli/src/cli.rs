//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// pdt - play with hand-managed lists and byte strings
#[derive(Parser, Debug)]
#[command(name = "pdt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a byte string operation and print the result
    #[command(subcommand)]
    Str(StrCommand),

    /// Run a list script given inline
    List(ListArgs),

    /// Run a list script from a file (use - for stdin)
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Byte string operations. Results that are strings print quoted.
#[derive(Subcommand, Debug)]
pub enum StrCommand {
    /// ASCII uppercase copy
    Upper { text: String },

    /// ASCII lowercase copy
    Lower { text: String },

    /// Length in bytes
    Len { text: String },

    /// Offset of the first match at or after --start, or -1
    Find {
        text: String,
        needle: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Copy of LEN bytes starting at START
    Substr {
        text: String,
        start: usize,
        len: usize,
    },

    /// Replace every non-overlapping OLD with NEW
    Replace {
        text: String,
        old: String,
        new: String,
    },

    /// Concatenate all arguments
    Concat {
        #[arg(required = true)]
        parts: Vec<String>,
    },
}

/// Options shared by the script-running commands.
#[derive(Args, Debug)]
pub struct ScriptOptions {
    /// Initial list contents, comma separated (e.g. 1,2,3)
    #[arg(long, value_name = "VALUES")]
    pub init: Option<String>,

    /// Print length and capacity after every statement
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Statements separated by `;` (e.g. "append 1; pop")
    pub script: String,

    #[command(flatten)]
    pub options: ScriptOptions,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file to run
    pub file: String,

    #[command(flatten)]
    pub options: ScriptOptions,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

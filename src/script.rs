//! List scripts: a tiny statement language driving a `List<i64>`.
//!
//! Statements are separated by `;` or newlines, and `#` starts a comment
//! that runs to the end of the line.
//!
//! | Statement         | Effect                                   | Prints          |
//! |-------------------|------------------------------------------|-----------------|
//! | `append N`        | appends `N`                              |                 |
//! | `insert N I`      | inserts `N` at index `I`                 |                 |
//! | `extend N,N,...`  | appends every value, in order            |                 |
//! | `remove N`        | removes the first `N`, if any            |                 |
//! | `count N`         | counts elements equal to `N`             | the count       |
//! | `reverse`         | reverses in place                        |                 |
//! | `pop`             | removes the last element                 | it, or `None`   |
//! | `pop I`           | removes the element at `I`               | it              |
//! | `at I`            | reads the element at `I`                 | it              |
//! | `len`             |                                          | the length      |
//! | `clear`           | drops everything, releases the buffer    |                 |
//! | `show`            |                                          | the list        |

use std::{io::Write, ops::Range};

use pdt_core::List;
use thiserror::Error;

/// Errors raised while parsing or running a script.
#[derive(Error, Debug)]
pub enum Error {
    /// The script text could not be parsed.
    #[error("{message}")]
    Parse {
        message: String,
        span: Range<usize>,
        src: String,
    },

    /// A statement was rejected by the list (e.g. index out of range).
    #[error("{error}")]
    Runtime {
        #[source]
        error: pdt_core::Error,
        span: Range<usize>,
        src: String,
    },

    /// Writing statement output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Byte range of the offending statement, if the error has one.
    pub fn span(&self) -> Option<&Range<usize>> {
        match self {
            Error::Parse { span, .. } | Error::Runtime { span, .. } => Some(span),
            Error::Io(_) => None,
        }
    }
}

/// One list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Append(i64),
    Insert { value: i64, index: usize },
    Extend(Vec<i64>),
    Remove(i64),
    Count(i64),
    Reverse,
    Pop,
    PopAt(usize),
    At(usize),
    Len,
    Clear,
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub op: Op,
    /// Byte range of the statement in the script source.
    pub span: Range<usize>,
}

/// A parsed script together with its source, for error reporting.
#[derive(Debug, Clone)]
pub struct Script {
    src: String,
    stmts: Vec<Stmt>,
}

impl Script {
    pub fn parse(src: &str) -> Result<Self, Error> {
        let mut stmts = Vec::new();
        let mut line_start = 0;
        for line in src.split_inclusive('\n') {
            let code = line.split_once('#').map_or(line, |(code, _)| code);
            let mut piece_start = line_start;
            for piece in code.split(';') {
                let text = piece.trim();
                if !text.is_empty() {
                    let start = piece_start + (piece.len() - piece.trim_start().len());
                    let span = start..start + text.len();
                    let op = parse_op(text).map_err(|message| Error::Parse {
                        message,
                        span: span.clone(),
                        src: src.to_string(),
                    })?;
                    stmts.push(Stmt { op, span });
                }
                piece_start += piece.len() + 1;
            }
            line_start += line.len();
        }
        Ok(Self {
            src: src.to_string(),
            stmts,
        })
    }

    pub fn source(&self) -> &str {
        &self.src
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.stmts
    }

    /// Executes every statement against `list`, writing printed values to `out`.
    ///
    /// With `verbose`, each statement is echoed with the list's length and
    /// capacity afterwards. Stops at the first failing statement; earlier
    /// statements stay applied.
    pub fn run(&self, list: &mut List<i64>, out: &mut dyn Write, verbose: bool) -> Result<(), Error> {
        for stmt in &self.stmts {
            tracing::debug!(op = ?stmt.op, "executing statement");
            self.execute(stmt, list, out)?;
            if verbose {
                writeln!(
                    out,
                    "# {:<20} len={} capacity={}",
                    &self.src[stmt.span.clone()],
                    list.len(),
                    list.capacity()
                )?;
            }
        }
        Ok(())
    }

    fn execute(&self, stmt: &Stmt, list: &mut List<i64>, out: &mut dyn Write) -> Result<(), Error> {
        let runtime = |error| Error::Runtime {
            error,
            span: stmt.span.clone(),
            src: self.src.clone(),
        };

        match &stmt.op {
            Op::Append(value) => list.append(*value),
            Op::Insert { value, index } => list.insert(*value, *index).map_err(runtime)?,
            Op::Extend(values) => list.extend_from_slice(values),
            Op::Remove(value) => {
                list.remove(value);
            }
            Op::Count(value) => writeln!(out, "{}", list.count(value))?,
            Op::Reverse => list.reverse(),
            Op::Pop => match list.pop() {
                Some(value) => writeln!(out, "{value}")?,
                None => writeln!(out, "None")?,
            },
            Op::PopAt(index) => {
                let value = list.pop_at(*index).map_err(runtime)?;
                writeln!(out, "{value}")?;
            }
            Op::At(index) => {
                let value = list.at(*index).map_err(runtime)?;
                writeln!(out, "{value}")?;
            }
            Op::Len => writeln!(out, "{}", list.len())?,
            Op::Clear => list.clear(),
            Op::Show => writeln!(out, "{list}")?,
        }
        Ok(())
    }
}

/// Parses a comma-separated list of integers such as `1, 2,3`.
pub fn parse_values(text: &str) -> Result<Vec<i64>, String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_int)
        .collect()
}

fn parse_op(text: &str) -> Result<Op, String> {
    let (name, rest) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(name, rest)| (name, rest.trim()));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let op = match name {
        "append" => Op::Append(parse_int(one(name, &args)?)?),
        "insert" => {
            let [value, index] = args[..] else {
                return Err(arity(name, 2, args.len()));
            };
            Op::Insert {
                value: parse_int(value)?,
                index: parse_index(index)?,
            }
        }
        "extend" => {
            let values = parse_values(rest)?;
            if values.is_empty() {
                return Err("`extend` expects at least one value".to_string());
            }
            Op::Extend(values)
        }
        "remove" => Op::Remove(parse_int(one(name, &args)?)?),
        "count" => Op::Count(parse_int(one(name, &args)?)?),
        "pop" => match args[..] {
            [] => Op::Pop,
            [index] => Op::PopAt(parse_index(index)?),
            _ => return Err(arity(name, 1, args.len())),
        },
        "at" => Op::At(parse_index(one(name, &args)?)?),
        "reverse" | "len" | "clear" | "show" => {
            if !args.is_empty() {
                return Err(arity(name, 0, args.len()));
            }
            match name {
                "reverse" => Op::Reverse,
                "len" => Op::Len,
                "clear" => Op::Clear,
                _ => Op::Show,
            }
        }
        _ => return Err(format!("unknown operation `{name}`")),
    };
    Ok(op)
}

fn one<'a>(name: &str, args: &[&'a str]) -> Result<&'a str, String> {
    match args {
        [arg] => Ok(arg),
        _ => Err(arity(name, 1, args.len())),
    }
}

fn arity(name: &str, expected: usize, got: usize) -> String {
    let plural = if expected == 1 { "" } else { "s" };
    format!("`{name}` expects {expected} argument{plural}, got {got}")
}

fn parse_int(text: &str) -> Result<i64, String> {
    text.parse()
        .map_err(|_| format!("invalid integer `{text}`"))
}

fn parse_index(text: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("invalid index `{text}`"))
}

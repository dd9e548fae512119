//! The `str` command - one byte string operation per invocation.

use pdt::ByteStr;

use crate::cli::StrCommand;
use crate::common::CliResult;

/// Run the str command.
pub fn run(command: StrCommand) -> CliResult<()> {
    println!("{}", apply(command)?);
    Ok(())
}

/// Applies the operation and returns the line to print.
pub fn apply(command: StrCommand) -> CliResult<String> {
    let line = match command {
        StrCommand::Upper { text } => ByteStr::from(text.as_str()).upper().to_string(),
        StrCommand::Lower { text } => ByteStr::from(text.as_str()).lower().to_string(),
        StrCommand::Len { text } => ByteStr::from(text.as_str()).len().to_string(),
        StrCommand::Find {
            text,
            needle,
            start,
        } => match ByteStr::from(text.as_str()).find(&needle, start)? {
            Some(index) => index.to_string(),
            None => "-1".to_string(),
        },
        StrCommand::Substr { text, start, len } => {
            ByteStr::from(text.as_str()).substr(start, len)?.to_string()
        }
        StrCommand::Replace { text, old, new } => ByteStr::from(text.as_str())
            .replace(&old, &new)
            .to_string(),
        StrCommand::Concat { parts } => parts
            .iter()
            .fold(ByteStr::new(), |acc, part| acc + ByteStr::from(part.as_str()))
            .to_string(),
    };
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::CliError;

    #[test]
    fn find_reports_minus_one_without_match() {
        let command = StrCommand::Find {
            text: "abc".to_string(),
            needle: "z".to_string(),
            start: 0,
        };
        assert_eq!(apply(command).unwrap(), "-1");
    }

    #[test]
    fn substr_error_is_core_error() {
        let command = StrCommand::Substr {
            text: "abc".to_string(),
            start: 2,
            len: 5,
        };
        assert!(matches!(apply(command), Err(CliError::Core(_))));
    }
}

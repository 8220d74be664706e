use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A script command addressing the curve pools by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "index", rename_all = "snake_case")]
pub enum Command {
    /// Insert every pooled curve: the x-monotone pool first, then the
    /// general-curve pool.
    InsertAll,
    /// Insert the x-monotone curve at this pool index.
    InsertAt(usize),
    /// Delete the first edge geometrically equal to the x-monotone curve
    /// at this pool index.
    DeleteAt(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("command `{command}` is missing a usable curve index operand")]
    MissingOperand { command: char },
}

/// Parse one retained script line.
///
/// Grammar is `<command-char> [<ws> <unsigned-integer>]`. Lines whose
/// leading token is not a known command are consumed whole, trailing
/// operand included, and reported as `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    let operand = tokens.next();

    match head {
        "a" => Ok(Some(Command::InsertAll)),
        "i" => Ok(Some(Command::InsertAt(parse_index('i', operand)?))),
        "d" => Ok(Some(Command::DeleteAt(parse_index('d', operand)?))),
        _ => Ok(None),
    }
}

fn parse_index(command: char, operand: Option<&str>) -> Result<usize, ParseError> {
    operand
        .and_then(|token| token.parse().ok())
        .ok_or(ParseError::MissingOperand { command })
}

/// What happened to one command. `Applied` and `Ignored` count as success;
/// everything else marks the run as failed without stopping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandOutcome {
    Applied,
    Ignored,
    IndexOutOfRange { index: usize, len: usize },
    NoMatchingEdge { index: usize },
    Malformed,
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Applied | CommandOutcome::Ignored)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot open file {}", path.display())]
    ScriptOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open file")]
    NoCommandsFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_parse() {
        assert_eq!(parse_line("a"), Ok(Some(Command::InsertAll)));
        assert_eq!(parse_line("i 3"), Ok(Some(Command::InsertAt(3))));
        assert_eq!(parse_line("d 0"), Ok(Some(Command::DeleteAt(0))));
        assert_eq!(parse_line("  i   12  "), Ok(Some(Command::InsertAt(12))));
    }

    #[test]
    fn unknown_commands_are_consumed_and_skipped() {
        assert_eq!(parse_line("x 3"), Ok(None));
        assert_eq!(parse_line("q"), Ok(None));
        assert_eq!(parse_line("insert 1"), Ok(None));
        assert_eq!(parse_line(""), Ok(None));
    }

    #[test]
    fn missing_or_bad_operand_is_an_error() {
        assert_eq!(
            parse_line("i"),
            Err(ParseError::MissingOperand { command: 'i' })
        );
        assert_eq!(
            parse_line("d foo"),
            Err(ParseError::MissingOperand { command: 'd' })
        );
        assert_eq!(
            parse_line("d -1"),
            Err(ParseError::MissingOperand { command: 'd' })
        );
    }

    #[test]
    fn command_serializes_tagged() {
        let json = serde_json::to_string(&Command::InsertAt(2)).unwrap();
        assert_eq!(json, r#"{"op":"insert_at","index":2}"#);
    }
}

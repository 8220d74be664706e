use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::types::EngineError;

/// Lazy reader over a command script.
///
/// Yields the retained lines: trimmed, non-blank, and not starting with
/// `#`. Opening is the only fatal failure; a read error mid-script ends
/// the iteration after a warning.
#[derive(Debug)]
pub struct ScriptReader<R> {
    lines: io::Lines<R>,
}

impl ScriptReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EngineError::ScriptOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for ScriptReader<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    return Some(trimmed.to_string());
                }
                Err(error) => {
                    warn!(%error, "script read failed, stopping");
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn retains_only_command_lines() {
        let script = "# header\n\n  a  \n\ni 0\n# trailing comment\nd 1\n";
        let lines: Vec<_> = ScriptReader::new(Cursor::new(script)).collect();
        assert_eq!(lines, vec!["a", "i 0", "d 1"]);
    }

    #[test]
    fn open_failure_names_the_path() {
        let error = ScriptReader::open("/no/such/commands.txt").unwrap_err();
        assert_eq!(error.to_string(), "cannot open file /no/such/commands.txt");
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// The filename bundle of one run: which curve pools to load and which
/// command script to replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub xcurves_file: PathBuf,
    pub curves_file: PathBuf,
    pub commands_file: PathBuf,
}

impl Scenario {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| HarnessError::Scenario {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), HarnessError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).map_err(|source| HarnessError::Scenario {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

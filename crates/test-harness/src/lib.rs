//! Harness around the mutation engine: loads curve pools from fixture
//! files, owns the subdivision for the lifetime of a run, and lends the
//! engine its diagnostic channel.

pub mod fixture;
pub mod helpers;
pub mod scenario;
pub mod workflow;

use std::path::PathBuf;

use thiserror::Error;

pub use scenario::Scenario;
pub use workflow::DynamicHarness;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {} line {line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("bad scenario file {}: {source}", path.display())]
    Scenario {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("input filenames have not been set")]
    FilenamesNotSet,
}

//! Command-driven incremental mutation of a planar subdivision.
//!
//! A script of index-addressed commands (`a`, `i n`, `d n`) is replayed
//! against a [`Subdivision`] using curves drawn from immutable pools.
//! Failed commands are folded into the run's success flag instead of
//! aborting; only a script that cannot be opened is fatal.

pub mod dispatch;
pub mod report;
pub mod resolve;
pub mod script;
pub mod types;

use std::path::PathBuf;
use std::time::Instant;

use arrangement_types::CurvePools;
use subdivision_kernel::Subdivision;
use tracing::{info, instrument};

pub use dispatch::{apply, run_script, RunSummary};
pub use report::BuildReport;
pub use resolve::remove_matching;
pub use script::ScriptReader;
pub use types::{parse_line, Command, CommandOutcome, EngineError, ParseError};

/// Capabilities the surrounding harness lends to the engine. Held by
/// composition; the engine never owns the error channel itself.
pub trait HarnessServices {
    /// Emit one diagnostic line to the harness error channel.
    fn print_error(&mut self, message: &str);
}

/// Drives one construction run from a commands file.
///
/// The builder holds only script-local state: which commands file to
/// read and the report of the last run. The subdivision and the curve
/// pools stay with the caller and are borrowed per run.
#[derive(Debug, Default)]
pub struct ArrangementBuilder {
    commands_file: Option<PathBuf>,
    last_report: Option<BuildReport>,
}

impl ArrangementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_commands_file(&mut self, path: impl Into<PathBuf>) {
        self.commands_file = Some(path.into());
    }

    /// Forget the commands-file association and the last report. Never
    /// touches the subdivision or the pools. Idempotent.
    pub fn reset(&mut self) {
        self.commands_file = None;
        self.last_report = None;
    }

    pub fn last_report(&self) -> Option<&BuildReport> {
        self.last_report.as_ref()
    }

    /// Run the whole commands script against `subdivision`.
    ///
    /// An unopenable script is the one fatal case: one diagnostic through
    /// `services`, no mutation, no timing report, `false`. Otherwise every
    /// retained line runs, the timing and size report goes to stdout, and
    /// the folded per-command success flag is returned.
    #[instrument(skip_all)]
    pub fn construct_arrangement<S, H>(
        &mut self,
        subdivision: &mut S,
        pools: &CurvePools,
        services: &mut H,
    ) -> bool
    where
        S: Subdivision + ?Sized,
        H: HarnessServices + ?Sized,
    {
        let reader = match &self.commands_file {
            Some(path) => match ScriptReader::open(path) {
                Ok(reader) => reader,
                Err(error) => {
                    services.print_error(&error.to_string());
                    return false;
                }
            },
            None => {
                services.print_error(&EngineError::NoCommandsFile.to_string());
                return false;
            }
        };

        let start = Instant::now();
        let summary = run_script(subdivision, pools, reader, services);
        let elapsed = start.elapsed();

        let report = BuildReport {
            elapsed,
            vertices: subdivision.num_vertices(),
            edges: subdivision.num_edges(),
            faces: subdivision.num_faces(),
            summary,
        };
        println!("{report}");
        info!(
            executed = summary.executed,
            failed = summary.failed,
            success = summary.success,
            "construction finished"
        );

        self.last_report = Some(report);
        summary.success
    }
}

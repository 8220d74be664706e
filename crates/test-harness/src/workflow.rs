use std::path::{Path, PathBuf};

use arrangement_types::CurvePools;
use mutation_engine::{ArrangementBuilder, BuildReport, HarnessServices};
use subdivision_kernel::PlanarSubdivision;
use tracing::debug;

use crate::fixture;
use crate::helpers::DiagnosticSink;
use crate::{HarnessError, Scenario};

/// One dynamic construction run: the harness owns the curve pools and the
/// subdivision for the run's lifetime and lends the engine its error
/// channel. Teardown (`clear`, `deallocate_arrangement`) is idempotent
/// and order-insensitive; `Drop` performs both.
#[derive(Debug, Default)]
pub struct DynamicHarness {
    pools: CurvePools,
    arrangement: Option<PlanarSubdivision>,
    builder: ArrangementBuilder,
    xcurves_file: Option<PathBuf>,
    curves_file: Option<PathBuf>,
    diagnostics: DiagnosticSink,
}

impl DynamicHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate the three input files of a run.
    pub fn set_filenames(
        &mut self,
        xcurves: impl Into<PathBuf>,
        curves: impl Into<PathBuf>,
        commands: impl Into<PathBuf>,
    ) {
        self.xcurves_file = Some(xcurves.into());
        self.curves_file = Some(curves.into());
        self.builder.set_commands_file(commands);
    }

    pub fn set_scenario(&mut self, scenario: &Scenario) {
        self.set_filenames(
            &scenario.xcurves_file,
            &scenario.curves_file,
            &scenario.commands_file,
        );
    }

    /// Load both curve pools from the associated files, replacing any
    /// previous pool contents.
    pub fn load_pools(&mut self) -> Result<(), HarnessError> {
        let xcurves_file = self.xcurves_file.clone().ok_or(HarnessError::FilenamesNotSet)?;
        let curves_file = self.curves_file.clone().ok_or(HarnessError::FilenamesNotSet)?;

        self.pools.xcurves = fixture::load_xcurves(&xcurves_file)?;
        self.pools.curves = fixture::load_curves(&curves_file)?;
        debug!(
            xcurves = self.pools.xcurves.len(),
            curves = self.pools.curves.len(),
            "loaded curve pools"
        );
        Ok(())
    }

    /// Run the command script against the arrangement, creating a fresh
    /// one if none exists yet.
    pub fn run(&mut self) -> bool {
        let mut arrangement = self.arrangement.take().unwrap_or_default();
        let ok =
            self.builder
                .construct_arrangement(&mut arrangement, &self.pools, &mut self.diagnostics);
        self.arrangement = Some(arrangement);
        ok
    }

    pub fn arrangement(&self) -> Option<&PlanarSubdivision> {
        self.arrangement.as_ref()
    }

    pub fn pools(&self) -> &CurvePools {
        &self.pools
    }

    pub fn last_report(&self) -> Option<&BuildReport> {
        self.builder.last_report()
    }

    pub fn diagnostics(&self) -> &[String] {
        self.diagnostics.messages()
    }

    /// Forget pools, filename associations, and captured diagnostics.
    /// The arrangement handle is released separately. Idempotent.
    pub fn clear(&mut self) {
        self.pools.clear();
        self.xcurves_file = None;
        self.curves_file = None;
        self.builder.reset();
        self.diagnostics.clear();
    }

    /// Release the arrangement handle. Idempotent.
    pub fn deallocate_arrangement(&mut self) {
        self.arrangement = None;
    }
}

impl HarnessServices for DynamicHarness {
    fn print_error(&mut self, message: &str) {
        self.diagnostics.print_error(message);
    }
}

impl Drop for DynamicHarness {
    fn drop(&mut self) {
        self.clear();
        self.deallocate_arrangement();
    }
}

/// Convenience entry point: load a scenario file, load its pools, run it.
pub fn run_scenario_file(path: impl AsRef<Path>) -> Result<bool, HarnessError> {
    let scenario = Scenario::from_json_file(path)?;
    let mut harness = DynamicHarness::new();
    harness.set_scenario(&scenario);
    harness.load_pools()?;
    Ok(harness.run())
}

use arrangement_types::CurvePools;
use serde::Serialize;
use subdivision_kernel::Subdivision;
use tracing::debug;

use crate::resolve::remove_matching;
use crate::types::{parse_line, Command, CommandOutcome};
use crate::HarnessServices;

/// Aggregate of one script run. `success` is the logical AND of every
/// command's outcome; a failure never stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub success: bool,
    pub executed: usize,
    pub failed: usize,
}

impl RunSummary {
    fn empty() -> Self {
        Self {
            success: true,
            executed: 0,
            failed: 0,
        }
    }

    fn record(mut self, outcome: CommandOutcome) -> Self {
        self.executed += 1;
        if !outcome.is_success() {
            self.failed += 1;
            self.success = false;
        }
        self
    }
}

/// Run every retained script line against the subdivision.
///
/// Mutations are applied as commands arrive; there is no rollback, and
/// failed commands are advisory. Out-of-range indices produce one
/// diagnostic line each through `diagnostics`.
pub fn run_script<S, H>(
    subdivision: &mut S,
    pools: &CurvePools,
    lines: impl Iterator<Item = String>,
    diagnostics: &mut H,
) -> RunSummary
where
    S: Subdivision + ?Sized,
    H: HarnessServices + ?Sized,
{
    lines.fold(RunSummary::empty(), |summary, line| {
        let outcome = dispatch_line(subdivision, pools, &line, diagnostics);
        debug!(line = %line, ?outcome, "dispatched command");
        summary.record(outcome)
    })
}

fn dispatch_line<S, H>(
    subdivision: &mut S,
    pools: &CurvePools,
    line: &str,
    diagnostics: &mut H,
) -> CommandOutcome
where
    S: Subdivision + ?Sized,
    H: HarnessServices + ?Sized,
{
    match parse_line(line) {
        Ok(Some(command)) => apply(subdivision, pools, command, diagnostics),
        Ok(None) => CommandOutcome::Ignored,
        Err(error) => {
            diagnostics.print_error(&error.to_string());
            CommandOutcome::Malformed
        }
    }
}

/// Apply a single parsed command.
pub fn apply<S, H>(
    subdivision: &mut S,
    pools: &CurvePools,
    command: Command,
    diagnostics: &mut H,
) -> CommandOutcome
where
    S: Subdivision + ?Sized,
    H: HarnessServices + ?Sized,
{
    match command {
        Command::InsertAll => {
            subdivision.insert_xcurves(&pools.xcurves);
            subdivision.insert_curves(&pools.curves);
            CommandOutcome::Applied
        }
        Command::InsertAt(index) => match pools.xcurve(index) {
            Some(curve) => {
                subdivision.insert(curve);
                CommandOutcome::Applied
            }
            None => out_of_range(index, pools, diagnostics),
        },
        Command::DeleteAt(index) => match pools.xcurve(index) {
            Some(curve) => {
                let target = *curve;
                match remove_matching(subdivision, &target) {
                    Some(_) => CommandOutcome::Applied,
                    None => CommandOutcome::NoMatchingEdge { index },
                }
            }
            None => out_of_range(index, pools, diagnostics),
        },
    }
}

fn out_of_range<H>(index: usize, pools: &CurvePools, diagnostics: &mut H) -> CommandOutcome
where
    H: HarnessServices + ?Sized,
{
    let len = pools.xcurves.len();
    diagnostics.print_error(&format!(
        "Index of x-monotone curve {index} is out of range ({len})"
    ));
    CommandOutcome::IndexOutOfRange { index, len }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrangement_types::{Curve, Point, XMonotoneCurve};
    use subdivision_kernel::PlanarSubdivision;

    #[derive(Default)]
    struct Sink {
        messages: Vec<String>,
    }

    impl HarnessServices for Sink {
        fn print_error(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> XMonotoneCurve {
        XMonotoneCurve::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
    }

    fn two_segment_pools() -> CurvePools {
        let mut pools = CurvePools::default();
        pools.xcurves.push(seg(0.0, 0.0, 1.0, 0.0));
        pools.xcurves.push(seg(0.0, 2.0, 1.0, 2.0));
        pools
    }

    fn run(pools: &CurvePools, lines: &[&str]) -> (PlanarSubdivision, RunSummary, Sink) {
        let mut arr = PlanarSubdivision::new();
        let mut sink = Sink::default();
        let summary = run_script(
            &mut arr,
            pools,
            lines.iter().map(|l| l.to_string()),
            &mut sink,
        );
        (arr, summary, sink)
    }

    #[test]
    fn insert_all_covers_both_pools() {
        let mut pools = two_segment_pools();
        pools.curves.push(
            Curve::new(vec![
                Point::new(0.0, 5.0),
                Point::new(1.0, 6.0),
                Point::new(2.0, 5.0),
            ])
            .unwrap(),
        );

        let (arr, summary, sink) = run(&pools, &["a"]);
        assert!(summary.success);
        assert!(sink.messages.is_empty());
        // 2 pooled segments + 2 polyline pieces.
        assert_eq!(arr.num_edges(), 4);

        for pooled in &pools.xcurves {
            let found = arr
                .list_edges()
                .iter()
                .any(|k| arr.curves_equal(arr.edge_curve(*k).unwrap(), pooled));
            assert!(found);
        }
    }

    #[test]
    fn out_of_range_index_reports_and_continues() {
        let pools = two_segment_pools();
        let (arr, summary, sink) = run(&pools, &["i 5", "i 0"]);

        assert!(!summary.success);
        assert_eq!(summary.executed, 2);
        assert_eq!(summary.failed, 1);
        // The later in-range insert still landed.
        assert_eq!(arr.num_edges(), 1);
        assert_eq!(
            sink.messages,
            vec!["Index of x-monotone curve 5 is out of range (2)"]
        );
    }

    #[test]
    fn unknown_commands_are_ignored_without_mutation() {
        let pools = two_segment_pools();
        let (arr, summary, sink) = run(&pools, &["x 3", "q"]);

        assert!(summary.success);
        assert_eq!(summary.executed, 2);
        assert_eq!(arr.num_edges(), 0);
        assert!(sink.messages.is_empty());
    }

    #[test]
    fn delete_of_absent_curve_fails_without_mutation() {
        let pools = two_segment_pools();
        let (arr, summary, _) = run(&pools, &["d 0"]);

        assert!(!summary.success);
        assert_eq!(arr.num_edges(), 0);
        assert_eq!(arr.num_faces(), 1);
    }

    #[test]
    fn malformed_operand_is_nonfatal() {
        let pools = two_segment_pools();
        let (arr, summary, sink) = run(&pools, &["i", "i 1"]);

        assert!(!summary.success);
        assert_eq!(summary.failed, 1);
        assert_eq!(arr.num_edges(), 1);
        assert_eq!(sink.messages.len(), 1);
    }
}

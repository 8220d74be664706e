use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::dispatch::RunSummary;

/// Final report of one construction run: wall-clock time for the whole
/// script pass plus the subdivision's size counters afterwards.
/// Observational only; nothing reads it back into control flow.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub elapsed: Duration,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub summary: RunSummary,
}

impl BuildReport {
    pub fn to_text(&self) -> String {
        format!(
            "Construction took {:.6} seconds.\nV = {}, E = {}, F = {}",
            self.elapsed.as_secs_f64(),
            self.vertices,
            self.edges,
            self.faces
        )
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildReport {
        BuildReport {
            elapsed: Duration::from_millis(250),
            vertices: 4,
            edges: 3,
            faces: 1,
            summary: RunSummary {
                success: true,
                executed: 5,
                failed: 0,
            },
        }
    }

    #[test]
    fn text_rendering_names_the_counts() {
        let text = sample().to_text();
        assert!(text.contains("Construction took 0.250000 seconds."));
        assert!(text.contains("V = 4, E = 3, F = 1"));
    }

    #[test]
    fn report_serializes() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["vertices"], 4);
        assert_eq!(json["summary"]["success"], true);
    }
}

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, XMonotoneCurve};

/// The curve pools driving a run: ordered, 0-indexed, and immutable for the
/// run's duration. Script commands address the x-monotone pool by index;
/// the general-curve pool is only touched by bulk insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurvePools {
    pub xcurves: Vec<XMonotoneCurve>,
    pub curves: Vec<Curve>,
}

impl CurvePools {
    pub fn new(xcurves: Vec<XMonotoneCurve>, curves: Vec<Curve>) -> Self {
        Self { xcurves, curves }
    }

    /// Look up an x-monotone curve, reporting the pool size on a miss so
    /// diagnostics can name both the index and the bound.
    pub fn xcurve(&self, index: usize) -> Option<&XMonotoneCurve> {
        self.xcurves.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.xcurves.is_empty() && self.curves.is_empty()
    }

    pub fn clear(&mut self) {
        self.xcurves.clear();
        self.curves.clear();
    }
}

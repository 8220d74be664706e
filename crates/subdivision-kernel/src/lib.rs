pub mod planar;
pub mod traits;
pub mod types;

pub use planar::PlanarSubdivision;
pub use traits::Subdivision;
pub use types::{EdgeKey, KernelError};

use arrangement_types::Point;
use serde::{Deserialize, Serialize};

/// Tolerance configuration for geometric comparisons.
///
/// Only the coincidence tolerance matters here: it drives the kernel's
/// curve equality predicate used for deletion matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tolerance {
    /// Points closer than this are considered coincident.
    pub coincidence: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { coincidence: 1e-9 }
    }
}

impl Tolerance {
    pub fn points_coincident(&self, a: &Point, b: &Point) -> bool {
        a.distance_to(b) < self.coincidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_distinguishes_separated_points() {
        let tol = Tolerance::default();
        let a = Point::new(0.0, 0.0);
        assert!(tol.points_coincident(&a, &Point::new(0.0, 1e-12)));
        assert!(!tol.points_coincident(&a, &Point::new(0.0, 1e-6)));
    }
}

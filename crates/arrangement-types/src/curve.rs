use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Errors from curve construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CurveError {
    #[error("degenerate curve: endpoints coincide at ({x}, {y})")]
    Degenerate { x: f64, y: f64 },

    #[error("polyline needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("polyline repeats consecutive point at index {index}")]
    RepeatedPoint { index: usize },
}

/// An x-monotone curve: a line segment crossed by any vertical line at most
/// once. Stored normalized, with `left` lexicographically before `right`
/// (vertical segments keep the bottom endpoint first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XMonotoneCurve {
    left: Point,
    right: Point,
}

impl XMonotoneCurve {
    /// Build a segment from two endpoints, normalizing their order.
    pub fn new(a: Point, b: Point) -> Result<Self, CurveError> {
        if a.bits() == b.bits() {
            return Err(CurveError::Degenerate { x: a.x, y: a.y });
        }
        let (left, right) = match a.lex_cmp(&b) {
            std::cmp::Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Ok(Self { left, right })
    }

    pub fn left(&self) -> Point {
        self.left
    }

    pub fn right(&self) -> Point {
        self.right
    }

    pub fn is_vertical(&self) -> bool {
        self.left.x == self.right.x
    }

    pub fn length(&self) -> f64 {
        self.left.distance_to(&self.right)
    }
}

/// A general curve: a polyline chain of two or more points. Each consecutive
/// pair is one x-monotone piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    pub fn new(points: Vec<Point>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                count: points.len(),
            });
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[0].bits() == pair[1].bits() {
                return Err(CurveError::RepeatedPoint { index: i + 1 });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Split into x-monotone pieces, one per consecutive point pair.
    pub fn subdivide(&self) -> Vec<XMonotoneCurve> {
        self.points
            .windows(2)
            .map(|pair| {
                // Construction already rejected repeated consecutive points.
                XMonotoneCurve::new(pair[0], pair[1]).expect("validated at construction")
            })
            .collect()
    }
}

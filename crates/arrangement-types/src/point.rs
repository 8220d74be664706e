use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// Points compare by exact f64 bit pattern; tolerance-based coincidence is
/// the subdivision kernel's concern, not the value type's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lexicographic order: by x, then by y. Used to normalize x-monotone
    /// curves so the lexicographically smaller endpoint comes first.
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) | None => {
                self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal)
            }
            Some(ord) => ord,
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bit-exact identity key, usable for interning points in hash maps.
    pub fn bits(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_cmp_orders_by_x_then_y() {
        let a = Point::new(0.0, 5.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 7.0);

        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(b.lex_cmp(&a), Ordering::Greater);
        assert_eq!(a.lex_cmp(&c), Ordering::Less);
        assert_eq!(a.lex_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn bits_distinguishes_negative_zero() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(-0.0, 0.0);
        assert_ne!(a.bits(), b.bits());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}

use arrangement_types::{Curve, XMonotoneCurve};

use crate::types::{EdgeKey, KernelError};

/// A mutable planar subdivision handle.
///
/// This is everything the mutation engine consumes: insert one curve,
/// insert many, enumerate the current edges with access to their curves,
/// remove a specific enumerated edge, compare curves with the kernel's
/// equality predicate, and read the size counters.
///
/// Single-writer: exactly one caller mutates a subdivision during a run,
/// and edges are never removed while an enumeration is in progress;
/// callers take stable `EdgeKey`s from `list_edges` and mutate afterwards.
pub trait Subdivision {
    /// Insert a single x-monotone curve.
    fn insert(&mut self, curve: &XMonotoneCurve);

    /// Bulk-insert x-monotone curves, preserving slice order.
    fn insert_xcurves(&mut self, curves: &[XMonotoneCurve]) {
        for curve in curves {
            self.insert(curve);
        }
    }

    /// Bulk-insert general curves by inserting their x-monotone pieces.
    fn insert_curves(&mut self, curves: &[Curve]) {
        for curve in curves {
            for piece in curve.subdivide() {
                self.insert(&piece);
            }
        }
    }

    /// Current edges, in the subdivision's own enumeration order.
    fn list_edges(&self) -> Vec<EdgeKey>;

    /// The curve carried by an edge; `None` for a stale key.
    fn edge_curve(&self, key: EdgeKey) -> Option<&XMonotoneCurve>;

    /// Remove one edge by its stable key, returning its curve.
    fn remove_edge(&mut self, key: EdgeKey) -> Result<XMonotoneCurve, KernelError>;

    /// The kernel's geometric equality predicate over curves. Used only to
    /// decide deletion matches; duplicates are indistinguishable to it.
    fn curves_equal(&self, a: &XMonotoneCurve, b: &XMonotoneCurve) -> bool;

    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;
    fn num_faces(&self) -> usize;
}

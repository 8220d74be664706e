use std::collections::HashMap;

use arrangement_types::XMonotoneCurve;
use slotmap::SlotMap;
use tracing::debug;

use crate::traits::Subdivision;
use crate::types::{EdgeKey, KernelError};
use crate::Tolerance;

#[derive(Debug)]
struct EdgeRecord {
    curve: XMonotoneCurve,
}

/// Deterministic in-memory planar subdivision.
///
/// Edges live in a slotmap (stable keys) with a separate insertion-order
/// vector defining the enumeration order. Vertices are interned by exact
/// f64 bit pattern with reference counts, so a vertex disappears exactly
/// when its last incident edge does. The face count follows the planar
/// Euler relation `F = E - V + C + 1`, with `C` the number of connected
/// components of the incidence graph.
///
/// Contract: inserted curves are interior-disjoint (sharing endpoints is
/// fine); the kernel does not split curves at crossings. Inserting a curve
/// equal to one already present adds a parallel edge, no deduplication.
#[derive(Debug)]
pub struct PlanarSubdivision {
    edges: SlotMap<EdgeKey, EdgeRecord>,
    order: Vec<EdgeKey>,
    vertices: HashMap<(u64, u64), usize>,
    tolerance: Tolerance,
}

impl PlanarSubdivision {
    pub fn new() -> Self {
        Self::with_tolerance(Tolerance::default())
    }

    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            edges: SlotMap::with_key(),
            order: Vec::new(),
            vertices: HashMap::new(),
            tolerance,
        }
    }

    fn retain_vertex(&mut self, key: (u64, u64)) {
        *self.vertices.entry(key).or_insert(0) += 1;
    }

    fn release_vertex(&mut self, key: (u64, u64)) {
        if let Some(count) = self.vertices.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.vertices.remove(&key);
            }
        }
    }

    /// Connected components of the incidence graph, by union-find over the
    /// interned vertices. Recomputed on demand; the store is small.
    fn connected_components(&self) -> usize {
        let index: HashMap<(u64, u64), usize> = self
            .vertices
            .keys()
            .enumerate()
            .map(|(i, k)| (*k, i))
            .collect();

        let mut parent: Vec<usize> = (0..index.len()).collect();

        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        for record in self.edges.values() {
            let a = index[&record.curve.left().bits()];
            let b = index[&record.curve.right().bits()];
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            if ra != rb {
                parent[ra] = rb;
            }
        }

        (0..index.len())
            .filter(|&i| find(&mut parent, i) == i)
            .count()
    }
}

impl Default for PlanarSubdivision {
    fn default() -> Self {
        Self::new()
    }
}

impl Subdivision for PlanarSubdivision {
    fn insert(&mut self, curve: &XMonotoneCurve) {
        self.retain_vertex(curve.left().bits());
        self.retain_vertex(curve.right().bits());
        let key = self.edges.insert(EdgeRecord { curve: *curve });
        self.order.push(key);
        debug!(?key, edges = self.edges.len(), "inserted curve");
    }

    fn list_edges(&self) -> Vec<EdgeKey> {
        self.order.clone()
    }

    fn edge_curve(&self, key: EdgeKey) -> Option<&XMonotoneCurve> {
        self.edges.get(key).map(|record| &record.curve)
    }

    fn remove_edge(&mut self, key: EdgeKey) -> Result<XMonotoneCurve, KernelError> {
        let record = self
            .edges
            .remove(key)
            .ok_or(KernelError::EdgeNotFound { key })?;
        self.order.retain(|k| *k != key);
        self.release_vertex(record.curve.left().bits());
        self.release_vertex(record.curve.right().bits());
        debug!(?key, edges = self.edges.len(), "removed edge");
        Ok(record.curve)
    }

    fn curves_equal(&self, a: &XMonotoneCurve, b: &XMonotoneCurve) -> bool {
        let tol = &self.tolerance;
        let forward = tol.points_coincident(&a.left(), &b.left())
            && tol.points_coincident(&a.right(), &b.right());
        // Normalization makes reversed matches rare, but endpoints within
        // tolerance of each other can normalize differently.
        let reversed = tol.points_coincident(&a.left(), &b.right())
            && tol.points_coincident(&a.right(), &b.left());
        forward || reversed
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn num_faces(&self) -> usize {
        // Planar Euler relation, with the unbounded face included.
        self.edges.len() + self.connected_components() + 1 - self.vertices.len()
    }
}

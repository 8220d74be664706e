use arrangement_types::XMonotoneCurve;
use subdivision_kernel::{EdgeKey, Subdivision};
use tracing::debug;

/// Remove the first edge whose curve is geometrically equal to `target`.
///
/// Two phases: a read-only scan over `list_edges()` in enumeration order
/// that stops at the first match, then a removal through the stable key
/// once the scan has ended. At most one edge is removed; with no match
/// the subdivision is untouched and `None` is returned.
pub fn remove_matching<S: Subdivision + ?Sized>(
    subdivision: &mut S,
    target: &XMonotoneCurve,
) -> Option<EdgeKey> {
    let key = subdivision.list_edges().into_iter().find(|key| {
        subdivision
            .edge_curve(*key)
            .map(|curve| subdivision.curves_equal(curve, target))
            .unwrap_or(false)
    })?;

    // The key came out of the scan just above, so the removal cannot miss.
    subdivision.remove_edge(key).ok()?;
    debug!(?key, "removed matching edge");
    Some(key)
}

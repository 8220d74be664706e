use slotmap::new_key_type;

new_key_type! {
    /// Stable key of an edge in a subdivision.
    ///
    /// Keys stay valid across unrelated mutations, so a caller may finish
    /// enumerating edges, hold on to one key, and remove it afterwards.
    /// A key for a removed edge is stale and rejected by `remove_edge`.
    pub struct EdgeKey;
}

/// Errors from subdivision operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("edge not found: {key:?}")]
    EdgeNotFound { key: EdgeKey },
}

//! Testing utilities for building lookups and ballots.

use std::collections::BTreeMap;

use crate::Index;
use crate::NodeId;

/// Builds an acked-index table from `(voter_id, index)` pairs, for testing
/// purposes.
pub fn acked(
    pairs: impl IntoIterator<Item = (NodeId, u64)>,
) -> BTreeMap<NodeId, Index> {
    pairs.into_iter().map(|(id, idx)| (id, Index(idx))).collect()
}

/// Builds a ballot table from `(voter_id, granted)` pairs.
pub fn votes(
    pairs: impl IntoIterator<Item = (NodeId, bool)>,
) -> BTreeMap<NodeId, bool> {
    pairs.into_iter().collect()
}

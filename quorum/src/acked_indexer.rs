use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::Index;
use crate::NodeId;

/// Looks up the highest log index a voter is known to have acknowledged.
///
/// The host owns the table this reads from, e.g. the match index of every
/// replication stream. `None` means nothing has been acknowledged yet, which
/// counts as index 0 when computing the committed index.
pub trait AckedIndexer {
    fn acked_index(&self, voter_id: NodeId) -> Option<Index>;
}

impl AckedIndexer for BTreeMap<NodeId, Index> {
    fn acked_index(&self, voter_id: NodeId) -> Option<Index> {
        self.get(&voter_id).copied()
    }
}

impl<S> AckedIndexer for HashMap<NodeId, Index, S>
where S: BuildHasher
{
    fn acked_index(&self, voter_id: NodeId) -> Option<Index> {
        self.get(&voter_id).copied()
    }
}

impl<F> AckedIndexer for F
where F: Fn(NodeId) -> Option<Index>
{
    fn acked_index(&self, voter_id: NodeId) -> Option<Index> {
        self(voter_id)
    }
}

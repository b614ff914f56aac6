use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::NodeId;

/// The votes received so far in an election.
///
/// `Some(true)` is a granted vote, `Some(false)` a rejection and `None` means
/// the voter has not answered yet.
pub trait Ballots {
    fn ballot(&self, voter_id: NodeId) -> Option<bool>;
}

impl Ballots for BTreeMap<NodeId, bool> {
    fn ballot(&self, voter_id: NodeId) -> Option<bool> {
        self.get(&voter_id).copied()
    }
}

impl<S> Ballots for HashMap<NodeId, bool, S>
where S: BuildHasher
{
    fn ballot(&self, voter_id: NodeId) -> Option<bool> {
        self.get(&voter_id).copied()
    }
}

impl<F> Ballots for F
where F: Fn(NodeId) -> Option<bool>
{
    fn ballot(&self, voter_id: NodeId) -> Option<bool> {
        self(voter_id)
    }
}

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::AckedIndexer;
use crate::Ballots;
use crate::Index;
use crate::NodeId;
use crate::QuorumSet;
use crate::VoteResult;

/// Number of voters whose acked indexes are sorted in a stack buffer.
///
/// Larger configurations are rare and pay for one allocation.
const INLINE_VOTERS: usize = 7;

/// A set of voters that makes decisions by simple majority.
///
/// It is an immutable value: a membership change builds a new
/// `MajorityConfig` instead of editing the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct MajorityConfig {
    voters: BTreeSet<NodeId>,
}

impl From<BTreeSet<NodeId>> for MajorityConfig {
    fn from(voters: BTreeSet<NodeId>) -> Self {
        MajorityConfig { voters }
    }
}

impl FromIterator<NodeId> for MajorityConfig {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        MajorityConfig {
            voters: iter.into_iter().collect(),
        }
    }
}

/// Renders as `(1 2 3)`, or `()` when empty.
impl fmt::Display for MajorityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, id) in self.voters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, ")")
    }
}

impl MajorityConfig {
    /// Build a config from voter ids. Duplicated ids are collapsed.
    pub fn new(voters: impl IntoIterator<Item = NodeId>) -> Self {
        voters.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    pub fn contains(&self, voter_id: NodeId) -> bool {
        self.voters.contains(&voter_id)
    }

    /// Iterate voter ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.voters.iter().copied()
    }

    /// Returns the voter ids sorted in ascending order.
    pub fn slice(&self) -> Vec<NodeId> {
        self.ids().collect()
    }

    /// The minimal number of voters that forms a majority: `n/2 + 1`.
    pub fn quorum_size(&self) -> usize {
        self.voters.len() / 2 + 1
    }

    /// Returns the greatest index that at least a majority of the voters has
    /// acknowledged.
    ///
    /// A voter the lookup knows nothing about is treated as having
    /// acknowledged index 0. An empty config returns [`Index::MAX`], so that
    /// in a joint config it behaves as if only the other half exists.
    pub fn committed_index<L>(&self, l: &L) -> Index
    where L: AckedIndexer + ?Sized {
        let n = self.voters.len();
        if n == 0 {
            return Index::MAX;
        }

        let mut stk = [0u64; INLINE_VOTERS];
        let mut heap: Vec<u64>;
        let srt: &mut [u64] = if n <= INLINE_VOTERS {
            &mut stk[..n]
        } else {
            heap = vec![0; n];
            heap.as_mut_slice()
        };

        // Unknown voters keep a 0 slot. Fill from the right since the zeros
        // end up on the left after sorting anyway.
        let mut i = n;
        for id in self.voters.iter() {
            if let Some(idx) = l.acked_index(*id) {
                i -= 1;
                srt[i] = idx.0;
            }
        }

        srt.sort_unstable();

        // Moving `n/2 + 1` slots to the left from the end: every slot at or
        // after `pos` holds an index acked by at least a quorum.
        let pos = n - (n / 2 + 1);
        let committed = Index(srt[pos]);

        debug!(
            "committed_index: voters={}, acked={:?}, committed={}",
            self, srt, committed
        );
        committed
    }

    /// Tally the ballots of the voters in this config.
    ///
    /// Ballots of nodes that are not voters are ignored. An empty config
    /// always wins, so that in a joint config it behaves as if only the other
    /// half exists.
    pub fn vote_result<B>(&self, votes: &B) -> VoteResult
    where B: Ballots + ?Sized {
        if self.voters.is_empty() {
            return VoteResult::Won;
        }

        let mut granted = 0;
        let mut missing = 0;
        for id in self.voters.iter() {
            match votes.ballot(*id) {
                None => missing += 1,
                Some(true) => granted += 1,
                Some(false) => {}
            }
        }

        let q = self.quorum_size();
        let res = if granted >= q {
            VoteResult::Won
        } else if granted + missing >= q {
            VoteResult::Pending
        } else {
            VoteResult::Lost
        };

        debug!(
            "vote_result: voters={}, granted={}, missing={}, quorum={}: {}",
            self, granted, missing, q, res
        );
        res
    }
}

impl QuorumSet<NodeId> for MajorityConfig {
    type Iter = btree_set::IntoIter<NodeId>;

    fn ids(&self) -> Self::Iter {
        self.voters.clone().into_iter()
    }

    fn committed_index<L>(&self, l: &L) -> Index
    where L: AckedIndexer + ?Sized {
        MajorityConfig::committed_index(self, l)
    }

    fn vote_result<B>(&self, votes: &B) -> VoteResult
    where B: Ballots + ?Sized {
        MajorityConfig::vote_result(self, votes)
    }
}

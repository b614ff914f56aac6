use crate::AckedIndexer;
use crate::Ballots;
use crate::Index;
use crate::VoteResult;

/// A set of voters that makes decisions by quorum.
///
/// This is the seam a composite quorum, e.g. a joint of an old and a new
/// configuration, is built on: such a composite takes the minimum committed
/// index of its halves and combines their vote results.
pub trait QuorumSet<ID: 'static> {
    type Iter: Iterator<Item = ID>;

    /// Returns all voter ids in this quorum set, in ascending order.
    fn ids(&self) -> Self::Iter;

    /// The greatest index acknowledged by a quorum.
    fn committed_index<L>(&self, l: &L) -> Index
    where L: AckedIndexer + ?Sized;

    /// Classify an election by the ballots received so far.
    fn vote_result<B>(&self, votes: &B) -> VoteResult
    where B: Ballots + ?Sized;
}

#![doc = include_str!("lib_readme.md")]
#![cfg_attr(feature = "bench", feature(test))]
#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]
#![deny(unused_qualifications)]

mod acked_indexer;
mod ballots;
mod index;
mod majority;
mod quorum_set;
mod vote_result;

pub mod testing;

pub use crate::acked_indexer::AckedIndexer;
pub use crate::ballots::Ballots;
pub use crate::index::Index;
pub use crate::majority::MajorityConfig;
pub use crate::quorum_set::QuorumSet;
pub use crate::vote_result::VoteResult;

/// `NodeId` identifies a voter.
///
/// It carries no meaning besides identity; numeric order is only used to make
/// iteration and diagnostics deterministic.
pub type NodeId = u64;

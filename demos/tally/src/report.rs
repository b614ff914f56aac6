use std::fmt;

use quorum::Index;
use quorum::MajorityConfig;
use quorum::VoteResult;
use tracing::info;

use crate::snapshot::Snapshot;

/// The quorum decisions made on a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub voters: MajorityConfig,
    pub committed: Index,
    pub vote: VoteResult,

    /// Per voter acked index table, if requested.
    pub table: Option<String>,
}

impl Report {
    pub fn new(snapshot: &Snapshot, describe: bool) -> Self {
        let voters = snapshot.voters.clone();

        let committed = voters.committed_index(&snapshot.acked);
        let vote = voters.vote_result(&snapshot.votes);

        info!(
            "voters: {}, committed: {}, vote: {}",
            voters, committed, vote
        );

        let table = if describe {
            Some(voters.describe(&snapshot.acked))
        } else {
            None
        };

        Report {
            voters,
            committed,
            vote,
            table,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "voters: {}", self.voters)?;
        writeln!(f, "committed: {}", self.committed)?;
        writeln!(f, "vote: {}", self.vote)?;

        if let Some(table) = &self.table {
            write!(f, "{}", table)?;
            if !table.ends_with('\n') {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

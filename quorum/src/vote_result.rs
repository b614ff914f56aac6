/// The outcome of tallying the ballots of an election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(derive_more::Display)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum VoteResult {
    /// Neither side has a majority yet; more ballots are needed.
    #[display("VotePending")]
    Pending,

    /// A majority has rejected, or too few voters are left to grant.
    #[display("VoteLost")]
    Lost,

    /// A majority has granted.
    #[display("VoteWon")]
    Won,
}

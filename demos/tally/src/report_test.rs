use maplit::btreemap;
use pretty_assertions::assert_eq;
use quorum::Index;
use quorum::MajorityConfig;
use quorum::VoteResult;

use crate::report::Report;
use crate::snapshot::Snapshot;

#[test]
fn test_report() -> anyhow::Result<()> {
    let snapshot = Snapshot {
        voters: MajorityConfig::new([1, 2, 3, 4, 5]),
        acked: btreemap! {1 => Index(10), 2 => Index(10), 3 => Index(5)},
        votes: btreemap! {1 => true, 2 => false},
    };

    let report = Report::new(&snapshot, true);

    assert_eq!(Index(5), report.committed);
    assert_eq!(VoteResult::Pending, report.vote);

    let want = [
        "voters: (1 2 3 4 5)",
        "committed: 5",
        "vote: VotePending",
        "         idx",
        "xxx>      10    (id=1)",
        "xxx>      10    (id=2)",
        "xx>        5    (id=3)",
        "?          0    (id=4)",
        "?          0    (id=5)",
        "",
    ]
    .join("\n");
    assert_eq!(want, report.to_string());

    Ok(())
}

#[test]
fn test_report_without_table() -> anyhow::Result<()> {
    let snapshot = Snapshot {
        voters: MajorityConfig::new([1, 2, 3]),
        acked: btreemap! {1 => Index(7)},
        votes: btreemap! {1 => false, 2 => false},
    };

    let report = Report::new(&snapshot, false);

    let want = [
        "voters: (1 2 3)", //
        "committed: 0",
        "vote: VoteLost",
        "",
    ]
    .join("\n");
    assert_eq!(want, report.to_string());

    Ok(())
}

#[test]
fn test_report_empty_voters() -> anyhow::Result<()> {
    let snapshot = Snapshot::default();

    let want = [
        "voters: ()",
        "committed: ∞",
        "vote: VoteWon",
        "<empty majority quorum>",
        "",
    ]
    .join("\n");
    assert_eq!(want, Report::new(&snapshot, true).to_string());

    Ok(())
}

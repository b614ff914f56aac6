use std::fmt;

use crate::AckedIndexer;
use crate::MajorityConfig;
use crate::NodeId;

struct Row {
    id: NodeId,
    idx: u64,
    found: bool,
    /// Length of the progress bar drawn in front of the index.
    bar: usize,
}

impl MajorityConfig {
    /// Renders the acked index of every voter as a table, one voter per line
    /// in ascending id order:
    ///
    /// ```text
    ///        idx
    /// x>     100    (id=1)
    /// xx>    101    (id=2)
    /// ?        0    (id=3)
    /// ```
    ///
    /// The bar length is the rank of the voter's index, with equal indexes
    /// sharing a bar. `?` marks a voter without a known index.
    ///
    /// It is meant for humans only; the format is not stable.
    pub fn describe<L>(&self, l: &L) -> String
    where L: AckedIndexer + ?Sized {
        if self.is_empty() {
            return "<empty majority quorum>".to_string();
        }

        let mut rows = self
            .ids()
            .map(|id| {
                let acked = l.acked_index(id);
                Row {
                    id,
                    idx: acked.map(u64::from).unwrap_or_default(),
                    found: acked.is_some(),
                    bar: 0,
                }
            })
            .collect::<Vec<_>>();

        rows.sort_by_key(|r| (r.idx, r.id));

        for i in 1..rows.len() {
            rows[i].bar = if rows[i - 1].idx < rows[i].idx {
                i
            } else {
                rows[i - 1].bar
            };
        }

        rows.sort_by_key(|r| r.id);

        AckedTable { rows }.to_string()
    }
}

/// Voters in ascending id order, with their bars computed.
struct AckedTable {
    rows: Vec<Row>,
}

impl fmt::Display for AckedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rows.len();

        writeln!(f, "{}    idx", " ".repeat(n))?;
        for r in self.rows.iter() {
            if r.found {
                write!(f, "{}>{}", "x".repeat(r.bar), " ".repeat(n - r.bar))?;
            } else {
                write!(f, "?{}", " ".repeat(n))?;
            }
            writeln!(f, " {:>5}    (id={})", r.idx, r.id)?;
        }
        Ok(())
    }
}

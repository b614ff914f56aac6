use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyerror::AnyError;
use quorum::Index;
use quorum::MajorityConfig;
use quorum::NodeId;
use tracing::debug;

use crate::errors::SnapshotError;

/// What a replication driver knows about a cluster at one point in time.
///
/// ```json
/// { "voters": [1, 2, 3], "acked": { "1": 10, "2": 5 }, "votes": { "1": true } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Snapshot {
    pub voters: MajorityConfig,

    /// Highest index acknowledged by each node.
    #[serde(default)]
    pub acked: BTreeMap<NodeId, Index>,

    /// Ballots received in the current election.
    #[serde(default)]
    pub votes: BTreeMap<NodeId, bool>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let buf = fs::read(path).map_err(|e| SnapshotError::Io {
            path: path.to_path_buf(),
            source: AnyError::new(&e),
        })?;

        debug!("read snapshot {:?}: {} bytes", path, buf.len());

        Self::decode(path, &buf)
    }

    /// Decode a snapshot read from `path`. `path` is only used in errors.
    pub fn decode(path: &Path, buf: &[u8]) -> Result<Self, SnapshotError> {
        serde_json::from_slice(buf).map_err(|e| SnapshotError::Decode {
            path: path.to_path_buf(),
            source: AnyError::new(&e),
        })
    }
}

use std::fmt;

/// A log position.
///
/// `Index::MAX` is used as "no constraint": it is what an empty quorum
/// reports as committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::From)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Index(pub u64);

impl Index {
    pub const MAX: Index = Index(u64::MAX);
}

impl From<Index> for u64 {
    fn from(i: Index) -> Self {
        i.0
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Index::MAX {
            return write!(f, "∞");
        }
        write!(f, "{}", self.0)
    }
}

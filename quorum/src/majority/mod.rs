//! Simple majority quorum: any set of more than half of the voters is a
//! quorum, so every two quorums intersect.

mod describe;
#[allow(clippy::module_inception)]
mod majority;

#[cfg(all(test, feature = "bench"))]
mod bench;

pub use majority::MajorityConfig;

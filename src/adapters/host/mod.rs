//! Host environment adapters.

mod snapshot;

pub use snapshot::{HostSnapshot, MetaValue, SnapshotError, SnapshotProduct};

//! Bundle output: statistics and the atomic file writer.

mod stats;
pub mod writer;

pub use stats::BundleStats;
pub use writer::write_bundle_to;

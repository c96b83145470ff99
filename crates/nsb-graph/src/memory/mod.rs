//! In-memory ModuleGraph implementation.
//!
//! The graph is an index-stable arena: every module ever inserted keeps its
//! slot index, and edges are sets of slot indices. Snapshots share unchanged
//! slots through `Arc`, so each operation copies pointers rather than modules.

mod construction;
mod graph;
mod mutations;
mod queries;

pub use graph::ModuleGraph;

// These wildcard imports are intentional - they add impl blocks to ModuleGraph
#[allow(unused_imports)]
use construction::*;
#[allow(unused_imports)]
use mutations::*;
#[allow(unused_imports)]
use queries::*;

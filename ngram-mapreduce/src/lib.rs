//! N-gram counting with an in-process MapReduce.
//!
//! A fixed set of workers each count the n-grams of their share of the corpus,
//! route every partial count to the worker owning that n-gram, and merge what
//! they receive into final counts for the n-grams they own.

use std::collections::HashMap;

pub mod aggregate;
pub mod cluster;
pub mod corpus;
pub mod counter;
pub mod exchange;
pub mod partition;
pub mod report;
pub mod tokenizer;
mod worker;

pub use cluster::{compute, Cluster};
pub use report::Report;
pub use worker::Worker;

/// Index of a worker in `[0, workers)`.
pub type WorkerId = usize;

/// Occurrence count per n-gram.
pub type FrequencyMap = HashMap<String, u64>;

/// One [`FrequencyMap`] per destination worker, indexed by [`WorkerId`].
pub type PartitionBatch = Vec<FrequencyMap>;

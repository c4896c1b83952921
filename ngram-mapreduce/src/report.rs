use serde::Serialize;
use std::fmt;

use crate::{FrequencyMap, WorkerId};

/// Number of n-grams listed per worker.
pub const TOP_K: usize = 5;

/// Highest counts owned by one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub worker: WorkerId,
    pub top: Vec<(String, u64)>,
}

impl Report {
    /// Rank by count descending, then by n-gram text, and keep at most `k`.
    pub fn top(worker: WorkerId, counts: &FrequencyMap, k: usize) -> Self {
        let mut ranked: Vec<(&String, &u64)> = counts.iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        Self {
            worker,
            top: ranked
                .into_iter()
                .take(k)
                .map(|(ngram, count)| (ngram.clone(), *count))
                .collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---Frequencies for Worker ID: {}---", self.worker)?;
        for (ngram, count) in &self.top {
            writeln!(f, "{}-->{}", ngram, count)?;
        }
        Ok(())
    }
}

use anyhow::{bail, Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::exchange::{self, Disconnected};
use crate::report::{Report, TOP_K};
use crate::{FrequencyMap, Worker};

/// A single counting run: `workers` tasks over a fixed set of files.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub workers: usize,
    pub ngram: usize,
    pub files: Vec<PathBuf>,
}

impl Cluster {
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            bail!("worker count should be at least 1");
        }
        if self.ngram == 0 {
            bail!("n-gram size should be at least 1");
        }
        Ok(())
    }

    /// Run every worker to completion. Element `i` of the result holds the
    /// final counts owned by worker `i`.
    ///
    /// Peers of a failed worker fail in turn through the exchange instead of
    /// waiting, so this always returns. On failure the error of the worker
    /// that failed on its own is returned, not the disconnections it caused.
    pub async fn launch(&self) -> Result<Vec<FrequencyMap>> {
        self.validate()?;
        let start = Instant::now();
        info!(
            "counting {}-grams in {} files with {} workers",
            self.ngram,
            self.files.len(),
            self.workers
        );

        let files = Arc::new(self.files.clone());
        let mut pending: FuturesUnordered<_> = exchange::mailboxes(self.workers)
            .into_iter()
            .enumerate()
            .map(|(id, mailbox)| {
                let worker = Worker {
                    id,
                    workers: self.workers,
                    ngram: self.ngram,
                    files: files.clone(),
                    mailbox,
                };
                tokio::spawn(async move { (id, worker.launch().await) })
            })
            .collect();

        let mut finals: Vec<Option<FrequencyMap>> = (0..self.workers).map(|_| None).collect();
        let mut failures = Vec::new();
        while let Some(joined) = pending.next().await {
            let (id, result) = joined.context("worker task panicked")?;
            match result {
                Ok(counts) => finals[id] = Some(counts),
                Err(e) => {
                    error!("worker {} failed: {:#}", id, e);
                    failures.push(e);
                }
            }
        }
        // Disconnections only follow from another failure, so report that one.
        if let Some(pos) = failures.iter().position(|e| !e.is::<Disconnected>()) {
            return Err(failures.swap_remove(pos));
        }
        if let Some(e) = failures.pop() {
            return Err(e);
        }

        info!("all {} workers finished in {:?}", self.workers, start.elapsed());
        Ok(finals.into_iter().map(Option::unwrap_or_default).collect())
    }

    /// Top-[`TOP_K`] report of every worker, in worker order.
    pub async fn reports(&self) -> Result<Vec<Report>> {
        Ok(self
            .launch()
            .await?
            .iter()
            .enumerate()
            .map(|(id, counts)| Report::top(id, counts, TOP_K))
            .collect())
    }
}

/// Count `ngram`-grams of `files` with `workers` workers and print one report
/// per worker to stdout.
pub async fn compute(workers: usize, ngram: usize, files: Vec<PathBuf>) -> Result<Vec<Report>> {
    let reports = Cluster {
        workers,
        ngram,
        files,
    }
    .reports()
    .await?;
    for r in &reports {
        println!("{}", r);
    }
    Ok(reports)
}

use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use crate::exchange::Mailbox;
use crate::{aggregate, counter, partition, FrequencyMap, WorkerId};

/// One of the symmetric workers of a [`Cluster`](crate::Cluster) run.
#[derive(Debug)]
pub struct Worker {
    pub id: WorkerId,
    pub workers: usize,
    pub ngram: usize,
    /// The whole corpus. The worker only reads its own share of it.
    pub files: Arc<Vec<PathBuf>>,
    pub mailbox: Mailbox,
}

impl Worker {
    /// Map, partition, exchange and reduce. Returns the final counts of the
    /// n-grams this worker owns.
    pub async fn launch(self) -> Result<FrequencyMap> {
        let Worker {
            id,
            workers,
            ngram,
            files,
            mailbox: Mailbox { outbox, inbox },
        } = self;

        let share = counter::shard(&files, id, workers);
        let local = counter::count_files(&share, ngram)
            .await
            .with_context(|| format!("worker {} failed in map phase", id))?;
        debug!(
            "worker {}: mapped {} files into {} n-grams",
            id,
            share.len(),
            local.len()
        );

        outbox.scatter(partition::partition(local, workers)).await?;
        let parcels = inbox.gather().await?;

        let owned = aggregate::merge(parcels.into_iter().map(|p| p.counts));
        debug!("worker {}: reduced {} owned n-grams", id, owned.len());
        Ok(owned)
    }
}

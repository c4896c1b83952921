//! Local (map phase) counting over one worker's share of the corpus.

use anyhow::{Context, Result};
use log::trace;
use std::path::{Path, PathBuf};

use crate::{tokenizer, FrequencyMap, WorkerId};

/// Files handled by `worker`: every `workers`-th path starting at its own index.
pub fn shard(files: &[PathBuf], worker: WorkerId, workers: usize) -> Vec<PathBuf> {
    files
        .iter()
        .skip(worker)
        .step_by(workers.max(1))
        .cloned()
        .collect()
}

/// Add the n-grams of `text` to `counts`.
pub fn count_text(counts: &mut FrequencyMap, text: &str, n: usize) {
    for gram in tokenizer::ngrams(text, n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
}

/// Read a file in full and add its n-grams to `counts`.
pub async fn count_file(counts: &mut FrequencyMap, path: &Path, n: usize) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let before = counts.len();
    count_text(counts, &text, n);
    trace!(
        "read {:?}: {} bytes, {} new n-grams",
        path,
        bytes.len(),
        counts.len() - before
    );
    Ok(())
}

/// Count the n-grams of every file. Any unreadable file fails the whole call.
pub async fn count_files(files: &[PathBuf], n: usize) -> Result<FrequencyMap> {
    let mut counts = FrequencyMap::new();
    for path in files {
        count_file(&mut counts, path, n).await?;
    }
    Ok(counts)
}

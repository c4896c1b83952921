//! All-to-all shuffle between workers.
//!
//! Each worker owns one bounded inbox with room for `workers` parcels, exactly
//! what it will ever receive, so no send waits on a peer's progress. Senders
//! are only held by outboxes and an outbox is consumed by [`Outbox::scatter`],
//! so once every worker has scattered (or died) the inboxes close and a
//! missing parcel shows up as an error instead of a hang.

use anyhow::{bail, Result};
use log::trace;
use std::fmt;
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::{FrequencyMap, PartitionBatch, WorkerId};

/// Partial counts shipped from one worker to the owner of its keys.
#[derive(Debug)]
pub struct Parcel {
    pub from: WorkerId,
    pub counts: FrequencyMap,
}

/// A peer dropped out before the exchange completed. Always a consequence of
/// some other worker failing first.
#[derive(Debug)]
pub struct Disconnected(String);

impl fmt::Display for Disconnected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Disconnected {}

/// Sending half: one channel per destination worker.
#[derive(Debug)]
pub struct Outbox {
    from: WorkerId,
    peers: Vec<Sender<Parcel>>,
}

/// Receiving half: expects exactly one parcel from every worker.
#[derive(Debug)]
pub struct Inbox {
    id: WorkerId,
    expected: usize,
    rx: Receiver<Parcel>,
}

#[derive(Debug)]
pub struct Mailbox {
    pub outbox: Outbox,
    pub inbox: Inbox,
}

/// Wire up `workers` mailboxes, indexed by [`WorkerId`].
pub fn mailboxes(workers: usize) -> Vec<Mailbox> {
    assert!(workers > 0, "worker count should be non-zero");
    let (txs, rxs): (Vec<_>, Vec<_>) = (0..workers).map(|_| mpsc::channel(workers)).unzip();
    rxs.into_iter()
        .enumerate()
        .map(|(id, rx)| Mailbox {
            outbox: Outbox {
                from: id,
                peers: txs.clone(),
            },
            inbox: Inbox {
                id,
                expected: workers,
                rx,
            },
        })
        .collect()
}

impl Outbox {
    /// Send `batch[i]` to worker `i`, including ourselves.
    pub async fn scatter(self, batch: PartitionBatch) -> Result<()> {
        if batch.len() != self.peers.len() {
            bail!(
                "worker {}: batch has {} partitions for {} workers",
                self.from,
                batch.len(),
                self.peers.len()
            );
        }
        for (to, (tx, counts)) in self.peers.iter().zip(batch).enumerate() {
            trace!("worker {} -> worker {}: {} n-grams", self.from, to, counts.len());
            tx.send(Parcel {
                from: self.from,
                counts,
            })
            .await
            .map_err(|_| {
                Disconnected(format!(
                    "worker {} hung up before worker {} could send",
                    to, self.from
                ))
            })?;
        }
        Ok(())
    }
}

impl Inbox {
    /// Wait until one parcel from every worker has arrived. Arrival order is
    /// whatever the senders produced.
    pub async fn gather(mut self) -> Result<Vec<Parcel>> {
        let mut seen = vec![false; self.expected];
        let mut parcels = Vec::with_capacity(self.expected);
        while parcels.len() < self.expected {
            let parcel = match self.rx.recv().await {
                Some(p) => p,
                None => {
                    return Err(Disconnected(format!(
                        "worker {}: exchange closed after {} of {} partitions",
                        self.id,
                        parcels.len(),
                        self.expected
                    ))
                    .into())
                }
            };
            match seen.get_mut(parcel.from) {
                Some(s) if !*s => *s = true,
                _ => bail!(
                    "worker {}: unexpected parcel from worker {}",
                    self.id,
                    parcel.from
                ),
            }
            parcels.push(parcel);
        }
        Ok(parcels)
    }
}

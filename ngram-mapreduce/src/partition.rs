//! Hash-based ownership of n-grams.
//!
//! Every worker computes the owner of an n-gram on its own, so the hash must
//! not depend on per-process state. `std`'s `DefaultHasher` is randomly keyed
//! per `RandomState`, hence 32-bit FNV-1a here.

use crate::{FrequencyMap, PartitionBatch, WorkerId};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `s`.
pub fn fnv1a32(s: &str) -> u32 {
    s.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// The worker responsible for the final count of `ngram`.
pub fn owner_of(ngram: &str, workers: usize) -> WorkerId {
    assert!(workers > 0, "worker count should be non-zero");
    (fnv1a32(ngram) as usize) % workers
}

/// Split `counts` into one map per owner. Each entry lands in exactly one map.
pub fn partition(counts: FrequencyMap, workers: usize) -> PartitionBatch {
    let mut batch: PartitionBatch = (0..workers).map(|_| FrequencyMap::new()).collect();
    for (ngram, count) in counts {
        let owner = owner_of(&ngram, workers);
        batch[owner].insert(ngram, count);
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a32_vectors() {
        assert_eq!(fnv1a32(""), 0x811c_9dc5);
        assert_eq!(fnv1a32("a"), 0xe40c_292c);
        assert_eq!(fnv1a32("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_owner_deterministic() {
        for w in 1..10 {
            for gram in &["the cat", "cat sat", "a b c", ""] {
                let owner = owner_of(gram, w);
                assert!(owner < w);
                assert_eq!(owner, owner_of(gram, w));
                assert_eq!(owner, (fnv1a32(gram) as usize) % w);
            }
        }
        assert_eq!(owner_of("anything", 1), 0);
    }

    #[test]
    fn test_partition_conserves() {
        let mut counts = FrequencyMap::new();
        for i in 0..200u64 {
            counts.insert(format!("word{} word{}", i, i + 1), i + 1);
        }
        let batch = partition(counts.clone(), 4);
        assert_eq!(batch.len(), 4);
        assert_eq!(batch.iter().map(|m| m.len()).sum::<usize>(), counts.len());
        for (owner, part) in batch.iter().enumerate() {
            for (gram, count) in part {
                assert_eq!(owner_of(gram, 4), owner);
                assert_eq!(counts[gram], *count);
            }
        }
    }

    #[test]
    fn test_partition_empty() {
        let batch = partition(FrequencyMap::new(), 3);
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|m| m.is_empty()));
    }
}

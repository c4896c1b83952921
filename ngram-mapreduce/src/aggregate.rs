use crate::FrequencyMap;

/// Sum counts per n-gram across `parts`. The result does not depend on the
/// order of `parts`.
pub fn merge<I>(parts: I) -> FrequencyMap
where
    I: IntoIterator<Item = FrequencyMap>,
{
    let mut parts = parts.into_iter();
    let mut merged = match parts.next() {
        Some(first) => first,
        None => return FrequencyMap::new(),
    };
    for part in parts {
        for (ngram, count) in part {
            *merged.entry(ngram).or_insert(0) += count;
        }
    }
    merged
}

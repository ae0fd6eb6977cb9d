//! Development-time checks run by the strict mode wrapper. They only report problems and
//! never change what gets rendered.

use std::collections::HashMap;

/// Returns every id that occurs more than once, each reported once, in the order its
/// first occurrence was seen.
pub fn duplicate_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // id -> (index of first occurrence, occurrence count)
    let mut occurrences: HashMap<String, (usize, usize)> = HashMap::new();

    for (index, id) in ids.into_iter().enumerate() {
        let id = id.as_ref();
        if id.is_empty() {
            continue;
        }
        occurrences
            .entry(id.to_string())
            .or_insert((index, 0))
            .1 += 1;
    }

    let mut duplicates: Vec<(usize, String)> = occurrences
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|(id, (first, _))| (first, id))
        .collect();
    duplicates.sort_unstable_by_key(|(first, _)| *first);

    duplicates.into_iter().map(|(_, id)| id).collect()
}

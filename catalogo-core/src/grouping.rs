use crate::models::Record;
use crate::normalize::normalize;
use crate::sorting::CollationKey;
use std::collections::HashMap;

/// Bucket name for records without a classification
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

/// Group records by their classification facet (`natureza`).
/// Labels that normalize equal share a bucket, named after the first spelling seen.
/// Buckets come back in collation order with the unspecified bucket last;
/// records keep their incoming order inside each bucket.
pub fn group_by_classification<'a>(records: &[&'a Record]) -> Vec<(String, Vec<&'a Record>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Record>)> = Vec::new();

    for &record in records {
        let label = record
            .natureza()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNSPECIFIED_GROUP);
        let key = if label == UNSPECIFIED_GROUP {
            UNSPECIFIED_GROUP.to_string()
        } else {
            normalize(label)
        };

        match index.get(&key) {
            Some(&pos) => groups[pos].1.push(record),
            None => {
                index.insert(key, groups.len());
                groups.push((label.to_string(), vec![record]));
            }
        }
    }

    groups.sort_by_cached_key(|(label, _)| (label == UNSPECIFIED_GROUP, CollationKey::new(label)));
    groups
}

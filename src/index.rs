use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::aggregate::RunningAggregate;

/// Two-level table of running aggregates: recipient, then secondary key
///
/// A (recipient, key) entry is created by its first insertion and never removed.
/// Recipients iterate in lexicographic order and each recipient's keys in ascending `K` order,
/// which is lexicographic for zip codes and chronological for dates.
#[derive(Debug, Clone)]
pub struct GroupedIndex<K> {
    by_recipient: BTreeMap<String, BTreeMap<K, RunningAggregate>>,
    /// Number of (recipient, key) pairs
    pairs: usize,
}

impl<K> Default for GroupedIndex<K> {
    fn default() -> Self {
        Self {
            by_recipient: BTreeMap::new(),
            pairs: 0,
        }
    }
}

impl<K: Ord> GroupedIndex<K> {
    /// Constructs an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the aggregate for (`recipient`, `key`), creating it if needed
    ///
    /// Returns the updated aggregate.
    pub fn insert(&mut self, recipient: &str, key: K, amount: Decimal) -> &RunningAggregate {
        let keys = self.by_recipient.entry(recipient.to_owned()).or_default();

        let pairs = &mut self.pairs;
        let aggregate = keys.entry(key).or_insert_with(|| {
            *pairs += 1;
            RunningAggregate::new()
        });
        aggregate.add(amount);
        aggregate
    }

    /// Aggregate for (`recipient`, `key`), or `None` if nothing was ever inserted there
    pub fn aggregate_for(&self, recipient: &str, key: &K) -> Option<&RunningAggregate> {
        self.by_recipient.get(recipient)?.get(key)
    }

    /// Recipients, in ascending order
    ///
    /// Borrows the index, so it can be called again for a fresh pass.
    pub fn sorted_recipients(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_recipient.keys().map(String::as_str)
    }

    /// Keys seen for `recipient`, in ascending order
    ///
    /// Empty for an unknown recipient.
    pub fn sorted_keys_for<'a>(&'a self, recipient: &str) -> impl Iterator<Item = &'a K> + 'a {
        self.by_recipient
            .get(recipient)
            .into_iter()
            .flat_map(|keys| keys.keys())
    }

    /// Every (recipient, key, aggregate), ordered by recipient then key
    pub fn entries(&self) -> impl Iterator<Item = (&str, &K, &RunningAggregate)> + '_ {
        self.by_recipient.iter().flat_map(|(recipient, keys)| {
            keys.iter()
                .map(move |(key, aggregate)| (recipient.as_str(), key, aggregate))
        })
    }

    /// Number of distinct recipients
    pub fn recipient_count(&self) -> usize {
        self.by_recipient.len()
    }

    /// Number of (recipient, key) pairs
    pub fn len(&self) -> usize {
        self.pairs
    }

    /// Whether nothing has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }
}

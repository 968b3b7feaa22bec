use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Running count, total and median for one (recipient, key) group
///
/// The [`Self::new`] constructor creates the aggregate in an empty state.
/// Amounts are then added one at a time with [`Self::add`].
/// The median, count and total can be fetched at any time, and always describe exactly
/// the amounts added so far.
///
/// Every amount is kept, in ascending order, so the median is an index read rather than a sort.
/// Insertion finds its slot with a binary search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningAggregate {
    /// All amounts seen so far, sorted ascending
    ///
    /// Equal amounts keep their arrival order, which has no effect on any reported value.
    sorted: Vec<Decimal>,

    /// Exact sum of [`Self::sorted`], accumulated as amounts arrive
    total: Decimal,
}

impl RunningAggregate {
    /// Constructs a new [`Self`], without any amounts collected
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of amounts collected so far
    pub fn count(&self) -> u64 {
        self.sorted.len() as u64
    }

    /// Whether no amount has been added yet
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Adds an amount, updating the count, total and median
    pub fn add(&mut self, amount: Decimal) {
        // Upper bound: the new value lands after any equal values already present
        let at = self.sorted.partition_point(|v| *v <= amount);
        self.sorted.insert(at, amount);
        self.total = self.total.saturating_add(amount);
    }

    /// Exact median of the amounts collected so far
    ///
    /// For an even count this is the mean of the two middle amounts.
    /// Returns `None` if nothing has been added.
    pub fn exact_median(&self) -> Option<Decimal> {
        let n = self.sorted.len();
        if n == 0 {
            return None;
        }

        let mid = n / 2;
        if n % 2 == 1 {
            Some(self.sorted[mid])
        } else {
            let (low, high) = (self.sorted[mid - 1], self.sorted[mid]);
            // Halve each side first so two huge amounts cannot overflow the sum
            Some(low / Decimal::TWO + high / Decimal::TWO)
        }
    }

    /// Exact running total of the amounts collected so far
    pub fn exact_total(&self) -> Decimal {
        self.total
    }

    /// Median rounded to a whole unit, halves rounding up
    ///
    /// If no data has been processed, this returns zero as a fallback
    pub fn median(&self) -> i64 {
        self.exact_median().map(round_whole).unwrap_or(0)
    }

    /// Running total rounded to a whole unit, halves rounding up
    pub fn total(&self) -> i64 {
        round_whole(self.total)
    }
}

impl Extend<Decimal> for RunningAggregate {
    fn extend<I: IntoIterator<Item = Decimal>>(&mut self, iter: I) {
        for amount in iter {
            self.add(amount);
        }
    }
}

impl FromIterator<Decimal> for RunningAggregate {
    fn from_iter<I: IntoIterator<Item = Decimal>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        aggregate.extend(iter);
        aggregate
    }
}

/// Rounds to the nearest whole unit, with exact halves going toward positive infinity
///
/// `12.5` becomes `13` and `-12.5` becomes `-12`.
/// Values outside the `i64` range saturate.
pub fn round_whole(value: Decimal) -> i64 {
    let rounded = value
        .checked_add(Decimal::new(5, 1))
        .map(|v| v.floor())
        // Only fails right at Decimal::MAX, which saturates below anyway
        .unwrap_or(value);

    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Median of a prefix, computed the slow way
    fn naive_median(values: &[Decimal]) -> Decimal {
        let mut sorted = values.to_vec();
        sorted.sort();
        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / Decimal::TWO
        }
    }

    #[test]
    fn no_data() {
        let aggregate = RunningAggregate::new();
        assert_eq!(aggregate.median(), 0);
        assert_eq!(aggregate.exact_median(), None);
        assert_eq!(aggregate.count(), 0);
        assert_eq!(aggregate.total(), 0);
        assert!(aggregate.is_empty());
    }

    #[test]
    fn one_data() {
        let mut aggregate = RunningAggregate::new();
        aggregate.add(dec("10"));

        assert_eq!(aggregate.median(), 10);
        assert_eq!(aggregate.count(), 1);
        assert_eq!(aggregate.total(), 10);
    }

    #[test]
    fn two_values_average() {
        let mut aggregate = RunningAggregate::new();
        aggregate.add(dec("10"));
        aggregate.add(dec("20"));

        assert_eq!(aggregate.median(), 15);
        assert_eq!(aggregate.count(), 2);
        assert_eq!(aggregate.total(), 30);
    }

    #[test]
    fn odd_count_takes_middle_regardless_of_order() {
        for order in [["5", "15", "10"], ["15", "10", "5"], ["10", "5", "15"]] {
            let aggregate: RunningAggregate = order.iter().map(|s| dec(s)).collect();
            assert_eq!(aggregate.median(), 10);
            assert_eq!(aggregate.count(), 3);
            assert_eq!(aggregate.total(), 30);
        }
    }

    #[test]
    fn median_matches_sorted_prefix_after_every_insert() {
        // Deterministic scramble with duplicates, negatives and fractions
        let values: Vec<Decimal> = (0..500i64)
            .map(|i| Decimal::new((i * 7919) % 1013 - 200, (i % 3) as u32))
            .collect();

        let mut aggregate = RunningAggregate::new();
        for (i, v) in values.iter().enumerate() {
            aggregate.add(*v);
            let prefix = &values[..=i];

            assert_eq!(aggregate.exact_median(), Some(naive_median(prefix)));
            assert_eq!(aggregate.median(), round_whole(naive_median(prefix)));
            assert_eq!(aggregate.count(), (i + 1) as u64);
            assert_eq!(aggregate.exact_total(), prefix.iter().copied().sum::<Decimal>());
        }
    }

    #[test]
    fn total_is_order_independent() {
        let forward: RunningAggregate = ["0.25", "0.25", "100.10", "3"]
            .iter()
            .map(|s| dec(s))
            .collect();
        let backward: RunningAggregate = ["3", "100.10", "0.25", "0.25"]
            .iter()
            .map(|s| dec(s))
            .collect();

        assert_eq!(forward.exact_total(), dec("103.60"));
        assert_eq!(forward.total(), 104);
        assert_eq!(forward.total(), backward.total());
        assert_eq!(forward.median(), backward.median());
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(round_whole(dec("291.5")), 292);
        assert_eq!(round_whole(dec("291.49")), 291);
        assert_eq!(round_whole(dec("0.50")), 1);
        assert_eq!(round_whole(dec("0.4999")), 0);
        assert_eq!(round_whole(dec("-2.5")), -2);
        assert_eq!(round_whole(dec("-2.51")), -3);
        assert_eq!(round_whole(Decimal::MAX), i64::MAX);
        assert_eq!(round_whole(Decimal::MIN), i64::MIN);
    }

    #[test]
    fn even_median_of_cents_rounds_half_up() {
        let aggregate: RunningAggregate = ["250", "333"].iter().map(|s| dec(s)).collect();
        assert_eq!(aggregate.exact_median(), Some(dec("291.5")));
        assert_eq!(aggregate.median(), 292);
        assert_eq!(aggregate.total(), 583);
    }

    #[test]
    fn zero_and_negative_amounts_are_counted() {
        let aggregate: RunningAggregate = ["0", "-40", "10"].iter().map(|s| dec(s)).collect();
        assert_eq!(aggregate.median(), 0);
        assert_eq!(aggregate.count(), 3);
        assert_eq!(aggregate.total(), -30);
    }

    #[test]
    fn hot_key_many_inserts() {
        let mut aggregate = RunningAggregate::new();
        for i in (1..=10_000i64).rev() {
            aggregate.add(Decimal::from(i));
        }

        assert_eq!(aggregate.count(), 10_000);
        assert_eq!(aggregate.exact_median(), Some(dec("5000.5")));
        assert_eq!(aggregate.median(), 5001);
        assert_eq!(aggregate.total(), 50_005_000);
    }
}

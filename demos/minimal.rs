//! A basic example showing minimal usage
//!
//! We construct a [`RunningAggregate`], fill it with amounts, and read out the median after each one

use donor_medians::RunningAggregate;
use rust_decimal::Decimal;

/// Some contribution amounts, in cents
///
/// In practice, this will probably be a much larger stream
const DATA: [i64; 7] = [25000, 33300, 38400, 23000, 38400, 4000, 100000];

fn main() {
    let mut aggregate = RunningAggregate::new();

    // Fold each amount in; the median is ready straight away
    for cents in DATA {
        aggregate.add(Decimal::new(cents, 2));
        println!(
            "median {} over {} contributions, total {}",
            aggregate.median(),
            aggregate.count(),
            aggregate.total()
        );
    }
}

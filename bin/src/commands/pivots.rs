//! Pivots command implementation.

use quinta_lib::PivotPoints;

const LABELS: [&str; 7] = ["Pivot", "R1", "R2", "R3", "S1", "S2", "S3"];

/// Prints Fibonacci pivot levels for the given values.
pub(crate) fn pivots(high: f64, low: f64, close: f64) {
    let levels = PivotPoints::fibonacci(high, low, close).levels();
    for (label, value) in LABELS.iter().zip(levels) {
        println!("{label:<6} {value:.2}");
    }
}

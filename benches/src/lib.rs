//! Benchmark fixtures for quinta.

use quinta_lib::{Row, RowBatch, TradingDay};

const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// Builds `count` rows spread evenly across `day`, with a deterministic
/// price walk.
///
/// Every 50th row has an unset timestamp and every 20th falls on the next
/// day, so the filter sees all three outcomes.
pub fn synthetic_rows(day: TradingDay, count: usize) -> Vec<Row> {
    let start = day
        .date()
        .and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_utc().timestamp_nanos_opt())
        .unwrap_or(0);
    let step = NANOS_PER_DAY / count.max(1) as i64;

    let mut price = 100.0_f64;
    (0..count)
        .map(|i| {
            let drift = ((i * 7919) % 101) as f64 / 100.0 - 0.5;
            price = (price + drift).max(1.0);
            let timestamp_ns = if i % 50 == 0 {
                0
            } else if i % 20 == 0 {
                start + NANOS_PER_DAY + step * i as i64
            } else {
                start + step * i as i64
            };
            Row::new(
                timestamp_ns,
                price,
                price + 0.25,
                price - 0.25,
                price + drift / 2.0,
                (i % 1000) as i64,
            )
        })
        .collect()
}

/// Splits rows into batches of `batch_size`.
pub fn batches(rows: &[Row], batch_size: usize) -> Vec<RowBatch> {
    rows.chunks(batch_size.max(1))
        .map(|chunk| RowBatch::from(chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_rows_cover_day() {
        let day: TradingDay = "2024-01-10".parse().unwrap();
        let rows = synthetic_rows(day, 1000);
        assert_eq!(rows.len(), 1000);
        assert!(rows.iter().any(|r| r.timestamp_ns == 0));
        assert!(rows.iter().any(|r| day.contains_nanos(r.timestamp_ns)));
        assert!(
            rows.iter()
                .any(|r| r.timestamp_ns != 0 && !day.contains_nanos(r.timestamp_ns))
        );
    }

    #[test]
    fn test_batches_split() {
        let day: TradingDay = "2024-01-10".parse().unwrap();
        let rows = synthetic_rows(day, 10);
        let split = batches(&rows, 4);
        assert_eq!(split.len(), 3);
        assert_eq!(split[2].len(), 2);
    }
}

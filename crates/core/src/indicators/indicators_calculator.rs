use rust_decimal::Decimal;

use super::indicators_model::{Bar, IndicatorPoint};

/// Simple moving average over bar closes, via a rolling sum.
///
/// The first point lands on the bar at index `period - 1`; a zero period or
/// a series shorter than the period yields no points.
pub fn simple_moving_average(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || bars.len() < period {
        return Vec::new();
    }

    let divisor = Decimal::from(period as u64);
    let mut out = Vec::with_capacity(bars.len() - period + 1);
    let mut sum = Decimal::ZERO;

    for (i, bar) in bars.iter().enumerate() {
        sum += bar.close;
        if i >= period {
            sum -= bars[i - period].close;
        }
        if i + 1 >= period {
            out.push(IndicatorPoint {
                time: bar.time,
                value: sum / divisor,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn bars_from_closes(closes: &[Decimal]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| Bar {
                time: Utc.timestamp_opt(86_400 * i as i64, 0).unwrap(),
                open: *close,
                high: *close,
                low: *close,
                close: *close,
            })
            .collect()
    }

    #[test]
    fn test_sma_window_alignment() {
        let bars = bars_from_closes(&[dec!(1), dec!(2), dec!(3), dec!(4)]);
        let sma = simple_moving_average(&bars, 2);
        assert_eq!(sma.len(), 3);
        assert_eq!(sma[0].value, dec!(1.5));
        assert_eq!(sma[1].value, dec!(2.5));
        assert_eq!(sma[2].value, dec!(3.5));
        // Each point carries the timestamp of the window's last bar.
        assert_eq!(sma[0].time, bars[1].time);
        assert_eq!(sma[2].time, bars[3].time);
    }

    #[test]
    fn test_sma_full_period() {
        let bars = bars_from_closes(&[dec!(2), dec!(4), dec!(6)]);
        let sma = simple_moving_average(&bars, 3);
        assert_eq!(sma.len(), 1);
        assert_eq!(sma[0].value, dec!(4));
    }

    #[test]
    fn test_sma_degenerate_inputs() {
        let bars = bars_from_closes(&[dec!(1), dec!(2)]);
        assert!(simple_moving_average(&bars, 0).is_empty());
        assert!(simple_moving_average(&bars, 3).is_empty());
        assert!(simple_moving_average(&[], 50).is_empty());
    }

    #[test]
    fn test_parse_bars_unix_seconds() {
        let payload = r#"[{"time": 1700000000, "open": 10, "high": 12, "low": 9.5, "close": 11}]"#;
        let bars = Bar::parse_bars(payload).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, dec!(11));
        assert_eq!(bars[0].time.timestamp(), 1_700_000_000);
    }
}

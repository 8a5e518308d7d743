use chrono::Duration;
use num_traits::{FromPrimitive, ToPrimitive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use super::demo_data_model::EquitySeriesConfig;
use crate::constants::SERIES_VALUE_PRECISION;
use crate::series::DatedPoint;

/// Generates a plausible-looking daily equity series: a small upward drift
/// with uniform noise plus a slow sine swell. Deterministic for a fixed
/// seed, so the demo pages render the same curve on every visit.
pub fn generate_equity_series(config: &EquitySeriesConfig) -> Vec<DatedPoint> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut out = Vec::with_capacity(config.days);
    let mut value = config.start_value.to_f64().unwrap_or(0.0);

    for i in 0..config.days {
        let noise = (rng.gen::<f64>() - 0.48) * 0.9;
        let swell = (i as f64 / 18.0).sin() * 0.25;
        value += noise + swell;

        let date = config.start_date + Duration::days(i as i64);
        out.push(DatedPoint::new(
            date,
            Decimal::from_f64(value)
                .unwrap_or_default()
                .round_dp(SERIES_VALUE_PRECISION),
        ));
    }

    out
}

//! Grams-per-day needed to go from the current weight to the goal weight
//! by the target date.

use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

const GRAMS_PER_KG: f64 = 1000.0;
const MS_PER_DAY: f64 = 86_400_000.0;
const NS_PER_DAY: f64 = 86_400_000_000_000.0;

/// Leading decimal number, optionally signed, with optional exponent.
static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid decimal regex")
});

/// Parse weight text leniently: leading whitespace is skipped and the
/// longest decimal prefix is used, so `"70kg"` reads as 70.
pub fn parse_weight(text: &str) -> Option<f64> {
    let m = DECIMAL_PREFIX.find(text.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Daily loss in grams, rounded half away from zero to two decimals.
///
/// Checks run in order and the first failure is returned:
/// weights must parse, the target must be strictly after `now`, and the
/// goal must be below the current weight. Very close target dates give
/// very large results; nothing is clamped.
pub fn daily_loss_grams(
    current_weight: &str,
    goal_weight: &str,
    target_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<f64, ValidationError> {
    let (Some(current), Some(goal)) = (parse_weight(current_weight), parse_weight(goal_weight))
    else {
        return Err(ValidationError::InvalidWeight);
    };

    let target = match target_date {
        Some(t) if t > now => t,
        _ => return Err(ValidationError::InvalidDate),
    };

    if goal >= current {
        return Err(ValidationError::InvalidGoal);
    }

    let total_loss_grams = (current - goal) * GRAMS_PER_KG;
    let days_remaining = days_between(now, target);

    Ok(round2(total_loss_grams / days_remaining))
}

/// Real number of days from `from` to `to`. Nanosecond resolution, except
/// for spans too long to count in nanoseconds (about 292 years).
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let span = to - from;
    match span.num_nanoseconds() {
        Some(ns) => ns as f64 / NS_PER_DAY,
        None => span.num_milliseconds() as f64 / MS_PER_DAY,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Display form of a result, always two decimals: `500.00`.
pub fn format_grams(grams: f64) -> String {
    format!("{:.2}", grams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn ten_days_five_kilos() {
        let target = now() + Duration::days(10);
        let grams = daily_loss_grams("80", "75", Some(target), now()).unwrap();
        assert_eq!(format_grams(grams), "500.00");
    }

    #[test]
    fn fractional_days_are_not_rounded() {
        // 1 kg over 1.5 days
        let target = now() + Duration::hours(36);
        let grams = daily_loss_grams("71", "70", Some(target), now()).unwrap();
        assert_eq!(format_grams(grams), "666.67");
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        let target = now() + Duration::days(3);
        let grams = daily_loss_grams("70", "69", Some(target), now()).unwrap();
        assert_eq!(grams, 333.33);
    }

    #[test]
    fn matches_formula_over_a_range_of_inputs() {
        for (current, goal, days) in [(90.0, 80.0, 30), (65.5, 60.25, 7), (120.0, 119.9, 365)] {
            let target = now() + Duration::days(days);
            let got = daily_loss_grams(
                &current.to_string(),
                &goal.to_string(),
                Some(target),
                now(),
            )
            .unwrap();
            let expected = ((current - goal) * 1000.0 / days as f64 * 100.0).round() / 100.0;
            assert_eq!(got, expected, "current={current} goal={goal} days={days}");
        }
    }

    #[test]
    fn equal_weights_are_an_invalid_goal() {
        let target = now() + Duration::days(10);
        assert_eq!(
            daily_loss_grams("70", "70", Some(target), now()),
            Err(ValidationError::InvalidGoal)
        );
    }

    #[test]
    fn goal_above_current_is_an_invalid_goal() {
        let target = now() + Duration::days(10);
        assert_eq!(
            daily_loss_grams("70", "72.5", Some(target), now()),
            Err(ValidationError::InvalidGoal)
        );
    }

    #[test]
    fn yesterday_is_an_invalid_date() {
        let target = now() - Duration::days(1);
        assert_eq!(
            daily_loss_grams("70", "65", Some(target), now()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn exactly_now_is_an_invalid_date() {
        assert_eq!(
            daily_loss_grams("70", "65", Some(now()), now()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn missing_date_is_an_invalid_date() {
        assert_eq!(
            daily_loss_grams("70", "65", None, now()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn weights_are_checked_before_date_and_goal() {
        // past date and goal above current, but the weight error wins
        let target = now() - Duration::days(1);
        assert_eq!(
            daily_loss_grams("abc", "90", Some(target), now()),
            Err(ValidationError::InvalidWeight)
        );
        assert_eq!(
            daily_loss_grams("70", "", None, now()),
            Err(ValidationError::InvalidWeight)
        );
    }

    #[test]
    fn date_is_checked_before_goal() {
        assert_eq!(
            daily_loss_grams("70", "75", None, now()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn tiny_remaining_time_is_not_clamped() {
        let target = now() + Duration::milliseconds(1);
        let grams = daily_loss_grams("70", "69", Some(target), now()).unwrap();
        assert_eq!(grams, 86_400_000_000.0);
    }

    #[test]
    fn sub_millisecond_remaining_time_gives_a_finite_result() {
        let target = now() + Duration::microseconds(500);
        let grams = daily_loss_grams("70", "69", Some(target), now()).unwrap();
        assert!(grams.is_finite());
        assert!((grams - 172_800_000_000.0).abs() < 1.0);
    }

    #[test]
    fn very_distant_target_still_computes() {
        // 1 kg over 146000 days: too long to count in nanoseconds
        let target = now() + Duration::days(146_000);
        let grams = daily_loss_grams("70", "69", Some(target), now()).unwrap();
        assert_eq!(grams, 0.01);
    }

    #[test]
    fn lenient_weight_parsing() {
        assert_eq!(parse_weight("70"), Some(70.0));
        assert_eq!(parse_weight("  65.5"), Some(65.5));
        assert_eq!(parse_weight("70kg"), Some(70.0));
        assert_eq!(parse_weight(".5"), Some(0.5));
        assert_eq!(parse_weight("7e1"), Some(70.0));
        assert_eq!(parse_weight("-3"), Some(-3.0));
        assert_eq!(parse_weight("kg70"), None);
        assert_eq!(parse_weight(""), None);
        assert_eq!(parse_weight("."), None);
        assert_eq!(parse_weight("1e999"), None);
        assert_eq!(parse_weight("Infinity"), None);
        assert_eq!(parse_weight("-Infinity"), None);
    }
}

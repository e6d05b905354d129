use itertools::{Itertools, MinMaxResult};
use rust_decimal::Decimal;

use crate::{
    meter::ElectricityReading,
    plan::PricePlan,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        rate::KilowattHourRate,
        time::Hours,
    },
};

/// Cost of the consumption under the price plan.
///
/// The consumed energy is estimated as the average power over the covered time span.
/// Each reading is then priced with [`PricePlan::price_at`], so peak multipliers apply to the
/// share of readings which fall on a peak day, and the mean of those rates is the effective rate.
#[must_use]
pub fn calculate_cost(readings: &[ElectricityReading], plan: &PricePlan) -> Cost {
    if readings.is_empty() {
        return Cost::ZERO;
    }
    let average_power = Kilowatts::from(mean(readings.iter().map(|reading| reading.reading.0)));
    let energy: KilowattHours = average_power * time_span(readings);
    let effective_rate =
        KilowattHourRate::from(mean(readings.iter().map(|reading| plan.price_at(reading.time).0)));
    energy * effective_rate
}

/// Arithmetic mean of a non-empty sequence.
///
/// Should the plain sum overflow, the values are scaled down before summing.
fn mean(values: impl Iterator<Item = Decimal> + Clone) -> Decimal {
    let (n_values, sum) = values
        .clone()
        .try_fold((0_usize, Decimal::ZERO), |(n, sum), value| Some((n + 1, sum.checked_add(value)?)))
        .map_or_else(
            || (values.clone().count(), None),
            |(n_values, sum)| (n_values, Some(sum)),
        );
    let n_values = Decimal::from(n_values);
    sum.map_or_else(
        || values.map(|value| value / n_values).fold(Decimal::ZERO, Decimal::saturating_add),
        |sum| sum / n_values,
    )
}

/// Time between the earliest and the latest reading.
///
/// When all the readings share the same timestamp, there is no span to speak of,
/// so each reading is taken to cover an equal share of one hour.
fn time_span(readings: &[ElectricityReading]) -> Hours {
    let span = match readings.iter().map(|reading| reading.time).minmax() {
        MinMaxResult::NoElements | MinMaxResult::OneElement(_) => Hours::ZERO,
        MinMaxResult::MinMax(min, max) => Hours::from(max - min),
    };
    if span.is_zero() { Hours::ONE / Decimal::from(readings.len()) } else { span }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, TimeZone, Utc, Weekday};
    use rust_decimal::dec;

    use super::*;
    use crate::plan::PeakTimeMultiplier;

    /// Monday.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap()
    }

    fn reading(time: DateTime<Utc>, kilowatts: Decimal) -> ElectricityReading {
        ElectricityReading::new(time, Kilowatts::from(kilowatts))
    }

    fn plan(unit_rate: Decimal) -> PricePlan {
        PricePlan::builder()
            .supplier("Test")
            .unit_rate(KilowattHourRate::from(unit_rate))
            .build()
    }

    #[test]
    fn test_no_readings() {
        assert_eq!(calculate_cost(&[], &plan(dec!(10))), Cost::ZERO);
    }

    #[test]
    fn test_zero_unit_rate() {
        let readings = [reading(now() - TimeDelta::hours(2), dec!(3)), reading(now(), dec!(7))];
        assert_eq!(calculate_cost(&readings, &plan(Decimal::ZERO)), Cost::ZERO);
    }

    #[test]
    fn test_average_power_over_span() {
        let readings =
            [reading(now() - TimeDelta::minutes(45), dec!(5)), reading(now(), dec!(20))];
        assert_eq!(calculate_cost(&readings, &plan(dec!(1))), Cost::from(dec!(9.375)));
        assert_eq!(calculate_cost(&readings, &plan(dec!(2))), Cost::from(dec!(18.75)));
    }

    #[test]
    fn test_unordered_readings() {
        let readings =
            [reading(now(), dec!(20)), reading(now() - TimeDelta::minutes(45), dec!(5))];
        assert_eq!(calculate_cost(&readings, &plan(dec!(1))), Cost::from(dec!(9.375)));
    }

    #[test]
    fn test_single_reading_covers_one_hour() {
        let readings = [reading(now(), dec!(4))];
        assert_eq!(calculate_cost(&readings, &plan(dec!(0.5))), Cost::from(dec!(2)));
    }

    #[test]
    fn test_same_timestamp_readings_share_one_hour() {
        let readings = [reading(now(), dec!(2)), reading(now(), dec!(6))];
        // Average 4 kW over half an hour.
        assert_eq!(calculate_cost(&readings, &plan(dec!(1))), Cost::from(dec!(2)));
    }

    #[test]
    fn test_huge_readings_saturate() {
        let readings = [
            reading(now() - TimeDelta::hours(2), Decimal::MAX),
            reading(now(), Decimal::MAX),
        ];
        let cost = calculate_cost(&readings, &plan(dec!(10)));
        assert!(cost > Cost::from(Decimal::from(u64::MAX)));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([dec!(5), dec!(20)].into_iter()), dec!(12.5));
        assert!(mean([Decimal::MAX, Decimal::MAX].into_iter()) > Decimal::from(u64::MAX));
    }

    #[test]
    fn test_peak_multiplier_applies_to_matching_readings() {
        let plan = PricePlan::builder()
            .supplier("Peak Mondays")
            .unit_rate(KilowattHourRate::from(dec!(1)))
            .peak_time_multipliers(vec![PeakTimeMultiplier {
                day_of_week: Weekday::Mon,
                multiplier: dec!(3),
            }])
            .build();

        // Both readings are on Monday: the whole consumption is at peak.
        let monday = [reading(now() - TimeDelta::hours(1), dec!(2)), reading(now(), dec!(2))];
        assert_eq!(calculate_cost(&monday, &plan), Cost::from(dec!(6)));

        // Sunday evening and Monday morning: half of the readings are at peak.
        let midnight = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let mixed = [
            reading(midnight - TimeDelta::minutes(30), dec!(2)),
            reading(midnight + TimeDelta::minutes(30), dec!(2)),
        ];
        assert_eq!(calculate_cost(&mixed, &plan), Cost::from(dec!(4)));
    }
}

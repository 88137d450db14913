use super::rate_card::RateCard;
use super::snapshot::{EarningsProjection, MetricsSnapshot, SavingsProjection};
use crate::domain::dispatch::DeliveryRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;

/// Linear projection horizons. The week/month figures are defined as exact
/// multiples of the daily figure, not calendar-aware sums.
pub const DAYS_PER_WEEK: u64 = 7;
pub const DAYS_PER_MONTH: u64 = 30;

/// Derives every dashboard metric from the current delivery table.
///
/// Stateless and single-pass: group orders by partner, sum, then apply the
/// rate card. An empty table yields an all-zero snapshot.
pub fn derive_snapshot(records: &[DeliveryRecord], rates: &RateCard) -> MetricsSnapshot {
    let mut totals_by_partner: BTreeMap<_, u64> = BTreeMap::new();
    for record in records {
        *totals_by_partner.entry(record.partner).or_insert(0) += u64::from(record.orders);
    }
    let grand_total: u64 = totals_by_partner.values().sum();
    let grand_total_dec = Decimal::from(grand_total);

    let optimized_by_partner = totals_by_partner
        .iter()
        .map(|(&partner, &orders)| (partner, Decimal::from(orders) * rates.optimization_factor))
        .collect();

    let earnings_today = grand_total_dec * rates.earning_per_order;
    let earnings = EarningsProjection {
        today: earnings_today,
        week: earnings_today * Decimal::from(DAYS_PER_WEEK),
        month: earnings_today * Decimal::from(DAYS_PER_MONTH),
    };

    let savings_by_partner = totals_by_partner
        .iter()
        .map(|(&partner, &orders)| {
            let day = Decimal::from(orders) * rates.saving_per_order;
            (
                partner,
                SavingsProjection {
                    day,
                    week: day * Decimal::from(DAYS_PER_WEEK),
                    month: day * Decimal::from(DAYS_PER_MONTH),
                },
            )
        })
        .collect();

    MetricsSnapshot {
        totals_by_partner,
        optimized_by_partner,
        grand_total,
        earnings,
        savings_by_partner,
        fuel_saved_litres: (grand_total_dec * rates.fuel_litres_per_order).round_dp(2),
        manpower_saved: (grand_total_dec * rates.manpower_per_order)
            .floor()
            .to_u64()
            .unwrap_or(0),
        cost_saved: (grand_total_dec * rates.cost_saved_per_order).round_dp(2),
    }
}

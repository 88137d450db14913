use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The assumed per-order rates behind every derived metric.
///
/// None of these come from a real optimization model; they are configured
/// constants with the aggregator's working assumptions as defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    /// Fraction of orders remaining after merging smaller deliveries.
    pub optimization_factor: Decimal,
    /// Aggregator revenue per delivered order, INR.
    pub earning_per_order: Decimal,
    /// Partner cost saved per optimized order, INR.
    pub saving_per_order: Decimal,
    /// Litres of fuel saved per order.
    pub fuel_litres_per_order: Decimal,
    /// Headcount saved per order (fractional; floored at aggregate level).
    pub manpower_per_order: Decimal,
    /// Total cost saved per order, INR.
    pub cost_saved_per_order: Decimal,
    /// Driver-count placeholder shown in the sidebar.
    pub active_drivers: u32,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            optimization_factor: dec!(0.85),
            earning_per_order: dec!(3),
            saving_per_order: dec!(5),
            fuel_litres_per_order: dec!(0.15),
            manpower_per_order: dec!(0.1),
            cost_saved_per_order: dec!(2.5),
            active_drivers: 10,
        }
    }
}

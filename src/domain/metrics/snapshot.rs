use crate::domain::dispatch::Partner;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregator revenue projected linearly from today's total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EarningsProjection {
    pub today: Decimal,
    pub week: Decimal,
    pub month: Decimal,
}

/// Per-partner cost savings projected linearly from one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SavingsProjection {
    pub day: Decimal,
    pub week: Decimal,
    pub month: Decimal,
}

/// Everything the dashboard renders, derived in one pass over the table.
///
/// A snapshot is a pure function of the current `DeliveryLog` and `RateCard`;
/// nothing in it is stored between renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub totals_by_partner: BTreeMap<Partner, u64>,
    pub optimized_by_partner: BTreeMap<Partner, Decimal>,
    pub grand_total: u64,
    pub earnings: EarningsProjection,
    pub savings_by_partner: BTreeMap<Partner, SavingsProjection>,
    pub fuel_saved_litres: Decimal,
    pub manpower_saved: u64,
    pub cost_saved: Decimal,
}

impl MetricsSnapshot {
    /// Sidebar projection: orders processed this week at today's volume.
    pub fn orders_week(&self) -> u64 {
        self.grand_total * 7
    }

    /// Sidebar projection: orders processed this month at today's volume.
    pub fn orders_month(&self) -> u64 {
        self.grand_total * 30
    }
}

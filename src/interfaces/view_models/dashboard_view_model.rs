use crate::domain::dispatch::Partner;
use crate::domain::metrics::{MetricsSnapshot, RateCard};
use rust_decimal::prelude::ToPrimitive;

/// One partner's position on the charts, in plot-ready floats
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerRow {
    pub partner: Partner,
    pub orders: u64,
    pub optimized: f64,
    pub savings_day: f64,
    pub savings_week: f64,
    pub savings_month: f64,
}

/// A labeled value for the earnings chart axis
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodValue {
    pub label: &'static str,
    pub amount: f64,
}

/// Everything the dashboard panels render, pre-formatted from one snapshot.
///
/// Pure presentation mapping; holds no references back into the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub partner_rows: Vec<PartnerRow>,
    pub grand_total: u64,
    pub orders_week: u64,
    pub orders_month: u64,
    pub earnings: [PeriodValue; 3],
    pub fuel_saved: String,
    pub manpower_saved: String,
    pub cost_saved: String,
    pub active_drivers: u32,
}

impl DashboardViewModel {
    pub fn from_snapshot(snapshot: &MetricsSnapshot, rates: &RateCard) -> Self {
        let partner_rows = snapshot
            .totals_by_partner
            .iter()
            .map(|(&partner, &orders)| {
                let optimized = snapshot
                    .optimized_by_partner
                    .get(&partner)
                    .and_then(|d| d.to_f64())
                    .unwrap_or(0.0);
                let savings = snapshot
                    .savings_by_partner
                    .get(&partner)
                    .copied()
                    .unwrap_or_default();
                PartnerRow {
                    partner,
                    orders,
                    optimized,
                    savings_day: savings.day.to_f64().unwrap_or(0.0),
                    savings_week: savings.week.to_f64().unwrap_or(0.0),
                    savings_month: savings.month.to_f64().unwrap_or(0.0),
                }
            })
            .collect();

        Self {
            partner_rows,
            grand_total: snapshot.grand_total,
            orders_week: snapshot.orders_week(),
            orders_month: snapshot.orders_month(),
            earnings: [
                PeriodValue {
                    label: "Today",
                    amount: snapshot.earnings.today.to_f64().unwrap_or(0.0),
                },
                PeriodValue {
                    label: "This Week",
                    amount: snapshot.earnings.week.to_f64().unwrap_or(0.0),
                },
                PeriodValue {
                    label: "This Month",
                    amount: snapshot.earnings.month.to_f64().unwrap_or(0.0),
                },
            ],
            fuel_saved: format!(
                "{:.2} L",
                snapshot.fuel_saved_litres.to_f64().unwrap_or(0.0)
            ),
            manpower_saved: snapshot.manpower_saved.to_string(),
            cost_saved: inr(snapshot.cost_saved.to_f64().unwrap_or(0.0)),
            active_drivers: rates.active_drivers,
        }
    }

    pub fn partner_labels(&self) -> Vec<String> {
        self.partner_rows
            .iter()
            .map(|row| row.partner.to_string())
            .collect()
    }
}

/// Rupee display formatting used across the dashboard
pub fn inr(amount: f64) -> String {
    format!("₹{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::{DeliveryRecord, Location};
    use crate::domain::metrics::derive_snapshot;
    use chrono::Utc;

    fn snapshot() -> MetricsSnapshot {
        let records = vec![
            DeliveryRecord::new(Partner::Delhivery, 3, Location::Koramangala, Utc::now()).unwrap(),
            DeliveryRecord::new(Partner::Delhivery, 2, Location::Whitefield, Utc::now()).unwrap(),
            DeliveryRecord::new(Partner::Ekart, 5, Location::HsrLayout, Utc::now()).unwrap(),
        ];
        derive_snapshot(&records, &RateCard::default())
    }

    #[test]
    fn test_view_model_maps_worked_example() {
        let vm = DashboardViewModel::from_snapshot(&snapshot(), &RateCard::default());

        assert_eq!(vm.grand_total, 10);
        assert_eq!(vm.orders_week, 70);
        assert_eq!(vm.earnings[0].amount, 30.0);
        assert_eq!(vm.earnings[2].amount, 900.0);
        assert_eq!(vm.fuel_saved, "1.50 L");
        assert_eq!(vm.manpower_saved, "1");
        assert_eq!(vm.cost_saved, "₹25.00");
        assert_eq!(vm.active_drivers, 10);
    }

    #[test]
    fn test_partner_rows_follow_axis_order() {
        let vm = DashboardViewModel::from_snapshot(&snapshot(), &RateCard::default());

        let labels = vm.partner_labels();
        assert_eq!(labels, vec!["Delhivery".to_string(), "Ekart".to_string()]);

        let ekart = &vm.partner_rows[1];
        assert_eq!(ekart.orders, 5);
        assert!((ekart.optimized - 4.25).abs() < f64::EPSILON);
        assert!((ekart.savings_month - 750.0).abs() < f64::EPSILON);
    }
}

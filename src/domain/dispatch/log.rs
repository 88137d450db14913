use super::types::DeliveryRecord;

/// Append-only table of deliveries, scoped to one dashboard session.
///
/// Records are never mutated or deleted; every derived metric is recomputed
/// from the full table on read.
#[derive(Debug, Clone, Default)]
pub struct DeliveryLog {
    records: Vec<DeliveryRecord>,
}

impl DeliveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: DeliveryRecord) -> &DeliveryRecord {
        self.records.push(record);
        self.records.last().expect("just pushed")
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows ordered for the dashboard table: highest order count first.
    pub fn sorted_by_orders_desc(&self) -> Vec<&DeliveryRecord> {
        let mut rows: Vec<&DeliveryRecord> = self.records.iter().collect();
        rows.sort_by(|a, b| b.orders.cmp(&a.orders));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::types::{Location, Partner};
    use chrono::Utc;

    fn record(partner: Partner, orders: u32) -> DeliveryRecord {
        DeliveryRecord::new(partner, orders, Location::HsrLayout, Utc::now()).unwrap()
    }

    #[test]
    fn test_append_grows_table() {
        let mut log = DeliveryLog::new();
        assert!(log.is_empty());

        log.append(record(Partner::Delhivery, 3));
        log.append(record(Partner::Ekart, 5));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[1].orders, 5);
    }

    #[test]
    fn test_sorted_by_orders_desc() {
        let mut log = DeliveryLog::new();
        log.append(record(Partner::Delhivery, 2));
        log.append(record(Partner::Ekart, 9));
        log.append(record(Partner::Aramex, 4));

        let sorted: Vec<u32> = log
            .sorted_by_orders_desc()
            .iter()
            .map(|r| r.orders)
            .collect();
        assert_eq!(sorted, vec![9, 4, 2]);
    }
}

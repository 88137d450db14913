use crate::domain::dispatch::{DeliveryLog, DeliveryRecord, Location, Partner};
use crate::domain::errors::DeliveryError;
use crate::domain::metrics::{derive_snapshot, MetricsSnapshot, RateCard};
use chrono::{Duration, Utc};
use rand::prelude::*;
use tracing::info;

/// Single owner of the session's delivery table.
///
/// All mutation goes through `append`; all reads of derived state go through
/// `snapshot`, which recomputes from the full table every time.
#[derive(Debug)]
pub struct DeliverySession {
    log: DeliveryLog,
    rates: RateCard,
}

impl DeliverySession {
    pub fn new(rates: RateCard) -> Self {
        Self {
            log: DeliveryLog::new(),
            rates,
        }
    }

    /// Validates and appends one delivery, stamped with the current time.
    pub fn append(
        &mut self,
        partner: Partner,
        orders: u32,
        location: Location,
    ) -> Result<&DeliveryRecord, DeliveryError> {
        let record = DeliveryRecord::new(partner, orders, location, Utc::now())?;
        info!("Recorded {} orders for {} in {}", orders, partner, location);
        Ok(self.log.append(record))
    }

    /// Derives the full dashboard snapshot from the current table.
    pub fn snapshot(&self) -> MetricsSnapshot {
        derive_snapshot(self.log.records(), &self.rates)
    }

    pub fn log(&self) -> &DeliveryLog {
        &self.log
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        self.log.records()
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Seeds the table with synthetic traffic: random partner and location,
    /// 1..=10 orders per row, hourly timestamps ending at the session start.
    ///
    /// A fixed seed makes the data reproducible for tests and reports.
    pub fn seed_demo(&mut self, count: usize, seed: Option<u64>) {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = Utc::now() - Duration::hours(count as i64);

        for i in 0..count {
            let partner = *Partner::ALL.choose(&mut rng).expect("non-empty set");
            let location = *Location::ALL.choose(&mut rng).expect("non-empty set");
            let orders = rng.random_range(1..=10);
            let timestamp = start + Duration::hours(i as i64);

            let record = DeliveryRecord::new(partner, orders, location, timestamp)
                .expect("seeded order count is in 1..=10");
            self.log.append(record);
        }
        info!("Seeded {} demo deliveries", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_increases_totals_exactly() {
        let mut session = DeliverySession::new(RateCard::default());
        session.append(Partner::Ekart, 3, Location::Whitefield).unwrap();

        let before = session.snapshot();
        session.append(Partner::Ekart, 7, Location::Whitefield).unwrap();
        let after = session.snapshot();

        assert_eq!(
            after.totals_by_partner[&Partner::Ekart],
            before.totals_by_partner[&Partner::Ekart] + 7
        );
        assert_eq!(after.grand_total, before.grand_total + 7);
    }

    #[test]
    fn test_append_rejects_zero_orders() {
        let mut session = DeliverySession::new(RateCard::default());
        let err = session
            .append(Partner::Delhivery, 0, Location::Koramangala)
            .unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidOrderCount { got: 0 }));
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_seed_demo_is_reproducible() {
        let mut a = DeliverySession::new(RateCard::default());
        let mut b = DeliverySession::new(RateCard::default());
        a.seed_demo(50, Some(42));
        b.seed_demo(50, Some(42));

        assert_eq!(a.log().len(), 50);
        let totals_a = a.snapshot().totals_by_partner;
        let totals_b = b.snapshot().totals_by_partner;
        assert_eq!(totals_a, totals_b);
    }

    #[test]
    fn test_seeded_orders_stay_in_range() {
        let mut session = DeliverySession::new(RateCard::default());
        session.seed_demo(100, Some(7));
        assert!(session
            .records()
            .iter()
            .all(|r| (1..=10).contains(&r.orders)));
    }
}

// Derivation pipeline: table -> snapshot, parameterized by the rate card
pub mod calculator;
pub mod rate_card;
pub mod snapshot;

pub use calculator::{derive_snapshot, DAYS_PER_MONTH, DAYS_PER_WEEK};
pub use rate_card::RateCard;
pub use snapshot::{EarningsProjection, MetricsSnapshot, SavingsProjection};

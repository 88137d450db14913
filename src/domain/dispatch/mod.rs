// Delivery table and its row/enum types
pub mod log;
pub mod types;

pub use log::DeliveryLog;
pub use types::{DeliveryRecord, Location, Partner, MAX_ORDERS_PER_ENTRY};

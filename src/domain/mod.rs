// Delivery table domain
pub mod dispatch;

// Derived metrics domain
pub mod metrics;

// Domain-specific error types
pub mod errors;

use thiserror::Error;

/// Errors raised by the delivery domain when rejecting bad input
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Order count must be at least 1, got {got}")]
    InvalidOrderCount { got: u32 },

    #[error("Unknown delivery partner: {name}")]
    UnknownPartner { name: String },

    #[error("Unknown service location: {name}")]
    UnknownLocation { name: String },
}

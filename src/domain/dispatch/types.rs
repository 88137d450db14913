use crate::domain::errors::DeliveryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the order count accepted by a single delivery entry.
/// Enforced at the input widgets; the domain invariant itself is `orders >= 1`.
pub const MAX_ORDERS_PER_ENTRY: u32 = 100;

/// A delivery carrier onboarded with the aggregator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Partner {
    Delhivery,
    Xpressbees,
    Ekart,
    Aramex,
    Indiapost,
}

impl Partner {
    pub const ALL: [Partner; 5] = [
        Partner::Delhivery,
        Partner::Xpressbees,
        Partner::Ekart,
        Partner::Aramex,
        Partner::Indiapost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Partner::Delhivery => "Delhivery",
            Partner::Xpressbees => "Xpressbees",
            Partner::Ekart => "Ekart",
            Partner::Aramex => "Aramex",
            Partner::Indiapost => "Indiapost",
        }
    }
}

impl fmt::Display for Partner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Partner {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delhivery" => Ok(Partner::Delhivery),
            "xpressbees" => Ok(Partner::Xpressbees),
            "ekart" => Ok(Partner::Ekart),
            "aramex" => Ok(Partner::Aramex),
            "indiapost" => Ok(Partner::Indiapost),
            _ => Err(DeliveryError::UnknownPartner {
                name: s.to_string(),
            }),
        }
    }
}

/// A serviced pickup/drop area (Bengaluru micro-markets)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Location {
    Koramangala,
    #[serde(rename = "HSR Layout")]
    HsrLayout,
    Whitefield,
    #[serde(rename = "Electronic City")]
    ElectronicCity,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Koramangala,
        Location::HsrLayout,
        Location::Whitefield,
        Location::ElectronicCity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Koramangala => "Koramangala",
            Location::HsrLayout => "HSR Layout",
            Location::Whitefield => "Whitefield",
            Location::ElectronicCity => "Electronic City",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Location {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "koramangala" => Ok(Location::Koramangala),
            "hsr layout" | "hsr" => Ok(Location::HsrLayout),
            "whitefield" => Ok(Location::Whitefield),
            "electronic city" => Ok(Location::ElectronicCity),
            _ => Err(DeliveryError::UnknownLocation {
                name: s.to_string(),
            }),
        }
    }
}

/// One row of the session's delivery table.
///
/// Rows are created once (seeded or appended) and never mutated; the only
/// invariant is a positive order count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub partner: Partner,
    pub orders: u32,
    pub location: Location,
    pub timestamp: DateTime<Utc>,
}

impl DeliveryRecord {
    pub fn new(
        partner: Partner,
        orders: u32,
        location: Location,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DeliveryError> {
        if orders == 0 {
            return Err(DeliveryError::InvalidOrderCount { got: orders });
        }
        Ok(Self {
            partner,
            orders,
            location,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_parse_round_trip() {
        for partner in Partner::ALL {
            let parsed: Partner = partner.as_str().parse().unwrap();
            assert_eq!(parsed, partner);
        }
    }

    #[test]
    fn test_partner_parse_is_case_insensitive() {
        assert_eq!("ekart".parse::<Partner>().unwrap(), Partner::Ekart);
        assert_eq!("DELHIVERY".parse::<Partner>().unwrap(), Partner::Delhivery);
    }

    #[test]
    fn test_unknown_partner_rejected() {
        let err = "Speedex".parse::<Partner>().unwrap_err();
        assert!(matches!(err, DeliveryError::UnknownPartner { .. }));
    }

    #[test]
    fn test_location_parse_round_trip() {
        for location in Location::ALL {
            let parsed: Location = location.as_str().parse().unwrap();
            assert_eq!(parsed, location);
        }
    }

    #[test]
    fn test_zero_orders_rejected() {
        let err = DeliveryRecord::new(
            Partner::Ekart,
            0,
            Location::Whitefield,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidOrderCount { got: 0 }));
    }

    #[test]
    fn test_valid_record_accepted() {
        let record = DeliveryRecord::new(
            Partner::Aramex,
            MAX_ORDERS_PER_ENTRY,
            Location::Koramangala,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(record.orders, 100);
        assert_eq!(record.partner, Partner::Aramex);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Closed enumeration of the PII kinds the gateway redacts.
///
/// New kinds are added as new variants plus a new registry rule, never by
/// branching elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Email,
    CreditCard,
    NationalId,
    PhoneNumber,
}

impl PiiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiCategory::Email => "email",
            PiiCategory::CreditCard => "credit_card",
            PiiCategory::NationalId => "national_id",
            PiiCategory::PhoneNumber => "phone_number",
        }
    }
}

impl FromStr for PiiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(PiiCategory::Email),
            "credit_card" => Ok(PiiCategory::CreditCard),
            "national_id" => Ok(PiiCategory::NationalId),
            "phone_number" => Ok(PiiCategory::PhoneNumber),
            _ => Err(format!("Invalid PII category: {}", s)),
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

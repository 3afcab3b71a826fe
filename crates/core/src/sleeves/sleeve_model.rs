use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// An independently tracked group of holdings.
///
/// Unknown names are rejected at the boundary rather than mapped to an
/// empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sleeve {
    PersonalPension,
    RetirementPension,
    #[serde(rename = "cryptocurrency")]
    Crypto,
}

impl Sleeve {
    pub const ALL: [Sleeve; 3] = [
        Sleeve::PersonalPension,
        Sleeve::RetirementPension,
        Sleeve::Crypto,
    ];

    /// Storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sleeve::PersonalPension => "personal_pension",
            Sleeve::RetirementPension => "retirement_pension",
            Sleeve::Crypto => "cryptocurrency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sleeve::PersonalPension => "Personal pension",
            Sleeve::RetirementPension => "Retirement pension",
            Sleeve::Crypto => "Crypto",
        }
    }
}

impl fmt::Display for Sleeve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sleeve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "personal_pension" | "pension" | "개인연금" => Ok(Sleeve::PersonalPension),
            "retirement_pension" | "retirement" | "퇴직연금" => Ok(Sleeve::RetirementPension),
            "cryptocurrency" | "crypto" | "코인" => Ok(Sleeve::Crypto),
            _ => Err(ValidationError::UnknownSleeve(key.to_string()).into()),
        }
    }
}

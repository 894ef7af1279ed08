//! Profile and address value objects stored as JSONB on the user row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Biological sex as recorded on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

/// Personal information attached to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Sex.
    pub sex: Sex,
}

/// Latest known address for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// First address line.
    pub address1: String,
    /// Second address line.
    pub address2: Option<String>,
    /// ISO country code.
    pub country_code: String,
    /// Region or state.
    pub region: Option<String>,
    /// City.
    pub city: String,
    /// Postcode.
    pub postcode: String,
}

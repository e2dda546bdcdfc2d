//! Postal address records used in customer creation.

use serde::{Deserialize, Serialize};

/// ISO 3166-1 alpha-3 codes of countries for which Cascade requires a `State`
/// on the address (Australia, Canada, Italy, Japan, Netherlands, Spain,
/// Switzerland, United States).
pub const STATE_REQUIRED_COUNTRIES: [&str; 8] =
    ["AUS", "CAN", "ITA", "JPN", "NLD", "ESP", "CHE", "USA"];

/// Whether addresses for the given country must carry a state.
#[must_use]
pub fn requires_state(iso_country_code: &str) -> bool {
    STATE_REQUIRED_COUNTRIES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(iso_country_code))
}

/// A postal address as Cascade expects it.
///
/// Optional fields are omitted from the serialized payload when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First line of the address.
    #[serde(rename = "Line1")]
    pub line1: String,

    /// Second line of the address.
    #[serde(rename = "Line2", default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// City of the address.
    #[serde(rename = "City")]
    pub city: String,

    /// State of the address. Required when the customer's country is one of
    /// [`STATE_REQUIRED_COUNTRIES`].
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Post code for the address.
    #[serde(rename = "Postcode")]
    pub postcode: String,
}

impl Address {
    /// Create an address with the required fields only.
    #[must_use]
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            city: city.into(),
            state: None,
            postcode: postcode.into(),
        }
    }

    /// Set the second address line.
    #[must_use]
    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }

    /// Set the state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_address_serializes_required_keys_only() {
        let address = Address::new("1 High Street", "London", "SW1A 1AA");
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(
            value,
            json!({
                "Line1": "1 High Street",
                "City": "London",
                "Postcode": "SW1A 1AA",
            })
        );
    }

    #[test]
    fn full_address_carries_optional_keys() {
        let address = Address::new("100 Main St", "Springfield", "62701")
            .with_line2("Suite 4")
            .with_state("IL");
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(
            value,
            json!({
                "Line1": "100 Main St",
                "Line2": "Suite 4",
                "City": "Springfield",
                "State": "IL",
                "Postcode": "62701",
            })
        );
    }

    #[test]
    fn deserializes_without_optional_keys() {
        let address: Address = serde_json::from_value(json!({
            "Line1": "1 High Street",
            "City": "London",
            "Postcode": "SW1A 1AA",
        }))
        .unwrap();
        assert_eq!(address.line2, None);
        assert_eq!(address.state, None);
    }

    #[test]
    fn state_required_countries() {
        assert!(requires_state("USA"));
        assert!(requires_state("usa"));
        assert!(requires_state("CHE"));
        assert!(!requires_state("GBR"));
        assert!(!requires_state(""));
    }
}

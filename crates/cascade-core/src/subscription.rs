//! Subscription records and bulk-order payloads.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A bulk subscription order for a customer.
///
/// The reference must be unique within Cascade; duplicates are rejected
/// remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionOrder {
    /// Order reference, unique within Cascade.
    #[serde(rename = "Reference")]
    pub reference: String,

    /// Subscriptions to create under this order.
    #[serde(rename = "Subscriptions")]
    pub subscriptions: Vec<SubscriptionLine>,
}

impl SubscriptionOrder {
    /// Create an empty order with the given reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            subscriptions: Vec::new(),
        }
    }

    /// Add a subscription line to the order.
    #[must_use]
    pub fn with_line(mut self, line: SubscriptionLine) -> Self {
        self.subscriptions.push(line);
        self
    }

    /// Check that the order carries at least one line.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySubscriptionOrder`] for an order with
    /// no subscription lines.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subscriptions.is_empty() {
            return Err(ValidationError::EmptySubscriptionOrder {
                reference: self.reference.clone(),
            });
        }
        Ok(())
    }
}

/// One subscription within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionLine {
    /// Product code identifying the offering, e.g. `R-UK-CSP-365BT-CMC`.
    #[serde(rename = "ProductCode")]
    pub product_code: String,

    /// Number of seats/licences.
    #[serde(rename = "Quantity")]
    pub quantity: u32,

    /// Whether the subscription is mandatory.
    #[serde(rename = "IsMandatory", default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,

    /// Product-specific key/value parameters.
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
}

impl SubscriptionLine {
    /// Create a line with the required fields only.
    #[must_use]
    pub fn new(product_code: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_code: product_code.into(),
            quantity,
            is_mandatory: None,
            parameters: None,
        }
    }

    /// Set the mandatory flag.
    #[must_use]
    pub fn with_mandatory(mut self, is_mandatory: bool) -> Self {
        self.is_mandatory = Some(is_mandatory);
        self
    }

    /// Add a product parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.parameters
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// A subscription as returned by Cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Product code identifying the offering.
    #[serde(rename = "ProductCode")]
    pub product_code: String,

    /// Number of seats/licences.
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Whether the subscription is mandatory.
    #[serde(rename = "IsMandatory", default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,

    /// Product-specific key/value parameters.
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
}

//! Contact records attached to a customer.

use serde::{Deserialize, Serialize};

/// Role a contact plays on a customer account.
///
/// Cascade accepts exactly these two values; the closed enum makes any other
/// value a compile-time error rather than a deferred remote rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactType {
    /// Technical point of contact.
    #[serde(rename = "ITContact")]
    It,

    /// Billing point of contact. Cascade uses this one to populate its GUI.
    #[serde(rename = "BillingContact")]
    Billing,
}

/// A contact as Cascade expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// The contact's first name.
    #[serde(rename = "FirstName")]
    pub first_name: String,

    /// The contact's last name.
    #[serde(rename = "LastName")]
    pub last_name: String,

    /// The contact's email address.
    #[serde(rename = "EmailAddress")]
    pub email_address: String,

    /// The contact's phone number.
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,

    /// Role of the contact.
    #[serde(rename = "ContactType")]
    pub contact_type: ContactType,

    /// Whether this is the primary contact for the customer.
    #[serde(rename = "IsPrimaryContact")]
    pub is_primary_contact: bool,
}

impl Contact {
    /// Create a contact record.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        phone_number: impl Into<String>,
        contact_type: ContactType,
        is_primary_contact: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
            phone_number: phone_number.into(),
            contact_type,
            is_primary_contact,
        }
    }
}

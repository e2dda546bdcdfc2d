//! Customer records.
//!
//! Customers are identified externally by their primary domain; Cascade owns
//! the record, this crate only shapes the payloads.

use serde::{Deserialize, Serialize};

use crate::address::{requires_state, Address};
use crate::contact::Contact;
use crate::error::ValidationError;

/// Payload for creating a customer.
///
/// `PrimaryDomain` and `Reference` must each be unique within Cascade; a
/// duplicate is rejected remotely, not deduplicated locally. Optional fields
/// are omitted from the payload when unset, matching the vendor's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    /// The primary domain for the customer. Unique within Cascade.
    #[serde(rename = "PrimaryDomain")]
    pub primary_domain: String,

    /// Name of the customer.
    #[serde(rename = "Name")]
    pub name: String,

    /// Reference for the customer. Unique within Cascade.
    #[serde(rename = "Reference")]
    pub reference: String,

    /// Whether the customer is active. Defaults to `true`.
    #[serde(rename = "IsActive")]
    pub is_active: bool,

    /// Head office address.
    #[serde(rename = "HeadOfficeAddress")]
    pub head_office_address: Address,

    /// VAT number for the organisation.
    #[serde(rename = "EUVATNumber", skip_serializing_if = "Option::is_none")]
    pub eu_vat_number: Option<String>,

    /// ISO 3166-1 alpha-3 code for the organisation's location, e.g. `GBR`.
    #[serde(rename = "IsoCountryCode", skip_serializing_if = "Option::is_none")]
    pub iso_country_code: Option<String>,

    /// Password for the customer. Emailed by Cascade when not provided.
    #[serde(
        rename = "AdministratorPassword",
        skip_serializing_if = "Option::is_none"
    )]
    pub administrator_password: Option<String>,

    /// Billing address, when it differs from the head office.
    #[serde(rename = "BillingAddress", skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// Contacts for the customer. Include a [`crate::ContactType::Billing`]
    /// contact to populate the Cascade GUI.
    #[serde(rename = "Contacts", skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

impl NewCustomer {
    /// Create a customer payload with the required fields; the customer
    /// starts active.
    #[must_use]
    pub fn new(
        primary_domain: impl Into<String>,
        name: impl Into<String>,
        reference: impl Into<String>,
        head_office_address: Address,
    ) -> Self {
        Self {
            primary_domain: primary_domain.into(),
            name: name.into(),
            reference: reference.into(),
            is_active: true,
            head_office_address,
            eu_vat_number: None,
            iso_country_code: None,
            administrator_password: None,
            billing_address: None,
            contacts: Vec::new(),
        }
    }

    /// Set the active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Set the VAT number.
    #[must_use]
    pub fn with_vat_number(mut self, eu_vat_number: impl Into<String>) -> Self {
        self.eu_vat_number = Some(eu_vat_number.into());
        self
    }

    /// Set the ISO 3166-1 alpha-3 country code.
    #[must_use]
    pub fn with_iso_country_code(mut self, iso_country_code: impl Into<String>) -> Self {
        self.iso_country_code = Some(iso_country_code.into());
        self
    }

    /// Set the administrator password.
    #[must_use]
    pub fn with_administrator_password(mut self, password: impl Into<String>) -> Self {
        self.administrator_password = Some(password.into());
        self
    }

    /// Set a billing address distinct from the head office.
    #[must_use]
    pub fn with_billing_address(mut self, billing_address: Address) -> Self {
        self.billing_address = Some(billing_address);
        self
    }

    /// Add a contact.
    #[must_use]
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Apply the vendor's documented address rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StateRequired`] when the country code names
    /// a country that mandates a state and the head-office address has none.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(code) = &self.iso_country_code {
            if requires_state(code) && self.head_office_address.state.is_none() {
                return Err(ValidationError::StateRequired {
                    country: code.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A customer record as returned by Cascade.
///
/// Only the primary domain is guaranteed; everything else is tolerated as
/// absent since the vendor does not document the response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The customer's primary domain, its unique identifier.
    #[serde(rename = "PrimaryDomain")]
    pub primary_domain: String,

    /// Name of the customer.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Reference for the customer.
    #[serde(rename = "Reference", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Whether the customer is active.
    #[serde(rename = "IsActive", default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// VAT number for the organisation.
    #[serde(rename = "EUVATNumber", default, skip_serializing_if = "Option::is_none")]
    pub eu_vat_number: Option<String>,

    /// ISO 3166-1 alpha-3 code for the organisation's location.
    #[serde(
        rename = "IsoCountryCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub iso_country_code: Option<String>,

    /// Head office address.
    #[serde(
        rename = "HeadOfficeAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub head_office_address: Option<Address>,

    /// Billing address.
    #[serde(
        rename = "BillingAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_address: Option<Address>,

    /// Contacts for the customer.
    #[serde(rename = "Contacts", default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

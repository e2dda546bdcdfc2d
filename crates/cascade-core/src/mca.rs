//! Microsoft Customer Agreement acceptance records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Agreement URL recorded with every MCA acceptance.
pub const MCA_AGREEMENT_URL: &str = "https://aka.ms/customeragreement";

/// An MCA acceptance as Cascade expects and returns it.
///
/// `DateAccepted` crosses the wire as `YYYY-MM-DDTHH:MM:SS`. `CountryId` is
/// the vendor's own numeric country identifier (UK = 26, see the Inty API
/// guide); it is sent exactly as given, with no lookup or translation, and is
/// unrelated to the alpha-3 code customer creation takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McaAcceptance {
    /// When the agreement was accepted.
    #[serde(rename = "DateAccepted", with = "crate::serde_format::t_separated")]
    pub date_accepted: NaiveDateTime,

    /// First name of the person accepting.
    #[serde(rename = "FirstName")]
    pub first_name: String,

    /// Surname of the person accepting.
    #[serde(rename = "Surname")]
    pub surname: String,

    /// Phone number of the person accepting.
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,

    /// Email address of the person accepting.
    #[serde(rename = "EmailAddress")]
    pub email_address: String,

    /// First line of the person's address.
    #[serde(rename = "AddressLine1")]
    pub address_line1: String,

    /// Post code of the person's address.
    #[serde(rename = "Postcode")]
    pub postcode: String,

    /// Vendor-specific numeric country identifier.
    #[serde(rename = "CountryId")]
    pub country_id: u32,

    /// URL of the accepted agreement.
    #[serde(rename = "AgreementUrl", default = "default_agreement_url")]
    pub agreement_url: String,
}

fn default_agreement_url() -> String {
    MCA_AGREEMENT_URL.to_string()
}

impl McaAcceptance {
    /// Create an acceptance record with the standard agreement URL.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date_accepted: NaiveDateTime,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
        address_line1: impl Into<String>,
        postcode: impl Into<String>,
        country_id: u32,
    ) -> Self {
        Self {
            date_accepted,
            first_name: first_name.into(),
            surname: surname.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
            address_line1: address_line1.into(),
            postcode: postcode.into(),
            country_id,
            agreement_url: default_agreement_url(),
        }
    }
}

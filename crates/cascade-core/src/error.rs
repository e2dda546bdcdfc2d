//! Validation errors for rules checked before a request is issued.

/// Errors from local validation of outgoing payloads.
///
/// Cascade enforces its own business rules server-side; only the handful of
/// rules the vendor documents as hard requirements are checked here so they
/// fail before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The destination country requires a `State` on the address.
    #[error("state is required for addresses in {country}")]
    StateRequired {
        /// ISO 3166-1 alpha-3 code of the country that mandates a state.
        country: String,
    },

    /// A subscription order was submitted without any subscription lines.
    #[error("subscription order {reference} contains no subscription lines")]
    EmptySubscriptionOrder {
        /// The order reference.
        reference: String,
    },
}

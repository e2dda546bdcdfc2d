//! Cascade Client SDK.
//!
//! This crate provides a client library for the Cascade billing and
//! subscription-management API hosted by Inty. It shapes typed parameters
//! into the request payloads the remote API expects, issues exactly one call
//! per operation, and translates the response into structured data or an
//! error. All billing and lifecycle rules live server-side; this client only
//! invokes them.
//!
//! # Example
//!
//! ```no_run
//! use cascade_client::{Address, CascadeClient, NewCustomer};
//!
//! # async fn example() -> Result<(), cascade_client::ClientError> {
//! let client = CascadeClient::new("svc-user", "s3cret")?;
//!
//! let customer = NewCustomer::new(
//!     "cust.example.com",
//!     "Customer Ltd",
//!     "CUST-001",
//!     Address::new("1 High Street", "London", "SW1A 1AA"),
//! )
//! .with_iso_country_code("GBR");
//!
//! client.create_customer(&customer).await?;
//!
//! let fetched = client.get_customer("cust.example.com").await?;
//! println!("created {}", fetched.primary_domain);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{CascadeClient, ClientOptions, DEFAULT_BASE_URL};
pub use error::ClientError;

pub use cascade_core::{
    requires_state, Address, CancellationRequest, Contact, ContactType, Customer, McaAcceptance,
    MicrosoftTenantAssociation, NewCustomer, Subscription, SubscriptionLine, SubscriptionOrder,
    ValidationError, MCA_AGREEMENT_URL, ONMICROSOFT_SUFFIX, STATE_REQUIRED_COUNTRIES,
};

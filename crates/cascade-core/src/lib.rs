//! Core data model for the Cascade billing API.
//!
//! This crate provides the wire-shaped records exchanged with Cascade, the
//! subscription-management platform hosted by Inty:
//!
//! - **Addresses and contacts**: [`Address`], [`Contact`], [`ContactType`]
//! - **Customers**: [`NewCustomer`] (creation payload), [`Customer`] (as returned)
//! - **Subscriptions**: [`SubscriptionOrder`], [`SubscriptionLine`], [`Subscription`]
//! - **Cancellation workflow**: [`CancellationRequest`]
//! - **Agreements and tenants**: [`McaAcceptance`], [`MicrosoftTenantAssociation`]
//!
//! Field names serialize exactly as the vendor API expects (PascalCase), and
//! optional fields are omitted from payloads when unset. No I/O happens here;
//! the `cascade-client` crate issues the actual requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod cancellation;
pub mod contact;
pub mod customer;
pub mod error;
pub mod mca;
pub mod serde_format;
pub mod subscription;
pub mod tenant;

pub use address::{requires_state, Address, STATE_REQUIRED_COUNTRIES};
pub use cancellation::CancellationRequest;
pub use contact::{Contact, ContactType};
pub use customer::{Customer, NewCustomer};
pub use error::ValidationError;
pub use mca::{McaAcceptance, MCA_AGREEMENT_URL};
pub use subscription::{Subscription, SubscriptionLine, SubscriptionOrder};
pub use tenant::{MicrosoftTenantAssociation, ONMICROSOFT_SUFFIX};

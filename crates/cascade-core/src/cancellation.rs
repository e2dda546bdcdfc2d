//! Cancellation-request records.
//!
//! The cancellation lifecycle lives entirely server-side; this record only
//! shapes the submit payload and the pending-request response.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A cancellation request on a subscription.
///
/// The date crosses the wire as `YYYY-MM-DD HH:MM:SS`; note this differs
/// from the `T`-separated format MCA acceptance uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationRequest {
    /// When the subscription should be cancelled.
    #[serde(
        rename = "CancellationDateRequested",
        with = "crate::serde_format::space_separated"
    )]
    pub date_requested: NaiveDateTime,
}

impl CancellationRequest {
    /// Create a cancellation request for the given date.
    #[must_use]
    pub const fn new(date_requested: NaiveDateTime) -> Self {
        Self { date_requested }
    }
}

//! The backend commerce boundary.

use crate::content::ContentKind;
use crate::txn::contracts::{
    LicencePurchase, LicenceReceipt, PromoValidation, PromoVerdict, PurchaseOrder, SponsorJoin,
};
use async_trait::async_trait;
use thiserror::Error;

/// Errors crossing the transaction boundary.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Backend rejected the request: HTTP {0}")]
    Rejected(u16),

    /// The backend answered with a body this client cannot read.
    #[error("Malformed backend response: {0}")]
    Malformed(String),
}

/// The backend commerce endpoints the dispatcher calls.
///
/// Implemented over HTTP by the data layer and by in-memory doubles in
/// tests. Every call is a single fire-and-forget request: no client-side
/// retry, no idempotency key, no reconciliation. The content kind selects
/// the per-content-type route group where the backend splits them.
#[async_trait]
pub trait TransactionExecutor {
    /// Buy a perpetual licence for a content item.
    async fn purchase_licence(
        &self,
        kind: ContentKind,
        order: &LicencePurchase,
    ) -> Result<LicenceReceipt, TransactionError>;

    /// Join a content item's sponsors as a co-investor.
    async fn add_investor(
        &self,
        kind: ContentKind,
        join: &SponsorJoin,
    ) -> Result<(), TransactionError>;

    /// Validate a promo code against its target item.
    ///
    /// A rejected code is an `Ok` verdict with `success: false`; `Err` means
    /// the round trip itself failed.
    async fn validate_promo_code(
        &self,
        request: &PromoValidation,
    ) -> Result<PromoVerdict, TransactionError>;

    /// Buy a content item outright.
    async fn create_purchase(
        &self,
        kind: ContentKind,
        order: &PurchaseOrder,
    ) -> Result<(), TransactionError>;
}

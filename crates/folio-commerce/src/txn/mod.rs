//! Transaction boundary.
//!
//! Wire contracts for the backend commerce endpoints and the
//! [`TransactionExecutor`] trait the dispatch layer calls. Transactions are
//! fire-and-forget from the client's perspective; the backend is the sole
//! source of truth for idempotency and re-validates promo codes atomically
//! with the purchase.

mod contracts;
mod executor;

pub use contracts::{
    LicencePurchase, LicenceReceipt, PromoValidation, PromoVerdict, PurchaseOrder, SponsorJoin,
    LICENCE_OPTION, PROMO_INVESTMENT_TYPE,
};
pub use executor::{TransactionError, TransactionExecutor};

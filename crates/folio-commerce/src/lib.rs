//! Marketplace domain types and pricing logic for Folio.
//!
//! Folio sells digital books and courses through three monetization
//! channels (licence purchase, sponsoring, and affiliation) on top of the
//! plain "buy outright" path. This crate holds everything that is pure about
//! that model:
//!
//! - **Content**: books, courses, and the normalized [`ContentSnapshot`]
//!   every buyer-facing surface works against
//! - **Invest**: channel quotes, promo-code discounts, affiliate links
//! - **Txn**: the wire contracts and the [`TransactionExecutor`] boundary
//!   the dispatch layer calls into
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_commerce::prelude::*;
//!
//! let book = Book::new(ContentId::new("bk-42"), "Systems in Practice", "R. Duval")
//!     .with_price(Money::from_major(25.0, Currency::EUR));
//!
//! let quote = quote(&book.snapshot(), InvestmentChannel::Affiliation, None);
//! assert_eq!(quote.display_amount(), "\u{20ac}5.00 per sale");
//! ```

pub mod ids;
pub mod money;

pub mod content;
pub mod invest;
pub mod txn;

pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Content
    pub use crate::content::{
        Book, ContentKind, ContentSnapshot, Course, InvestmentOptions, Sellable,
    };

    // Invest
    pub use crate::invest::{
        commission, displayed_price, issue_affiliate_link, quote, ChannelQuote, InvestmentChannel,
        PromoBinding, AFFILIATE_COMMISSION_PERCENT, PROMO_DISCOUNT_PERCENT,
    };

    // Txn
    pub use crate::txn::{
        LicencePurchase, LicenceReceipt, PromoValidation, PromoVerdict, PurchaseOrder,
        SponsorJoin, TransactionError, TransactionExecutor,
    };
}

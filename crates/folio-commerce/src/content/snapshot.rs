//! The normalized content shape shared by every buyer-facing surface.
//!
//! Books and courses carry different catalog fields, but the pricing and
//! dispatch rules are identical for both. [`Sellable`] flattens either into
//! a [`ContentSnapshot`] once, so the quote and dispatch code has a single
//! branch-free view of an item.

use crate::ids::ContentId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The two content types sold on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// A digital book.
    #[serde(rename = "book")]
    Book,
    /// A course. The backend route groups and URL segments still use the
    /// historical "formation" naming for courses.
    #[serde(rename = "formation")]
    Course,
}

impl ContentKind {
    /// URL path segment used in affiliate links ("Book" / "Formation").
    pub fn affiliate_segment(&self) -> &'static str {
        match self {
            ContentKind::Book => "Book",
            ContentKind::Course => "Formation",
        }
    }

    /// Backend route group for this content type.
    pub fn route_domain(&self) -> &'static str {
        match self {
            ContentKind::Book => "ebookRoutes",
            ContentKind::Course => "myFormationRoutes",
        }
    }
}

/// Per-item monetization switches and administrator-set amounts.
///
/// The amounts are written by an administrative batch endpoint and are
/// read-only to the buyer-facing flow. An enabled flag with no amount is a
/// legal state; the quote for such a channel renders as "Not available".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InvestmentOptions {
    /// Licence purchase offered.
    pub licence_enabled: bool,
    /// Administrator-set licence price.
    pub licence_amount: Option<Money>,
    /// Sponsoring (co-investment) offered.
    pub sponsoring_enabled: bool,
    /// Administrator-set sponsoring stake.
    pub sponsoring_amount: Option<Money>,
    /// Affiliate links offered.
    pub affiliation_enabled: bool,
    /// Promo codes accepted on direct purchase.
    pub promo_codes_enabled: bool,
}

/// Normalized view of one content item, fetched read-only per modal open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// Content identifier.
    pub id: ContentId,
    /// Book or course.
    pub kind: ContentKind,
    /// Display title.
    pub title: String,
    /// Catalog price. Items without a price cannot quote purchase or
    /// affiliation channels.
    pub base_price: Option<Money>,
    /// Whether a promotion is currently running.
    pub promotion_active: bool,
    /// Promotional price, used only while the promotion is active. Nothing
    /// enforces it staying below the base price.
    pub promotion_price: Option<Money>,
    /// Monetization switches and amounts.
    pub options: InvestmentOptions,
}

impl ContentSnapshot {
    /// Price after promotion, before any promo-code discount.
    ///
    /// An active promotion with no promotional price falls back to the base
    /// price.
    pub fn effective_price(&self) -> Option<Money> {
        if self.promotion_active {
            self.promotion_price.or(self.base_price)
        } else {
            self.base_price
        }
    }
}

/// Anything the marketplace can sell through the investment modal.
pub trait Sellable {
    /// Flatten this item into the shape the pricing and dispatch code uses.
    fn snapshot(&self) -> ContentSnapshot;
}

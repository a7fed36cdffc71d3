//! Digital book catalog type.

use crate::content::{ContentKind, ContentSnapshot, InvestmentOptions, Sellable};
use crate::ids::ContentId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A digital book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique content identifier.
    pub id: ContentId,
    /// Title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Back-cover summary.
    pub summary: Option<String>,
    /// Cover image URL.
    pub cover_url: Option<String>,
    /// Number of pages.
    pub page_count: Option<u32>,
    /// Catalog price.
    pub base_price: Option<Money>,
    /// Whether a promotion is running.
    pub promotion_active: bool,
    /// Promotional price, used only while the promotion is active.
    pub promotion_price: Option<Money>,
    /// Monetization switches and administrator-set amounts.
    pub options: InvestmentOptions,
}

impl Book {
    /// Create a book with no pricing or monetization options set.
    pub fn new(id: ContentId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            summary: None,
            cover_url: None,
            page_count: None,
            base_price: None,
            promotion_active: false,
            promotion_price: None,
            options: InvestmentOptions::default(),
        }
    }

    /// Set the catalog price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.base_price = Some(price);
        self
    }

    /// Activate a promotion at the given price.
    pub fn with_promotion(mut self, price: Money) -> Self {
        self.promotion_active = true;
        self.promotion_price = Some(price);
        self
    }

    /// Set the monetization options.
    pub fn with_options(mut self, options: InvestmentOptions) -> Self {
        self.options = options;
        self
    }
}

impl Sellable for Book {
    fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            id: self.id.clone(),
            kind: ContentKind::Book,
            title: self.title.clone(),
            base_price: self.base_price,
            promotion_active: self.promotion_active,
            promotion_price: self.promotion_price,
            options: self.options.clone(),
        }
    }
}

//! Promo-code discount state.

use crate::content::ContentSnapshot;
use crate::ids::{ContentId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Discount granted by a validated promo code.
pub const PROMO_DISCOUNT_PERCENT: f64 = 10.0;

/// A promo code the backend has validated for one content item.
///
/// A binding lives only as long as the modal that validated it. A new
/// successful validation replaces the previous binding; codes never stack.
/// The owner is attributed for commission on the resulting purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoBinding {
    /// The code as typed by the buyer.
    pub code: String,
    /// The single content item this code is valid for.
    pub content_id: ContentId,
    /// Commission recipient.
    pub owner: UserId,
}

impl PromoBinding {
    /// Whether this binding discounts the given item.
    pub fn applies_to(&self, content: &ContentSnapshot) -> bool {
        self.content_id == content.id
    }
}

/// Price shown to the buyer: effective price, less the promo discount when
/// a binding for this item is held.
///
/// Returns `None` for unpriced items.
pub fn displayed_price(content: &ContentSnapshot, promo: Option<&PromoBinding>) -> Option<Money> {
    let effective = content.effective_price()?;
    match promo {
        Some(binding) if binding.applies_to(content) => {
            Some(effective.less_percent(PROMO_DISCOUNT_PERCENT))
        }
        _ => Some(effective),
    }
}

//! Channel quote resolution.
//!
//! Pure computation of the amount a surface displays for a chosen channel.
//! A quote is recomputed from scratch on every promo-code change; nothing
//! here mutates state.

use crate::content::ContentSnapshot;
use crate::invest::channel::InvestmentChannel;
use crate::invest::promo::{displayed_price, PromoBinding};
use crate::money::Money;
use serde::Serialize;

/// Referrer commission on an affiliated sale.
pub const AFFILIATE_COMMISSION_PERCENT: f64 = 20.0;

/// The amount to display for one channel of one item.
///
/// Computed, rendered, and thrown away; never parsed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelQuote {
    /// The channel this quote is for.
    pub channel: InvestmentChannel,
    /// The amount, when the item carries the data to compute one.
    pub amount: Option<Money>,
    /// Qualifier shown next to the amount (e.g. "per sale").
    pub label: Option<&'static str>,
    /// Whether the channel has a usable amount. Display-only: an
    /// unavailable channel still renders its CTA and dispatch does not
    /// check this flag.
    pub available: bool,
}

impl ChannelQuote {
    /// Render the amount, or "Not available" when the item carries none.
    pub fn display_amount(&self) -> String {
        match self.amount {
            Some(amount) => match self.label {
                Some(label) => format!("{} {}", amount.display(), label),
                None => amount.display(),
            },
            None => "Not available".to_string(),
        }
    }
}

/// Referrer commission for a sale at the given effective price.
pub fn commission(effective_price: Money) -> Money {
    effective_price.percent_of(AFFILIATE_COMMISSION_PERCENT)
}

/// Resolve the quote for one channel of one item.
///
/// Licence and sponsoring quote the administrator-set amounts; affiliation
/// quotes the commission on the effective price; direct purchase quotes the
/// displayed price (effective price less the promo discount when `promo` is
/// bound to this item).
pub fn quote(
    content: &ContentSnapshot,
    channel: InvestmentChannel,
    promo: Option<&PromoBinding>,
) -> ChannelQuote {
    let (amount, label) = match channel {
        InvestmentChannel::Licence => (content.options.licence_amount, None),
        InvestmentChannel::Sponsoring => (content.options.sponsoring_amount, None),
        InvestmentChannel::Affiliation => {
            (content.effective_price().map(commission), Some("per sale"))
        }
        InvestmentChannel::DirectPurchase => (displayed_price(content, promo), None),
    };

    ChannelQuote {
        channel,
        amount,
        label,
        available: amount.is_some(),
    }
}

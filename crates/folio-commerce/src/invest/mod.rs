//! Investment and monetization module.
//!
//! Contains the channel model, quote resolution, promo-code discount state,
//! and affiliate link construction.

mod affiliate;
mod channel;
mod promo;
mod quote;

pub use affiliate::issue_affiliate_link;
pub use channel::InvestmentChannel;
pub use promo::{displayed_price, PromoBinding, PROMO_DISCOUNT_PERCENT};
pub use quote::{commission, quote, ChannelQuote, AFFILIATE_COMMISSION_PERCENT};

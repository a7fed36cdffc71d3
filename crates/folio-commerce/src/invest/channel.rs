//! Monetization channels.

use crate::content::InvestmentOptions;
use serde::{Deserialize, Serialize};

/// How a buyer can put money into a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentChannel {
    /// Perpetual one-time purchase granting permanent access.
    Licence,
    /// Co-investment entitling the investor to a revenue share.
    Sponsoring,
    /// Referral link attributing purchases to a referrer for commission.
    Affiliation,
    /// Plain "buy outright" path when no investment option is requested.
    DirectPurchase,
}

impl InvestmentChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentChannel::Licence => "licence",
            InvestmentChannel::Sponsoring => "sponsoring",
            InvestmentChannel::Affiliation => "affiliation",
            InvestmentChannel::DirectPurchase => "purchase",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvestmentChannel::Licence => "Licence",
            InvestmentChannel::Sponsoring => "Sponsoring",
            InvestmentChannel::Affiliation => "Affiliation",
            InvestmentChannel::DirectPurchase => "Buy now",
        }
    }

    /// Channels a surface offers for an item, in display order.
    ///
    /// Direct purchase is always offered; the three investment channels
    /// follow their per-item switches. The switches gate what is rendered,
    /// not what can be dispatched.
    pub fn offered_for(options: &InvestmentOptions) -> Vec<InvestmentChannel> {
        let mut channels = Vec::with_capacity(4);
        if options.licence_enabled {
            channels.push(InvestmentChannel::Licence);
        }
        if options.sponsoring_enabled {
            channels.push(InvestmentChannel::Sponsoring);
        }
        if options.affiliation_enabled {
            channels.push(InvestmentChannel::Affiliation);
        }
        channels.push(InvestmentChannel::DirectPurchase);
        channels
    }
}

//! Request and response shapes for the backend commerce endpoints.
//!
//! Field names follow the backend wire format exactly, including its
//! inconsistent casing.

use crate::content::ContentKind;
use crate::ids::{ContentId, UserId};
use crate::invest::PromoBinding;
use serde::{Deserialize, Serialize};

/// Investment option tag the licence endpoint expects.
pub const LICENCE_OPTION: &str = "licence";

/// Investment type tag a promo-discounted purchase carries.
pub const PROMO_INVESTMENT_TYPE: &str = "codePromo";

/// Body of `PUT …/licence/acheter/{contentId}/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicencePurchase {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "contentId")]
    pub content_id: ContentId,
    #[serde(rename = "InvestmentOption")]
    pub investment_option: String,
}

impl LicencePurchase {
    pub fn new(user_id: UserId, content_id: ContentId) -> Self {
        Self {
            user_id,
            content_id,
            investment_option: LICENCE_OPTION.to_string(),
        }
    }
}

/// Response of the licence endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenceReceipt {
    pub message: String,
}

/// Body of `POST …/add-investor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorJoin {
    #[serde(rename = "idInvestor")]
    pub investor_id: UserId,
    #[serde(rename = "idContent")]
    pub content_id: ContentId,
}

impl SponsorJoin {
    pub fn new(investor_id: UserId, content_id: ContentId) -> Self {
        Self {
            investor_id,
            content_id,
        }
    }
}

/// Body of `POST /users/codePromoValidation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoValidation {
    #[serde(rename = "promoCode")]
    pub code: String,
    #[serde(rename = "targetId")]
    pub target_id: ContentId,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

impl PromoValidation {
    pub fn new(code: impl Into<String>, target_id: ContentId, kind: ContentKind) -> Self {
        Self {
            code: code.into(),
            target_id,
            kind,
        }
    }
}

/// Response of the promo validation endpoint.
///
/// A rejected code comes back with `success: false` and a message; only a
/// network failure is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoVerdict {
    pub success: bool,
    #[serde(rename = "promoOwnerId", default, skip_serializing_if = "Option::is_none")]
    pub promo_owner_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST …/createAchat`.
///
/// The promo fields travel together: either all absent (outright purchase)
/// or all present (purchase under a validated code, attributing the code's
/// owner for commission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "contentId")]
    pub content_id: ContentId,
    #[serde(rename = "promoCode", default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(rename = "investorId", default, skip_serializing_if = "Option::is_none")]
    pub investor_id: Option<UserId>,
    #[serde(
        rename = "investmentType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub investment_type: Option<String>,
}

impl PurchaseOrder {
    /// An outright purchase with no promo code.
    pub fn outright(user_id: UserId, content_id: ContentId) -> Self {
        Self {
            user_id,
            content_id,
            promo_code: None,
            investor_id: None,
            investment_type: None,
        }
    }

    /// A purchase under a validated promo code.
    pub fn with_promo(user_id: UserId, content_id: ContentId, binding: &PromoBinding) -> Self {
        Self {
            user_id,
            content_id,
            promo_code: Some(binding.code.clone()),
            investor_id: Some(binding.owner.clone()),
            investment_type: Some(PROMO_INVESTMENT_TYPE.to_string()),
        }
    }
}

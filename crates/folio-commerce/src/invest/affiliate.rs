//! Affiliate link construction.

use crate::content::ContentKind;
use crate::ids::{ContentId, UserId};

/// Build the referral URL for a content item.
///
/// The link is deterministic and never persisted client-side; it can be
/// rebuilt at any time from its four parts. Purchases made through it are
/// attributed to the referrer for commission.
pub fn issue_affiliate_link(
    origin: &str,
    kind: ContentKind,
    content_id: &ContentId,
    referrer: &UserId,
) -> String {
    format!(
        "{}/affiliate{}View/{}?ref={}",
        origin.trim_end_matches('/'),
        kind.affiliate_segment(),
        content_id,
        referrer
    )
}

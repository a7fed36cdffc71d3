//! Per-modal session state.
//!
//! One [`InvestmentModal`] backs one open modal on one surface. It owns the
//! content snapshot fetched at open, the requested channel, at most one
//! validated promo binding, the dispatch state, and the copied-indicator
//! state. Nothing is shared across concurrently open modals, and all of it
//! dies with the modal.

use crate::clipboard::{CopiedIndicator, CopyOutcome};
use crate::dispatcher::InvestmentDispatcher;
use crate::state::{DispatchState, Notice};
use folio_auth::Viewer;
use folio_commerce::content::ContentSnapshot;
use folio_commerce::invest::{quote, ChannelQuote, InvestmentChannel, PromoBinding};
use folio_commerce::txn::{PromoValidation, PromoVerdict, TransactionExecutor};

/// Session state for one open investment modal.
#[derive(Debug, Clone)]
pub struct InvestmentModal {
    content: ContentSnapshot,
    channel: InvestmentChannel,
    promo: Option<PromoBinding>,
    promo_message: Option<String>,
    state: DispatchState,
    copied: CopiedIndicator,
}

impl InvestmentModal {
    /// Open a modal for an item and a requested channel.
    pub fn open(content: ContentSnapshot, channel: InvestmentChannel) -> Self {
        Self {
            content,
            channel,
            promo: None,
            promo_message: None,
            state: DispatchState::Idle,
            copied: CopiedIndicator::default(),
        }
    }

    /// The snapshot this modal was opened with.
    pub fn content(&self) -> &ContentSnapshot {
        &self.content
    }

    /// The channel this modal was opened for.
    pub fn channel(&self) -> InvestmentChannel {
        self.channel
    }

    /// The currently bound promo code, if any.
    pub fn promo(&self) -> Option<&PromoBinding> {
        self.promo.as_ref()
    }

    /// The inline message from the last failed validation.
    pub fn promo_message(&self) -> Option<&str> {
        self.promo_message.as_deref()
    }

    /// Where the dispatch currently stands.
    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    /// The amount to display right now, recomputed from the snapshot and
    /// the current promo binding.
    pub fn quote(&self) -> ChannelQuote {
        quote(&self.content, self.channel, self.promo.as_ref())
    }

    /// Channels a surface offers for this item, in display order.
    pub fn offered_channels(&self) -> Vec<InvestmentChannel> {
        InvestmentChannel::offered_for(&self.content.options)
    }

    /// Whether the promo-code input is shown: the item accepts codes and
    /// the modal is on the purchase path.
    pub fn accepts_promo_codes(&self) -> bool {
        self.content.options.promo_codes_enabled
            && self.channel == InvestmentChannel::DirectPurchase
    }

    /// Validate a promo code against this modal's item.
    ///
    /// Success binds the code, replacing any previous binding (codes never
    /// stack), and the next [`quote`](Self::quote) reflects the discount.
    /// Any failure clears the previously held binding and leaves an inline
    /// message; no other local state changes. Returns whether a binding is
    /// now held.
    pub async fn apply_promo_code<E: TransactionExecutor>(
        &mut self,
        executor: &E,
        code: &str,
    ) -> bool {
        let request = PromoValidation::new(code, self.content.id.clone(), self.content.kind);
        match executor.validate_promo_code(&request).await {
            // A verdict without an owner cannot attribute commission; treat
            // it the same as a rejection.
            Ok(PromoVerdict {
                success: true,
                promo_owner_id: Some(owner),
                ..
            }) => {
                self.promo = Some(PromoBinding {
                    code: code.to_string(),
                    content_id: self.content.id.clone(),
                    owner,
                });
                self.promo_message = None;
                true
            }
            Ok(verdict) => {
                self.promo = None;
                self.promo_message = Some(
                    verdict
                        .message
                        .unwrap_or_else(|| "Invalid promo code".to_string()),
                );
                false
            }
            Err(_) => {
                self.promo = None;
                self.promo_message =
                    Some("Could not verify the promo code, please retry".to_string());
                false
            }
        }
    }

    /// Confirm the modal's action.
    ///
    /// Transitions through `Requesting` while the backend call is in
    /// flight and lands on whatever the dispatcher settles on. A failure
    /// notice is handed back for the surface's notification area; the
    /// modal itself stays open.
    pub async fn confirm<E: TransactionExecutor>(
        &mut self,
        dispatcher: &InvestmentDispatcher<E>,
        viewer: &Viewer,
    ) -> Option<Notice> {
        self.state = DispatchState::Requesting;
        let (state, notice) = dispatcher
            .dispatch(viewer, &self.content, self.channel, self.promo.as_ref())
            .await;
        self.state = state;
        notice
    }

    /// Record a copy attempt on the affiliate link.
    pub fn record_copy(&mut self, outcome: CopyOutcome) {
        self.copied.record(outcome);
    }

    /// Reset the copied indicator after its hold elapses.
    pub fn reset_copied(&mut self) {
        self.copied.reset();
    }

    /// Whether the "copied" indicator is showing.
    pub fn copied_visible(&self) -> bool {
        self.copied.visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_commerce::content::{ContentKind, InvestmentOptions};
    use folio_commerce::ids::{ContentId, UserId};
    use folio_commerce::money::{Currency, Money};
    use folio_commerce::txn::{
        LicencePurchase, LicenceReceipt, PromoVerdict, PurchaseOrder, SponsorJoin,
        TransactionError,
    };
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted promo validation: "GOOD" validates, "DOWN" breaks the
    /// round trip, anything else is rejected.
    #[derive(Default)]
    struct ScriptedExecutor {
        purchases: AtomicUsize,
    }

    #[async_trait]
    impl TransactionExecutor for ScriptedExecutor {
        async fn purchase_licence(
            &self,
            _kind: ContentKind,
            _order: &LicencePurchase,
        ) -> Result<LicenceReceipt, TransactionError> {
            Ok(LicenceReceipt {
                message: "ok".to_string(),
            })
        }

        async fn add_investor(
            &self,
            _kind: ContentKind,
            _join: &SponsorJoin,
        ) -> Result<(), TransactionError> {
            Ok(())
        }

        async fn validate_promo_code(
            &self,
            request: &PromoValidation,
        ) -> Result<PromoVerdict, TransactionError> {
            match request.code.as_str() {
                "GOOD" => Ok(PromoVerdict {
                    success: true,
                    promo_owner_id: Some(UserId::new("owner-1")),
                    message: None,
                }),
                "DOWN" => Err(TransactionError::Network("timeout".to_string())),
                _ => Ok(PromoVerdict {
                    success: false,
                    promo_owner_id: None,
                    message: Some("Code expired".to_string()),
                }),
            }
        }

        async fn create_purchase(
            &self,
            _kind: ContentKind,
            _order: &PurchaseOrder,
        ) -> Result<(), TransactionError> {
            self.purchases.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn snapshot() -> ContentSnapshot {
        ContentSnapshot {
            id: ContentId::new("crs-1"),
            kind: ContentKind::Course,
            title: "Test".to_string(),
            base_price: Some(Money::new(2000, Currency::EUR)),
            promotion_active: false,
            promotion_price: None,
            options: InvestmentOptions {
                licence_enabled: false,
                licence_amount: None,
                sponsoring_enabled: false,
                sponsoring_amount: None,
                affiliation_enabled: true,
                promo_codes_enabled: true,
            },
        }
    }

    fn purchase_modal() -> InvestmentModal {
        InvestmentModal::open(snapshot(), InvestmentChannel::DirectPurchase)
    }

    #[test]
    fn test_valid_code_discounts_the_quote() {
        let executor = ScriptedExecutor::default();
        let mut modal = purchase_modal();
        assert_eq!(modal.quote().amount.unwrap().cents, 2000);

        assert!(block_on(modal.apply_promo_code(&executor, "GOOD")));
        assert_eq!(modal.quote().amount.unwrap().cents, 1800);
        assert!(modal.promo_message().is_none());
        assert_eq!(modal.promo().unwrap().owner, UserId::new("owner-1"));
    }

    #[test]
    fn test_rejected_code_clears_binding_and_quote() {
        let executor = ScriptedExecutor::default();
        let mut modal = purchase_modal();
        assert!(block_on(modal.apply_promo_code(&executor, "GOOD")));

        assert!(!block_on(modal.apply_promo_code(&executor, "STALE")));
        assert!(modal.promo().is_none());
        assert_eq!(modal.promo_message(), Some("Code expired"));
        // Quote reverts to the effective price
        assert_eq!(modal.quote().amount.unwrap().cents, 2000);
    }

    #[test]
    fn test_network_failure_clears_binding() {
        let executor = ScriptedExecutor::default();
        let mut modal = purchase_modal();
        assert!(block_on(modal.apply_promo_code(&executor, "GOOD")));

        assert!(!block_on(modal.apply_promo_code(&executor, "DOWN")));
        assert!(modal.promo().is_none());
        assert!(modal.promo_message().is_some());
    }

    #[test]
    fn test_replacement_never_stacks() {
        let executor = ScriptedExecutor::default();
        let mut modal = purchase_modal();
        assert!(block_on(modal.apply_promo_code(&executor, "GOOD")));
        assert!(block_on(modal.apply_promo_code(&executor, "GOOD")));
        // Still one 10% discount, not two
        assert_eq!(modal.quote().amount.unwrap().cents, 1800);
    }

    #[test]
    fn test_confirm_purchase_reaches_settled() {
        let dispatcher =
            InvestmentDispatcher::new(ScriptedExecutor::default(), "https://site.com");
        let viewer = Viewer::signed_in(UserId::new("u1"), "buyer@example.com");
        let mut modal = purchase_modal();

        let notice = block_on(modal.confirm(&dispatcher, &viewer));
        assert!(notice.is_none());
        assert!(modal.state().is_terminal());
        assert_eq!(dispatcher.executor().purchases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_confirm_anonymous_requires_sign_in() {
        let dispatcher =
            InvestmentDispatcher::new(ScriptedExecutor::default(), "https://site.com");
        let mut modal = purchase_modal();

        let notice = block_on(modal.confirm(&dispatcher, &Viewer::Anonymous));
        assert!(notice.is_none());
        assert_eq!(*modal.state(), DispatchState::SignInRequired);
        assert_eq!(dispatcher.executor().purchases.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_affiliation_modal_is_reenterable() {
        let dispatcher =
            InvestmentDispatcher::new(ScriptedExecutor::default(), "https://site.com");
        let viewer = Viewer::signed_in(UserId::new("u1"), "buyer@example.com");
        let mut modal = InvestmentModal::open(snapshot(), InvestmentChannel::Affiliation);

        block_on(modal.confirm(&dispatcher, &viewer));
        let first = modal.state().clone();
        block_on(modal.confirm(&dispatcher, &viewer));
        assert_eq!(*modal.state(), first);
        assert!(matches!(modal.state(), DispatchState::LinkReady { .. }));
    }

    #[test]
    fn test_promo_input_only_on_purchase_path() {
        let modal = purchase_modal();
        assert!(modal.accepts_promo_codes());

        let modal = InvestmentModal::open(snapshot(), InvestmentChannel::Affiliation);
        assert!(!modal.accepts_promo_codes());

        let mut content = snapshot();
        content.options.promo_codes_enabled = false;
        let modal = InvestmentModal::open(content, InvestmentChannel::DirectPurchase);
        assert!(!modal.accepts_promo_codes());
    }

    #[test]
    fn test_offered_channels_follow_options() {
        let modal = purchase_modal();
        assert_eq!(
            modal.offered_channels(),
            vec![
                InvestmentChannel::Affiliation,
                InvestmentChannel::DirectPurchase,
            ]
        );
    }
}

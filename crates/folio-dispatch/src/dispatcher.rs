//! The shared investment channel dispatcher.
//!
//! Every modal routes its confirmed action through here: auth guard first,
//! then the backend transaction for the channel, then the settled state.
//! Viewer identity is an explicit argument; the dispatcher holds no session
//! state of its own.

use crate::state::{DispatchState, Notice, RedirectTarget};
use folio_auth::Viewer;
use folio_commerce::content::ContentSnapshot;
use folio_commerce::ids::UserId;
use folio_commerce::invest::{issue_affiliate_link, InvestmentChannel, PromoBinding};
use folio_commerce::txn::{
    LicencePurchase, PurchaseOrder, SponsorJoin, TransactionExecutor,
};
use std::time::Duration;

/// How long the success screen holds after a licence or sponsoring
/// transaction before redirecting to the dashboard.
pub const INVEST_SUCCESS_HOLD: Duration = Duration::from_secs(1);

/// How long the success screen holds after a direct purchase before
/// redirecting to the buyer's library.
pub const PURCHASE_SUCCESS_HOLD: Duration = Duration::from_secs(2);

/// Routes a confirmed modal action to the right backend transaction.
///
/// One instance serves every surface; the executor is the only
/// collaborator. Quote availability is never consulted here: a channel
/// whose amount is missing still dispatches, and the backend decides.
pub struct InvestmentDispatcher<E> {
    executor: E,
    origin: String,
}

impl<E: TransactionExecutor> InvestmentDispatcher<E> {
    /// Create a dispatcher over a transaction executor.
    ///
    /// `origin` is the site origin affiliate links are issued under.
    pub fn new(executor: E, origin: impl Into<String>) -> Self {
        Self {
            executor,
            origin: origin.into(),
        }
    }

    /// The executor this dispatcher routes through.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The site origin affiliate links are issued under.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Run one user action through the state machine.
    ///
    /// Anonymous viewers are redirected to sign-in without touching the
    /// executor, since every channel needs an identity (affiliation
    /// included: the link embeds the referrer). Failures come back as a notice
    /// alongside the idle state; no partial transaction state is retained.
    pub async fn dispatch(
        &self,
        viewer: &Viewer,
        content: &ContentSnapshot,
        channel: InvestmentChannel,
        promo: Option<&PromoBinding>,
    ) -> (DispatchState, Option<Notice>) {
        let Some(user) = viewer.user_id() else {
            return (DispatchState::SignInRequired, None);
        };

        match channel {
            InvestmentChannel::Licence => self.purchase_licence(user, content).await,
            InvestmentChannel::Sponsoring => self.join_sponsors(user, content).await,
            InvestmentChannel::Affiliation => self.issue_link(user, content),
            InvestmentChannel::DirectPurchase => {
                self.create_purchase(user, content, promo).await
            }
        }
    }

    async fn purchase_licence(
        &self,
        user: &UserId,
        content: &ContentSnapshot,
    ) -> (DispatchState, Option<Notice>) {
        let order = LicencePurchase::new(user.clone(), content.id.clone());
        match self.executor.purchase_licence(content.kind, &order).await {
            Ok(_receipt) => (
                DispatchState::Settled {
                    redirect: RedirectTarget::Dashboard,
                    hold: INVEST_SUCCESS_HOLD,
                },
                None,
            ),
            Err(e) => (
                DispatchState::Idle,
                Some(Notice::new(format!("Licence purchase failed: {e}"))),
            ),
        }
    }

    async fn join_sponsors(
        &self,
        user: &UserId,
        content: &ContentSnapshot,
    ) -> (DispatchState, Option<Notice>) {
        let join = SponsorJoin::new(user.clone(), content.id.clone());
        match self.executor.add_investor(content.kind, &join).await {
            Ok(()) => (
                DispatchState::Settled {
                    redirect: RedirectTarget::Dashboard,
                    hold: INVEST_SUCCESS_HOLD,
                },
                None,
            ),
            Err(e) => (
                DispatchState::Idle,
                Some(Notice::new(format!("Sponsoring failed: {e}"))),
            ),
        }
    }

    fn issue_link(
        &self,
        user: &UserId,
        content: &ContentSnapshot,
    ) -> (DispatchState, Option<Notice>) {
        let url = issue_affiliate_link(&self.origin, content.kind, &content.id, user);
        (DispatchState::LinkReady { url }, None)
    }

    async fn create_purchase(
        &self,
        user: &UserId,
        content: &ContentSnapshot,
        promo: Option<&PromoBinding>,
    ) -> (DispatchState, Option<Notice>) {
        // The discount snapshot bound at click time rides along; the backend
        // re-validates the code atomically with the purchase.
        let order = match promo.filter(|binding| binding.applies_to(content)) {
            Some(binding) => PurchaseOrder::with_promo(user.clone(), content.id.clone(), binding),
            None => PurchaseOrder::outright(user.clone(), content.id.clone()),
        };
        match self.executor.create_purchase(content.kind, &order).await {
            Ok(()) => (
                DispatchState::Settled {
                    redirect: RedirectTarget::Library(content.kind),
                    hold: PURCHASE_SUCCESS_HOLD,
                },
                None,
            ),
            Err(e) => (
                DispatchState::Idle,
                Some(Notice::new(format!("Purchase failed: {e}"))),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_commerce::content::{ContentKind, InvestmentOptions};
    use folio_commerce::ids::ContentId;
    use folio_commerce::money::{Currency, Money};
    use folio_commerce::txn::{
        LicenceReceipt, PromoValidation, PromoVerdict, TransactionError,
    };
    use futures::executor::block_on;
    use std::sync::Mutex;

    /// Records every executor call; optionally fails them all.
    #[derive(Default)]
    struct RecordingExecutor {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingExecutor {
        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), TransactionError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(TransactionError::Network("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl TransactionExecutor for RecordingExecutor {
        async fn purchase_licence(
            &self,
            kind: ContentKind,
            order: &LicencePurchase,
        ) -> Result<LicenceReceipt, TransactionError> {
            self.record(format!(
                "licence {} {} {}",
                kind.route_domain(),
                order.content_id,
                order.user_id
            ))?;
            Ok(LicenceReceipt {
                message: "ok".to_string(),
            })
        }

        async fn add_investor(
            &self,
            kind: ContentKind,
            join: &SponsorJoin,
        ) -> Result<(), TransactionError> {
            self.record(format!(
                "invest {} {} {}",
                kind.route_domain(),
                join.content_id,
                join.investor_id
            ))
        }

        async fn validate_promo_code(
            &self,
            request: &PromoValidation,
        ) -> Result<PromoVerdict, TransactionError> {
            self.record(format!("promo {}", request.code))?;
            Ok(PromoVerdict {
                success: true,
                promo_owner_id: Some(UserId::new("owner-1")),
                message: None,
            })
        }

        async fn create_purchase(
            &self,
            kind: ContentKind,
            order: &PurchaseOrder,
        ) -> Result<(), TransactionError> {
            self.record(format!(
                "purchase {} {} promo={}",
                kind.route_domain(),
                order.content_id,
                order.promo_code.as_deref().unwrap_or("-")
            ))
        }
    }

    fn course_snapshot() -> ContentSnapshot {
        ContentSnapshot {
            id: ContentId::new("crs-1"),
            kind: ContentKind::Course,
            title: "Test".to_string(),
            base_price: Some(Money::new(2000, Currency::EUR)),
            promotion_active: false,
            promotion_price: None,
            options: InvestmentOptions {
                licence_enabled: true,
                licence_amount: Some(Money::new(9900, Currency::EUR)),
                sponsoring_enabled: true,
                sponsoring_amount: Some(Money::new(5000, Currency::EUR)),
                affiliation_enabled: true,
                promo_codes_enabled: true,
            },
        }
    }

    fn buyer() -> Viewer {
        Viewer::signed_in(UserId::new("u1"), "buyer@example.com")
    }

    fn dispatcher(executor: RecordingExecutor) -> InvestmentDispatcher<RecordingExecutor> {
        InvestmentDispatcher::new(executor, "https://site.com")
    }

    #[test]
    fn test_anonymous_viewer_redirects_without_executor_call() {
        let d = dispatcher(RecordingExecutor::default());
        for channel in [
            InvestmentChannel::Licence,
            InvestmentChannel::Sponsoring,
            InvestmentChannel::Affiliation,
            InvestmentChannel::DirectPurchase,
        ] {
            let (state, notice) = block_on(d.dispatch(
                &Viewer::Anonymous,
                &course_snapshot(),
                channel,
                None,
            ));
            assert_eq!(state, DispatchState::SignInRequired);
            assert!(notice.is_none());
        }
        assert!(d.executor().calls().is_empty());
    }

    #[test]
    fn test_licence_settles_to_dashboard() {
        let d = dispatcher(RecordingExecutor::default());
        let (state, notice) = block_on(d.dispatch(
            &buyer(),
            &course_snapshot(),
            InvestmentChannel::Licence,
            None,
        ));
        assert_eq!(
            state,
            DispatchState::Settled {
                redirect: RedirectTarget::Dashboard,
                hold: INVEST_SUCCESS_HOLD,
            }
        );
        assert!(notice.is_none());
        assert_eq!(
            d.executor().calls(),
            vec!["licence myFormationRoutes crs-1 u1"]
        );
    }

    #[test]
    fn test_licence_without_amount_still_dispatches() {
        // "Not available" is a display state only; the action still fires.
        let mut content = course_snapshot();
        content.options.licence_amount = None;
        let d = dispatcher(RecordingExecutor::default());
        let (state, _) = block_on(d.dispatch(&buyer(), &content, InvestmentChannel::Licence, None));
        assert!(state.is_terminal());
        assert_eq!(d.executor().calls().len(), 1);
    }

    #[test]
    fn test_sponsoring_settles_to_dashboard() {
        let d = dispatcher(RecordingExecutor::default());
        let (state, _) = block_on(d.dispatch(
            &buyer(),
            &course_snapshot(),
            InvestmentChannel::Sponsoring,
            None,
        ));
        assert_eq!(
            state,
            DispatchState::Settled {
                redirect: RedirectTarget::Dashboard,
                hold: INVEST_SUCCESS_HOLD,
            }
        );
        assert_eq!(d.executor().calls(), vec!["invest myFormationRoutes crs-1 u1"]);
    }

    #[test]
    fn test_affiliation_issues_link_without_request() {
        let d = dispatcher(RecordingExecutor::default());
        let (state, notice) = block_on(d.dispatch(
            &buyer(),
            &course_snapshot(),
            InvestmentChannel::Affiliation,
            None,
        ));
        assert_eq!(
            state,
            DispatchState::LinkReady {
                url: "https://site.com/affiliateFormationView/crs-1?ref=u1".to_string()
            }
        );
        assert!(notice.is_none());
        assert!(d.executor().calls().is_empty());
    }

    #[test]
    fn test_direct_purchase_settles_to_library() {
        let d = dispatcher(RecordingExecutor::default());
        let (state, _) = block_on(d.dispatch(
            &buyer(),
            &course_snapshot(),
            InvestmentChannel::DirectPurchase,
            None,
        ));
        assert_eq!(
            state,
            DispatchState::Settled {
                redirect: RedirectTarget::Library(ContentKind::Course),
                hold: PURCHASE_SUCCESS_HOLD,
            }
        );
        assert_eq!(
            d.executor().calls(),
            vec!["purchase myFormationRoutes crs-1 promo=-"]
        );
    }

    #[test]
    fn test_direct_purchase_carries_bound_promo() {
        let content = course_snapshot();
        let binding = PromoBinding {
            code: "WELCOME10".to_string(),
            content_id: content.id.clone(),
            owner: UserId::new("owner-1"),
        };
        let d = dispatcher(RecordingExecutor::default());
        let (state, _) = block_on(d.dispatch(
            &buyer(),
            &content,
            InvestmentChannel::DirectPurchase,
            Some(&binding),
        ));
        assert!(state.is_terminal());
        assert_eq!(
            d.executor().calls(),
            vec!["purchase myFormationRoutes crs-1 promo=WELCOME10"]
        );
    }

    #[test]
    fn test_promo_for_another_item_is_dropped() {
        let content = course_snapshot();
        let binding = PromoBinding {
            code: "WELCOME10".to_string(),
            content_id: ContentId::new("other"),
            owner: UserId::new("owner-1"),
        };
        let d = dispatcher(RecordingExecutor::default());
        block_on(d.dispatch(
            &buyer(),
            &content,
            InvestmentChannel::DirectPurchase,
            Some(&binding),
        ));
        assert_eq!(
            d.executor().calls(),
            vec!["purchase myFormationRoutes crs-1 promo=-"]
        );
    }

    #[test]
    fn test_failure_returns_to_idle_with_notice() {
        let d = dispatcher(RecordingExecutor::failing());
        let (state, notice) = block_on(d.dispatch(
            &buyer(),
            &course_snapshot(),
            InvestmentChannel::DirectPurchase,
            None,
        ));
        assert_eq!(state, DispatchState::Idle);
        let notice = notice.unwrap();
        assert!(notice.message.contains("Purchase failed"));
    }

    #[test]
    fn test_book_purchase_redirects_to_ebook_library() {
        let mut content = course_snapshot();
        content.kind = ContentKind::Book;
        let d = dispatcher(RecordingExecutor::default());
        let (state, _) = block_on(d.dispatch(
            &buyer(),
            &content,
            InvestmentChannel::DirectPurchase,
            None,
        ));
        match state {
            DispatchState::Settled { redirect, .. } => {
                assert_eq!(redirect.path(), "/MyEbooks");
            }
            other => panic!("expected settled state, got {other:?}"),
        }
    }
}

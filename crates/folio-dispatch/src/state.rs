//! Dispatch state machine types.

use folio_commerce::content::ContentKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a surface navigates after a dispatch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedirectTarget {
    /// The sign-in page, when an anonymous viewer triggers an action.
    SignIn,
    /// The investor dashboard, after a licence or sponsoring transaction.
    Dashboard,
    /// The buyer's library for the content type, after a direct purchase.
    Library(ContentKind),
}

impl RedirectTarget {
    /// The route path for this target.
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::SignIn => "/signin",
            RedirectTarget::Dashboard => "/dashboard",
            RedirectTarget::Library(ContentKind::Book) => "/MyEbooks",
            RedirectTarget::Library(ContentKind::Course) => "/MyFormations",
        }
    }
}

/// A non-blocking notification shown outside the modal.
///
/// Failures never close the modal and never reach a global handler; they
/// surface as one of these and the state returns to idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Where one modal's dispatch currently stands.
///
/// Every channel walks the same shape: idle, then either a sign-in
/// redirect or an in-flight request, then a terminal settled/link-ready
/// state, or back to idle with a [`Notice`] on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum DispatchState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// The backend request is in flight.
    Requesting,
    /// An anonymous viewer triggered an action; redirect to sign-in.
    SignInRequired,
    /// The transaction went through. The UI holds the success screen for
    /// `hold`, then navigates to `redirect`.
    Settled {
        redirect: RedirectTarget,
        hold: Duration,
    },
    /// The affiliate link is ready. Terminal and re-enterable; rebuilding
    /// the link issues no further requests.
    LinkReady { url: String },
}

impl DispatchState {
    /// Whether a request is in flight. Surfaces can use this to disable the
    /// CTA while pending; nothing in the engine enforces it.
    pub fn is_requesting(&self) -> bool {
        matches!(self, DispatchState::Requesting)
    }

    /// Whether the dispatch reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DispatchState::Settled { .. } | DispatchState::LinkReady { .. }
        )
    }
}

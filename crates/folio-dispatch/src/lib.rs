//! Investment channel dispatch engine for Folio.
//!
//! One dispatcher serves every surface that opens an investment modal
//! (book page, course page, library, search results, affiliate landing),
//! replacing the per-surface copies of the same three-channel branching.
//!
//! The flow per modal:
//!
//! 1. a surface opens an [`InvestmentModal`] with a content snapshot and a
//!    requested channel;
//! 2. the modal quotes the amount to display, recomputing whenever the
//!    promo-code binding changes;
//! 3. confirming routes through [`InvestmentDispatcher`]: auth guard first,
//!    then the backend transaction, then a settled state carrying the
//!    redirect target and how long the success screen holds.
//!
//! States are driven by the request's own lifecycle. The dispatcher never
//! sleeps; timers (success hold, copied-indicator reset) belong to the UI
//! shell, which reads the durations exported here.

pub mod clipboard;
pub mod dispatcher;
pub mod modal;
pub mod state;

pub use clipboard::{
    copy_link, Clipboard, ClipboardError, CopiedIndicator, CopyOutcome, COPIED_RESET,
};
pub use dispatcher::{InvestmentDispatcher, INVEST_SUCCESS_HOLD, PURCHASE_SUCCESS_HOLD};
pub use modal::InvestmentModal;
pub use state::{DispatchState, Notice, RedirectTarget};

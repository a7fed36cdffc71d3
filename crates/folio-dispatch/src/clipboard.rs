//! Clipboard copy with manual-selection fallback.
//!
//! The affiliate link display tries the platform clipboard first. When that
//! write fails (denied permission, no clipboard API), the surface falls
//! back to a selectable text element and tells the buyer to copy by hand.
//! The link itself stays visible on both paths.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// How long the "copied" indicator stays up before auto-resetting.
pub const COPIED_RESET: Duration = Duration::from_secs(3);

/// Errors from a platform clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The write was attempted and refused.
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    /// No clipboard is available on this platform.
    #[error("Clipboard unavailable")]
    Unavailable,
}

/// A platform clipboard the copy helper writes through.
pub trait Clipboard {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// How a copy attempt ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyOutcome {
    /// The clipboard took the text; show the "copied" indicator.
    Copied,
    /// The clipboard refused; the surface selects the link text and shows a
    /// manual-copy instruction instead. No "copied" indicator.
    ManualSelection,
}

/// Copy a link, falling back to manual selection on failure.
pub fn copy_link(clipboard: &mut dyn Clipboard, link: &str) -> CopyOutcome {
    match clipboard.write_text(link) {
        Ok(()) => CopyOutcome::Copied,
        Err(_) => CopyOutcome::ManualSelection,
    }
}

/// The transient "copied" indicator next to the copy button.
///
/// The indicator appears only when the clipboard write succeeded; the UI
/// shell resets it after [`COPIED_RESET`] on either path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopiedIndicator {
    visible: bool,
}

impl CopiedIndicator {
    /// Record a copy attempt.
    pub fn record(&mut self, outcome: CopyOutcome) {
        self.visible = outcome == CopyOutcome::Copied;
    }

    /// Reset after the hold elapses.
    pub fn reset(&mut self) {
        self.visible = false;
    }

    /// Whether the indicator is showing.
    pub fn visible(&self) -> bool {
        self.visible
    }
}

//! Viewer identity types.

use folio_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
}

impl Account {
    /// Create an account snapshot.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: None,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Who is looking at a surface right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Viewer {
    /// Nobody signed in.
    #[default]
    Anonymous,
    /// A signed-in buyer.
    SignedIn(Account),
}

impl Viewer {
    /// Convenience constructor for a signed-in viewer.
    pub fn signed_in(id: UserId, email: impl Into<String>) -> Self {
        Viewer::SignedIn(Account::new(id, email))
    }

    /// The viewer's user ID, if signed in.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Viewer::Anonymous => None,
            Viewer::SignedIn(account) => Some(&account.id),
        }
    }

    /// Whether the viewer is signed in.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Viewer::SignedIn(_))
    }
}

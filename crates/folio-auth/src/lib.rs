//! Viewer identity for Folio buyer-facing flows.
//!
//! Session storage and sign-in live in an external identity service; this
//! crate only carries the resolved identity snapshot. The dispatch layer
//! takes a [`Viewer`] as an explicit argument rather than reading ambient
//! session state, so the auth guard is testable without mounting a UI tree.

mod viewer;

pub use viewer::{Account, Viewer};

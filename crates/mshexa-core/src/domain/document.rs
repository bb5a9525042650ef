//! Remote Document Traits
//!
//! The contract every document kept in a live collection satisfies.

use serde::Serialize;

/// A document as read back from a remote collection
pub trait Document: Clone {
    /// Identifier assigned by the store
    fn id(&self) -> &str;

    /// Server-assigned creation time in milliseconds.
    /// `None` while the store has not confirmed the write yet.
    fn created_at(&self) -> Option<i64>;
}

/// A document the store can create from a payload and patch in place
pub trait StoredDocument: Document + 'static {
    /// Payload for `add`
    type New: 'static;
    /// Payload for `update`
    type Patch: 'static;

    /// Build the stored form of a freshly added document
    fn materialize(id: String, created_at: i64, new: Self::New) -> Self;

    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Patch type for documents that are never updated in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoPatch {}

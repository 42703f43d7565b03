//! Host-supplied capabilities: page content source and change delegate.
//!
//! The engine holds these through [`std::rc::Weak`] handles so host and
//! engine lifetimes stay independent. A dropped source reads as an empty
//! pager; a dropped delegate turns change notifications into no-ops.

use crate::error::PagingError;

/// Produces page content on demand for an ordered, 0-based sequence.
///
/// Pages are positions, not allocated entities: the engine never caches
/// content, it asks the source again each time a container needs filling.
pub trait PageSource {
    /// The content attached to a visible container.
    type Content;

    /// Number of pages in the sequence.
    fn page_count(&self) -> usize;

    /// Content for the page at `index`.
    ///
    /// Fails with [`PagingError::IndexOutOfRange`] when `index` is not in
    /// `[0, page_count())`.
    fn content_for_page(&self, index: usize) -> Result<Self::Content, PagingError>;
}

/// Receives the engine's single normalized change notification.
pub trait PagingDelegate {
    /// Called exactly once per confirmed current-page change, after both
    /// the previous and current indices have been updated. Never called
    /// when a settle recomputes the same index.
    fn current_page_changed(&self, previous: usize, current: usize);
}

//! Error types for the paging core.

use thiserror::Error;

/// Errors reported by the paging engine and container pool.
///
/// Out-of-range errors signal a caller contract violation: validate
/// `page_count() > 0` and index bounds before requesting a scroll. They are
/// never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// A page index outside `[0, count)` was requested. Covers the
    /// zero-page case, where every index is out of range.
    #[error("page index {index} out of range for {count} pages")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of pages available at the time of the request.
        count: usize,
    },

    /// Content was attached for a page that already has an attached
    /// container.
    ///
    /// Containers are recycled across indices; attach and detach must be
    /// strictly paired, and a page can occupy at most one container at a
    /// time, otherwise stale content would surface under the wrong index.
    #[error("page {index} already has an attached container")]
    AlreadyAttached {
        /// The index whose attach was rejected.
        index: usize,
    },
}

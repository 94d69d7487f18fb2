//! Paging error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// Content was required but no provider has been configured.
    ///
    /// Distinct from an empty pager: zero pages is a valid state and never
    /// produces an error.
    #[error("content provider must be set before pages can be loaded")]
    MissingContentProvider,
}

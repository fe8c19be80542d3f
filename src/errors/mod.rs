//! Error types for the lineage viewer
//!
//! # Error Categories
//!
//! - **FetchError**: a catalog request failed in transport, returned a non-success
//!   status, or produced a body that is not JSON
//! - **DataShapeError**: a lineage payload breaks the node/edge invariants
//!
//! Neither error is propagated past the search and lineage panels. Both panels log
//! the failure and keep their last good state.
//!
//! # Examples
//!
//! ```rust
//! use lineage_viewer::errors::{DataShapeError, FetchError};
//!
//! let err = FetchError::Status { status: 502, body: "bad gateway".to_string() };
//! assert!(err.is_server_error());
//!
//! let err = DataShapeError::DuplicateNode("t1".to_string());
//! assert_eq!(err.to_string(), "Node 't1' appears more than once");
//! ```

pub mod data_shape;
pub mod fetch;

pub use data_shape::DataShapeError;
pub use fetch::FetchError;

/// Result type alias for catalog requests
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for payload validation
pub type DataShapeResult<T> = Result<T, DataShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_result_alias() {
        let result: FetchResult<()> = Err(FetchError::Status {
            status: 404,
            body: String::new(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_data_shape_result_alias() {
        let result: DataShapeResult<()> = Err(DataShapeError::DuplicateNode("a".to_string()));
        assert!(result.is_err());
    }
}

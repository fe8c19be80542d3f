use thiserror::Error;

/// A lineage payload that violates the node/edge invariants.
///
/// The catalog owns lineage computation, so none of these can be repaired locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataShapeError {
    /// An edge endpoint does not name any node in the same payload
    #[error("Edge {from} -> {to} references unknown node '{missing}'")]
    DanglingEdge {
        /// Source node identifier
        from: String,
        /// Target node identifier
        to: String,
        /// The endpoint that has no node
        missing: String,
    },

    /// Two nodes share an id
    #[error("Node '{0}' appears more than once")]
    DuplicateNode(String),
}

//! Error types for variant construction.

use thiserror::Error;

/// The only way building a described entity can fail: the requested tag does not
/// name a member of the closed variant set. Raised before anything is constructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("unknown variant tag: {0:?}")]
    UnknownTag(String),
}

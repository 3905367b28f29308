//! Error types for replace-in-html.
//!
//! Configuration errors are raised before the document is touched.
//! Replacement errors abort the walk and leave earlier splices in place.

/// Error type for replacement operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is a full document rather than a fragment.
    #[error("`html` must not contain <html>, <head> or <body>")]
    DocumentScope,

    /// The search expression could not be compiled.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),

    /// Unknown or repeated pattern flag.
    #[error("invalid search pattern flag: '{0}'")]
    InvalidFlag(char),

    /// The replacer produced something that cannot be spliced into the tree.
    #[error("replacer must produce a string, a single node, or an ordered collection of nodes: {0}")]
    UnsupportedReplacement(String),

    /// The regex engine failed while matching (e.g. backtrack limit).
    #[error("pattern matching failed: {0}")]
    Match(String),
}

/// Result type alias for replacement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the sobjgen library.
///
/// This enum encompasses the failures that can occur while listing org
/// schema, describing individual SObjects, and writing definition files.
#[derive(Debug, thiserror::Error)]
pub enum SobjgenError {
    /// HTTP transport failed before a response could be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error occurred while preparing the output directory tree.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The org rejected the global describe (SObject listing) request.
    ///
    /// This is fatal for the whole run: without the object list there is
    /// nothing to generate.
    #[error("Failed to list SObjects ({status}): {message}")]
    ObjectList { status: u16, message: String },

    /// The org rejected the describe request for a single SObject.
    ///
    /// Scoped to `object`; the generator absorbs this into a per-object
    /// failure outcome rather than aborting the run.
    #[error("Failed to describe SObject '{object}' ({status}): {message}")]
    Describe {
        object: String,
        status: u16,
        message: String,
    },
}

/// Convenience Result type for sobjgen operations.
pub type Result<T> = std::result::Result<T, SobjgenError>;

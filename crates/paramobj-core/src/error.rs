//! Error types for parameter object synthesis

use thiserror::Error;

/// Result type alias for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Error type for synthesis operations
///
/// Every variant is per-signature and recoverable: the
/// [`Processor`](crate::Processor) reports it and continues with the
/// remaining signatures. Coercion failures are deliberately absent here;
/// they occur at generated-type use time inside `Arguments::take`, as a
/// documented caller contract.
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// The parameter object annotation was attached to a non-function
    /// construct
    #[error("#[parameter_object] is only supported on functions, found {found}")]
    InvalidTarget { found: String },

    /// A parameter pattern is not a plain identifier, so no field name can
    /// be derived for it
    #[error("parameter of `{function}` is not a plain identifier")]
    UnnamedParameter { function: String },

    /// A resolved class name is not usable as a type identifier
    #[error("`{name}` is not a valid type name")]
    InvalidTypeName { name: String },

    /// A source file could not be read or parsed during extraction
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// The sink could not persist a generated unit
    #[error("failed to write generated type `{type_name}`: {source}")]
    Write {
        type_name: String,
        #[source]
        source: std::io::Error,
    },
}

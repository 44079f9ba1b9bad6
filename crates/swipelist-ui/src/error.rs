use std::fmt;

/// Failures of the few fallible setup and persistence steps.
///
/// List operations themselves never fail: missing targets are no-ops and
/// out-of-range removals are clamped.
#[derive(Debug)]
pub enum Error {
    /// The OS entropy source could not seed the item factory.
    Entropy(getrandom::Error),
    /// A bundle entry or a whole bundle could not be encoded or decoded.
    Serialization {
        key: Option<String>,
        source: serde_json::Error,
    },
    /// A stored variant was outside `[0, Variant::COUNT)`.
    InvalidVariant(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Entropy(err) => write!(f, "failed to seed random source: {err}"),
            Error::Serialization {
                key: Some(key),
                source,
            } => write!(f, "state entry {key:?} could not be serialized: {source}"),
            Error::Serialization { key: None, source } => {
                write!(f, "state bundle could not be serialized: {source}")
            }
            Error::InvalidVariant(value) => write!(f, "item variant {value} out of range"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serialization { source, .. } => Some(source),
            Error::Entropy(_) | Error::InvalidVariant(_) => None,
        }
    }
}

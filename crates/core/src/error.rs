//! Report invalid configuration values.
use std::sync::Arc;

/// An error produced while validating or loading a configuration.
///
/// Rendering itself never fails; these errors only surface at the
/// boundary where loose input (strings, files, numbers) becomes typed
/// configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The name is not part of the color palette.
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    /// The name is not a known size.
    #[error("unknown size: {0:?}")]
    UnknownSize(String),

    /// The name is not a known interaction state.
    #[error("unknown state: {0:?}")]
    UnknownState(String),

    /// The name is not a known pull direction.
    #[error("unknown pull direction: {0:?}")]
    UnknownPull(String),

    /// The name is not a known text alignment.
    #[error("unknown text alignment: {0:?}")]
    UnknownTextAlignment(String),

    /// The name is not a known text weight.
    #[error("unknown text weight: {0:?}")]
    UnknownTextWeight(String),

    /// The name is not a known text transform.
    #[error("unknown text transform: {0:?}")]
    UnknownTextTransform(String),

    /// The text size is outside of `1..=7`.
    #[error("text size must be between 1 and 7, got {0}")]
    TextSize(u8),

    /// The spacing value is outside of `0..=6`.
    #[error("spacing must be between 0 and 6, got {0}")]
    Spacing(u8),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(Arc<std::io::Error>),

    /// The configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The requested format needs a disabled feature.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

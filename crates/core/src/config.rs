//! Configuration loading from files.
//!
//! Configurations are written in RON. Parsing needs the `serde` feature;
//! without it, loaders report [`Error::Unsupported`].
use crate::Error;

use std::path::Path;

/// Reads the source of a configuration file.
///
/// Only files with the `.ron` extension are accepted.
pub fn read(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension != "ron" {
        return Err(Error::Unsupported("configuration files must be RON"));
    }

    let source = std::fs::read_to_string(path)?;
    log::debug!("Read configuration from {}", path.display());

    Ok(source)
}

/// Parses a value from RON source.
#[cfg(feature = "serde")]
pub fn from_ron<T>(source: &str) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    ron::from_str(source).map_err(|error| Error::Parse(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rejects_other_formats() {
        assert!(matches!(
            read("button.toml"),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read("definitely/not/here.ron"),
            Err(Error::Io(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron_rejects_unknown_color() {
        let result: Result<crate::Color, _> = from_ron("fuchsia");
        assert!(matches!(result, Err(Error::Parse(_))));

        let color: Result<crate::Color, _> = from_ron("primary");
        assert_eq!(color.ok(), Some(crate::Color::Primary));
    }
}

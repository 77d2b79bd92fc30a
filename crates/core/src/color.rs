//! The color palette shared by every component.
use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A named color of the palette.
///
/// Components turn a [`Color`] into a class suffix, like `is-primary` or
/// `has-text-danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// The main brand color.
    Primary,
    /// The color of links.
    Link,
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Destructive or erroneous.
    Danger,
    /// Plain white.
    White,
    /// Plain black.
    Black,
    /// A light gray.
    Light,
    /// A dark gray.
    Dark,
}

impl Color {
    /// Every color of the palette, in declaration order.
    pub const ALL: [Color; 10] = [
        Color::Primary,
        Color::Link,
        Color::Info,
        Color::Success,
        Color::Warning,
        Color::Danger,
        Color::White,
        Color::Black,
        Color::Light,
        Color::Dark,
    ];

    /// Returns the name of the [`Color`] as used in class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Primary => "primary",
            Color::Link => "link",
            Color::Info => "info",
            Color::Success => "success",
            Color::Warning => "warning",
            Color::Danger => "danger",
            Color::White => "white",
            Color::Black => "black",
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| Error::UnknownColor(s.to_owned()))
    }
}

//! Visual modifiers shared by every element.
//!
//! A [`Modifiers`] value is embedded in the configuration of each
//! component. It groups the helper flags, colors, typography and
//! spacing options that map onto the generic helper classes:
//!
//! - **Helpers**: `is-clearfix`, `is-marginless`, `is-clipped`, ...
//! - **Colors**: `has-text-<color>`, `has-background-<color>`
//! - **Typography**: `is-size-<n>`, `has-text-centered`, `is-italic`, ...
//! - **Spacing**: `m-2`, `px-4`, `mt-0`, ...
use crate::{Classes, Color, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The largest text size, `is-size-7`.
pub const MAX_TEXT_SIZE: u8 = 7;

/// The largest spacing step, like `m-6`.
pub const MAX_SPACING: u8 = 6;

bitflags::bitflags! {
    /// Boolean helper classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Helpers: u16 {
        /// Fixes floating children.
        const CLEARFIX = 1 << 0;
        /// Removes all margins.
        const MARGINLESS = 1 << 1;
        /// Removes all paddings.
        const PADDINGLESS = 1 << 2;
        /// Covers the whole parent.
        const OVERLAY = 1 << 3;
        /// Hides overflowing content.
        const CLIPPED = 1 << 4;
        /// Removes any radius.
        const RADIUSLESS = 1 << 5;
        /// Removes any shadow.
        const SHADOWLESS = 1 << 6;
        /// Prevents text selection.
        const UNSELECTABLE = 1 << 7;
        /// Hides the element but keeps its space.
        const INVISIBLE = 1 << 8;
        /// Hides the element.
        const HIDDEN = 1 << 9;
        /// Shows a pointer cursor.
        const CLICKABLE = 1 << 10;
    }
}

const HELPER_CLASSES: [(Helpers, &str); 11] = [
    (Helpers::CLEARFIX, "is-clearfix"),
    (Helpers::MARGINLESS, "is-marginless"),
    (Helpers::PADDINGLESS, "is-paddingless"),
    (Helpers::OVERLAY, "is-overlay"),
    (Helpers::CLIPPED, "is-clipped"),
    (Helpers::RADIUSLESS, "is-radiusless"),
    (Helpers::SHADOWLESS, "is-shadowless"),
    (Helpers::UNSELECTABLE, "is-unselectable"),
    (Helpers::INVISIBLE, "is-invisible"),
    (Helpers::HIDDEN, "is-hidden"),
    (Helpers::CLICKABLE, "is-clickable"),
];

impl Helpers {
    /// Returns the classes of the enabled helpers, in a fixed order.
    pub fn classes(self) -> impl Iterator<Item = &'static str> {
        HELPER_CLASSES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, class)| class)
    }
}

macro_rules! named {
    ($name:ident, $error:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the name used in class names.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| Error::$error(s.to_owned()))
            }
        }
    };
}

/// The side an element floats to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pull {
    /// `is-pulled-left`
    Left,
    /// `is-pulled-right`
    Right,
}

named!(Pull, UnknownPull, { Left => "left", Right => "right" });

/// The horizontal alignment of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlignment {
    /// `has-text-centered`
    Centered,
    /// `has-text-justified`
    Justified,
    /// `has-text-left`
    Left,
    /// `has-text-right`
    Right,
}

named!(TextAlignment, UnknownTextAlignment, {
    Centered => "centered",
    Justified => "justified",
    Left => "left",
    Right => "right",
});

/// The weight of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextWeight {
    /// `has-text-weight-light`
    Light,
    /// `has-text-weight-normal`
    Normal,
    /// `has-text-weight-medium`
    Medium,
    /// `has-text-weight-semibold`
    Semibold,
    /// `has-text-weight-bold`
    Bold,
}

named!(TextWeight, UnknownTextWeight, {
    Light => "light",
    Normal => "normal",
    Medium => "medium",
    Semibold => "semibold",
    Bold => "bold",
});

/// A case transformation of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextTransform {
    /// `is-capitalized`
    Capitalized,
    /// `is-lowercase`
    Lowercase,
    /// `is-uppercase`
    Uppercase,
}

named!(TextTransform, UnknownTextTransform, {
    Capitalized => "capitalized",
    Lowercase => "lowercase",
    Uppercase => "uppercase",
});

/// A side (or pair of sides) of the box model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Every side.
    All,
    /// The top side.
    Top,
    /// The right side.
    Right,
    /// The bottom side.
    Bottom,
    /// The left side.
    Left,
    /// Left and right.
    Horizontal,
    /// Top and bottom.
    Vertical,
}

impl Side {
    fn suffix(self) -> &'static str {
        match self {
            Side::All => "",
            Side::Top => "t",
            Side::Right => "r",
            Side::Bottom => "b",
            Side::Left => "l",
            Side::Horizontal => "x",
            Side::Vertical => "y",
        }
    }
}

/// Spacing steps for each [`Side`], from `0` to [`MAX_SPACING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spacing {
    /// Every side.
    pub all: Option<u8>,
    /// The top side.
    pub top: Option<u8>,
    /// The right side.
    pub right: Option<u8>,
    /// The bottom side.
    pub bottom: Option<u8>,
    /// The left side.
    pub left: Option<u8>,
    /// Left and right.
    pub horizontal: Option<u8>,
    /// Top and bottom.
    pub vertical: Option<u8>,
}

impl Spacing {
    fn slot(&mut self, side: Side) -> &mut Option<u8> {
        match side {
            Side::All => &mut self.all,
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Horizontal => &mut self.horizontal,
            Side::Vertical => &mut self.vertical,
        }
    }

    fn entries(&self) -> [(Side, Option<u8>); 7] {
        [
            (Side::All, self.all),
            (Side::Top, self.top),
            (Side::Right, self.right),
            (Side::Bottom, self.bottom),
            (Side::Left, self.left),
            (Side::Horizontal, self.horizontal),
            (Side::Vertical, self.vertical),
        ]
    }

    /// Sets the step of a [`Side`], rejecting steps above [`MAX_SPACING`].
    pub fn set(&mut self, side: Side, step: u8) -> Result<(), Error> {
        if step > MAX_SPACING {
            return Err(Error::Spacing(step));
        }

        *self.slot(side) = Some(step);
        Ok(())
    }

    fn validate(&self) -> Result<(), Error> {
        match self
            .entries()
            .into_iter()
            .find_map(|(_, step)| step.filter(|step| *step > MAX_SPACING))
        {
            Some(step) => Err(Error::Spacing(step)),
            None => Ok(()),
        }
    }

    fn push_classes(&self, prefix: char, classes: &mut Classes) {
        for (side, step) in self.entries() {
            if let Some(step) = step {
                classes.push(format!("{prefix}{}-{step}", side.suffix()));
            }
        }
    }
}

/// The visual modifiers of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Modifiers {
    /// The enabled helper classes.
    pub helpers: Helpers,
    /// The side the element floats to.
    pub pull: Option<Pull>,
    /// The color of the text.
    pub text_color: Option<Color>,
    /// The color of the background.
    pub background_color: Option<Color>,
    /// The size of the text, from `1` (largest) to [`MAX_TEXT_SIZE`].
    pub text_size: Option<u8>,
    /// The alignment of the text.
    pub text_alignment: Option<TextAlignment>,
    /// The weight of the text.
    pub text_weight: Option<TextWeight>,
    /// The case transformation of the text.
    pub text_transform: Option<TextTransform>,
    /// Whether the text is italic.
    pub italic: bool,
    /// The margin steps.
    pub margin: Spacing,
    /// The padding steps.
    pub padding: Spacing,
}

impl Modifiers {
    /// Creates a new set of [`Modifiers`] with nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the given [`Helpers`].
    #[must_use]
    pub fn helpers(mut self, helpers: Helpers) -> Self {
        self.helpers |= helpers;
        self
    }

    /// Sets the [`Pull`] direction.
    #[must_use]
    pub fn pull(mut self, pull: Pull) -> Self {
        self.pull = Some(pull);
        self
    }

    /// Sets the text [`Color`].
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the background [`Color`].
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the text size.
    ///
    /// Sizes outside of `1..=7` are logged and ignored; use
    /// [`Modifiers::try_text_size`] to handle them.
    #[must_use]
    pub fn text_size(self, size: u8) -> Self {
        match self.try_text_size(size) {
            Ok(modifiers) => modifiers,
            Err(error) => {
                log::warn!("Ignoring text size: {error}");
                self
            }
        }
    }

    /// Sets the text size, rejecting sizes outside of `1..=7`.
    pub fn try_text_size(mut self, size: u8) -> Result<Self, Error> {
        if !(1..=MAX_TEXT_SIZE).contains(&size) {
            return Err(Error::TextSize(size));
        }

        self.text_size = Some(size);
        Ok(self)
    }

    /// Sets the [`TextAlignment`].
    #[must_use]
    pub fn text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = Some(alignment);
        self
    }

    /// Sets the [`TextWeight`].
    #[must_use]
    pub fn text_weight(mut self, weight: TextWeight) -> Self {
        self.text_weight = Some(weight);
        self
    }

    /// Sets the [`TextTransform`].
    #[must_use]
    pub fn text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    /// Sets whether the text is italic.
    #[must_use]
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the margin of a [`Side`].
    ///
    /// Steps above [`MAX_SPACING`] are logged and ignored.
    #[must_use]
    pub fn margin(mut self, side: Side, step: u8) -> Self {
        if let Err(error) = self.margin.set(side, step) {
            log::warn!("Ignoring margin: {error}");
        }

        self
    }

    /// Sets the padding of a [`Side`].
    ///
    /// Steps above [`MAX_SPACING`] are logged and ignored.
    #[must_use]
    pub fn padding(mut self, side: Side, step: u8) -> Self {
        if let Err(error) = self.padding.set(side, step) {
            log::warn!("Ignoring padding: {error}");
        }

        self
    }

    /// Checks the numeric fields, which may have been set directly or
    /// loaded from a file.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(size) = self
            .text_size
            .filter(|size| !(1..=MAX_TEXT_SIZE).contains(size))
        {
            return Err(Error::TextSize(size));
        }

        self.margin.validate()?;
        self.padding.validate()
    }

    /// Returns the helper classes of the [`Modifiers`].
    ///
    /// Out-of-range numeric fields produce no class.
    pub fn classes(&self) -> Classes {
        let mut classes = Classes::new();

        for class in self.helpers.classes() {
            classes.push(class);
        }

        if let Some(pull) = self.pull {
            classes.push(format!("is-pulled-{pull}"));
        }

        if let Some(color) = self.text_color {
            classes.push(format!("has-text-{color}"));
        }

        if let Some(color) = self.background_color {
            classes.push(format!("has-background-{color}"));
        }

        if let Some(size) = self.text_size.filter(|size| (1..=MAX_TEXT_SIZE).contains(size)) {
            classes.push(format!("is-size-{size}"));
        }

        if let Some(alignment) = self.text_alignment {
            classes.push(format!("has-text-{alignment}"));
        }

        if let Some(weight) = self.text_weight {
            classes.push(format!("has-text-weight-{weight}"));
        }

        if let Some(transform) = self.text_transform {
            classes.push(format!("is-{transform}"));
        }

        classes.push_if(self.italic, "is-italic");

        if self.margin.validate().is_ok() {
            self.margin.push_classes('m', &mut classes);
        }

        if self.padding.validate().is_ok() {
            self.padding.push_classes('p', &mut classes);
        }

        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_classes() {
        assert!(Modifiers::default().classes().is_empty());
    }

    #[test]
    fn test_helper_classes_follow_fixed_order() {
        let modifiers = Modifiers::new().helpers(Helpers::HIDDEN | Helpers::CLEARFIX);
        assert_eq!(modifiers.classes().to_string(), "is-clearfix is-hidden");
    }

    #[test]
    fn test_colors_and_typography() {
        let modifiers = Modifiers::new()
            .text_color(Color::Danger)
            .background_color(Color::Light)
            .text_size(3)
            .text_alignment(TextAlignment::Centered)
            .text_weight(TextWeight::Bold)
            .text_transform(TextTransform::Uppercase)
            .italic(true);

        assert_eq!(
            modifiers.classes().to_string(),
            "has-text-danger has-background-light is-size-3 has-text-centered \
             has-text-weight-bold is-uppercase is-italic"
        );
    }

    #[test]
    fn test_spacing_classes() {
        let modifiers = Modifiers::new()
            .margin(Side::All, 0)
            .margin(Side::Top, 2)
            .padding(Side::Horizontal, 4);

        assert_eq!(modifiers.classes().to_string(), "m-0 mt-2 px-4");
    }

    #[test]
    fn test_out_of_range_values_are_ignored() {
        let modifiers = Modifiers::new().text_size(8).margin(Side::Left, 7);

        assert_eq!(modifiers.text_size, None);
        assert_eq!(modifiers.margin.left, None);
        assert!(modifiers.classes().is_empty());
    }

    #[test]
    fn test_try_text_size() {
        assert!(matches!(
            Modifiers::new().try_text_size(0),
            Err(Error::TextSize(0))
        ));
        assert_eq!(
            Modifiers::new().try_text_size(7).map(|m| m.text_size).ok(),
            Some(Some(7))
        );
    }

    #[test]
    fn test_validate_direct_fields() {
        let mut modifiers = Modifiers::new();
        modifiers.padding.bottom = Some(9);

        assert!(matches!(modifiers.validate(), Err(Error::Spacing(9))));
        assert!(!modifiers.classes().contains("pb-9"));

        let mut modifiers = Modifiers::new();
        modifiers.text_size = Some(8);
        assert!(matches!(modifiers.validate(), Err(Error::TextSize(8))));

        modifiers.text_size = Some(7);
        assert!(modifiers.validate().is_ok());
    }

    #[test]
    fn test_pull() {
        for &pull in Pull::ALL {
            let classes = Modifiers::new().pull(pull).classes();
            assert_eq!(classes.to_string(), format!("is-pulled-{pull}"));
        }

        assert_eq!(
            Modifiers::new()
                .helpers(Helpers::CLEARFIX)
                .pull(Pull::Right)
                .classes()
                .to_string(),
            "is-clearfix is-pulled-right"
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("right".parse::<Pull>().ok(), Some(Pull::Right));
        assert_eq!(
            "semibold".parse::<TextWeight>().ok(),
            Some(TextWeight::Semibold)
        );
        assert!(matches!(
            "middle".parse::<TextAlignment>(),
            Err(Error::UnknownTextAlignment(_))
        ));
    }
}

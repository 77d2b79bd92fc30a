//! The plain, serializable configuration of a [`Button`](super::Button).
//!
//! # Example
//! ```no_run
//! use bulma_ui_widget::button::{self, Button};
//!
//! let configuration = button::configuration::load("save-button.ron")?;
//! let save: Button<'_, ()> = Button::from_configuration(configuration).push("Save");
//! # Ok::<(), bulma_ui_widget::core::Error>(())
//! ```
use crate::core::config;
use crate::core::{Classes, Color, Error, Modifiers, Size, Target};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The tag a [`Button`](super::Button) is rendered as by default.
pub const DEFAULT_TAG: &str = "button";

/// The tag a static [`Button`](super::Button) is always rendered as.
pub const STATIC_TAG: &str = "span";

/// A forced interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum State {
    /// Looks hovered.
    Hover,
    /// Looks focused.
    Focus,
    /// Looks pressed.
    Active,
    /// Shows a spinner instead of its content.
    Loading,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 4] = [State::Hover, State::Focus, State::Active, State::Loading];

    /// Returns the name of the [`State`] as used in class names.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Hover => "hover",
            State::Focus => "focus",
            State::Active => "active",
            State::Loading => "loading",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| Error::UnknownState(s.to_owned()))
    }
}

/// The form role of a button, written as its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Submits its form.
    Submit,
    /// Resets its form.
    Reset,
}

impl Kind {
    /// Returns the value of the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Submit => "submit",
            Kind::Reset => "reset",
        }
    }
}

/// The declarative options of a button.
///
/// Every flag defaults to `false` and every optional value to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Configuration {
    /// Adds `is-<color>`.
    pub color: Option<Color>,
    /// Adds `is-<size>`.
    pub size: Option<Size>,
    /// Adds `is-<state>`.
    pub state: Option<State>,
    /// Adds `is-outlined`.
    pub outlined: bool,
    /// Adds `is-inverted`, for buttons on colored backgrounds.
    pub inverted: bool,
    /// Adds `is-fullwidth`.
    pub fullwidth: bool,
    /// Adds `is-rounded`.
    pub rounded: bool,
    /// Adds `is-text`.
    pub text: bool,
    /// Renders a `delete` cross instead of a `button`.
    pub remove: bool,
    /// Renders with `type="submit"`.
    pub submit: bool,
    /// Renders with `type="reset"`.
    pub reset: bool,
    /// Renders as a non-interactive `span` with `is-static`.
    pub is_static: bool,
    /// Adds `is-selected`, useful inside button groups.
    pub is_selected: bool,
    /// Accepted for compatibility; it adds no class.
    ///
    /// Use [`State::Loading`] to show a spinner.
    pub loading: bool,
    /// Removes the button from the tab order and ignores clicks.
    pub disabled: bool,
    /// Extra classes, written before the computed ones.
    pub class_name: Option<String>,
    /// The shared visual modifiers.
    pub modifiers: Modifiers,
}

impl Configuration {
    /// Resolves what the button is rendered as and its form role.
    ///
    /// The checks run in order and each match replaces the previous
    /// result: `submit`, then `reset`, then `is_static`. A button that is
    /// both `reset` and `is_static` is therefore a plain `span`.
    pub fn target(&self, render_as: Option<Target>) -> (Target, Option<Kind>) {
        let interactive = || {
            render_as
                .clone()
                .unwrap_or_else(|| Target::tag(DEFAULT_TAG))
        };

        let mut resolved = None;

        if self.submit {
            resolved = Some((interactive(), Some(Kind::Submit)));
        }

        if self.reset {
            resolved = Some((interactive(), Some(Kind::Reset)));
        }

        if self.is_static {
            resolved = Some((Target::tag(STATIC_TAG), None));
        }

        resolved.unwrap_or_else(|| (interactive(), None))
    }

    /// Returns the `tabindex` of the button: `-1` when disabled, `0`
    /// otherwise.
    pub fn tab_index(&self) -> i64 {
        if self.disabled { -1 } else { 0 }
    }

    /// Returns the classes of the button.
    ///
    /// The caller's `class_name` comes first, followed by the computed
    /// classes in a fixed order, ending with either `delete` or `button`.
    pub fn classes(&self) -> Classes {
        let mut classes = Classes::from(self.class_name.as_deref());

        if let Some(color) = self.color {
            classes.push(format!("is-{color}"));
        }

        if let Some(size) = self.size {
            classes.push(format!("is-{size}"));
        }

        if let Some(state) = self.state {
            classes.push(format!("is-{state}"));
        }

        classes.push_if(self.is_selected, "is-selected");
        classes.push_if(self.is_static, "is-static");
        classes.push_if(self.rounded, "is-rounded");
        classes.push_if(self.outlined, "is-outlined");
        classes.push_if(self.inverted, "is-inverted");
        classes.push_if(self.fullwidth, "is-fullwidth");
        classes.push_if(self.text, "is-text");

        // `loading` has no class of its own; see `State::Loading`.

        classes.push(if self.remove { "delete" } else { "button" });
        classes
    }
}

/// Parses a [`Configuration`] from RON source.
///
/// Unknown colors, sizes or states, and out-of-range modifiers, are
/// rejected.
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use bulma_ui_widget::button::configuration;
/// use bulma_ui_widget::core::Color;
///
/// let configuration = configuration::from_ron("(color: Some(danger), rounded: true)")?;
///
/// assert_eq!(configuration.color, Some(Color::Danger));
/// assert!(configuration.rounded);
/// # }
/// # Ok::<(), bulma_ui_widget::core::Error>(())
/// ```
#[cfg(feature = "serde")]
pub fn from_ron(source: &str) -> Result<Configuration, Error> {
    let configuration: Configuration = config::from_ron(source)?;
    configuration.modifiers.validate()?;

    log::debug!("Loaded button configuration: {configuration:?}");

    Ok(configuration)
}

/// Parses a [`Configuration`] from RON source.
///
/// Always fails, since the `serde` feature is disabled.
#[cfg(not(feature = "serde"))]
pub fn from_ron(_source: &str) -> Result<Configuration, Error> {
    Err(Error::Unsupported(
        "RON configurations require the `serde` feature",
    ))
}

/// Loads a [`Configuration`] from a `.ron` file.
pub fn load(path: impl AsRef<Path>) -> Result<Configuration, Error> {
    let source = config::read(path)?;

    from_ron(&source)
}

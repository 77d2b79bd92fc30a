//! Build class lists out of conditional tokens.
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use std::fmt;

/// An ordered list of unique class names.
///
/// Tokens keep the order in which they were first pushed; pushing a token
/// twice has no effect. Whitespace-separated input is split into tokens.
///
/// ```
/// use bulma_ui_core::Classes;
///
/// let classes = Classes::from("card  wide")
///     .with_if(true, "is-primary")
///     .with_if(false, "is-hidden");
///
/// assert_eq!(classes.to_string(), "card wide is-primary");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classes {
    tokens: Vec<SmolStr>,
    seen: FxHashSet<SmolStr>,
}

impl Classes {
    /// Creates an empty list of [`Classes`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated token of `class`.
    pub fn push(&mut self, class: impl AsRef<str>) {
        for token in class.as_ref().split_whitespace() {
            if self.seen.insert(SmolStr::new(token)) {
                self.tokens.push(SmolStr::new(token));
            }
        }
    }

    /// Appends `class` only if `condition` holds.
    pub fn push_if(&mut self, condition: bool, class: impl AsRef<str>) {
        if condition {
            self.push(class);
        }
    }

    /// Appends `class` and returns the [`Classes`].
    #[must_use]
    pub fn with(mut self, class: impl AsRef<str>) -> Self {
        self.push(class);
        self
    }

    /// Appends `class` if `condition` holds and returns the [`Classes`].
    #[must_use]
    pub fn with_if(mut self, condition: bool, class: impl AsRef<str>) -> Self {
        self.push_if(condition, class);
        self
    }

    /// Appends every token of `other`, keeping their order.
    pub fn extend(&mut self, other: Classes) {
        for token in other.tokens {
            self.push(token);
        }
    }

    /// Returns `true` if the token is present.
    pub fn contains(&self, class: &str) -> bool {
        self.seen.contains(class)
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(SmolStr::as_str)
    }
}

impl PartialEq for Classes {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Classes {}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            f.write_str(token)?;
        }

        Ok(())
    }
}

impl From<&str> for Classes {
    fn from(class: &str) -> Self {
        Classes::new().with(class)
    }
}

impl From<String> for Classes {
    fn from(class: String) -> Self {
        Classes::new().with(class)
    }
}

impl From<Option<&str>> for Classes {
    fn from(class: Option<&str>) -> Self {
        class.map(Classes::from).unwrap_or_default()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Classes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut classes = Classes::new();

        for class in iter {
            classes.push(class);
        }

        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence() {
        let classes: Classes = ["button", "is-small", "button"].into_iter().collect();
        assert_eq!(classes.to_string(), "button is-small");
    }

    #[test]
    fn test_splits_whitespace() {
        let classes = Classes::from("  a\tb \n c ");
        assert_eq!(classes.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Classes::from("").is_empty());
        assert!(Classes::from(None).is_empty());
        assert_eq!(Classes::new().to_string(), "");
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut classes = Classes::from("custom");
        classes.extend(Classes::from("button custom is-large"));

        assert_eq!(classes.to_string(), "custom button is-large");
    }
}

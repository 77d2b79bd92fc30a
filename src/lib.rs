//! bulma_ui renders Bulma-flavored components into plain HTML nodes.
//!
//! Components are builders. Each one computes its classes, attributes and
//! render target from a set of declarative options, and converts into an
//! [`Element`] that renders a [`Node`].
//!
//! ```
//! use bulma_ui::widget::button;
//! use bulma_ui::{Color, Element, Size};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Close,
//! }
//!
//! let close: Element<'_, Message> = button("Close")
//!     .color(Color::Danger)
//!     .size(Size::Small)
//!     .outlined(true)
//!     .on_click(Message::Close)
//!     .into();
//!
//! assert_eq!(
//!     close.view().to_string(),
//!     r#"<button class="is-danger is-small is-outlined button" tabindex="0">Close</button>"#
//! );
//! assert_eq!(close.click(), Some(Message::Close));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use bulma_ui_core as core;

pub use crate::core::{
    Attributes, Classes, Color, Component, Element, Error, Helpers, Modifiers, Node, Size,
    Target, Value,
};

pub mod widget {
    //! Use the built-in widgets.
    pub use bulma_ui_widget::*;
}

pub use widget::Button;
pub use widget::button;

/// The result of fallible operations, like loading a configuration.
pub type Result<T = ()> = std::result::Result<T, Error>;

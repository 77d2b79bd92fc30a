//! Button widgets.
//!
//! This module provides the [`Button`] widget and its plain
//! [`Configuration`]:
//! - [`Button`] - builder that renders into an [`Element`](crate::core::Element)
//! - [`configuration`] - the serializable options, with RON loading
//!
//! # Example
//! ```
//! use bulma_ui_widget::button;
//! use bulma_ui_widget::core::{Color, Element, Size};
//!
//! #[derive(Clone)]
//! enum Message {
//!     Submit,
//! }
//!
//! // Form submit button
//! let submit: Element<'_, Message> = button("Send")
//!     .submit(true)
//!     .color(Color::Success)
//!     .on_click(Message::Submit)
//!     .into();
//!
//! // Non-interactive addon
//! let addon: Element<'_, Message> = button("@").static_(true).size(Size::Small).into();
//!
//! assert!(submit.target().is_tag("button"));
//! assert!(addon.target().is_tag("span"));
//! ```
mod widget;

pub mod configuration;

pub use configuration::{Configuration, Kind, State};
pub use widget::*;

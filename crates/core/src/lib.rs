//! The core library of `bulma_ui`.
//!
//! This library holds the essential types that every component builds on:
//! the [`Element`] every component renders into, the [`Node`] tree it
//! produces, the [`Classes`] utility, the color palette and the shared
//! [`Modifiers`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod attribute;
pub mod class;
pub mod config;
pub mod element;
pub mod modifiers;
pub mod node;

mod color;
mod error;
mod size;

pub use attribute::{Attributes, Value};
pub use class::Classes;
pub use color::Color;
pub use element::{Component, Element, Target};
pub use error::Error;
pub use modifiers::{Helpers, Modifiers, Pull, Side, Spacing, TextAlignment, TextTransform, TextWeight};
pub use node::Node;
pub use size::Size;
pub use smol_str::SmolStr;

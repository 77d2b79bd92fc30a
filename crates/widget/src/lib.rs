//! Use the built-in widgets or create your own.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use bulma_ui_core as core;

pub mod button;

mod helpers;

pub use button::Button;
pub use helpers::*;

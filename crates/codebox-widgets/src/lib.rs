//! The segmented code input widget for **codebox**.
//!
//! [`CodeInput`](code_input::CodeInput) implements
//! [`codebox_core::Component`], so it embeds in any [`codebox_core::Model`]
//! and lays out with [`ratatui`] like any other component.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`code_input`] | The widget: input policy, focus movement and change events |
//! | [`config`] | Resolved options and partial option sets |
//! | [`code_box`] | The per-character box trait and the terminal [`CellBox`](code_box::CellBox) |
//! | [`registry`] | Ordered box slots and placeholders |
//! | [`projection`] | Code to boxes and back |
//! | [`admission`] | Which characters a box accepts |
//! | [`error`] | Error type |

pub mod admission;
pub mod code_box;
pub mod code_input;
pub mod config;
pub mod error;
pub mod projection;
pub mod registry;

pub use code_box::{CellBox, CodeBox, FillState};
pub use code_input::{CodeInput, CodeInputStyle, KeyKind};
pub use config::{CodeInputConfig, CodeInputOptions};
pub use error::CodeInputError;

//! **codebox**: a segmented code input (OTP / PIN) for [`ratatui`]
//! applications.
//!
//! This is the umbrella crate that re-exports everything needed to build an
//! application from a single dependency:
//!
//! ```toml
//! [dependencies]
//! codebox = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`codebox_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`codebox_widgets`].
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use codebox::widgets::code_input::{self, CodeInput};
//! use codebox::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct Pin {
//!     input: CodeInput,
//! }
//!
//! enum Msg {
//!     Code(code_input::Message),
//! }
//!
//! impl Model for Pin {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut input = CodeInput::new().with_initial_focus_field(0);
//!         let cmd = input.mount().map(Msg::Code);
//!         (Pin { input }, cmd)
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Code(code_input::Message::CodeCompleted(_)) => Command::quit(),
//!             Msg::Code(m) => self.input.update(m).map(Msg::Code),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.input.view(frame, frame.area());
//!     }
//!     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(key) => Some(Msg::Code(code_input::Message::Key(key))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     codebox::run::<Pin>(()).await.unwrap();
//! }
//! ```

pub use codebox_core::*;
pub mod widgets {
    pub use codebox_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

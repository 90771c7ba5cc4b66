use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that its
/// [`view`](Component::view) receives an `area`, so a parent decides where
/// each child draws.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// lift returned commands with [`Command::map`]:
///
/// ```rust,ignore
/// use codebox_core::{Model, Component, Command};
/// use codebox_widgets::code_input::{self, CodeInput};
///
/// struct App { pin: CodeInput }
///
/// enum AppMsg { Pin(code_input::Message) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Pin(m) => self.pin.update(m).map(AppMsg::Pin),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent can query this to decide which child receives keyboard
    /// events. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}

//! The per-character box handle and its terminal implementation.

/// Content classification of a box, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillState {
    /// The box holds a character.
    HasValue,
    /// The box is empty.
    #[default]
    Empty,
}

/// One focusable, editable single-character slot.
///
/// The rendering layer creates boxes and reports them to the widget, which
/// then drives their content, focus and enabled state. A GUI host can put
/// its native text field behind this trait; terminal hosts use [`CellBox`].
///
/// The native field hints (input type, input mode, autocapitalization) are
/// not pushed through this trait. GUI hosts read them from
/// [`CodeInput::config`](crate::code_input::CodeInput::config), using
/// [`effective_input_type`](crate::config::CodeInputConfig::effective_input_type)
/// for the type. [`CellBox`] has no use for them.
pub trait CodeBox: Send + 'static {
    /// Current text (zero or one character).
    fn value(&self) -> &str;

    /// Replace the text.
    fn set_value(&mut self, value: &str);

    /// Give this box keyboard focus.
    fn focus(&mut self);

    /// Remove keyboard focus.
    fn blur(&mut self);

    /// Whether this box currently has focus.
    fn is_focused(&self) -> bool;

    /// Enable or disable the box.
    fn set_disabled(&mut self, disabled: bool);

    /// Update the has-value / empty marker.
    fn set_fill_state(&mut self, state: FillState);

    /// Caret position in characters, after the last edit settled.
    fn caret(&self) -> usize;
}

/// In-memory box used by the terminal rendering.
///
/// The caret sits after the character when the box is filled and at zero
/// when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellBox {
    value: String,
    focused: bool,
    disabled: bool,
    fill: FillState,
}

impl CellBox {
    /// Create an empty box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the box is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The last fill marker set on this box.
    pub fn fill_state(&self) -> FillState {
        self.fill
    }
}

impl CodeBox for CellBox {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn set_fill_state(&mut self, state: FillState) {
        self.fill = state;
    }

    fn caret(&self) -> usize {
        self.value.chars().count()
    }
}

/// Write `value` into `handle` and keep the fill marker in step.
///
/// `None` or an empty value clears the box.
pub fn write_box<B: CodeBox + ?Sized>(handle: &mut B, value: Option<&str>) {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => {
            handle.set_value(v);
            handle.set_fill_state(FillState::HasValue);
        }
        None => {
            handle.set_value("");
            handle.set_fill_state(FillState::Empty);
        }
    }
}

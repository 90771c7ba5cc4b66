//! Configuration for the code input widget.
//!
//! [`CodeInputConfig`] is the full, resolved option set. [`CodeInputOptions`]
//! is a partial set: an application-wide defaults object merged at
//! construction, and the field set passed to
//! [`CodeInput::apply`](crate::code_input::CodeInput::apply) when a host
//! changes options at runtime.

use std::time::Duration;

/// Default number of boxes.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Default wait before change events fire.
pub const DEFAULT_EMIT_DELAY: Duration = Duration::from_millis(50);

/// Upper bound for the coalescing delay.
pub const MAX_EMIT_DELAY: Duration = Duration::from_millis(500);

/// Resolved widget options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInputConfig {
    /// Number of boxes.
    pub code_length: usize,
    /// Input type hint for native boxes.
    pub input_type: String,
    /// Virtual keyboard hint for native boxes.
    pub input_mode: String,
    /// Box to focus once after the first render.
    pub initial_focus_field: Option<usize>,
    /// Accept any non-empty character instead of digits only.
    pub is_chars_code: bool,
    /// Deprecated alias of `is_chars_code`; either flag enables any-character mode.
    pub is_non_digits_code: bool,
    /// Mask the displayed characters.
    pub is_code_hidden: bool,
    /// Let Backspace move back even when it just cleared a filled box.
    pub is_prev_focusable_after_clearing: bool,
    /// Clicking a box of a filled code jumps to the last box.
    pub is_focusing_on_last_by_click_if_filled: bool,
    /// The logical code projected onto the boxes.
    pub code: Option<String>,
    /// Disable every box.
    pub disabled: bool,
    /// Autocapitalization hint for native boxes.
    pub autocapitalize: Option<String>,
    /// Coalescing delay before change events fire.
    pub emit_delay: Duration,
}

impl Default for CodeInputConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            input_type: "tel".to_string(),
            input_mode: "numeric".to_string(),
            initial_focus_field: None,
            is_chars_code: false,
            is_non_digits_code: false,
            is_code_hidden: false,
            is_prev_focusable_after_clearing: true,
            is_focusing_on_last_by_click_if_filled: false,
            code: None,
            disabled: false,
            autocapitalize: None,
            emit_delay: DEFAULT_EMIT_DELAY,
        }
    }
}

impl CodeInputConfig {
    /// Built-in defaults with `defaults` merged over them.
    pub fn from_defaults(defaults: &CodeInputOptions) -> Self {
        let mut config = Self::default();
        config.merge(defaults);
        config
    }

    /// Overwrite every field that `options` sets. The emit delay is clamped
    /// to [`MAX_EMIT_DELAY`].
    pub fn merge(&mut self, options: &CodeInputOptions) {
        if let Some(v) = options.code_length {
            self.code_length = v;
        }
        if let Some(ref v) = options.input_type {
            self.input_type = v.clone();
        }
        if let Some(ref v) = options.input_mode {
            self.input_mode = v.clone();
        }
        if let Some(v) = options.initial_focus_field {
            self.initial_focus_field = v;
        }
        if let Some(v) = options.is_chars_code {
            self.is_chars_code = v;
        }
        if let Some(v) = options.is_non_digits_code {
            self.is_non_digits_code = v;
        }
        if let Some(v) = options.is_code_hidden {
            self.is_code_hidden = v;
        }
        if let Some(v) = options.is_prev_focusable_after_clearing {
            self.is_prev_focusable_after_clearing = v;
        }
        if let Some(v) = options.is_focusing_on_last_by_click_if_filled {
            self.is_focusing_on_last_by_click_if_filled = v;
        }
        if let Some(ref v) = options.code {
            self.code = v.clone();
        }
        if let Some(v) = options.disabled {
            self.disabled = v;
        }
        if let Some(ref v) = options.autocapitalize {
            self.autocapitalize = v.clone();
        }
        if let Some(v) = options.emit_delay {
            self.emit_delay = v.min(MAX_EMIT_DELAY);
        }
    }

    /// Whether any non-empty character is admissible.
    pub fn allows_any_char(&self) -> bool {
        self.is_chars_code || self.is_non_digits_code
    }

    /// The input type a native box should use; hidden codes become passwords.
    pub fn effective_input_type(&self) -> &str {
        if self.is_code_hidden {
            "password"
        } else {
            &self.input_type
        }
    }
}

/// A partial option set. `None` leaves a field untouched.
///
/// Optional fields of [`CodeInputConfig`] use a nested `Option`, so
/// `Some(None)` explicitly clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeInputOptions {
    pub code_length: Option<usize>,
    pub input_type: Option<String>,
    pub input_mode: Option<String>,
    pub initial_focus_field: Option<Option<usize>>,
    pub is_chars_code: Option<bool>,
    pub is_non_digits_code: Option<bool>,
    pub is_code_hidden: Option<bool>,
    pub is_prev_focusable_after_clearing: Option<bool>,
    pub is_focusing_on_last_by_click_if_filled: Option<bool>,
    pub code: Option<Option<String>>,
    pub disabled: Option<bool>,
    pub autocapitalize: Option<Option<String>>,
    pub emit_delay: Option<Duration>,
}

impl CodeInputOptions {
    /// An empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical code.
    pub fn code(mut self, code: impl ToString) -> Self {
        self.code = Some(Some(code.to_string()));
        self
    }

    /// Clear the logical code.
    pub fn no_code(mut self) -> Self {
        self.code = Some(None);
        self
    }

    /// Set the number of boxes.
    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = Some(code_length);
        self
    }

    /// Enable or disable every box.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Allow any non-empty character.
    pub fn chars_code(mut self, allow: bool) -> Self {
        self.is_chars_code = Some(allow);
        self
    }

    /// Mask displayed characters.
    pub fn code_hidden(mut self, hidden: bool) -> Self {
        self.is_code_hidden = Some(hidden);
        self
    }

    /// Focus a box once after the first render.
    pub fn initial_focus_field(mut self, index: usize) -> Self {
        self.initial_focus_field = Some(Some(index));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CodeInputConfig::default();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.input_type, "tel");
        assert_eq!(config.input_mode, "numeric");
        assert_eq!(config.initial_focus_field, None);
        assert!(!config.allows_any_char());
        assert!(config.is_prev_focusable_after_clearing);
        assert!(!config.is_focusing_on_last_by_click_if_filled);
        assert_eq!(config.emit_delay, Duration::from_millis(50));
    }

    #[test]
    fn external_defaults_override_builtins() {
        let defaults = CodeInputOptions::new().code_length(6).chars_code(true);
        let config = CodeInputConfig::from_defaults(&defaults);
        assert_eq!(config.code_length, 6);
        assert!(config.allows_any_char());
        assert_eq!(config.input_type, "tel");
    }

    #[test]
    fn nested_options_can_clear_fields() {
        let mut config = CodeInputConfig::from_defaults(&CodeInputOptions::new().code("12"));
        assert_eq!(config.code.as_deref(), Some("12"));
        config.merge(&CodeInputOptions::new().no_code());
        assert_eq!(config.code, None);
    }

    #[test]
    fn deprecated_alias_enables_any_char() {
        let config = CodeInputConfig {
            is_non_digits_code: true,
            ..CodeInputConfig::default()
        };
        assert!(config.allows_any_char());
    }

    #[test]
    fn emit_delay_is_bounded() {
        let options = CodeInputOptions {
            emit_delay: Some(Duration::from_secs(10)),
            ..CodeInputOptions::default()
        };
        let config = CodeInputConfig::from_defaults(&options);
        assert_eq!(config.emit_delay, MAX_EMIT_DELAY);
    }

    #[test]
    fn hidden_code_uses_password_type() {
        let config = CodeInputConfig::from_defaults(&CodeInputOptions::new().code_hidden(true));
        assert_eq!(config.effective_input_type(), "password");
        assert_eq!(CodeInputConfig::default().effective_input_type(), "tel");
    }
}

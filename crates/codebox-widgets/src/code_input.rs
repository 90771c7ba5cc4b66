//! Segmented code input: N single-character boxes that behave as one value,
//! for OTP and PIN entry.

use std::borrow::Cow;

use codebox_core::command::Command;
use codebox_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::admission::{split_chars, Admission};
use crate::code_box::{write_box, CellBox, CodeBox};
use crate::config::{CodeInputConfig, CodeInputOptions, MAX_EMIT_DELAY};
use crate::error::CodeInputError;
use crate::projection;
use crate::registry::{BoxRegistry, BoxStatus, Placeholder};

const BOX_HEIGHT: u16 = 3;
const BOX_GAP: u16 = 1;
// Borders plus one column of padding on each side.
const BOX_CHROME: u16 = 4;

/// Style configuration for the code input.
#[derive(Debug, Clone)]
pub struct CodeInputStyle {
    /// Border of an unfocused box.
    pub border: Style,
    /// Border of the focused box.
    pub focused_border: Style,
    /// Character in a filled box.
    pub filled: Style,
    /// Content of an empty box.
    pub empty: Style,
    /// Cursor shown in the focused empty box.
    pub cursor: Style,
    /// Borders and content while disabled.
    pub disabled: Style,
}

impl Default for CodeInputStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            filled: Style::default().add_modifier(Modifier::BOLD),
            empty: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        }
    }
}

/// How a key-down event is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Backspace,
    Delete,
    /// A generic composition keycode some virtual keyboards report instead
    /// of the real key. Classified once the native edit has settled.
    Composition,
    Other,
}

impl From<&KeyEvent> for KeyKind {
    fn from(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Backspace => KeyKind::Backspace,
            KeyCode::Delete => KeyKind::Delete,
            _ => KeyKind::Other,
        }
    }
}

/// Messages for the code input component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A terminal key press, routed to the focused box.
    Key(KeyEvent),
    /// Bracketed paste content, routed to the focused box.
    Paste(String),
    /// Text was inserted into box `index`. `data` is the inserted text when
    /// the host knows it; otherwise the box's current value is used.
    Input { index: usize, data: Option<String> },
    /// Clipboard text pasted into box `index`.
    PasteAt { index: usize, text: String },
    /// A key went down on box `index`.
    KeyDown { index: usize, key: KeyKind },
    /// Box `index` was clicked.
    Click { index: usize },
    /// The host reports that box `index` gained focus.
    Focused { index: usize },
    /// The host reports that box `index` lost focus.
    Blurred { index: usize },
    /// Deferred: classify a composition key on box `index`.
    ResolveComposition { index: usize, was_empty: bool },
    /// Deferred: move focus to the last box.
    FocusLast,
    /// Deferred: the one-time initial focus check after a render pass.
    InitialFocus,
    /// Deferred: the coalescing delay elapsed, publish the current code.
    Emit,
    /// Emitted on every settled edit with the current filled code.
    CodeChanged(String),
    /// Emitted alongside [`CodeChanged`](Message::CodeChanged) when every
    /// box is filled.
    CodeCompleted(String),
}

/// A segmented code input.
///
/// The widget keeps a row of single-character boxes consistent with one
/// logical code. Typing fills a box and moves on, pasting spreads the
/// clipboard over consecutive boxes, Backspace clears and steps back, and
/// every settled edit is published as [`Message::CodeChanged`] (plus
/// [`Message::CodeCompleted`] once the code is full) after a short
/// coalescing delay.
///
/// Boxes are created by a rendering layer and reported through
/// [`on_boxes_mounted`](CodeInput::on_boxes_mounted). With the default
/// [`CellBox`] the widget is its own rendering layer: call
/// [`mount`](CodeInput::mount) once and use
/// [`set_code_length`](CodeInput::set_code_length) for length changes.
///
/// # Example
///
/// ```ignore
/// let mut pin = CodeInput::new()
///     .with_code_length(6)
///     .with_initial_focus_field(0);
/// let cmd = pin.mount();
///
/// // In the parent's update, forward messages and watch for the outputs:
/// // Msg::Pin(code_input::Message::CodeCompleted(code)) => verify(code),
/// // Msg::Pin(m) => self.pin.update(m).map(Msg::Pin),
/// ```
pub struct CodeInput<B: CodeBox = CellBox> {
    config: CodeInputConfig,
    registry: BoxRegistry<B>,
    focused: Option<usize>,
    initial_focus_enabled: bool,
    initial_focus_done: bool,
    style: CodeInputStyle,
    mask: char,
}

impl<B: CodeBox> Default for CodeInput<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CodeBox> CodeInput<B> {
    /// Create a code input with the built-in defaults.
    pub fn new() -> Self {
        Self::with_config(CodeInputConfig::default())
    }

    /// Create a code input with application-wide defaults merged over the
    /// built-in ones.
    pub fn with_defaults(defaults: &CodeInputOptions) -> Self {
        Self::with_config(CodeInputConfig::from_defaults(defaults))
    }

    /// Create a code input from a resolved configuration.
    pub fn with_config(mut config: CodeInputConfig) -> Self {
        config.emit_delay = config.emit_delay.min(MAX_EMIT_DELAY);
        Self {
            registry: BoxRegistry::with_length(config.code_length),
            initial_focus_enabled: config.initial_focus_field.is_some(),
            initial_focus_done: false,
            focused: None,
            style: CodeInputStyle::default(),
            mask: '•',
            config,
        }
    }

    /// Set the number of boxes.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.apply(&CodeInputOptions::new().code_length(code_length));
        self
    }

    /// Set the logical code.
    pub fn with_code(mut self, code: impl ToString) -> Self {
        self.set_code(code);
        self
    }

    /// Accept any non-empty character instead of digits only.
    pub fn with_chars_code(mut self, allow: bool) -> Self {
        self.config.is_chars_code = allow;
        self
    }

    /// Accept any non-empty character instead of digits only.
    #[deprecated(note = "use `with_chars_code`")]
    pub fn with_non_digits_code(mut self, allow: bool) -> Self {
        self.config.is_non_digits_code = allow;
        self
    }

    /// Mask the displayed characters.
    pub fn with_code_hidden(mut self, hidden: bool) -> Self {
        self.config.is_code_hidden = hidden;
        self
    }

    /// Whether Backspace on a filled box also moves focus back.
    pub fn with_prev_focusable_after_clearing(mut self, enabled: bool) -> Self {
        self.config.is_prev_focusable_after_clearing = enabled;
        self
    }

    /// Jump to the last box when any box of a filled code is clicked.
    pub fn with_focusing_on_last_by_click_if_filled(mut self, enabled: bool) -> Self {
        self.config.is_focusing_on_last_by_click_if_filled = enabled;
        self
    }

    /// Focus box `index` once, after the boxes first appear.
    pub fn with_initial_focus_field(mut self, index: usize) -> Self {
        self.apply(&CodeInputOptions::new().initial_focus_field(index));
        self
    }

    /// Disable every box.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.apply(&CodeInputOptions::new().disabled(disabled));
        self
    }

    /// Input type hint for native boxes.
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.config.input_type = input_type.into();
        self
    }

    /// Virtual keyboard hint for native boxes.
    pub fn with_input_mode(mut self, input_mode: impl Into<String>) -> Self {
        self.config.input_mode = input_mode.into();
        self
    }

    /// Autocapitalization hint for native boxes.
    pub fn with_autocapitalize(mut self, autocapitalize: impl Into<String>) -> Self {
        self.config.autocapitalize = Some(autocapitalize.into());
        self
    }

    /// Coalescing delay before change events, clamped to
    /// [`MAX_EMIT_DELAY`].
    pub fn with_emit_delay(mut self, delay: std::time::Duration) -> Self {
        self.config.emit_delay = delay.min(MAX_EMIT_DELAY);
        self
    }

    /// Set custom styles.
    pub fn with_style(mut self, style: CodeInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Character shown in place of hidden code characters.
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    // --- lifecycle -------------------------------------------------------

    /// The rendering layer reports the boxes it currently shows.
    ///
    /// New positions are appended in the `Ready` state and removed positions
    /// are dropped, then the logical code is projected again. Growing an
    /// already mounted row only fills the appended boxes, so typed content
    /// survives; any other reconciliation re-projects every box. Returns the
    /// deferred initial-focus check when one is still owed.
    pub fn on_boxes_mounted(&mut self, handles: impl IntoIterator<Item = B>) -> Command<Message> {
        let before = self.registry.len();
        let outcome = self.registry.reconcile(handles);
        if outcome.added > 0 || outcome.removed > 0 {
            log::debug!(
                "code input boxes reconciled: +{} -{} = {}",
                outcome.added,
                outcome.removed,
                self.registry.len()
            );
        }
        if self.focused.is_some_and(|i| i >= self.registry.len()) {
            self.focused = None;
        }
        let disabled = self.config.disabled;
        for slot in self.registry.slots_mut() {
            slot.handle.set_disabled(disabled);
        }
        if before > 0 && outcome.added > 0 {
            let admission = self.admission();
            projection::project_from(
                self.registry.slots_mut(),
                before,
                self.config.code.as_deref(),
                admission,
            );
        } else {
            self.project_code();
        }
        self.after_render()
    }

    /// Apply changed options, as a host does when its bindings change.
    ///
    /// A new code is projected onto the boxes, a new length resizes the
    /// placeholders (the rendering layer then reports the new boxes), and a
    /// new disabled flag is pushed to every box. Nothing is emitted.
    pub fn apply(&mut self, changes: &CodeInputOptions) {
        let length_changed = changes
            .code_length
            .is_some_and(|n| n != self.config.code_length);
        self.config.merge(changes);

        if changes.initial_focus_field.is_some() {
            self.initial_focus_enabled = self.config.initial_focus_field.is_some();
        }
        if length_changed {
            self.registry.resize_placeholders(self.config.code_length);
        }
        if changes.disabled.is_some() {
            let disabled = self.config.disabled;
            for slot in self.registry.slots_mut() {
                slot.handle.set_disabled(disabled);
            }
        }
        if changes.code.is_some() {
            self.project_code();
        }
    }

    /// Called after every render pass. Schedules the initial focus check
    /// until it has succeeded once.
    pub fn after_render(&self) -> Command<Message> {
        if self.initial_focus_enabled && !self.initial_focus_done {
            Command::defer(Message::InitialFocus)
        } else {
            Command::none()
        }
    }

    /// The rendering layer removed the widget; drop every box.
    pub fn on_unmount(&mut self) {
        self.registry.clear();
        self.focused = None;
    }

    // --- public operations ---------------------------------------------

    /// Set the logical code and project it onto the boxes.
    pub fn set_code(&mut self, code: impl ToString) {
        self.apply(&CodeInputOptions::new().code(code));
    }

    /// Remove the logical code and clear every box.
    pub fn clear_code(&mut self) {
        self.apply(&CodeInputOptions::new().no_code());
    }

    /// Re-project the current code (clearing the boxes when there is none)
    /// and refocus the initial focus field if one is configured.
    ///
    /// With `emit_change` a change is published after the coalescing delay.
    pub fn reset(&mut self, emit_change: bool) -> Result<Command<Message>, CodeInputError> {
        self.project_code();
        if self.initial_focus_enabled {
            if let Some(index) = self.config.initial_focus_field {
                self.focus_on_field(index)?;
            }
        }
        Ok(if emit_change {
            self.emit_change()
        } else {
            Command::none()
        })
    }

    /// Focus box `index`.
    ///
    /// Fails when `index` is not below the code length. A valid index whose
    /// box is not mounted yet is ignored.
    pub fn focus_on_field(&mut self, index: usize) -> Result<(), CodeInputError> {
        if index >= self.config.code_length {
            return Err(CodeInputError::FieldOutOfRange {
                index,
                code_length: self.config.code_length,
            });
        }
        self.focus_box(index);
        Ok(())
    }

    // --- introspection -------------------------------------------------

    /// The code currently held by the boxes: every non-empty box in order,
    /// gaps skipped.
    pub fn filled_code(&self) -> String {
        projection::read(self.registry.slots())
    }

    pub fn config(&self) -> &CodeInputConfig {
        &self.config
    }

    pub fn code(&self) -> Option<&str> {
        self.config.code.as_deref()
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        self.registry.placeholders()
    }

    /// Number of mounted boxes.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn box_value(&self, index: usize) -> Option<&str> {
        self.registry.get(index).map(|slot| slot.handle.value())
    }

    pub fn box_status(&self, index: usize) -> Option<BoxStatus> {
        self.registry.get(index).map(|slot| slot.status)
    }

    pub fn box_handle(&self, index: usize) -> Option<&B> {
        self.registry.get(index).map(|slot| &slot.handle)
    }

    /// Mutable access to a box, for hosts mirroring native edits.
    pub fn box_handle_mut(&mut self, index: usize) -> Option<&mut B> {
        self.registry.get_mut(index).map(|slot| &mut slot.handle)
    }

    /// Which box, if any, covers the terminal cell at (`column`, `row`)
    /// when the widget is drawn into `area`.
    pub fn box_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        (0..self.registry.len()).find(|&index| {
            self.box_rect(area, index)
                .is_some_and(|rect| rect.contains(Position::new(column, row)))
        })
    }

    // --- input policy --------------------------------------------------

    fn admission(&self) -> Admission {
        Admission::new(self.config.allows_any_char())
    }

    fn project_code(&mut self) {
        let admission = self.admission();
        projection::project(
            self.registry.slots_mut(),
            self.config.code.as_deref(),
            admission,
        );
    }

    fn focus_box(&mut self, index: usize) {
        if index >= self.registry.len() {
            log::debug!("focus on box {index} skipped: not mounted");
            return;
        }
        if let Some(previous) = self.focused.filter(|&i| i != index) {
            if let Some(slot) = self.registry.get_mut(previous) {
                slot.handle.blur();
            }
        }
        if let Some(slot) = self.registry.get_mut(index) {
            slot.handle.focus();
        }
        self.focused = Some(index);
    }

    fn blur_box(&mut self, index: usize) {
        if let Some(slot) = self.registry.get_mut(index) {
            slot.handle.blur();
        }
        if self.focused == Some(index) {
            self.focused = None;
        }
    }

    fn reject(&mut self, index: usize) {
        if let Some(slot) = self.registry.get_mut(index) {
            write_box(&mut slot.handle, None);
            slot.status = BoxStatus::ResetPending;
        }
    }

    fn on_type(&mut self, index: usize, data: Option<String>) -> Command<Message> {
        let Some(slot) = self.registry.get(index) else {
            return Command::none();
        };
        let value = match data {
            Some(data) if !data.is_empty() => data,
            _ => slot.handle.value().to_string(),
        };
        if value.is_empty() {
            return Command::none();
        }
        if !self.admission().admits(&value) {
            log::debug!("rejected input {value:?} in box {index}");
            self.reject(index);
            return Command::none();
        }

        let chars = split_chars(&value);
        let bound = self.config.code_length.min(self.registry.len());
        for (offset, c) in chars.iter().enumerate() {
            let target = index + offset;
            if target >= bound {
                break;
            }
            if let Some(slot) = self.registry.get_mut(target) {
                write_box(&mut slot.handle, Some(&c.to_string()));
            }
        }

        let cmd = self.emit_change();
        let next = index + chars.len();
        if next >= self.config.code_length {
            self.blur_box(index);
        } else {
            self.focus_box(next);
        }
        cmd
    }

    fn on_paste(&mut self, index: usize, text: &str) -> Command<Message> {
        let chars = split_chars(text);
        if chars.is_empty() || index >= self.registry.len() {
            return Command::none();
        }

        let admission = self.admission();
        for (offset, c) in chars.iter().enumerate() {
            let target = index + offset;
            if target >= self.registry.len() {
                break;
            }
            if !admission.admits_char(*c) {
                log::debug!("paste aborted at box {target}: {c:?} is not admissible");
                self.reject(target);
                return Command::none();
            }
            if let Some(slot) = self.registry.get_mut(target) {
                write_box(&mut slot.handle, Some(&c.to_string()));
            }
        }

        self.blur_box(index);
        self.emit_change()
    }

    fn on_key_down(&mut self, index: usize, key: KeyKind) -> Command<Message> {
        let Some(slot) = self.registry.get(index) else {
            return Command::none();
        };
        let was_empty = slot.handle.value().is_empty();
        match key {
            KeyKind::Backspace => self.clear_box(index, false, was_empty),
            KeyKind::Delete => self.clear_box(index, true, was_empty),
            KeyKind::Composition => Command::defer(Message::ResolveComposition { index, was_empty }),
            KeyKind::Other => Command::none(),
        }
    }

    // A composition key counts as Backspace when the caret ended at the
    // start and the box was not just reset by a rejected input.
    fn resolve_composition(&mut self, index: usize, was_empty: bool) -> Command<Message> {
        let Some(slot) = self.registry.get_mut(index) else {
            return Command::none();
        };
        let was_reset = slot.status == BoxStatus::ResetPending;
        if was_reset {
            slot.status = BoxStatus::Ready;
        }
        if slot.handle.caret() == 0 && !was_reset {
            self.clear_box(index, false, was_empty)
        } else {
            Command::none()
        }
    }

    fn clear_box(&mut self, index: usize, is_delete: bool, was_empty: bool) -> Command<Message> {
        if let Some(slot) = self.registry.get_mut(index) {
            write_box(&mut slot.handle, None);
        }
        let cmd = if was_empty {
            Command::none()
        } else {
            self.emit_change()
        };

        if index == 0 || is_delete {
            return cmd;
        }
        if was_empty || self.config.is_prev_focusable_after_clearing {
            self.focus_box(index - 1);
        }
        cmd
    }

    fn on_click(&mut self, index: usize) -> Command<Message> {
        if !self.config.is_focusing_on_last_by_click_if_filled {
            return Command::none();
        }
        let Some(last) = self.config.code_length.checked_sub(1) else {
            return Command::none();
        };
        if index == last || !self.is_filled(&self.filled_code()) {
            return Command::none();
        }
        Command::defer(Message::FocusLast)
    }

    fn on_initial_focus(&mut self) {
        if !self.initial_focus_enabled || self.initial_focus_done {
            return;
        }
        let Some(index) = self.config.initial_focus_field else {
            return;
        };
        match self.focus_on_field(index) {
            Ok(()) => self.initial_focus_done = self.focused == Some(index),
            Err(err) => log::warn!("initial focus skipped: {err}"),
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Command<Message> {
        if key.kind == KeyEventKind::Release {
            return Command::none();
        }
        let Some(index) = self.focused else {
            return Command::none();
        };
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.on_type(index, Some(c.to_string()))
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                if index + 1 < self.registry.len() {
                    self.focus_box(index + 1);
                } else {
                    self.blur_box(index);
                }
                Command::none()
            }
            (KeyCode::BackTab, _) => {
                if index > 0 {
                    self.focus_box(index - 1);
                }
                Command::none()
            }
            _ => self.on_key_down(index, KeyKind::from(&key)),
        }
    }

    // --- change emission -----------------------------------------------

    fn is_filled(&self, code: &str) -> bool {
        code.chars().count() >= self.config.code_length
    }

    fn emit_change(&self) -> Command<Message> {
        Command::after(self.config.emit_delay, Message::Emit)
    }

    fn emit(&self) -> Command<Message> {
        let code = self.filled_code();
        log::debug!("code input changed: {} of {}", code.chars().count(), self.config.code_length);
        let completed = if self.is_filled(&code) {
            Command::message(Message::CodeCompleted(code.clone()))
        } else {
            Command::none()
        };
        Command::batch([Command::message(Message::CodeChanged(code)), completed])
    }

    // --- rendering -----------------------------------------------------

    fn display<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.config.is_code_hidden && !value.is_empty() {
            Cow::Owned(self.mask.to_string())
        } else {
            Cow::Borrowed(value)
        }
    }

    fn box_width(&self) -> u16 {
        let widest = self
            .registry
            .slots()
            .iter()
            .map(|slot| self.display(slot.handle.value()).width())
            .max()
            .unwrap_or(1)
            .max(1);
        u16::try_from(widest)
            .unwrap_or(u16::MAX)
            .saturating_add(BOX_CHROME)
    }

    fn box_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        if area.height < BOX_HEIGHT {
            return None;
        }
        let width = u32::from(self.box_width());
        let x = u32::from(area.x) + index as u32 * (width + u32::from(BOX_GAP));
        if x + width > u32::from(area.right()) {
            return None;
        }
        Some(Rect::new(x as u16, area.y, width as u16, BOX_HEIGHT))
    }
}

impl<B: CodeBox + Default> CodeInput<B> {
    /// Act as the rendering layer: create one box per placeholder and report
    /// them.
    pub fn mount(&mut self) -> Command<Message> {
        let handles: Vec<B> = self.placeholders().iter().map(|_| B::default()).collect();
        self.on_boxes_mounted(handles)
    }

    /// Change the number of boxes and mount the result.
    pub fn set_code_length(&mut self, code_length: usize) -> Command<Message> {
        self.apply(&CodeInputOptions::new().code_length(code_length));
        self.mount()
    }
}

impl<B: CodeBox> Component for CodeInput<B> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let interactive = matches!(
            msg,
            Message::Key(_)
                | Message::Paste(_)
                | Message::Input { .. }
                | Message::PasteAt { .. }
                | Message::KeyDown { .. }
                | Message::Click { .. }
        );
        if interactive && self.config.disabled {
            return Command::none();
        }

        match msg {
            Message::Key(key) => self.route_key(key),
            Message::Paste(text) => match self.focused {
                Some(index) => self.on_paste(index, &text),
                None => Command::none(),
            },
            Message::Input { index, data } => self.on_type(index, data),
            Message::PasteAt { index, text } => self.on_paste(index, &text),
            Message::KeyDown { index, key } => self.on_key_down(index, key),
            Message::Click { index } => {
                self.focus_box(index);
                self.on_click(index)
            }
            Message::Focused { index } => {
                if index < self.registry.len() {
                    self.focused = Some(index);
                }
                Command::none()
            }
            Message::Blurred { index } => {
                if self.focused == Some(index) {
                    self.focused = None;
                }
                Command::none()
            }
            Message::ResolveComposition { index, was_empty } => {
                self.resolve_composition(index, was_empty)
            }
            Message::FocusLast => {
                if let Some(last) = self.config.code_length.checked_sub(1) {
                    self.focus_box(last);
                }
                Command::none()
            }
            Message::InitialFocus => {
                self.on_initial_focus();
                Command::none()
            }
            Message::Emit => self.emit(),
            Message::CodeChanged(_) | Message::CodeCompleted(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let disabled = self.config.disabled;
        for (index, slot) in self.registry.slots().iter().enumerate() {
            let Some(rect) = self.box_rect(area, index) else {
                break;
            };
            let focused = self.focused == Some(index);

            let border = if disabled {
                self.style.disabled
            } else if focused {
                self.style.focused_border
            } else {
                self.style.border
            };
            let block = Block::bordered().border_style(border);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            let value = slot.handle.value();
            let content = if value.is_empty() && focused && !disabled {
                Span::styled(" ", self.style.cursor)
            } else {
                let style = if disabled {
                    self.style.disabled
                } else if value.is_empty() {
                    self.style.empty
                } else {
                    self.style.filled
                };
                Span::styled(self.display(value).into_owned(), style)
            };
            frame.render_widget(
                Paragraph::new(Line::from(content)).alignment(Alignment::Center),
                inner,
            );
        }
    }

    fn focused(&self) -> bool {
        self.focused.is_some()
    }
}

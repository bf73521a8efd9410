//! Input widget: a focusable one-line text editor.
//!
//! Supports cursor movement, insertion and deletion, horizontal scrolling,
//! echo modes, and submit/change callbacks.
//!
//! Like [`Label`](super::Label), an `Input` is a cloneable handle around
//! shared state, so the value can be read or replaced from outside the tree.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{keys, Event};
use crate::geometry::Size;
use crate::layout::SizePolicy;
use crate::render::Notifier;
use crate::text::{char_width, str_width};
use crate::widget::traits::{DrawContext, EventContext, NodeSetup, Widget};

/// Callback run with the input that triggered it.
pub type InputCallback = Box<dyn FnMut(&Input) + Send>;

// ---------------------------------------------------------------------------
// EchoMode
// ---------------------------------------------------------------------------

/// How typed text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Characters are shown as typed.
    #[default]
    Normal,
    /// Nothing is shown, not even the length.
    NoEcho,
    /// Each character is shown as `*`.
    Password,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

struct InputState {
    value: String,
    /// Byte offset into `value`, always on a char boundary.
    cursor: usize,
    /// First visible display column.
    offset: i32,
    /// Inner width from the last resize.
    width: i32,
    echo: EchoMode,
    notifier: Option<Notifier>,
    on_submit: Option<InputCallback>,
    on_changed: Option<InputCallback>,
}

impl InputState {
    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }

    fn insert(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn delete_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    fn delete_after(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let next = self.next_char_boundary();
        self.value.drain(self.cursor..next);
        true
    }

    fn kill_to_end(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.truncate(self.cursor);
        true
    }

    fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary();
        }
    }

    fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_char_boundary();
        }
    }

    /// Text as displayed for the current echo mode.
    fn display(&self) -> String {
        match self.echo {
            EchoMode::Normal => self.value.clone(),
            EchoMode::NoEcho => String::new(),
            EchoMode::Password => "*".repeat(self.value.chars().count()),
        }
    }

    /// Display column of the cursor.
    fn cursor_column(&self) -> i32 {
        let before = &self.value[..self.cursor];
        match self.echo {
            EchoMode::Normal => str_width(before),
            EchoMode::NoEcho => 0,
            EchoMode::Password => before.chars().count() as i32,
        }
    }

    /// Scroll so the cursor cell is inside the window, without leaving
    /// empty space on the right while text is hidden on the left.
    fn ensure_visible(&mut self) {
        if self.width <= 0 {
            self.offset = 0;
            return;
        }
        let column = self.cursor_column();
        if column < self.offset {
            self.offset = column;
        }
        if column >= self.offset + self.width {
            self.offset = column + 1 - self.width;
        }
        let total = str_width(&self.display());
        self.offset = self.offset.min((total + 1 - self.width).max(0));
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A one-line text editor.
///
/// Starts focused. Only a focused input reacts to keys:
///
/// | key                                | action                    |
/// |------------------------------------|---------------------------|
/// | `<Enter>`                          | run `on_submit`           |
/// | `<Backspace>`, `<C-<Backspace>>`   | delete before the cursor  |
/// | `<Delete>`, `<C-d>`                | delete after the cursor   |
/// | `<Left>`, `<C-b>`                  | move left                 |
/// | `<Right>`, `<C-f>`                 | move right                |
/// | `<Home>`, `<C-a>`                  | move to start             |
/// | `<End>`, `<C-e>`                   | move to end               |
/// | `<C-k>`                            | delete to end             |
/// | `<Space>`, printable characters    | insert                    |
///
/// # Examples
///
/// ```ignore
/// let input = Input::new().with_echo_mode(EchoMode::Password);
/// input.on_submit(|input| println!("{}", input.text()));
/// tree.append(root, input.clone());
/// ```
#[derive(Clone)]
pub struct Input {
    state: Arc<Mutex<InputState>>,
}

impl Input {
    /// An empty input.
    pub fn new() -> Self {
        let state = InputState {
            value: String::new(),
            cursor: 0,
            offset: 0,
            width: 0,
            echo: EchoMode::Normal,
            notifier: None,
            on_submit: None,
            on_changed: None,
        };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Set the initial text (builder pattern).
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the echo mode (builder pattern).
    pub fn with_echo_mode(self, mode: EchoMode) -> Self {
        self.set_echo_mode(mode);
        self
    }

    /// The current value.
    pub fn text(&self) -> String {
        self.state.lock().value.clone()
    }

    /// Replace the value, moving the cursor to the end.
    ///
    /// Does not run `on_changed`.
    pub fn set_text(&self, text: impl Into<String>) {
        let notifier = {
            let mut state = self.state.lock();
            state.value = text.into();
            state.cursor = state.value.len();
            state.offset = 0;
            state.ensure_visible();
            state.notifier.clone()
        };
        if let Some(notifier) = notifier {
            notifier.request();
        }
    }

    /// Cursor position as a byte offset into the value.
    pub fn cursor_position(&self) -> usize {
        self.state.lock().cursor
    }

    /// First visible display column.
    pub fn scroll_offset(&self) -> i32 {
        self.state.lock().offset
    }

    /// Current echo mode.
    pub fn echo_mode(&self) -> EchoMode {
        self.state.lock().echo
    }

    /// Change the echo mode.
    pub fn set_echo_mode(&self, mode: EchoMode) {
        let mut state = self.state.lock();
        state.echo = mode;
        state.ensure_visible();
    }

    /// Run `f` when `<Enter>` is pressed. Replaces any earlier callback.
    pub fn on_submit(&self, f: impl FnMut(&Input) + Send + 'static) {
        self.state.lock().on_submit = Some(Box::new(f));
    }

    /// Run `f` after each edit made through keys. Replaces any earlier
    /// callback.
    pub fn on_changed(&self, f: impl FnMut(&Input) + Send + 'static) {
        self.state.lock().on_changed = Some(Box::new(f));
    }

    /// Run the callback in `slot` without holding the lock.
    ///
    /// The callback is put back afterwards unless it registered a new one.
    fn fire(&self, slot: fn(&mut InputState) -> &mut Option<InputCallback>) {
        let callback = slot(&mut self.state.lock()).take();
        if let Some(mut callback) = callback {
            callback(self);
            let mut state = self.state.lock();
            let current = slot(&mut state);
            if current.is_none() {
                *current = Some(callback);
            }
        }
    }

    /// Apply one key. Returns `(handled, changed)`.
    fn apply_key(&self, id: &str) -> (bool, bool) {
        let mut state = self.state.lock();
        let changed = match id {
            keys::BACKSPACE | keys::CTRL_BACKSPACE => state.delete_before(),
            keys::DELETE | keys::CTRL_D => state.delete_after(),
            keys::CTRL_K => state.kill_to_end(),
            keys::LEFT | keys::CTRL_B => {
                state.move_left();
                false
            }
            keys::RIGHT | keys::CTRL_F => {
                state.move_right();
                false
            }
            keys::HOME | keys::CTRL_A => {
                state.cursor = 0;
                false
            }
            keys::END | keys::CTRL_E => {
                state.cursor = state.value.len();
                false
            }
            keys::SPACE => {
                state.insert(" ");
                true
            }
            other if keys::is_char_key(other) => {
                state.insert(other);
                true
            }
            _ => return (false, false),
        };
        state.ensure_visible();
        (true, changed)
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Input")
            .field("value", &state.value)
            .field("cursor", &state.cursor)
            .field("offset", &state.offset)
            .field("echo", &state.echo)
            .finish()
    }
}

impl Widget for Input {
    fn widget_type(&self) -> &str {
        "Input"
    }

    fn setup(&self) -> NodeSetup {
        NodeSetup {
            policy_x: SizePolicy::Preferred,
            policy_y: SizePolicy::Minimum,
            focused: true,
            ..NodeSetup::default()
        }
    }

    fn min_size_hint(&self) -> Size {
        Size::new(10, 1)
    }

    fn size_hint(&self) -> Size {
        Size::new(10, 1)
    }

    fn resized(&mut self, inner: Size) {
        let mut state = self.state.lock();
        state.width = inner.width;
        state.ensure_visible();
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let (display, offset, column) = {
            let state = self.state.lock();
            (state.display(), state.offset, state.cursor_column())
        };
        let style = if ctx.is_focused() { ctx.theme().input_focused } else { ctx.theme().input };
        ctx.fill(style);
        let (pad, visible) = skip_columns(&display, offset);
        ctx.draw_text(pad, 0, visible, style);
        if ctx.is_focused() {
            ctx.set_cursor(column - offset, 0);
        }
    }

    fn handle_event(&mut self, event: &Event, ctx: &EventContext) -> bool {
        let Event::Key(id) = event else {
            return false;
        };
        if !ctx.focused {
            return false;
        }
        if id == keys::ENTER {
            self.fire(|s| &mut s.on_submit);
            return true;
        }
        let (handled, changed) = self.apply_key(id);
        if !handled {
            return false;
        }
        if changed {
            self.fire(|s| &mut s.on_changed);
        }
        let notifier = self.state.lock().notifier.clone();
        if let Some(notifier) = notifier {
            notifier.request();
        }
        true
    }

    fn attach(&mut self, notifier: Notifier) {
        self.state.lock().notifier = Some(notifier);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Suffix of `s` starting at display column `columns`, with the column it
/// should be drawn at. A wide glyph cut by the boundary is dropped and leaves
/// its trailing half as blank padding.
fn skip_columns(s: &str, columns: i32) -> (i32, &str) {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        if used >= columns {
            return (used - columns, &s[idx..]);
        }
        used += char_width(ch);
    }
    (0, "")
}

// ===========================================================================
// Tests
// ===========================================================================

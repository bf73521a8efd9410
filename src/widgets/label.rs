//! Label widget: read-only text, optionally word-wrapped.
//!
//! A `Label` is a cheap, cloneable handle. Keep a clone after inserting it
//! into a tree and call [`Label::set_text`] from any thread; the change is
//! picked up by the next repaint, which the setter requests itself.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::geometry::Size;
use crate::render::Notifier;
use crate::text::{layout_lines, measure_lines};
use crate::widget::traits::{DrawContext, Widget};

struct LabelState {
    text: String,
    word_wrap: bool,
    /// Inner width from the last resize; the wrap width.
    width: i32,
    cached_hint: Option<Size>,
    notifier: Option<Notifier>,
}

impl LabelState {
    fn lines(&self) -> Vec<String> {
        let width = (self.word_wrap && self.width > 0).then_some(self.width);
        layout_lines(&self.text, width)
    }

    fn size_hint(&mut self) -> Size {
        if let Some(hint) = self.cached_hint {
            return hint;
        }
        let hint = measure_lines(&self.lines());
        self.cached_hint = Some(hint);
        hint
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Read-only text.
///
/// Hard line breaks are honoured. With word wrap on, lines are also wrapped
/// to the inner width the label was last laid out with.
///
/// # Examples
///
/// ```ignore
/// let status = Label::new("connecting...");
/// tree.append(root, status.clone());
/// std::thread::spawn(move || status.set_text("online"));
/// ```
#[derive(Clone)]
pub struct Label {
    state: Arc<Mutex<LabelState>>,
}

impl Label {
    /// A label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let state = LabelState {
            text: text.into(),
            word_wrap: false,
            width: 0,
            cached_hint: None,
            notifier: None,
        };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Enable or disable word wrapping (builder pattern).
    pub fn with_word_wrap(self, enabled: bool) -> Self {
        self.set_word_wrap(enabled);
        self
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    /// Replace the text and request a repaint.
    pub fn set_text(&self, text: impl Into<String>) {
        let notifier = {
            let mut state = self.state.lock();
            state.text = text.into();
            state.cached_hint = None;
            state.notifier.clone()
        };
        if let Some(notifier) = notifier {
            notifier.request();
        }
    }

    /// Whether word wrapping is on.
    pub fn word_wrap(&self) -> bool {
        self.state.lock().word_wrap
    }

    /// Enable or disable word wrapping.
    pub fn set_word_wrap(&self, enabled: bool) {
        let mut state = self.state.lock();
        if state.word_wrap != enabled {
            state.word_wrap = enabled;
            state.cached_hint = None;
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Label")
            .field("text", &state.text)
            .field("word_wrap", &state.word_wrap)
            .finish()
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn min_size_hint(&self) -> Size {
        Size::new(1, 1)
    }

    fn size_hint(&self) -> Size {
        self.state.lock().size_hint()
    }

    fn resized(&mut self, inner: Size) {
        let mut state = self.state.lock();
        if state.width != inner.width {
            state.width = inner.width;
            state.cached_hint = None;
        }
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let lines = self.state.lock().lines();
        let style = ctx.theme().label;
        let height = ctx.size().height.max(0) as usize;
        for (y, line) in lines.iter().take(height).enumerate() {
            ctx.draw_text(0, y as i32, line, style);
        }
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

// ===========================================================================
// Tests
// ===========================================================================

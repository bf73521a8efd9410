//! Widget trait: hints, draw, event handling.
//!
//! The `Widget` trait is the core abstraction for all UI elements in cellbox.
//! A widget only knows its own content: how big it would like to be, how to
//! draw itself into its inner rectangle, and how to react to events. Geometry,
//! framing and children live in the [`Tree`](crate::dom::Tree) node that owns
//! it. The `WidgetExt` trait adds builder-style methods for choosing that
//! node's initial box-model settings.

use std::any::Any;

use crate::event::Event;
use crate::geometry::{Borders, Offset, Region, Size, Spacing};
use crate::layout::{LayoutMode, SizePolicy};
use crate::render::{CellStyle, Notifier, Painter};
use crate::text::truncate_to_width;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// NodeSetup
// ---------------------------------------------------------------------------

/// Initial node settings a widget asks for when it is inserted into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSetup {
    pub layout: LayoutMode,
    pub policy_x: SizePolicy,
    pub policy_y: SizePolicy,
    pub border: Borders,
    pub margin: Spacing,
    pub padding: Spacing,
    pub title: String,
    /// Fixed outer width; 0 means none.
    pub width: i32,
    /// Fixed outer height; 0 means none.
    pub height: i32,
    pub focused: bool,
}

impl Default for NodeSetup {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Horizontal,
            policy_x: SizePolicy::Expanding,
            policy_y: SizePolicy::Expanding,
            border: Borders::NONE,
            margin: Spacing::ZERO,
            padding: Spacing::ZERO,
            title: String::new(),
            width: 0,
            height: 0,
            focused: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Contexts
// ---------------------------------------------------------------------------

/// Drawing access for one widget, in coordinates local to its inner rect.
///
/// Text and fills are clipped to the inner rect.
pub struct DrawContext<'a> {
    painter: &'a mut Painter,
    theme: &'a Theme,
    size: Size,
    focused: bool,
}

impl<'a> DrawContext<'a> {
    /// The painter must already be translated to the inner origin.
    pub(crate) fn new(painter: &'a mut Painter, theme: &'a Theme, size: Size, focused: bool) -> Self {
        Self { painter, theme, size, focused }
    }

    /// Size of the inner rect.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The tree's theme.
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Whether the node is focused.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Draw `text` at (x, y), truncated at the right edge. Returns the x just
    /// past the last drawn cell.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: CellStyle) -> i32 {
        if y < 0 || y >= self.size.height || x < 0 || x >= self.size.width {
            return x;
        }
        let visible = truncate_to_width(text, self.size.width - x);
        self.painter.draw_text(x, y, visible, style)
    }

    /// Fill the whole inner rect with blanks in `style`.
    pub fn fill(&mut self, style: CellStyle) {
        self.painter.fill(self.size.to_region(), ' ', style);
    }

    /// Place the terminal cursor at (x, y) if it lies inside the inner rect.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        if self.size.to_region().contains(x, y) {
            self.painter.draw_cursor(x, y);
        }
    }

    /// Unclipped access to the painter.
    pub fn painter(&mut self) -> &mut Painter {
        self.painter
    }
}

/// What a widget learns about its node while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventContext {
    /// Absolute inner rect on screen.
    pub area: Region,
    /// Whether the node is focused.
    pub focused: bool,
}

impl EventContext {
    /// Whether an absolute screen position falls inside the inner rect.
    pub fn hit(&self, x: i32, y: i32) -> bool {
        self.area.contains(x, y)
    }

    /// Convert an absolute screen position to inner-local coordinates.
    pub fn local(&self, x: i32, y: i32) -> Offset {
        Offset::new(x - self.area.x, y - self.area.y)
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets in cellbox.
///
/// Widget is object-safe; builder helpers that need `Self: Sized` are on the
/// [`WidgetExt`] extension trait instead.
pub trait Widget: Send {
    /// Type name for diagnostics (e.g. "Label", "Box").
    fn widget_type(&self) -> &str;

    /// Node settings to use when this widget is inserted.
    fn setup(&self) -> NodeSetup {
        NodeSetup::default()
    }

    /// Content extent below which the widget must not be squeezed.
    ///
    /// Only consulted for nodes without children; frame thickness is added by
    /// the tree.
    fn min_size_hint(&self) -> Size {
        Size::ZERO
    }

    /// Content extent the widget would like.
    fn size_hint(&self) -> Size {
        Size::ZERO
    }

    /// Called after the node's geometry changed, with the new inner size.
    fn resized(&mut self, _inner: Size) {}

    /// Draw content into the inner rect.
    fn draw(&self, _ctx: &mut DrawContext<'_>) {}

    /// React to a key or mouse event. Return `true` when handled, which stops
    /// the event from reaching later siblings and ancestors.
    fn handle_event(&mut self, _event: &Event, _ctx: &EventContext) -> bool {
        false
    }

    /// Receive the repaint notifier once the tree is attached to a painter.
    fn attach(&mut self, _notifier: Notifier) {}

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// WidgetExt
// ---------------------------------------------------------------------------

/// Extension trait providing builder-style box-model settings for widgets.
///
/// Automatically implemented for all types that implement `Widget`.
pub trait WidgetExt: Widget + Sized {
    /// Wrap the widget so its initial node settings can be adjusted.
    fn configure(self) -> WidgetBuilder<Self> {
        let setup = self.setup();
        WidgetBuilder { widget: self, setup }
    }

    /// Enable or disable the border.
    fn with_border(self, enabled: bool) -> WidgetBuilder<Self> {
        self.configure().with_border(enabled)
    }

    /// Set the title drawn on the top border.
    fn with_title(self, title: impl Into<String>) -> WidgetBuilder<Self> {
        self.configure().with_title(title)
    }

    /// Fix the outer width.
    fn with_width(self, width: i32) -> WidgetBuilder<Self> {
        self.configure().with_width(width)
    }

    /// Fix the outer height.
    fn with_height(self, height: i32) -> WidgetBuilder<Self> {
        self.configure().with_height(height)
    }

    /// Set the padding.
    fn with_padding(self, padding: Spacing) -> WidgetBuilder<Self> {
        self.configure().with_padding(padding)
    }

    /// Set the margin.
    fn with_margin(self, margin: Spacing) -> WidgetBuilder<Self> {
        self.configure().with_margin(margin)
    }

    /// Set both size policies.
    fn with_policy(self, x: SizePolicy, y: SizePolicy) -> WidgetBuilder<Self> {
        self.configure().with_policy(x, y)
    }
}

// Blanket implementation: every Widget gets WidgetExt for free.
impl<T: Widget> WidgetExt for T {}

// ---------------------------------------------------------------------------
// WidgetBuilder
// ---------------------------------------------------------------------------

/// A widget together with adjusted node settings.
///
/// Delegates everything except [`Widget::setup`] to the inner widget,
/// including downcasting, so `tree.widget::<Label>(id)` still works.
#[derive(Debug)]
pub struct WidgetBuilder<W: Widget> {
    /// The wrapped widget.
    pub widget: W,
    /// Settings applied on insertion.
    pub setup: NodeSetup,
}

impl<W: Widget> WidgetBuilder<W> {
    /// Enable or disable the border (chainable).
    pub fn with_border(mut self, enabled: bool) -> Self {
        self.setup.border = self.setup.border.with_enabled(enabled);
        self
    }

    /// Choose border sides; enables the border (chainable).
    pub fn with_border_sides(mut self, borders: Borders) -> Self {
        self.setup.border = borders;
        self
    }

    /// Set the title (chainable).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.setup.title = title.into();
        self
    }

    /// Fix the outer width; 0 clears it (chainable).
    ///
    /// A fixed width switches the horizontal policy to `Minimum`, clearing it
    /// switches back to `Expanding`.
    pub fn with_width(mut self, width: i32) -> Self {
        self.setup.width = width.max(0);
        self.setup.policy_x = fixed_policy(self.setup.width);
        self
    }

    /// Fix the outer height; 0 clears it (chainable).
    pub fn with_height(mut self, height: i32) -> Self {
        self.setup.height = height.max(0);
        self.setup.policy_y = fixed_policy(self.setup.height);
        self
    }

    /// Set the padding (chainable).
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.setup.padding = padding.non_negative();
        self
    }

    /// Set the margin (chainable).
    pub fn with_margin(mut self, margin: Spacing) -> Self {
        self.setup.margin = margin.non_negative();
        self
    }

    /// Set both size policies (chainable).
    pub fn with_policy(mut self, x: SizePolicy, y: SizePolicy) -> Self {
        self.setup.policy_x = x;
        self.setup.policy_y = y;
        self
    }

    /// Set the layout axis (chainable).
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.setup.layout = layout;
        self
    }

    /// Start focused or not (chainable).
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.setup.focused = focused;
        self
    }
}

/// Policy implied by a fixed extent.
pub(crate) fn fixed_policy(extent: i32) -> SizePolicy {
    if extent > 0 {
        SizePolicy::Minimum
    } else {
        SizePolicy::Expanding
    }
}

impl<W: Widget + 'static> Widget for WidgetBuilder<W> {
    fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }

    fn setup(&self) -> NodeSetup {
        self.setup.clone()
    }

    fn min_size_hint(&self) -> Size {
        self.widget.min_size_hint()
    }

    fn size_hint(&self) -> Size {
        self.widget.size_hint()
    }

    fn resized(&mut self, inner: Size) {
        self.widget.resized(inner)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.widget.draw(ctx)
    }

    fn handle_event(&mut self, event: &Event, ctx: &EventContext) -> bool {
        self.widget.handle_event(event, ctx)
    }

    fn attach(&mut self, notifier: Notifier) {
        self.widget.attach(notifier)
    }

    fn as_any(&self) -> &dyn Any {
        self.widget.as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self.widget.as_any_mut()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

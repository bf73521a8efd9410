//! App struct: terminal lifecycle, event loop, repaint scheduling.
//!
//! [`App`] ties together the widget tree, the painter, and key bindings.
//! The `headless` constructor allows testing without a real terminal.

use crossterm::event::EventStream;
use futures::StreamExt;
use tracing::{debug, trace};

use crate::dom::Tree;
use crate::error::{Error, Result};
use crate::event::{keys, Event, KeyBindingRegistry};
use crate::geometry::{Offset, Size};
use crate::render::{Driver, Painter, Screen, Surface, DEFAULT_REPAINT_CAPACITY};
use crate::theme::Theme;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bound of the deferred repaint queue.
    pub repaint_capacity: usize,
    /// Theme handed to the tree.
    pub theme: Theme,
    /// Capture mouse events.
    pub mouse: bool,
    /// Identifiers that stop the event loop, matched case-insensitively.
    pub quit_keys: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repaint_capacity: DEFAULT_REPAINT_CAPACITY,
            theme: Theme::default(),
            mouse: true,
            quit_keys: vec![keys::CTRL_Q.to_owned(), keys::CTRL_C.to_owned()],
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repaint queue bound (builder).
    pub fn with_repaint_capacity(mut self, capacity: usize) -> Self {
        self.repaint_capacity = capacity;
        self
    }

    /// Set the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable mouse capture (builder).
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Replace the quit keys (builder). An empty list disables them.
    pub fn with_quit_keys<I, S>(mut self, quit_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quit_keys = quit_keys.into_iter().map(Into::into).collect();
        self
    }

    fn is_quit_key(&self, id: &str) -> bool {
        self.quit_keys.iter().any(|key| key.eq_ignore_ascii_case(id))
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
///
/// Owns the tree, the painter (and through it the terminal), key bindings,
/// and config. Dropping the app restores the terminal.
pub struct App {
    tree: Tree,
    painter: Painter,
    bindings: KeyBindingRegistry,
    config: AppConfig,
    running: bool,
}

impl App {
    /// Create an app drawing to the real terminal.
    ///
    /// Switches the terminal into raw mode and the alternate screen. If that
    /// fails, [`Error::Terminal`] is returned and the terminal is left as it
    /// was.
    pub fn new(root: impl Widget + 'static, config: AppConfig) -> Result<Self> {
        let (width, height) = Driver::terminal_size().map_err(Error::Terminal)?;
        let mut driver = Driver::new();
        driver.enter(config.mouse).map_err(Error::Terminal)?;
        debug!(width, height, "terminal ready");
        let screen = Screen::with_driver(driver, Size::new(i32::from(width), i32::from(height)));
        Ok(Self::with_surface(root, Box::new(screen), config))
    }

    /// Create an app drawing into an in-memory screen of the given size.
    pub fn headless(root: impl Widget + 'static, width: u16, height: u16, config: AppConfig) -> Self {
        let screen = Screen::new(Size::new(i32::from(width), i32::from(height)));
        Self::with_surface(root, Box::new(screen), config)
    }

    /// Create an app over any surface. The tree is laid out to the surface
    /// size but not drawn yet.
    pub fn with_surface(root: impl Widget + 'static, surface: Box<dyn Surface>, config: AppConfig) -> Self {
        let mut tree = Tree::with_theme(root, config.theme.clone());
        let painter = Painter::with_capacity(surface, config.repaint_capacity);
        tree.attach(painter.notifier());
        let root = tree.root();
        tree.resize(root, Offset::ZERO, painter.size());
        Self { tree, painter, bindings: KeyBindingRegistry::new(), config, running: true }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The widget tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The widget tree, mutably. Call [`repaint`](Self::repaint) after
    /// structural changes.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// The painter.
    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    /// The active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ── Key bindings ─────────────────────────────────────────────────

    /// Run `handler` whenever an event with identifier `sequence` arrives.
    ///
    /// Bindings are consulted before the tree; a matched binding consumes the
    /// event.
    pub fn set_keybinding(&mut self, sequence: &str, handler: impl FnMut(&mut Tree) + Send + 'static) {
        self.bindings.bind(sequence, handler);
    }

    /// Remove every key binding.
    pub fn clear_keybindings(&mut self) {
        self.bindings.clear();
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Handle one event. Returns `true` when it was a quit key.
    ///
    /// Order: quit keys, then key bindings, then the tree. Resizes resize the
    /// surface and the root and repaint at once; other events repaint if any
    /// widget asked for it.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        if event.id().is_some_and(|id| self.config.is_quit_key(id)) {
            debug!(?event, "quit key");
            self.running = false;
            return Ok(true);
        }
        match &event {
            Event::Resize { width, height } => {
                self.painter.resize(Size::new(i32::from(*width), i32::from(*height)));
                self.tree.dispatch(&event);
                self.repaint()?;
            }
            Event::Key(_) | Event::Mouse(_) => {
                let id = event.id().unwrap_or_default();
                if self.bindings.resolve(id, &mut self.tree) {
                    self.repaint()?;
                } else {
                    let handled = self.tree.dispatch(&event);
                    trace!(handled, "event routed");
                    self.process_repaints()?;
                }
            }
        }
        Ok(false)
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Lay the tree out again and draw it.
    pub fn repaint(&mut self) -> Result<()> {
        let root = self.tree.root();
        self.tree.relayout(root);
        self.painter.repaint(&self.tree)
    }

    /// Repaint once if any widget requested it. Returns whether it did.
    pub fn process_repaints(&mut self) -> Result<bool> {
        let pending = self.painter.drain_requests();
        if pending == 0 {
            return Ok(false);
        }
        trace!(pending, "processing repaint requests");
        self.repaint()?;
        Ok(true)
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Draw, then process terminal events and repaint requests until a quit
    /// key arrives or the event stream ends. Restores the terminal on exit.
    pub async fn run(&mut self) -> Result<()> {
        self.repaint()?;
        let mut events = EventStream::new();
        while self.running {
            tokio::select! {
                next = events.next() => match next {
                    Some(Ok(raw)) => {
                        if let Some(event) = Event::from_crossterm(raw) {
                            self.handle_event(event)?;
                        }
                    }
                    Some(Err(err)) => {
                        self.close()?;
                        return Err(Error::Io(err));
                    }
                    None => break,
                },
                batch = self.painter.next_requests() => {
                    trace!(batch, "repaint batch");
                    self.repaint()?;
                }
            }
        }
        self.close()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) -> Result<()> {
        self.running = false;
        self.painter.surface_mut().close()
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.running = false;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

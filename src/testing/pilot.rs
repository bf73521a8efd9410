//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) in headless mode and provides
//! methods to simulate user input (key presses, mouse clicks, resize) and to
//! read back the drawn screen for snapshot testing.

use crate::app::{App, AppConfig};
use crate::error::Result;
use crate::event::{keys, Event};
use crate::geometry::Offset;
use crate::widget::Widget;

use super::snapshot::screen_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// The Pilot creates an [`App`] over an in-memory screen, draws it once, and
/// then feeds it events exactly as the event loop would.
///
/// # Examples
///
/// ```ignore
/// use cellbox::testing::Pilot;
/// use cellbox::widgets::{Container, Input};
///
/// let input = Input::new();
/// let mut pilot = Pilot::new(Container::vertical(), 20, 3);
/// let root = pilot.app().tree().root();
/// pilot.app_mut().tree_mut().append(root, input.clone());
/// pilot.type_text("hi")?;
/// assert_eq!(input.text(), "hi");
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// A headless app of the given size with the default config.
    pub fn new(root: impl Widget + 'static, width: u16, height: u16) -> Self {
        Self::with_config(root, width, height, AppConfig::default())
    }

    /// A headless app of the given size with `config`.
    pub fn with_config(root: impl Widget + 'static, width: u16, height: u16, config: AppConfig) -> Self {
        Self { app: App::headless(root, width, height, config) }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Send a key event. Returns whether it was a quit key.
    pub fn press_key(&mut self, id: &str) -> Result<bool> {
        self.app.handle_event(Event::key(id))
    }

    /// Send each character of `text` as its own key event. Spaces are sent
    /// as `<Space>`.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            if ch == ' ' {
                self.press_key(keys::SPACE)?;
            } else {
                self.press_key(ch.encode_utf8(&mut [0; 4]))?;
            }
        }
        Ok(())
    }

    /// Left mouse button press at (x, y).
    pub fn click(&mut self, x: i32, y: i32) -> Result<()> {
        self.app.handle_event(Event::mouse(keys::MOUSE_LEFT, x, y))?;
        Ok(())
    }

    /// Simulate a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.app.handle_event(Event::resize(width, height))?;
        Ok(())
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Lay out and draw the tree now.
    pub fn repaint(&mut self) -> Result<()> {
        self.app.repaint()
    }

    /// The screen as text, rows trimmed and joined with `'\n'`.
    pub fn screen(&self) -> String {
        screen_to_string(self.app.painter())
    }

    /// Visible cursor position, if any.
    pub fn cursor(&self) -> Option<Offset> {
        self.app.painter().cursor()
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::Size;
    use crate::widgets::{Container, Input, Label};

    fn pilot_with_input(width: u16) -> (Pilot, Input) {
        let input = Input::new();
        let mut pilot = Pilot::new(Container::vertical(), width, 3);
        let root = pilot.app().tree().root();
        pilot.app_mut().tree_mut().append(root, input.clone());
        pilot.repaint().unwrap();
        (pilot, input)
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_creates_headless_app() {
        let pilot = Pilot::new(Container::vertical(), 80, 24);
        assert!(pilot.is_running());
        assert_eq!(pilot.app().painter().size(), Size::new(80, 24));
        assert_eq!(pilot.app().painter().repaints(), 0);
    }

    #[test]
    fn with_config_keeps_settings() {
        let config = AppConfig::new().with_quit_keys(["<Escape>"]);
        let mut pilot = Pilot::with_config(Container::vertical(), 10, 3, config);
        assert!(!pilot.press_key("<C-q>").unwrap());
        assert!(pilot.press_key("<Escape>").unwrap());
        assert!(!pilot.is_running());
    }

    // ── Key input ────────────────────────────────────────────────────

    #[test]
    fn type_text_reaches_focused_input() {
        let (mut pilot, input) = pilot_with_input(12);
        pilot.type_text("a b").unwrap();
        assert_eq!(input.text(), "a b");
        assert_eq!(pilot.screen(), "┌──────────┐\n│a b       │\n└──────────┘");
        assert_eq!(pilot.cursor(), Some(Offset::new(4, 1)));
    }

    #[test]
    fn type_text_empty_string() {
        let (mut pilot, input) = pilot_with_input(12);
        pilot.type_text("").unwrap();
        assert_eq!(input.text(), "");
        assert_eq!(pilot.app().painter().repaints(), 1);
    }

    #[test]
    fn quit_key_stops_pilot() {
        let mut pilot = Pilot::new(Container::vertical(), 10, 3);
        assert!(pilot.press_key("<C-c>").unwrap());
        assert!(!pilot.is_running());
    }

    // ── Click ────────────────────────────────────────────────────────

    #[test]
    fn click_without_handlers_is_harmless() {
        let mut pilot = Pilot::new(Container::vertical(), 10, 3);
        pilot.click(0, 0).unwrap();
        assert!(pilot.is_running());
        assert_eq!(pilot.app().painter().repaints(), 0);
    }

    // ── Resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_redraws_at_new_size() {
        let mut pilot = Pilot::new(Container::vertical(), 10, 3);
        let root = pilot.app().tree().root();
        pilot.app_mut().tree_mut().append(root, Label::new("xy"));
        pilot.resize(4, 3).unwrap();
        assert_eq!(pilot.screen(), "┌──┐\n│xy│\n└──┘");
    }

    // ── App access ───────────────────────────────────────────────────

    #[test]
    fn app_mut_allows_mutation() {
        let mut pilot = Pilot::new(Container::vertical(), 10, 3);
        pilot.app_mut().request_quit();
        assert!(!pilot.is_running());
    }
}

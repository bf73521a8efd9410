//! Input events and their conversion from crossterm.
//!
//! Crossterm events are converted once at the edge via
//! [`Event::from_crossterm`], so widgets and bindings only ever see string
//! identifiers (see [`keys`](super::keys)).

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent as CtMouseEvent, MouseEventKind,
};

use super::keys;

// ---------------------------------------------------------------------------
// MouseEvent
// ---------------------------------------------------------------------------

/// A mouse button press, release, drag or wheel step at a screen cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// One of the `MOUSE_*` identifiers.
    pub id: String,
    pub x: i32,
    pub y: i32,
    /// The button is held while the pointer moves.
    pub drag: bool,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(String),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
}

impl Event {
    /// A key event with the given identifier.
    pub fn key(id: impl Into<String>) -> Self {
        Event::Key(id.into())
    }

    /// A (non-drag) mouse event at (x, y).
    pub fn mouse(id: impl Into<String>, x: i32, y: i32) -> Self {
        Event::Mouse(MouseEvent { id: id.into(), x, y, drag: false })
    }

    /// A terminal resize.
    pub fn resize(width: u16, height: u16) -> Self {
        Event::Resize { width, height }
    }

    /// The key or mouse identifier; `None` for resizes.
    pub fn id(&self) -> Option<&str> {
        match self {
            Event::Key(id) => Some(id),
            Event::Mouse(m) => Some(&m.id),
            Event::Resize { .. } => None,
        }
    }

    /// Convert a crossterm event.
    ///
    /// Returns `None` for events with no identifier: key releases, pointer
    /// motion without a button, focus changes and pastes.
    pub fn from_crossterm(event: CtEvent) -> Option<Event> {
        match event {
            CtEvent::Key(key) => key_id(&key).map(Event::Key),
            CtEvent::Mouse(mouse) => mouse_event(&mouse).map(Event::Mouse),
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

fn key_id(key: &CtKeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let id = match key.code {
        KeyCode::Char(' ') if ctrl => keys::CTRL_SPACE.to_owned(),
        KeyCode::Char(ch) if ctrl => keys::ctrl_key(ch),
        KeyCode::Char(' ') => keys::SPACE.to_owned(),
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Null => keys::CTRL_SPACE.to_owned(),
        KeyCode::Backspace if ctrl => keys::CTRL_BACKSPACE.to_owned(),
        KeyCode::Backspace => keys::BACKSPACE.to_owned(),
        KeyCode::Enter => keys::ENTER.to_owned(),
        KeyCode::Tab => keys::TAB.to_owned(),
        KeyCode::Esc => keys::ESCAPE.to_owned(),
        KeyCode::Delete => keys::DELETE.to_owned(),
        KeyCode::Insert => keys::INSERT.to_owned(),
        KeyCode::Home => keys::HOME.to_owned(),
        KeyCode::End => keys::END.to_owned(),
        KeyCode::PageUp => keys::PAGE_UP.to_owned(),
        KeyCode::PageDown => keys::PAGE_DOWN.to_owned(),
        KeyCode::Up => keys::UP.to_owned(),
        KeyCode::Down => keys::DOWN.to_owned(),
        KeyCode::Left => keys::LEFT.to_owned(),
        KeyCode::Right => keys::RIGHT.to_owned(),
        KeyCode::F(n) => keys::function_key(n)?.to_owned(),
        _ => return None,
    };
    Some(id)
}

fn button_id(button: MouseButton) -> &'static str {
    match button {
        MouseButton::Left => keys::MOUSE_LEFT,
        MouseButton::Right => keys::MOUSE_RIGHT,
        MouseButton::Middle => keys::MOUSE_MIDDLE,
    }
}

fn mouse_event(mouse: &CtMouseEvent) -> Option<MouseEvent> {
    let (id, drag) = match mouse.kind {
        MouseEventKind::Down(button) => (button_id(button), false),
        MouseEventKind::Drag(button) => (button_id(button), true),
        MouseEventKind::Up(_) => (keys::MOUSE_RELEASE, false),
        MouseEventKind::ScrollUp => (keys::MOUSE_WHEEL_UP, false),
        MouseEventKind::ScrollDown => (keys::MOUSE_WHEEL_DOWN, false),
        _ => return None,
    };
    Some(MouseEvent {
        id: id.to_owned(),
        x: i32::from(mouse.column),
        y: i32::from(mouse.row),
        drag,
    })
}

// ===========================================================================
// Tests
// ===========================================================================

//! Input events delivered to toggle props.
//!
//! These types are host independent. Terminal hosts can translate crossterm
//! events with [`convert_event`].

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;

/// Modifier keys held during a key press or click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// Nothing held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
}

/// Which pointer action a click was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClickKind {
    /// Primary pointer action (left click)
    #[default]
    Primary,
    /// Secondary pointer action (right click)
    Secondary,
}

/// Cell position of a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Column (0-indexed)
    pub x: u16,
    /// Row (0-indexed)
    pub y: u16,
}

impl Position {
    /// Create a new position
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Pointer click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Type of click
    pub kind: ClickKind,
    /// Position where click occurred
    pub position: Position,
    /// Modifier keys held during click
    pub modifiers: Modifiers,
}

impl ClickEvent {
    /// Create a primary click event
    pub fn primary(position: Position, modifiers: Modifiers) -> Self {
        Self {
            kind: ClickKind::Primary,
            position,
            modifiers,
        }
    }

    /// Create a secondary click event
    pub fn secondary(position: Position, modifiers: Modifiers) -> Self {
        Self {
            kind: ClickKind::Secondary,
            position,
            modifiers,
        }
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Delete
    Delete,
}

/// A key press with the modifiers held at the time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Key with explicit modifiers.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Key with nothing held.
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

/// An input event targeted at a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key(KeyCombo),
    /// Pointer click
    Click(ClickEvent),
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        // Space arrives as a character
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::F(n) => Some(Key::F(n)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

/// Translate a crossterm key event. Keys a toggle can never bind map to `None`.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    let key = convert_key(event.code)?;
    Some(KeyCombo::new(key, convert_modifiers(event.modifiers)))
}

/// Convert a crossterm MouseEvent to a click.
///
/// Only button presses produce events; middle clicks, moves, drags and
/// scrolling are dropped.
pub fn convert_mouse_event(event: MouseEvent) -> Option<ClickEvent> {
    let MouseEventKind::Down(button) = event.kind else {
        return None;
    };
    let kind = match button {
        MouseButton::Left => ClickKind::Primary,
        MouseButton::Right => ClickKind::Secondary,
        MouseButton::Middle => return None,
    };
    Some(ClickEvent {
        kind,
        position: Position::new(event.column, event.row),
        modifiers: convert_modifiers(event.modifiers),
    })
}

/// Translate any crossterm event into a toggle input, dropping the rest.
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => {
            // Only presses activate
            if key_event.kind != KeyEventKind::Press {
                trace!("Ignoring non-press key event: {:?}", key_event.code);
                return None;
            }
            convert_key_event(key_event).map(Event::Key)
        }
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event).map(Event::Click),
        _ => None,
    }
}

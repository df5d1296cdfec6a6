//! Input event records, decoupled from crossterm.
//!
//! One immutable record type per event kind. Crossterm events are converted by
//! [`translate`], which maps terminal cells to layout pixels so that the rest of
//! the runtime never depends on crossterm directly.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::geometry::CellMetrics;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::F(n) => write!(f, "F{n}"),
            Key::Enter => f.write_str("enter"),
            Key::Escape => f.write_str("escape"),
            Key::Tab => f.write_str("tab"),
            Key::BackTab => f.write_str("backtab"),
            Key::Backspace => f.write_str("backspace"),
            Key::Delete => f.write_str("delete"),
            Key::Insert => f.write_str("insert"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Home => f.write_str("home"),
            Key::End => f.write_str("end"),
            Key::PageUp => f.write_str("pageup"),
            Key::PageDown => f.write_str("pagedown"),
            Key::Unknown => f.write_str("(unknown)"),
        }
    }
}

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Press,
    Release,
    Repeat,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Press => "pressed",
            Action::Release => "released",
            Action::Repeat => "repeated",
        })
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    pub const SUPER: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ctrl: {}, Shift: {}, Alt: {}, Super: {}",
            self.contains(Modifiers::CTRL),
            self.contains(Modifiers::SHIFT),
            self.contains(Modifiers::ALT),
            self.contains(Modifiers::SUPER),
        )
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub action: Action,
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press.
    pub fn pressed(key: Key, modifiers: Modifiers) -> Self {
        Self { action: Action::Press, key, modifiers }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key: {} {}, {}", self.key, self.action, self.modifiers)
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// One-based button number: left 1, right 2, middle 3.
    pub fn number(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 3,
        }
    }
}

/// A mouse button press at a pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

impl fmt::Display for ClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Click: mouse {} at pos ({:.1}, {:.1}), {}",
            self.button.number(),
            self.x,
            self.y,
            self.modifiers
        )
    }
}

/// The window's drawable size changed, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeEvent {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for ResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resize: to ({}, {})", self.width, self.height)
    }
}

/// The window moved on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionEvent {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for PositionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position: to ({}, {})", self.x, self.y)
    }
}

/// The pointer moved to a pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub x: f32,
    pub y: f32,
}

impl fmt::Display for MouseMoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mouse move: to ({:.1}, {:.1})", self.x, self.y)
    }
}

/// A scroll wheel delta. Positive `y` scrolls up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub x: f32,
    pub y: f32,
}

impl fmt::Display for ScrollEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scroll: diff ({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// InputEvent / EventKind
// ---------------------------------------------------------------------------

/// The event kinds, in drain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Key,
    Text,
    Click,
    Resize,
    Position,
    Focus,
    Maximize,
    MouseMove,
    Scroll,
}

impl EventKind {
    /// Every kind, in the order buffers are drained.
    pub const ALL: [EventKind; 9] = [
        EventKind::Key,
        EventKind::Text,
        EventKind::Click,
        EventKind::Resize,
        EventKind::Position,
        EventKind::Focus,
        EventKind::Maximize,
        EventKind::MouseMove,
        EventKind::Scroll,
    ];
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Key => "key",
            EventKind::Text => "text",
            EventKind::Click => "click",
            EventKind::Resize => "resize",
            EventKind::Position => "position",
            EventKind::Focus => "focus",
            EventKind::Maximize => "maximize",
            EventKind::MouseMove => "mouse-move",
            EventKind::Scroll => "scroll",
        })
    }
}

/// Any event record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Text(char),
    Click(ClickEvent),
    Resize(ResizeEvent),
    Position(PositionEvent),
    /// `true` when focus was gained.
    Focus(bool),
    /// `true` when maximized.
    Maximize(bool),
    MouseMove(MouseMoveEvent),
    Scroll(ScrollEvent),
}

impl InputEvent {
    /// Which buffer this record belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Key(_) => EventKind::Key,
            InputEvent::Text(_) => EventKind::Text,
            InputEvent::Click(_) => EventKind::Click,
            InputEvent::Resize(_) => EventKind::Resize,
            InputEvent::Position(_) => EventKind::Position,
            InputEvent::Focus(_) => EventKind::Focus,
            InputEvent::Maximize(_) => EventKind::Maximize,
            InputEvent::MouseMove(_) => EventKind::MouseMove,
            InputEvent::Scroll(_) => EventKind::Scroll,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Key(e) => e.fmt(f),
            InputEvent::Text(c) => write!(f, "Text: {c:?}"),
            InputEvent::Click(e) => e.fmt(f),
            InputEvent::Resize(e) => e.fmt(f),
            InputEvent::Position(e) => e.fmt(f),
            InputEvent::Focus(focused) => write!(f, "Focus: {focused}"),
            InputEvent::Maximize(maximized) => write!(f, "Maximize: {maximized}"),
            InputEvent::MouseMove(e) => e.fmt(f),
            InputEvent::Scroll(e) => e.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(m: crossterm::event::KeyModifiers) -> Self {
        let mut out = Modifiers::NONE;
        if m.contains(crossterm::event::KeyModifiers::SHIFT) {
            out = out | Modifiers::SHIFT;
        }
        if m.contains(crossterm::event::KeyModifiers::CONTROL) {
            out = out | Modifiers::CTRL;
        }
        if m.contains(crossterm::event::KeyModifiers::ALT) {
            out = out | Modifiers::ALT;
        }
        if m.contains(crossterm::event::KeyModifiers::SUPER) {
            out = out | Modifiers::SUPER;
        }
        out
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        let key = match ct.code {
            crossterm::event::KeyCode::Char(c) => Key::Char(c),
            crossterm::event::KeyCode::Enter => Key::Enter,
            crossterm::event::KeyCode::Esc => Key::Escape,
            crossterm::event::KeyCode::Tab => Key::Tab,
            crossterm::event::KeyCode::BackTab => Key::BackTab,
            crossterm::event::KeyCode::Backspace => Key::Backspace,
            crossterm::event::KeyCode::Delete => Key::Delete,
            crossterm::event::KeyCode::Insert => Key::Insert,
            crossterm::event::KeyCode::Left => Key::Left,
            crossterm::event::KeyCode::Right => Key::Right,
            crossterm::event::KeyCode::Up => Key::Up,
            crossterm::event::KeyCode::Down => Key::Down,
            crossterm::event::KeyCode::Home => Key::Home,
            crossterm::event::KeyCode::End => Key::End,
            crossterm::event::KeyCode::PageUp => Key::PageUp,
            crossterm::event::KeyCode::PageDown => Key::PageDown,
            crossterm::event::KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        };
        let action = match ct.kind {
            crossterm::event::KeyEventKind::Press => Action::Press,
            crossterm::event::KeyEventKind::Repeat => Action::Repeat,
            crossterm::event::KeyEventKind::Release => Action::Release,
        };
        KeyEvent { action, key, modifiers: ct.modifiers.into() }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(b: crossterm::event::MouseButton) -> Self {
        match b {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// Translate one crossterm event into zero or more records.
///
/// Cell coordinates become pixel coordinates at the cell centre. A printable key
/// press without Ctrl/Alt also yields a text record; a paste yields one text
/// record per character. Mouse releases produce nothing.
pub fn translate(event: crossterm::event::Event, cell: CellMetrics) -> Vec<InputEvent> {
    use crossterm::event::{Event, MouseEventKind};

    match event {
        Event::Key(ct) => {
            let key = KeyEvent::from(ct);
            let mut out = vec![InputEvent::Key(key)];
            if let Key::Char(c) = key.key {
                let typed = key.action != Action::Release
                    && !key.modifiers.contains(Modifiers::CTRL)
                    && !key.modifiers.contains(Modifiers::ALT);
                if typed && !c.is_control() {
                    out.push(InputEvent::Text(c));
                }
            }
            out
        }
        Event::Mouse(me) => {
            let pos = cell.cell_center(me.column, me.row);
            match me.kind {
                MouseEventKind::Down(b) => vec![InputEvent::Click(ClickEvent {
                    button: b.into(),
                    x: pos.x,
                    y: pos.y,
                    modifiers: me.modifiers.into(),
                })],
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    vec![InputEvent::MouseMove(MouseMoveEvent { x: pos.x, y: pos.y })]
                }
                MouseEventKind::ScrollUp => vec![InputEvent::Scroll(ScrollEvent { x: 0.0, y: 1.0 })],
                MouseEventKind::ScrollDown => {
                    vec![InputEvent::Scroll(ScrollEvent { x: 0.0, y: -1.0 })]
                }
                MouseEventKind::ScrollLeft => {
                    vec![InputEvent::Scroll(ScrollEvent { x: -1.0, y: 0.0 })]
                }
                MouseEventKind::ScrollRight => {
                    vec![InputEvent::Scroll(ScrollEvent { x: 1.0, y: 0.0 })]
                }
                MouseEventKind::Up(_) => Vec::new(),
            }
        }
        Event::Resize(cols, rows) => {
            let (width, height) = cell.grid_to_pixels(cols, rows);
            vec![InputEvent::Resize(ResizeEvent { width, height })]
        }
        Event::FocusGained => vec![InputEvent::Focus(true)],
        Event::FocusLost => vec![InputEvent::Focus(false)],
        Event::Paste(s) => s.chars().map(InputEvent::Text).collect(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

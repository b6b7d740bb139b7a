//! Blocking terminal input decoding.
//!
//! `read_event` waits on `crossterm::event::read` and normalizes the result
//! through `translate`, which is pure and covers the whole mapping:
//! * Key presses and repeats become `InputEvent::Key`; releases are dropped.
//! * Mouse events keep their kind, cell and modifiers.
//! * Resizes pass through; focus and paste events are ignored.
//!
//! Logged fields never include typed characters, only the event kind.

use anyhow::{Context, Result};
use core_events::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::event::{
    self as ct, Event as CEvent, KeyCode as CKeyCode, KeyEventKind as CKind,
    KeyModifiers as CMods,
};
use tracing::trace;

/// Block until the next event the editor cares about.
///
/// Returns `Ok(None)` for events that decode to nothing so the caller can keep
/// its loop shape uniform.
pub fn read_event() -> Result<Option<InputEvent>> {
    let raw = ct::read().context("reading terminal event")?;
    Ok(translate(raw))
}

pub fn translate(event: CEvent) -> Option<InputEvent> {
    let out = match event {
        CEvent::Key(key) => {
            if !matches!(key.kind, CKind::Press | CKind::Repeat) {
                return None;
            }
            let code = map_code(key.code)?;
            Some(InputEvent::Key(KeyEvent::new(code, map_mods(key.modifiers))))
        }
        CEvent::Mouse(m) => Some(InputEvent::Mouse(MouseEvent {
            kind: map_mouse_kind(m.kind)?,
            column: m.column,
            row: m.row,
            mods: map_mods(m.modifiers),
        })),
        CEvent::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        CEvent::FocusGained | CEvent::FocusLost | CEvent::Paste(_) => None,
    };
    trace!(target: "input.event", kind = event_kind(out.as_ref()), "decoded");
    out
}

fn event_kind(ev: Option<&InputEvent>) -> &'static str {
    match ev {
        Some(InputEvent::Key(_)) => "key",
        Some(InputEvent::Mouse(_)) => "mouse",
        Some(InputEvent::Resize(..)) => "resize",
        None => "ignored",
    }
}

fn map_code(code: CKeyCode) -> Option<KeyCode> {
    let code = match code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab | CKeyCode::BackTab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(code)
}

fn map_mouse_kind(kind: ct::MouseEventKind) -> Option<MouseEventKind> {
    use ct::MouseEventKind as K;
    let out = match kind {
        K::Down(b) => MouseEventKind::Down(map_button(b)),
        K::Up(b) => MouseEventKind::Up(map_button(b)),
        K::Drag(b) => MouseEventKind::Drag(map_button(b)),
        K::ScrollUp => MouseEventKind::ScrollUp,
        K::ScrollDown => MouseEventKind::ScrollDown,
        K::Moved => MouseEventKind::Moved,
        K::ScrollLeft | K::ScrollRight => return None,
    };
    Some(out)
}

fn map_button(b: ct::MouseButton) -> MouseButton {
    match b {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Middle => MouseButton::Middle,
        ct::MouseButton::Right => MouseButton::Right,
    }
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

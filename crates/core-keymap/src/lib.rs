//! core-keymap: key chord to editor command resolution.
//!
//! Design principles:
//! - Pure and deterministic: resolution depends only on the key event and the
//!   compiled table.
//! - Configured bindings (save, quit, undo, redo, search, replace) are checked
//!   first, then the fixed editing keys (arrows, Enter, Backspace), then
//!   printable characters fall through to insertion.
//! - No side effects: logging only at TRACE for resolution steps.
//!
//! Chord syntax is `[mod+]*key`, case-insensitive, where mod is one of `ctrl`,
//! `alt`, `shift` and key is a single character or one of `enter`, `esc`,
//! `tab`, `backspace`, `up`, `down`, `left`, `right`.

use core_config::KeysConfig;
use core_events::{Direction, KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;
use tracing::{debug, trace};

/// Symbolic output of a resolved key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Save,
    Quit,
    Undo,
    Redo,
    /// Ask for a search term, then search.
    Search,
    /// Ask for a pattern and a replacement, then replace.
    Replace,
    Insert(char),
    Move(Direction),
    Backspace,
    Newline,
    /// Key with no meaning; ignored by the caller.
    Unbound,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChordError {
    #[error("empty key chord")]
    Empty,
    #[error("unknown modifier `{0}` in key chord")]
    UnknownModifier(String),
    #[error("unknown key `{0}` in key chord")]
    UnknownKey(String),
}

/// One configured binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingSpec {
    pub chord: KeyEvent,
    pub command: Command,
}

impl MappingSpec {
    pub fn new(chord: KeyEvent, command: Command) -> Self {
        Self { chord, command }
    }
}

/// Parse a chord such as `ctrl+s` into the key event it matches.
pub fn parse_chord(text: &str) -> Result<KeyEvent, ChordError> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(ChordError::Empty);
    }
    // `ctrl++` binds the plus key.
    let (mods_part, key_part) = match text.strip_suffix("++") {
        Some(head) => (head, "+"),
        None => match text.rsplit_once('+') {
            Some((head, key)) => (head, key),
            None => ("", text.as_str()),
        },
    };
    let mut mods = KeyModifiers::empty();
    for m in mods_part.split('+').filter(|m| !m.is_empty()) {
        mods |= match m {
            "ctrl" | "control" => KeyModifiers::CTRL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            other => return Err(ChordError::UnknownModifier(other.to_string())),
        };
    }
    let code = match key_part {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        k => {
            let mut chars = k.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(ChordError::UnknownKey(k.to_string())),
            }
        }
    };
    Ok(normalize(KeyEvent::new(code, mods)))
}

/// Canonical form used for table lookup: shift is dropped from character keys
/// (the character already carries it) and letters are lowercased when a
/// ctrl/alt modifier is present.
fn normalize(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(c) => {
            let mods = key.mods - KeyModifiers::SHIFT;
            let c = if mods.is_empty() {
                c
            } else {
                c.to_ascii_lowercase()
            };
            KeyEvent::new(KeyCode::Char(c), mods)
        }
        _ => key,
    }
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<MappingSpec>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::build(vec![
            MappingSpec::new(KeyEvent::ctrl('s'), Command::Save),
            MappingSpec::new(KeyEvent::ctrl('q'), Command::Quit),
            MappingSpec::new(KeyEvent::ctrl('z'), Command::Undo),
            MappingSpec::new(KeyEvent::ctrl('y'), Command::Redo),
            MappingSpec::new(KeyEvent::ctrl('f'), Command::Search),
            MappingSpec::new(KeyEvent::ctrl('r'), Command::Replace),
        ])
    }
}

impl Keymap {
    /// Build from explicit specs. Later specs for the same chord win.
    pub fn build(specs: Vec<MappingSpec>) -> Self {
        let mut bindings: Vec<MappingSpec> = Vec::with_capacity(specs.len());
        for spec in specs {
            let spec = MappingSpec::new(normalize(spec.chord), spec.command);
            if let Some(existing) = bindings.iter_mut().find(|b| b.chord == spec.chord) {
                trace!(target: "input.keymap", chord = %spec.chord, "binding_overridden");
                *existing = spec;
            } else {
                bindings.push(spec);
            }
        }
        Self { bindings }
    }

    pub fn from_config(keys: &KeysConfig) -> Result<Self, ChordError> {
        let specs = vec![
            MappingSpec::new(parse_chord(&keys.save)?, Command::Save),
            MappingSpec::new(parse_chord(&keys.quit)?, Command::Quit),
            MappingSpec::new(parse_chord(&keys.undo)?, Command::Undo),
            MappingSpec::new(parse_chord(&keys.redo)?, Command::Redo),
            MappingSpec::new(parse_chord(&keys.search)?, Command::Search),
            MappingSpec::new(parse_chord(&keys.replace)?, Command::Replace),
        ];
        debug!(target: "input.keymap", bindings = specs.len(), "keymap_compiled");
        Ok(Self::build(specs))
    }

    pub fn bindings(&self) -> &[MappingSpec] {
        &self.bindings
    }

    /// Chord bound to `command`, if any (first match).
    pub fn chord_for(&self, command: Command) -> Option<KeyEvent> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(|b| b.chord)
    }

    pub fn resolve(&self, key: KeyEvent) -> Command {
        let key = normalize(key);
        if let Some(spec) = self.bindings.iter().find(|b| b.chord == key) {
            trace!(target: "input.keymap", command = ?spec.command, "bound");
            return spec.command;
        }
        let plain = key.mods.is_empty();
        let cmd = match key.code {
            KeyCode::Up => Command::Move(Direction::Up),
            KeyCode::Down => Command::Move(Direction::Down),
            KeyCode::Left => Command::Move(Direction::Left),
            KeyCode::Right => Command::Move(Direction::Right),
            KeyCode::Enter => Command::Newline,
            KeyCode::Backspace => Command::Backspace,
            // Terminals that report Ctrl-H for backspace.
            KeyCode::Char('h') if key.mods == KeyModifiers::CTRL => Command::Backspace,
            KeyCode::Char(c) if plain && !c.is_control() => Command::Insert(c),
            _ => Command::Unbound,
        };
        trace!(target: "input.keymap", command = ?cmd, "builtin");
        cmd
    }

    /// Human-readable legend for the status line, e.g. `Ctrl+S=Save Ctrl+Q=Quit`.
    pub fn legend(&self) -> String {
        let order = [
            (Command::Save, "Save"),
            (Command::Quit, "Quit"),
            (Command::Undo, "Undo"),
            (Command::Redo, "Redo"),
            (Command::Search, "Search"),
            (Command::Replace, "Replace"),
        ];
        order
            .iter()
            .filter_map(|(cmd, label)| {
                self.chord_for(*cmd)
                    .map(|k| format!("{}={}", chord_label(k), label))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Display form of a chord, e.g. `Ctrl+S`.
pub fn chord_label(key: KeyEvent) -> String {
    let mut parts: Vec<String> = Vec::new();
    if key.mods.contains(KeyModifiers::CTRL) {
        parts.push("Ctrl".into());
    }
    if key.mods.contains(KeyModifiers::ALT) {
        parts.push("Alt".into());
    }
    if key.mods.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".into());
    }
    parts.push(match key.code {
        KeyCode::Char(c) => c.to_uppercase().collect(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
    });
    parts.join("+")
}

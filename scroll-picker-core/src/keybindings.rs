//! Picker keymap: configurable key strings per picker command

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Commands a focused picker understands from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerCommand {
    /// Move one slot toward the start and settle there
    Prev,
    /// Move one slot toward the end and settle there
    Next,
    /// Move to the first slot and settle there
    First,
    /// Move to the last slot and settle there
    Last,
    /// Tap the currently held item
    Commit,
    /// Move keyboard focus to the previous axis (dual pickers)
    FocusPrev,
    /// Move keyboard focus to the next axis (dual pickers)
    FocusNext,
}

/// Mapping from picker commands to key strings like `"k"`, `"up"`, `"ctrl+p"`
///
/// Deserializes from a JSON object of command name to key list. Commands
/// missing from a user map keep their defaults once merged with
/// [`PickerKeymap::merge`].
///
/// ```
/// use scroll_picker_core::{PickerCommand, PickerKeymap};
/// use scroll_picker_core::testing::key;
///
/// let user: PickerKeymap = serde_json::from_str(r#"{ "next": ["n"] }"#).unwrap();
/// let keymap = PickerKeymap::merge(PickerKeymap::default(), user);
///
/// assert_eq!(keymap.command(key("n")), Some(PickerCommand::Next));
/// assert_eq!(keymap.command(key("k")), Some(PickerCommand::Prev));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickerKeymap {
    bindings: BTreeMap<PickerCommand, Vec<String>>,
}

impl Default for PickerKeymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(PickerCommand::Prev, ["k", "up"]);
        keymap.bind(PickerCommand::Next, ["j", "down"]);
        keymap.bind(PickerCommand::First, ["g", "home"]);
        keymap.bind(PickerCommand::Last, ["shift+g", "end"]);
        keymap.bind(PickerCommand::Commit, ["enter", "space"]);
        keymap.bind(PickerCommand::FocusPrev, ["h", "left", "shift+tab"]);
        keymap.bind(PickerCommand::FocusNext, ["l", "right", "tab"]);
        keymap
    }
}

impl PickerKeymap {
    /// A keymap with no bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Replace the keys bound to a command
    pub fn bind<I, K>(&mut self, command: PickerCommand, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.bindings
            .insert(command, keys.into_iter().map(Into::into).collect());
    }

    /// Keys bound to a command
    pub fn keys(&self, command: PickerCommand) -> &[String] {
        self.bindings
            .get(&command)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up the command for a key event
    pub fn command(&self, key: KeyEvent) -> Option<PickerCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings.iter().find_map(|(command, keys)| {
            keys.iter()
                .filter_map(|s| parse_key_string(s))
                .any(|bound| key_matches(&bound, &key))
                .then_some(*command)
        })
    }

    /// First key bound to a command, formatted for a help line
    pub fn display_key(&self, command: PickerCommand) -> Option<String> {
        self.keys(command)
            .first()
            .map(|key| format_key_for_display(key))
    }

    /// Merge a user keymap onto defaults - user entries override defaults
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        for (command, keys) in user.bindings {
            defaults.bindings.insert(command, keys);
        }
        defaults
    }
}

/// Compare code and modifiers; character keys compare case-insensitively
///
/// Terminals report `G` as either `Char('G')` or `shift+Char('G')`, so a
/// binding of `shift+g` also accepts a bare uppercase `G`.
fn key_matches(bound: &KeyEvent, key: &KeyEvent) -> bool {
    match (bound.code, key.code) {
        (KeyCode::Char(b), KeyCode::Char(k)) => {
            if !b.eq_ignore_ascii_case(&k) {
                return false;
            }
            let shifted = bound.modifiers.contains(KeyModifiers::SHIFT);
            let key_mods = key.modifiers.difference(KeyModifiers::SHIFT);
            let bound_mods = bound.modifiers.difference(KeyModifiers::SHIFT);
            let key_shifted = key.modifiers.contains(KeyModifiers::SHIFT) || k.is_uppercase();
            bound_mods == key_mods && shifted == key_shifted
        }
        (b, k) => b == k && bound.modifiers == key.modifiers,
    }
}

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let mut modifiers = KeyModifiers::empty();
    let key_part = parts.last()?.trim();

    for part in &parts[..parts.len() - 1] {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Format a key string for display (e.g., "ctrl+p" -> "^P", "down" -> "Down")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let key_part = parts.last().copied().unwrap_or(key_str.as_str());
    let mut prefix = String::new();
    for part in &parts[..parts.len().saturating_sub(1)] {
        match part.trim() {
            "ctrl" | "control" => prefix.push('^'),
            "shift" => prefix.push_str("Shift+"),
            "alt" => prefix.push_str("Alt+"),
            _ => {}
        }
    }

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        c if c.chars().count() == 1 => c.to_uppercase(),
        word => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    };

    format!("{}{}", prefix, key_display)
}

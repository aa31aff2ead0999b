//! Input handling and keybinding resolution

use app_core::{Command, CommandId};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Input handler that maps keys/mouse to commands
pub struct InputHandler {
    /// Key bindings: normalized key string -> command ID
    bindings: HashMap<String, String>,

    /// Current modifier state
    modifiers: ModifiersState,
}

impl InputHandler {
    /// Create a new input handler from `command -> keys` bindings
    pub fn new(bindings: &HashMap<String, Vec<String>>) -> Self {
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            for key in keys {
                match key_to_command.insert(normalize(key), command.clone()) {
                    Some(previous) if previous != *command => {
                        tracing::warn!("Key {} bound to both {} and {}", key, previous, command);
                    }
                    _ => {}
                }
            }
        }

        Self {
            bindings: key_to_command,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Update modifier state
    pub fn update_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Handle a key event and return the corresponding command
    pub fn handle_key(&self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed || event.repeat {
            return None;
        }

        let key = key_to_string(&event.logical_key)?;
        let full_key = self.build_key_string(&key);

        tracing::trace!("Key pressed: {}", full_key);

        self.resolve(&full_key)
    }

    /// Look up a key string such as `Ctrl+1`
    pub fn resolve(&self, key: &str) -> Option<Command> {
        self.bindings.get(&normalize(key)).map(|cmd_id| Command::new(cmd_id))
    }

    /// Build a key string with modifiers
    fn build_key_string(&self, key: &str) -> String {
        let mut parts = Vec::new();

        if self.modifiers.control_key() {
            parts.push("Ctrl");
        }
        if self.modifiers.alt_key() {
            parts.push("Alt");
        }
        // Shift is already part of a produced symbol such as `+`
        if self.modifiers.shift_key() && !is_symbol(key) {
            parts.push("Shift");
        }
        if self.modifiers.super_key() {
            parts.push("Super");
        }

        parts.push(key);
        parts.join("+")
    }

    /// Handle mouse button
    pub fn handle_mouse_button(&self, button: MouseButton, state: ElementState) -> Option<Command> {
        if state != ElementState::Pressed {
            return None;
        }

        match button {
            MouseButton::Back => Some(Command::new(CommandId::NAV_BACK)),
            MouseButton::Forward => Some(Command::new(CommandId::NAV_FORWARD)),
            _ => None,
        }
    }

    /// Back/forward mouse buttons of a window event
    ///
    /// The UI claims every click over its panels, so this has to run before
    /// the event is offered to egui.
    pub fn navigation_command(&self, event: &WindowEvent) -> Option<Command> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => self.handle_mouse_button(*button, *state),
            _ => None,
        }
    }
}

/// Convert a logical key to its binding name
fn key_to_string(key: &Key) -> Option<String> {
    let name = match key {
        Key::Named(named) => match named {
            NamedKey::Space => "Space",
            NamedKey::Enter => "Return",
            NamedKey::Tab => "Tab",
            NamedKey::Escape => "Escape",
            NamedKey::Backspace => "Backspace",
            NamedKey::Delete => "Delete",
            NamedKey::Home => "Home",
            NamedKey::End => "End",
            NamedKey::PageUp => "PageUp",
            NamedKey::PageDown => "PageDown",
            NamedKey::ArrowUp => "Up",
            NamedKey::ArrowDown => "Down",
            NamedKey::ArrowLeft => "Left",
            NamedKey::ArrowRight => "Right",
            NamedKey::F1 => "F1",
            NamedKey::F2 => "F2",
            NamedKey::F3 => "F3",
            NamedKey::F4 => "F4",
            NamedKey::F5 => "F5",
            NamedKey::F6 => "F6",
            NamedKey::F7 => "F7",
            NamedKey::F8 => "F8",
            NamedKey::F9 => "F9",
            NamedKey::F10 => "F10",
            NamedKey::F11 => "F11",
            NamedKey::F12 => "F12",
            _ => return None,
        }
        .to_string(),
        Key::Character(c) => match c.as_str() {
            "+" => "Plus".to_string(),
            "-" => "Minus".to_string(),
            other => other.to_string(),
        },
        _ => return None,
    };

    Some(name)
}

fn is_symbol(key: &str) -> bool {
    key == "Plus" || key == "Minus" || (key.chars().count() == 1 && !key.chars().all(char::is_alphanumeric))
}

/// Case-insensitive form; a trailing `-` is the minus key, not a separator
fn normalize(key: &str) -> String {
    let key = key.trim();
    let key = match key.strip_suffix("+-") {
        Some(prefix) => format!("{}+Minus", prefix),
        None if key == "-" => "Minus".to_string(),
        None => key.to_string(),
    };
    key.to_lowercase()
}

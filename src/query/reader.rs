use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Collects a secret from key presses. Only its masked form is ever shown.
pub struct SecretBuffer {
    secret: String,
    mask: Option<char>,
}

impl SecretBuffer {
    /// `mask` is drawn once per typed character; `None` draws nothing.
    pub fn new(mask: Option<char>) -> Self {
        Self {
            secret: String::new(),
            mask,
        }
    }

    /// Handles an editing key and returns `true` if the masked text changed.
    /// Control and Alt chords are not text and are ignored.
    pub fn on_key(&mut self, event: &KeyEvent) -> bool {
        let is_chord = event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let changed = match event.code {
            KeyCode::Backspace => self.secret.pop().is_some(),
            KeyCode::Char(c) if !is_chord => {
                self.secret.push(c);
                true
            }
            _ => false,
        };
        changed && self.mask.is_some()
    }

    pub fn masked(&self) -> String {
        match self.mask {
            Some(c) => std::iter::repeat(c).take(self.secret.chars().count()).collect(),
            None => String::new(),
        }
    }

    pub fn into_secret(self) -> String {
        self.secret
    }
}

//! Editor keyboard shortcuts

/// What a key press in the task input does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Confirm,
    Cancel,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value; other keys are left to the input
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(KeyAction::Confirm),
            "Escape" => Some(KeyAction::Cancel),
            _ => None,
        }
    }
}

//! Keyboard shortcut table for front ends.
//!
//! Pure chord-to-action mapping; dispatching the actions is the host's
//! concern.

/// Actions a front end can bind to keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePracticeMode,
    SpeakSentenceTranslation,
    SpeakCurrentWord,
    ToggleReference,
    FocusInput,
    OpenFilePicker,
    DownloadSample,
    ClearInput,
}

/// Resolve a key chord to its action, if any.
///
/// `key` follows the DOM `KeyboardEvent.key` convention (`"p"`, `"Enter"`,
/// `"Escape"`). Escape clears the input regardless of modifiers.
pub fn action_for(ctrl: bool, alt: bool, key: &str) -> Option<ShortcutAction> {
    if key == "Escape" {
        return Some(ShortcutAction::ClearInput);
    }
    match (ctrl, alt, key) {
        (true, true, "d") => Some(ShortcutAction::DownloadSample),
        (true, false, "p") => Some(ShortcutAction::TogglePracticeMode),
        (true, false, "Enter") => Some(ShortcutAction::SpeakSentenceTranslation),
        (false, true, "Enter") => Some(ShortcutAction::SpeakCurrentWord),
        (false, true, "v") => Some(ShortcutAction::ToggleReference),
        (true, false, "i") => Some(ShortcutAction::FocusInput),
        (true, false, "u") => Some(ShortcutAction::OpenFilePicker),
        _ => None,
    }
}

//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S is accepted on every platform
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

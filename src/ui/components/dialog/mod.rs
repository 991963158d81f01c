//! Dialog components for TUI

mod base;
mod confirmation_dialog;

pub use base::wrap_text;
pub use confirmation_dialog::render_confirmation_dialog;

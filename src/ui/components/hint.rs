//! Hint line component renderer.

use crate::ui::helpers::{position_cursor, write_centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HintLine;

/// Renders the hint line at `row`: a spinner while loading, otherwise the
/// hint text, with failures in the error color.
pub fn render_hint(out: &mut Frame, row: usize, hint: &HintLine, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    match hint {
        HintLine::Spinner { frame, term } => {
            out.push_str(&Theme::fg(&theme.colors.spinner_fg));
            write_centered(out, &format!("{frame} searching {term}"), cols);
        }
        HintLine::Text(text) => {
            out.push_str(&Theme::fg(&theme.colors.hint_fg));
            write_centered(out, text, cols);
        }
        HintLine::Error(message) => {
            out.push_str(&Theme::fg(&theme.colors.error_fg));
            write_centered(out, message, cols);
        }
    }
    out.push_str(Theme::reset());
    row + 1
}

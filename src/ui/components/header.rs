//! Header component renderer.
//!
//! The header doubles as the clear control: once results exist it shows the
//! clear keybinding and result count instead of the title.

use crate::ui::helpers::{position_cursor, write_centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row`, centered and padded to the full width.
///
/// Returns the next available row.
///
/// # Example
///
/// ```text
///                                   Jiffy
///                            [Esc] clear (3)
/// ```
pub fn render_header(out: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    if header.is_clear_control {
        out.push_str(&Theme::fg(&theme.colors.clear_fg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.header_fg));
    }
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    write_centered(out, &header.title, cols);

    out.push_str(Theme::reset());
    row + 1
}

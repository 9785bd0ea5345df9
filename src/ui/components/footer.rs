//! Footer component renderer.

use crate::ui::helpers::{position_cursor, write_centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at `row`.
///
/// While a stack row is selected its full link replaces the keybinding help,
/// since the stack column usually shows it truncated.
pub fn render_footer(out: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    match &footer.selected_link {
        Some(link) => {
            out.push_str(&Theme::fg(&theme.colors.link_fg));
            write_centered(out, link, cols);
        }
        None => {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            write_centered(out, &footer.keybindings, cols);
        }
    }
    out.push_str(Theme::reset());
    row + 1
}

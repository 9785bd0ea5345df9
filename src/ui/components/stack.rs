//! Result stack component renderer.
//!
//! Each result is one row: ordinal, title column, link, and dimensions when
//! known. The stack is bottom-aligned so the newest result sits right above
//! the input box.

use crate::ui::helpers::{position_cursor, text_width, write_padded, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the title column including its trailing gap.
const TITLE_COLUMN_WIDTH: usize = 37;

/// Renders `items` bottom-aligned within rows `first_row..=last_row`.
///
/// Rows above the items are blanked so a shrinking stack (after a reset)
/// leaves nothing behind.
pub fn render_stack(
    out: &mut Frame,
    first_row: usize,
    last_row: usize,
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
) {
    if last_row < first_row {
        return;
    }
    let capacity = last_row - first_row + 1;
    let shown = &items[items.len().saturating_sub(capacity)..];
    let start_row = last_row + 1 - shown.len();

    for row in first_row..start_row {
        position_cursor(out, row, 1);
        out.push_str(&" ".repeat(cols));
    }

    for (offset, item) in shown.iter().enumerate() {
        render_stack_row(out, start_row + offset, item, theme, cols);
    }
}

/// Renders one result row.
///
/// ```text
///  3  Dancing Cat GIF                      https://media.giphy.com/...  480x270
/// ```
fn render_stack_row(out: &mut Frame, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    position_cursor(out, row, 1);

    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base);

    let ordinal = format!("{:>3} ", item.ordinal);
    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&ordinal);
    out.push_str(&base);

    write_padded(out, &item.title, TITLE_COLUMN_WIDTH);

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.link_fg));
    }
    out.push_str(&item.link);

    let mut used = text_width(&ordinal) + TITLE_COLUMN_WIDTH + text_width(&item.link);
    if let Some(dimensions) = &item.dimensions {
        let suffix = format!("  {dimensions}");
        if used + text_width(&suffix) <= cols {
            if !item.is_selected {
                out.push_str(&Theme::fg(&theme.colors.text_dim));
            }
            out.push_str(&suffix);
            used += text_width(&suffix);
        }
    }

    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
}

//! Composable UI component renderers.
//!
//! Each component draws one region of the screen into the shared [`Frame`]
//! and returns the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title, or the clear control once results exist
//! - [`stack`]: Accumulated results, bottom-aligned
//! - [`input`]: Framed query box
//! - [`hint`]: Spinner, advisory text or failure message
//! - [`footer`]: Keybinding help or the selected link
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]                 "↑ N more" when older results are hidden
//! [Stack rows]             bottom-aligned
//! [Input box - 3 lines]
//! [Hint]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod header;
mod hint;
mod input;
mod stack;

use crate::ui::helpers::{position_cursor, text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use hint::render_hint;
use input::render_input;
use stack::render_stack;

/// Rows below the stack: input box (3), hint, border, footer.
const BOTTOM_ROWS: usize = 6;

/// Renders a horizontal border at `row`, with an optional label embedded
/// near the left edge.
fn render_border(out: &mut Frame, row: usize, label: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.border));
    match label {
        Some(label) if text_width(label) + 2 <= cols => {
            out.push_str("──");
            out.push_str(Theme::dim());
            out.push_str(label);
            out.push_str(Theme::reset());
            out.push_str(&Theme::fg(&theme.colors.border));
            out.push_str(&"─".repeat(cols - 2 - text_width(label)));
        }
        _ => out.push_str(&"─".repeat(cols)),
    }
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full screen layout.
///
/// The bottom block (input, hint, border, footer) is anchored to the last
/// rows; the stack fills whatever lies between it and the top border.
pub fn render_layout(out: &mut Frame, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);

    let more = (vm.hidden_above > 0).then(|| format!(" ↑ {} more ", vm.hidden_above));
    current_row = render_border(out, current_row, more.as_deref(), theme, cols);

    let input_row = rows.saturating_sub(BOTTOM_ROWS - 1).max(current_row);
    render_stack(out, current_row, input_row.saturating_sub(1), &vm.display_items, theme, cols);

    let hint_row = render_input(out, input_row, &vm.input, theme, cols);
    let border_row = render_hint(out, hint_row, &vm.hint, theme, cols);
    let footer_row = render_border(out, border_row, None, theme, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

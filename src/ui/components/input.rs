//! Text input component renderer.
//!
//! A three-line framed box holding the query. When the input has focus a
//! block cursor follows the text; an empty unfocused input shows a placeholder.

use crate::ui::helpers::{position_cursor, text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 5;

/// Shown in an empty input.
const PLACEHOLDER: &str = "Type something";

/// Renders the input box starting at `row`. Returns `row + 3`.
///
/// ```text
/// [margin] ┌──────────────┐ [margin]
/// [margin] │ > cats█      │ [margin]
/// [margin] └──────────────┘ [margin]
/// ```
///
/// Long queries keep their tail visible so the cursor stays on screen.
pub fn render_input(out: &mut Frame, row: usize, input: &InputInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.input_border);

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(INPUT_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(INPUT_BOX_MARGIN));
    out.push_str(&border);
    out.push('│');

    let prompt = " > ";
    let cursor_width = usize::from(input.focused);
    let room = inner_width.saturating_sub(text_width(prompt) + cursor_width + 1);
    let used = if input.query.is_empty() && !input.focused {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(prompt);
        let placeholder: String = PLACEHOLDER.chars().take(room).collect();
        out.push_str(&placeholder);
        text_width(prompt) + text_width(&placeholder)
    } else {
        let visible = visible_tail(&input.query, room);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(prompt);
        out.push_str(&visible);
        if input.focused {
            out.push_str(Theme::reverse());
            out.push(' ');
            out.push_str(Theme::reset());
        }
        text_width(prompt) + text_width(&visible) + cursor_width
    };

    out.push_str(&" ".repeat(inner_width.saturating_sub(used)));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(INPUT_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}

/// Last `room` characters of `text`.
fn visible_tail(text: &str, room: usize) -> String {
    let len = text_width(text);
    text.chars().skip(len.saturating_sub(room)).collect()
}

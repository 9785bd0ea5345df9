//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the application
//! state, then let the components draw it into a [`Frame`] that is printed
//! once.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    print!("{}", render_to_string(&viewmodel, &state.theme, rows, cols));
}

/// Renders a view model into a string of text and ANSI escapes.
#[must_use]
pub fn render_to_string(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = Frame::with_capacity(rows * cols * 2);
    components::render_layout(&mut frame, vm, theme, rows, cols);
    frame
}

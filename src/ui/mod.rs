//! Terminal rendering: scenes for the menu and game screens.

pub mod effects;
pub mod game_scene;
pub mod menu_scene;

use ratatui::layout::Rect;

/// Center a fixed-size popup inside `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

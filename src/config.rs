use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Keeps width vs. height unambiguous at every call site instead of an
/// anonymous `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// The fixed play field: 40×30 cells, the classic 800×600 window divided
/// into 20-pixel cells.
pub const GRID: GridSize = GridSize {
    width: 40,
    height: 30,
};

/// Base movement rate at score zero, in moves per second.
pub const BASE_SPEED: f32 = 8.0;

/// Multiplier applied to the movement rate per speed step.
pub const SPEED_GROWTH_FACTOR: f32 = 1.10;

/// Points required to advance one speed step.
pub const POINTS_PER_SPEED_STEP: u32 = 5;

/// Upper bound on the movement rate, in moves per second.
pub const MAX_SPEED: f32 = 45.0;

/// Delay between render frames in milliseconds (input polling window).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Color for the snake head glyph.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for food.
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    /// Color for the optional grid-overlay dots.
    pub grid_dot: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    grid_dot: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left column: `█` (fully solid)
/// - Right column: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Head glyphs, one per travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◄";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "►";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Grid-overlay dot drawn in empty cells when the overlay is toggled on.
pub const GLYPH_GRID_DOT: &str = "·";

#[cfg(test)]
mod tests {
    use super::{GRID, GridSize};

    #[test]
    fn total_cells_multiplies_dimensions() {
        let bounds = GridSize {
            width: 6,
            height: 4,
        };
        assert_eq!(bounds.total_cells(), 24);
    }

    #[test]
    fn default_grid_is_40_by_30() {
        assert_eq!(GRID.width, 40);
        assert_eq!(GRID.height, 30);
        assert_eq!(GRID.total_cells(), 1200);
    }
}

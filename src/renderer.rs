use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
    GridSize, THEME_CLASSIC, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::ui;

/// Renders one complete frame: HUD row on top, the playfield centered in
/// the rest, and a popup overlay when the session is paused or over.
pub fn draw(frame: &mut Frame, state: &GameState, show_grid: bool) {
    let theme = &THEME_CLASSIC;
    let [hud_area, board_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    ui::hud::render(frame, hud_area, state, theme);

    let field = playfield_rect(board_area, state.bounds());
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(field);
    frame.render_widget(block, field);
    frame.render_widget(Block::new().style(Style::new().bg(theme.play_bg)), inner);

    let buf = frame.buffer_mut();
    if show_grid {
        draw_grid_dots(buf, inner, state.bounds(), theme);
    }
    draw_food(buf, inner, state, theme);
    draw_snake(buf, inner, &state.snake, theme);

    match state.status {
        GameStatus::Running => {}
        GameStatus::Paused => ui::menu::render_pause(frame, field, theme),
        GameStatus::GameOver => ui::menu::render_game_over(frame, field, state, theme),
    }
}

/// Fixed-size playfield rect centered in `container`, clamped when the
/// terminal is too small to hold the whole board.
fn playfield_rect(container: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.width * 2 + 2).min(container.width);
    let height = (bounds.height + 2).min(container.height);
    let x = container.x + (container.width - width) / 2;
    let y = container.y + (container.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Terminal coordinates of a logical cell. Each cell spans two terminal
/// columns so the board renders roughly square. `None` when the cell
/// falls outside `inner`.
fn cell_origin(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let cell_x = u16::try_from(position.x).ok()?;
    let cell_y = u16::try_from(position.y).ok()?;
    let col = inner.x + cell_x * 2;
    let row = inner.y + cell_y;
    (col + 1 < inner.right() && row < inner.bottom()).then_some((col, row))
}

fn paint_pair(buf: &mut Buffer, origin: (u16, u16), left: &str, right: &str, style: Style) {
    if let Some(cell) = buf.cell_mut(origin) {
        cell.set_symbol(left).set_style(style);
    }
    if let Some(cell) = buf.cell_mut((origin.0 + 1, origin.1)) {
        cell.set_symbol(right).set_style(style);
    }
}

fn draw_grid_dots(buf: &mut Buffer, inner: Rect, bounds: GridSize, theme: &Theme) {
    let style = Style::new().fg(theme.grid_dot).bg(theme.play_bg);
    for y in 0..bounds.height {
        for x in 0..bounds.width {
            let position = Position {
                x: i32::from(x),
                y: i32::from(y),
            };
            if let Some(origin) = cell_origin(inner, position) {
                paint_pair(buf, origin, GLYPH_GRID_DOT, " ", style);
            }
        }
    }
}

fn draw_food(buf: &mut Buffer, inner: Rect, state: &GameState, theme: &Theme) {
    if let Some(origin) = cell_origin(inner, state.food.position) {
        let style = Style::new().fg(theme.food).bg(theme.play_bg);
        paint_pair(buf, origin, GLYPH_FOOD, " ", style);
    }
}

fn draw_snake(buf: &mut Buffer, inner: Rect, snake: &Snake, theme: &Theme) {
    let tail_index = snake.len().saturating_sub(1);
    for (index, segment) in snake.segments().enumerate() {
        let Some(origin) = cell_origin(inner, *segment) else {
            continue;
        };
        if index == 0 {
            let style = Style::new().fg(theme.snake_head).bg(theme.play_bg);
            paint_pair(buf, origin, head_glyph(snake.direction()), " ", style);
        } else if index == tail_index {
            let style = Style::new().fg(theme.snake_tail).bg(theme.play_bg);
            paint_pair(buf, origin, GLYPH_SNAKE_TAIL, GLYPH_SNAKE_TAIL, style);
        } else {
            let style = Style::new().fg(theme.snake_body).bg(theme.play_bg);
            paint_pair(buf, origin, GLYPH_SNAKE_BODY, GLYPH_SNAKE_BODY, style);
        }
    }
}

const fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}
